//! Chat Markup Dialect
//!
//! This module documents the inline markup dialect recognized by this
//! library. The dialect is deliberately small, covering the formatting a
//! chat message needs and nothing more: no headings, no tables, no fenced
//! code, no nested indentation.
//!
//! # Overview
//!
//! Input is scanned once, left to right. Modifiers open and close as their
//! triggers are encountered; everything else is emitted as literal text with
//! `&`, `<`, `>`, `"`, and `'` HTML-escaped on the way out. Carriage returns
//! are stripped. Malformed markup never fails and never disappears: an
//! unterminated construct is reproduced literally, trigger characters
//! included.
//!
//! # Span modifiers
//!
//! Spans use a symmetric two-character trigger and close within a line:
//!
//! | Markup | Modifier |
//! |--------|----------|
//! | `**bold**` | bold |
//! | `__italic__` | italic |
//! | `~~strike~~` | strikethrough |
//! | `\|\|spoiler\|\|` | spoiler |
//!
//! Spans nest freely (`**__both__**`). A single `*`, `_`, `~`, or `|` is
//! plain text. A doubled trigger with nothing inside it (`****`) is plain
//! text, never an empty decorated span, and `***x***` renders as a decorated
//! `**x**` wrapped in one literal asterisk on each side. A span still open
//! at a line break or at the end of input falls back to literal text: both
//! trigger characters followed by whatever had accumulated.
//!
//! # Links
//!
//! `<href>` or `<href|display text>`. The first `|` separates the href from
//! the display text (later pipes belong to the text); without one the text
//! is the href itself. Only `>` closes a link; every other character,
//! including markup triggers, is content. A link cut off by a line break or
//! end of input renders literally.
//!
//! # Mentions
//!
//! `@name`. The mention collects characters until the termination predicate
//! fires (by default, at the first whitespace), another `@` ends it, a span
//! trigger ends it, and a line break always ends it.
//!
//! # Quotes
//!
//! A `>` at the start of a line opens a quote that runs to the end of the
//! line. In continuous mode (the default) consecutive `>` lines merge into
//! one quote block, with the inner line breaks replaced by the configured
//! newline replacement.
//!
//! # Lists
//!
//! A line starting with `-` followed by at least one more character on the
//! line is an unordered list item. A line starting with digits and a `.` is
//! an ordered list item **only if** the digits spell exactly the next
//! expected number, counting from 1 (`1.`, `2.`, `3.`, ...). A document that
//! opens with `2.` is plain text. At most one list is open at a time: a
//! non-marker line, a marker of the other kind, or a quote line closes it.
//! Item contents are handed to the list decorator in input order; the
//! decorator supplies the joining between items.
//!
//! # Escaping
//!
//! A backslash escapes exactly the next character:
//!
//! | Input | Output | Why |
//! |-------|--------|-----|
//! | `\**` | `**` | trigger suppressed, backslash hidden |
//! | `\\` | `\\` | escaped backslash stays doubled |
//! | `\a` | `\a` | nothing to escape, backslash kept |
//! | `\-` at end of line | `-` | marker suppressed unambiguously |
//! | `\- text` | `\- text` | dash is not the last token, backslash kept |
//!
//! A trailing backslash at the very end of the input is emitted as one
//! literal backslash.
//!
//! # Output safety
//!
//! For every input, including adversarial ones, the output contains no
//! unescaped `&`, `<`, `>`, `"`, or `'` that did not come out of a
//! decorator. Decorator results are trusted verbatim; the content passed
//! into decorators is already escaped.
//!
//! ```rust
//! use chatmark::render;
//!
//! assert_eq!(
//!     render("<script>alert(1)</script>"),
//!     "&lt;script&gt;alert(1)&lt;/script&gt;",
//! );
//! ```
