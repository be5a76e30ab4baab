//! # chatmark
//!
//! A single-pass formatter for chat-style inline markup (bold, italic,
//! strikethrough, spoiler, quote, link, mention, lists) with pluggable
//! decorators and built-in HTML escaping.
//!
//! ## What is it for?
//!
//! Chat messages are untrusted input. chatmark turns them into safe output
//! in one O(n) scan: every markup-significant character is either consumed
//! by a modifier or HTML-escaped at the point it is emitted, so no separate
//! sanitization step is needed. How each modifier renders is entirely up to
//! you: decorators are plain functions supplied through [`FormatOptions`].
//!
//! ## Key properties
//!
//! - **Total**: defined and non-failing for every input string, including
//!   empty, already-escaped, and adversarial ones
//! - **Lossless degradation**: malformed or unterminated markup renders as
//!   literal text, never as an error and never silently dropped
//! - **Single pass**: one left-to-right scan, plain-text runs copied in bulk
//! - **No hidden state**: each call is self-contained; identical input and
//!   options produce byte-identical output
//! - **No unsafe code**
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! chatmark = "0.1"
//! ```
//!
//! ### Rendering with custom decorators
//!
//! ```rust
//! use chatmark::{render_with_options, FormatOptions};
//!
//! let options = FormatOptions::new()
//!     .with_bold(|text| format!("<b>{text}</b>"))
//!     .with_italic(|text| format!("<i>{text}</i>"))
//!     .with_newline("<br>");
//!
//! let html = render_with_options("**hello** __world__", &options);
//! assert_eq!(html, "<b>hello</b> <i>world</i>");
//! ```
//!
//! ### Reusing a configuration
//!
//! ```rust
//! use chatmark::{Formatter, FormatOptions};
//!
//! let formatter = Formatter::new(
//!     FormatOptions::new().with_strike(|text| format!("<s>{text}</s>")),
//! );
//!
//! assert_eq!(formatter.render("~~gone~~"), "<s>gone</s>");
//! assert_eq!(formatter.render("a & b"), "a &amp; b");
//! ```
//!
//! ### Defaults round-trip the markup
//!
//! Unconfigured modifiers reproduce roughly what the user typed, escaped:
//!
//! ```rust
//! use chatmark::render;
//!
//! assert_eq!(render("**hi** <there>"), "**hi** &lt;there&gt;");
//! ```
//!
//! ## Dialect
//!
//! The recognized markup is a fixed, closed set. See the [`spec`] module
//! for the full dialect description, including nesting, escaping, and list
//! numbering rules.
//!
//! ## Performance Characteristics
//!
//! - **Time**: O(n) in input length; amortized-constant work per character
//!   plus one decorator call per closed modifier
//! - **Memory**: output buffers only; no intermediate tree is built
//! - **Concurrency**: purely synchronous; options are immutable and safely
//!   shareable across threads
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - All indexing is bounds-checked
//! - No panics in the public API (except for logic errors that indicate bugs)
//! - Output contains no unescaped `&`, `<`, `>`, `"`, or `'` outside of
//!   decorator-produced fragments

pub mod error;
pub mod options;
pub mod spec;

mod render;

pub use error::{Error, Result};
pub use options::{
    FormatOptions, LinkDecorator, ListDecorator, MentionEndPredicate, SpanDecorator,
};

use std::io;

/// Renders chat markup with the built-in default decorators.
///
/// The defaults reproduce the markup they match (escaped), which makes this
/// function mostly useful for normalization and testing; real applications
/// will usually configure decorators via [`render_with_options`] or
/// [`Formatter`].
///
/// # Examples
///
/// ```rust
/// use chatmark::render;
///
/// assert_eq!(render("a <b> c"), "a &lt;b&gt; c");
/// assert_eq!(render(""), "");
/// ```
#[must_use]
pub fn render(input: &str) -> String {
    render_with_options(input, &FormatOptions::default())
}

/// Renders chat markup with the given options.
///
/// Total over all inputs: malformed markup degrades to literal text instead
/// of failing. The options are only read, so one instance can serve many
/// calls and threads.
///
/// # Examples
///
/// ```rust
/// use chatmark::{render_with_options, FormatOptions};
///
/// let options = FormatOptions::new()
///     .with_mention(|name| format!("<a href=\"/u/{name}\">@{name}</a>"));
///
/// assert_eq!(
///     render_with_options("hi @alice !", &options),
///     "hi <a href=\"/u/alice\">@alice</a> !",
/// );
/// ```
#[must_use]
pub fn render_with_options(input: &str, options: &FormatOptions) -> String {
    render::render_str(input, options)
}

/// Renders chat markup and writes the result to a writer.
///
/// # Examples
///
/// ```rust
/// use chatmark::{render_to_writer, FormatOptions};
///
/// let mut buffer = Vec::new();
/// render_to_writer(&mut buffer, "**hi**", &FormatOptions::new()).unwrap();
/// assert_eq!(buffer, b"**hi**");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails; rendering itself cannot
/// fail.
pub fn render_to_writer<W>(mut writer: W, input: &str, options: &FormatOptions) -> Result<()>
where
    W: io::Write,
{
    let rendered = render_with_options(input, options);
    writer.write_all(rendered.as_bytes())?;
    Ok(())
}

/// A reusable, configured formatter.
///
/// Holds a [`FormatOptions`] so a configuration built once can render many
/// messages. `Formatter` is `Send + Sync` and can be shared across threads.
///
/// # Examples
///
/// ```rust
/// use chatmark::{Formatter, FormatOptions};
///
/// let formatter = Formatter::new(
///     FormatOptions::new().with_bold(|t| format!("<strong>{t}</strong>")),
/// );
///
/// for message in ["**a**", "**b**"] {
///     let _html = formatter.render(message);
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Formatter {
    options: FormatOptions,
}

impl Formatter {
    /// Creates a formatter from the given options.
    #[must_use]
    pub fn new(options: FormatOptions) -> Self {
        Formatter { options }
    }

    /// The options this formatter renders with.
    #[must_use]
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Renders one input with this formatter's options.
    #[must_use]
    pub fn render(&self, input: &str) -> String {
        render_with_options(input, &self.options)
    }
}
