//! The chatmark rendering engine.
//!
//! This module implements the single left-to-right scan that turns raw chat
//! markup into decorated output. There is no separate lexer/parser/renderer
//! split: scanning, modifier resolution, and emission happen together in one
//! pass over the input.
//!
//! ## How it works
//!
//! The scanner keeps a stack of open modifiers, each paired with a buffer
//! holding the output accumulated inside it, plus a base buffer that receives
//! fully resolved fragments. Opening a modifier pushes a frame; closing one
//! pops it, runs the configured decorator over the buffer, and appends the
//! result to the frame below. Markup that never closes degrades to a literal
//! reproduction of its trigger characters followed by its raw content.
//! Nothing is ever dropped, and no input character reaches the output
//! unescaped unless a decorator put it there.
//!
//! Plain text between special characters is located with a byte lookup table
//! and copied in bulk, so per-character work is only spent on the characters
//! that can actually change parser state.

use std::borrow::Cow;

use crate::options::FormatOptions;

/// Kind of list currently being collected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

/// A modifier open on the stack.
///
/// List items share the stack with span and line modifiers: every accepted
/// marker pushes an `Item` frame, and closing the list pops one frame per
/// item (resolving anything still open inside the innermost item first).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Modifier {
    Bold,
    Italic,
    Strike,
    Spoiler,
    Link,
    Mention,
    Quote,
    Item(ListKind),
}

impl Modifier {
    fn span(trigger: u8) -> Modifier {
        match trigger {
            b'*' => Modifier::Bold,
            b'_' => Modifier::Italic,
            b'~' => Modifier::Strike,
            _ => Modifier::Spoiler,
        }
    }

    /// Line modifiers are scoped by line structure instead of a closing
    /// trigger and survive past a line break where spans and links cannot.
    fn line_scoped(self) -> bool {
        matches!(
            self,
            Modifier::Mention | Modifier::Quote | Modifier::Item(_)
        )
    }

    /// Trigger text re-emitted by the unfinished fallback. `<` and `>` based
    /// triggers are stored pre-escaped; buffers are escaped already.
    fn fallback_trigger(self) -> &'static str {
        match self {
            Modifier::Bold => "**",
            Modifier::Italic => "__",
            Modifier::Strike => "~~",
            Modifier::Spoiler => "||",
            Modifier::Link => "&lt;",
            Modifier::Mention => "@",
            Modifier::Quote => "&gt;",
            Modifier::Item(_) => unreachable!("list items are flushed with their list"),
        }
    }

    fn literal_trigger(self) -> &'static str {
        match self {
            Modifier::Bold => "**",
            Modifier::Italic => "__",
            Modifier::Strike => "~~",
            Modifier::Spoiler => "||",
            _ => unreachable!("only span triggers read back as literal text"),
        }
    }
}

struct Frame {
    modifier: Modifier,
    buf: String,
}

struct ListState {
    kind: ListKind,
    len: usize,
}

/// Bytes the bulk copy must stop at: everything that can change parser
/// state mid-line, plus the quote characters, which escape per character.
/// `-` and digits only matter at the start of a line and are checked there
/// separately; `&` stays in plain runs and is escaped by the bulk path.
const fn special_table() -> [bool; 256] {
    let mut table = [false; 256];
    table[b'\n' as usize] = true;
    table[b'\\' as usize] = true;
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'*' as usize] = true;
    table[b'_' as usize] = true;
    table[b'~' as usize] = true;
    table[b'|' as usize] = true;
    table[b'@' as usize] = true;
    table[b'"' as usize] = true;
    table[b'\'' as usize] = true;
    table
}

static SPECIAL: [bool; 256] = special_table();

pub(crate) fn render_str(input: &str, options: &FormatOptions) -> String {
    if input.is_empty() {
        return String::new();
    }
    // Carriage returns are stripped, not escaped; the common path borrows.
    let input: Cow<'_, str> = if input.contains('\r') {
        Cow::Owned(input.replace('\r', ""))
    } else {
        Cow::Borrowed(input)
    };
    Engine::new(&input, options).run()
}

struct Engine<'a> {
    input: &'a str,
    bytes: &'a [u8],
    options: &'a FormatOptions,
    pos: usize,
    /// Base buffer: append-only, receives fully resolved output.
    out: String,
    stack: Vec<Frame>,
    /// Backslash escape applies to exactly the next character.
    escape: bool,
    /// Start of input or the character right after a line break.
    line_start: bool,
    list: Option<ListState>,
}

impl<'a> Engine<'a> {
    fn new(input: &'a str, options: &'a FormatOptions) -> Self {
        Engine {
            input,
            bytes: input.as_bytes(),
            options,
            pos: 0,
            out: String::with_capacity(input.len() + input.len() / 8),
            stack: Vec::new(),
            escape: false,
            line_start: true,
            list: None,
        }
    }

    fn run(mut self) -> String {
        while self.advance_plain() {
            let b = self.bytes[self.pos];
            match b {
                b'\n' => {
                    self.line_break();
                    self.pos += 1;
                    self.escape = false;
                    self.line_start = true;
                    continue;
                }
                b'\\' => {
                    if self.escape {
                        self.current().push_str("\\\\");
                    }
                    self.escape = !self.escape;
                    self.pos += 1;
                    self.line_start = false;
                    continue;
                }
                _ => {}
            }
            if self.line_start && self.line_marker(b) {
                self.line_start = false;
                continue;
            }
            self.line_start = false;
            self.dispatch(b);
        }

        if self.list.is_some() {
            self.flush_list();
        }
        while let Some(top) = self.stack.last() {
            if top.modifier.line_scoped() && !top.buf.is_empty() {
                self.pop_decorated();
            } else {
                self.pop_unfinished();
            }
        }
        if self.escape {
            self.out.push('\\');
        }
        self.out
    }

    /// Bulk-copies plain text up to the next special character. Returns
    /// false once the input is exhausted.
    fn advance_plain(&mut self) -> bool {
        let len = self.bytes.len();
        if self.innermost() == Some(Modifier::Mention) {
            // Mentions resolve per character so the termination predicate
            // sees every one.
            return self.pos < len;
        }
        if self.line_start {
            if let Some(&b) = self.bytes.get(self.pos) {
                if b == b'-' || b.is_ascii_digit() {
                    // Line marker candidates go back to the caller untouched.
                    return true;
                }
            }
        }
        let start = self.pos;
        let mut end = start;
        while end < len && !SPECIAL[self.bytes[end] as usize] {
            end += 1;
        }
        if end > start {
            if self.line_start && self.list.is_some() {
                // Plain text on a fresh line ends the open list.
                self.flush_list();
                let options = self.options;
                self.current().push_str(&options.newline);
            }
            if self.escape {
                self.escape = false;
                // An escaped `-` keeps its backslash unless the dash is the
                // last character before a line break.
                let hidden = self.bytes[start] == b'-' && self.at_line_end(start + 1);
                if !hidden {
                    self.current().push('\\');
                }
            }
            let input = self.input;
            let escaped = html_escape::encode_text(&input[start..end]);
            self.current().push_str(&escaped);
            self.pos = end;
            self.line_start = false;
        }
        self.pos < len
    }

    /// Handles `-`, `>`, and ordinal markers at the start of a line.
    /// Returns true when the marker was consumed. A line start matching no
    /// active marker force-closes any open list before the line renders.
    fn line_marker(&mut self, b: u8) -> bool {
        match b {
            b'-' => {
                // Only a marker when the line has content after it.
                if matches!(self.peek(1), Some(n) if n != b'\n') {
                    self.push_item(ListKind::Unordered);
                    self.pos += 1;
                    return true;
                }
            }
            b'>' => {
                if self.options.quote_continuous && self.innermost() == Some(Modifier::Quote) {
                    // Continuation line: absorb the marker into the open quote.
                    self.pos += 1;
                    return true;
                }
                if self.list.is_some() {
                    self.flush_list();
                }
                self.stack.push(Frame {
                    modifier: Modifier::Quote,
                    buf: String::new(),
                });
                self.pos += 1;
                return true;
            }
            b'0'..=b'9' => {
                let expected = match &self.list {
                    Some(state) if state.kind == ListKind::Ordered => state.len + 1,
                    _ => 1,
                };
                let digits = expected.to_string();
                let rest = &self.input[self.pos..];
                // The digit run must spell exactly the next ordinal.
                if rest.starts_with(&digits)
                    && rest.as_bytes().get(digits.len()) == Some(&b'.')
                {
                    self.push_item(ListKind::Ordered);
                    self.pos += digits.len() + 1;
                    return true;
                }
            }
            _ => {}
        }
        if self.list.is_some() {
            self.flush_list();
            let options = self.options;
            self.current().push_str(&options.newline);
        }
        false
    }

    /// Processes one special (or mention-mode) character past line-start
    /// handling: modifier triggers, or literal emission.
    fn dispatch(&mut self, b: u8) {
        let in_link = self.innermost() == Some(Modifier::Link);
        match b {
            b'*' | b'_' | b'~' | b'|' if !in_link => {
                let modifier = Modifier::span(b);
                if self.peek(1) == Some(b) {
                    if self.escape {
                        // Escape neutralizes the pair; the backslash is not
                        // shown for a trigger character.
                        self.literal_char(b as char, true);
                    } else {
                        self.span_trigger(modifier);
                        self.pos += 2;
                    }
                } else if !self.escape
                    && self
                        .stack
                        .last()
                        .is_some_and(|top| top.modifier == modifier && top.buf.is_empty())
                {
                    // A lone trigger character right after an identical empty
                    // span shifts the opening outward by one literal
                    // character: ***x*** keeps single asterisks around the
                    // decorated span.
                    self.parent().push(b as char);
                    self.pos += 1;
                } else {
                    // A single trigger character is plain text. Pipes keep a
                    // visible backslash when escaped; the others never would
                    // have rendered one.
                    self.literal_char(b as char, b != b'|');
                }
            }
            b'@' if !in_link => {
                if self.escape {
                    self.literal_char('@', true);
                } else {
                    if self.innermost() == Some(Modifier::Mention) {
                        // A second marker ends the mention and is consumed.
                        self.pop_decorated();
                    } else {
                        self.stack.push(Frame {
                            modifier: Modifier::Mention,
                            buf: String::new(),
                        });
                    }
                    self.pos += 1;
                }
            }
            b'<' if !in_link => {
                if self.escape {
                    self.literal_char('<', true);
                } else {
                    self.stack.push(Frame {
                        modifier: Modifier::Link,
                        buf: String::new(),
                    });
                    self.pos += 1;
                }
            }
            b'>' if in_link => {
                if self.escape {
                    self.literal_char('>', true);
                } else {
                    self.pop_decorated();
                    self.pos += 1;
                }
            }
            _ => {
                if let Some(ch) = self.input[self.pos..].chars().next() {
                    self.literal_char(ch, false);
                }
            }
        }
    }

    /// A full two-character span trigger, unescaped and outside a link.
    fn span_trigger(&mut self, modifier: Modifier) {
        if self.innermost() == Some(Modifier::Mention) {
            self.pop_decorated();
        }
        match self.stack.last() {
            Some(top) if top.modifier == modifier => {
                if top.buf.is_empty() {
                    // An empty doubled trigger reads as plain text, never as
                    // an empty decorated span.
                    self.stack.pop();
                    let trigger = modifier.literal_trigger();
                    let current = self.current();
                    current.push_str(trigger);
                    current.push_str(trigger);
                } else {
                    self.pop_decorated();
                }
            }
            _ => self.stack.push(Frame {
                modifier,
                buf: String::new(),
            }),
        }
    }

    /// Emits one character of literal text, resolving a pending escape and
    /// giving an open mention's termination predicate a look first.
    fn literal_char(&mut self, ch: char, modifier_char: bool) {
        if self.innermost() == Some(Modifier::Mention) {
            let options = self.options;
            let ends = match self.stack.last() {
                Some(top) => (options.mention_end)(ch, &top.buf),
                None => false,
            };
            if ends {
                self.pop_decorated();
            }
        }
        if self.escape {
            self.escape = false;
            let hidden = modifier_char
                || ((ch == '-' || ch == '>') && self.at_line_end(self.pos + ch.len_utf8()));
            if !hidden {
                self.current().push('\\');
            }
        }
        match ch {
            '&' => self.current().push_str("&amp;"),
            '<' => self.current().push_str("&lt;"),
            '>' => self.current().push_str("&gt;"),
            '"' => self.current().push_str("&quot;"),
            '\'' => self.current().push_str("&#x27;"),
            _ => self.current().push(ch),
        }
        self.pos += ch.len_utf8();
    }

    /// Line breaks close everything that is not line-scoped via the
    /// unfinished fallback, end mentions, and end quotes unless the next
    /// line continues them.
    fn line_break(&mut self) {
        loop {
            match self.innermost() {
                Some(modifier) if !modifier.line_scoped() => self.pop_unfinished(),
                Some(Modifier::Mention) => self.pop_decorated(),
                _ => break,
            }
        }
        if self.innermost() == Some(Modifier::Quote)
            && (!self.options.quote_continuous || self.peek(1) != Some(b'>'))
        {
            self.pop_decorated();
        }
        if self.list.is_none() {
            let options = self.options;
            self.current().push_str(&options.newline);
        }
    }

    /// Accepts a list marker: extends the current list or closes a list of
    /// the other kind first, then opens an item frame.
    fn push_item(&mut self, kind: ListKind) {
        match &mut self.list {
            Some(state) if state.kind == kind => state.len += 1,
            Some(_) => {
                self.flush_list();
                self.list = Some(ListState { kind, len: 1 });
            }
            None => self.list = Some(ListState { kind, len: 1 }),
        }
        self.stack.push(Frame {
            modifier: Modifier::Item(kind),
            buf: String::new(),
        });
    }

    /// Closes the open list: resolves modifiers still open inside the
    /// innermost item, collects the item buffers (pushed LIFO, handed to the
    /// decorator in input order), and emits the decorated list.
    fn flush_list(&mut self) {
        let Some(state) = self.list.take() else {
            return;
        };
        let mut items = Vec::with_capacity(state.len);
        for _ in 0..state.len {
            while matches!(self.stack.last(), Some(top) if top.modifier != Modifier::Item(state.kind))
            {
                let top = self.stack.last().expect("frame above a list item");
                if top.modifier.line_scoped() && !top.buf.is_empty() {
                    self.pop_decorated();
                } else {
                    self.pop_unfinished();
                }
            }
            match self.stack.pop() {
                Some(frame) => items.push(frame.buf),
                None => break,
            }
        }
        items.reverse();
        let rendered = match state.kind {
            ListKind::Unordered => (self.options.unordered)(&items),
            ListKind::Ordered => (self.options.ordered)(&items),
        };
        self.current().push_str(&rendered);
    }

    /// Pops the innermost modifier and appends its decorated content to the
    /// enclosing buffer.
    fn pop_decorated(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        let options = self.options;
        let rendered = match frame.modifier {
            Modifier::Bold => (options.bold)(&frame.buf),
            Modifier::Italic => (options.italic)(&frame.buf),
            Modifier::Strike => (options.strike)(&frame.buf),
            Modifier::Spoiler => (options.spoiler)(&frame.buf),
            Modifier::Mention => (options.mention)(&frame.buf),
            Modifier::Quote => (options.quote)(&frame.buf),
            Modifier::Link => {
                // <href|display text>; text defaults to the href.
                let (href, text) = match frame.buf.split_once('|') {
                    Some(parts) => parts,
                    None => (frame.buf.as_str(), frame.buf.as_str()),
                };
                (options.link)(href, text)
            }
            Modifier::Item(_) => unreachable!("list items are flushed with their list"),
        };
        self.current().push_str(&rendered);
    }

    /// Pops the innermost modifier and reproduces it literally: original
    /// trigger text followed by the accumulated content.
    fn pop_unfinished(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        let current = self.current();
        current.push_str(frame.modifier.fallback_trigger());
        current.push_str(&frame.buf);
    }

    fn innermost(&self) -> Option<Modifier> {
        self.stack.last().map(|frame| frame.modifier)
    }

    fn current(&mut self) -> &mut String {
        match self.stack.last_mut() {
            Some(frame) => &mut frame.buf,
            None => &mut self.out,
        }
    }

    /// Buffer one frame below the innermost; the base buffer when the stack
    /// holds a single frame.
    fn parent(&mut self) -> &mut String {
        let len = self.stack.len();
        if len >= 2 {
            &mut self.stack[len - 2].buf
        } else {
            &mut self.out
        }
    }

    fn peek(&self, by: usize) -> Option<u8> {
        self.bytes.get(self.pos + by).copied()
    }

    fn at_line_end(&self, index: usize) -> bool {
        matches!(self.bytes.get(index), None | Some(&b'\n'))
    }
}
