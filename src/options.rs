//! Configuration for chatmark rendering.
//!
//! This module provides [`FormatOptions`], the per-modifier decorator set and
//! behavior toggles consumed by the rendering engine:
//!
//! - Decorator functions for every span and line modifier
//! - A link decorator taking `(href, text)`
//! - A mention-termination predicate
//! - Quote continuity and newline-replacement toggles
//!
//! Every field has a built-in default, so options can be constructed
//! incrementally with the `with_*` builders:
//!
//! ```rust
//! use chatmark::{render_with_options, FormatOptions};
//!
//! let options = FormatOptions::new()
//!     .with_bold(|text| format!("<b>{text}</b>"))
//!     .with_newline("<br>");
//!
//! assert_eq!(render_with_options("**hi** there", &options), "<b>hi</b> there");
//! ```
//!
//! Decorators receive content that has already been HTML-escaped by the
//! engine; whatever they return is emitted verbatim and is the only way an
//! unescaped markup-significant character can reach the output.

use std::fmt;
use std::sync::Arc;

/// Decorator for span and line modifiers: accumulated content in, rendered
/// fragment out.
pub type SpanDecorator = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Decorator for links: `(href, text)` in, rendered fragment out.
pub type LinkDecorator = Arc<dyn Fn(&str, &str) -> String + Send + Sync>;

/// Decorator for lists: item contents in input order, rendered fragment out.
pub type ListDecorator = Arc<dyn Fn(&[String]) -> String + Send + Sync>;

/// Mention-termination predicate: receives the current character and the
/// text accumulated for the mention so far, returns true to end the mention
/// before this character.
pub type MentionEndPredicate = Arc<dyn Fn(char, &str) -> bool + Send + Sync>;

/// Configuration for the rendering engine.
///
/// All fields are optional in spirit: [`FormatOptions::default`] supplies a
/// built-in decorator for every slot, and each `with_*` builder replaces one
/// of them. The defaults reproduce the markup they match, so an
/// unconfigured modifier renders roughly as the user typed it.
///
/// Options are read-only during rendering and cheap to clone (decorators are
/// reference-counted); a single instance may be shared across threads as
/// long as the supplied decorators are reentrant.
///
/// # Examples
///
/// ```rust
/// use chatmark::{render_with_options, FormatOptions};
///
/// let options = FormatOptions::new()
///     .with_italic(|text| format!("<i>{text}</i>"))
///     .with_quote(|text| format!("<blockquote>{text}</blockquote>"))
///     .with_quote_continuous(false);
///
/// assert_eq!(render_with_options("__hi__", &options), "<i>hi</i>");
/// ```
#[derive(Clone)]
pub struct FormatOptions {
    pub bold: SpanDecorator,
    pub italic: SpanDecorator,
    pub strike: SpanDecorator,
    pub spoiler: SpanDecorator,
    pub link: LinkDecorator,
    pub mention: SpanDecorator,
    pub mention_end: MentionEndPredicate,
    pub quote: SpanDecorator,
    pub quote_continuous: bool,
    pub unordered: ListDecorator,
    pub ordered: ListDecorator,
    pub newline: String,
}

/// Default span decorator: wraps content back in its trigger characters.
fn span_default(trigger: &'static str) -> SpanDecorator {
    Arc::new(move |text| format!("{trigger}{text}{trigger}"))
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            bold: span_default("**"),
            italic: span_default("__"),
            strike: span_default("~~"),
            spoiler: span_default("||"),
            link: Arc::new(|href, text| {
                if text == href {
                    format!("&lt;{href}&gt;")
                } else {
                    format!("&lt;{href}|{text}&gt;")
                }
            }),
            mention: Arc::new(|text| format!("@{text}")),
            mention_end: Arc::new(|ch, _| ch.is_whitespace()),
            quote: Arc::new(|text| format!("&gt;{text}")),
            quote_continuous: true,
            unordered: Arc::new(|items| {
                items
                    .iter()
                    .map(|item| format!("-{item}"))
                    .collect::<Vec<_>>()
                    .join("\n")
            }),
            ordered: Arc::new(|items| {
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| format!("{}.{item}", index + 1))
                    .collect::<Vec<_>>()
                    .join("\n")
            }),
            newline: "\n".to_string(),
        }
    }
}

impl FormatOptions {
    /// Creates options with every slot on its built-in default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bold (`**`) decorator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chatmark::FormatOptions;
    ///
    /// let options = FormatOptions::new().with_bold(|t| format!("<b>{t}</b>"));
    /// ```
    #[must_use]
    pub fn with_bold<F>(mut self, decorator: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.bold = Arc::new(decorator);
        self
    }

    /// Sets the italic (`__`) decorator.
    #[must_use]
    pub fn with_italic<F>(mut self, decorator: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.italic = Arc::new(decorator);
        self
    }

    /// Sets the strikethrough (`~~`) decorator.
    #[must_use]
    pub fn with_strike<F>(mut self, decorator: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.strike = Arc::new(decorator);
        self
    }

    /// Sets the spoiler (`||`) decorator.
    #[must_use]
    pub fn with_spoiler<F>(mut self, decorator: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.spoiler = Arc::new(decorator);
        self
    }

    /// Sets the link (`<href|text>`) decorator.
    ///
    /// The decorator receives the href and the display text; when the input
    /// carries no `|` separator the text equals the href.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chatmark::FormatOptions;
    ///
    /// let options = FormatOptions::new().with_link(|href, text| {
    ///     format!("<a href=\"{href}\" rel=\"nofollow\">{text}</a>")
    /// });
    /// ```
    #[must_use]
    pub fn with_link<F>(mut self, decorator: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        self.link = Arc::new(decorator);
        self
    }

    /// Sets the mention (`@name`) decorator.
    #[must_use]
    pub fn with_mention<F>(mut self, decorator: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.mention = Arc::new(decorator);
        self
    }

    /// Sets the mention-termination predicate.
    ///
    /// The default ends a mention at any whitespace character. The predicate
    /// receives the current character and the (already escaped) text
    /// accumulated so far; returning true ends the mention before the
    /// character. Mentions always end at a line break regardless of the
    /// predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chatmark::FormatOptions;
    ///
    /// // Usernames are alphanumeric; stop at anything else.
    /// let options = FormatOptions::new()
    ///     .with_mention_end(|ch, _| !ch.is_alphanumeric());
    /// ```
    #[must_use]
    pub fn with_mention_end<F>(mut self, predicate: F) -> Self
    where
        F: Fn(char, &str) -> bool + Send + Sync + 'static,
    {
        self.mention_end = Arc::new(predicate);
        self
    }

    /// Sets the quote (`> line`) decorator.
    #[must_use]
    pub fn with_quote<F>(mut self, decorator: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.quote = Arc::new(decorator);
        self
    }

    /// Sets whether consecutive quote lines merge into one block.
    ///
    /// Defaults to true. When disabled every quote line becomes its own
    /// block, which reads better for greentext-style quoting.
    #[must_use]
    pub fn with_quote_continuous(mut self, continuous: bool) -> Self {
        self.quote_continuous = continuous;
        self
    }

    /// Sets the unordered list decorator.
    ///
    /// The decorator receives item contents in input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chatmark::FormatOptions;
    ///
    /// let options = FormatOptions::new().with_unordered(|items| {
    ///     let items: String = items.iter().map(|i| format!("<li>{i}</li>")).collect();
    ///     format!("<ul>{items}</ul>")
    /// });
    /// ```
    #[must_use]
    pub fn with_unordered<F>(mut self, decorator: F) -> Self
    where
        F: Fn(&[String]) -> String + Send + Sync + 'static,
    {
        self.unordered = Arc::new(decorator);
        self
    }

    /// Sets the ordered list decorator.
    #[must_use]
    pub fn with_ordered<F>(mut self, decorator: F) -> Self
    where
        F: Fn(&[String]) -> String + Send + Sync + 'static,
    {
        self.ordered = Arc::new(decorator);
        self
    }

    /// Sets the string substituted for line breaks outside open lists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chatmark::{render_with_options, FormatOptions};
    ///
    /// let options = FormatOptions::new().with_newline("<br>");
    /// assert_eq!(render_with_options("a\nb", &options), "a<br>b");
    /// ```
    #[must_use]
    pub fn with_newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self
    }
}

impl fmt::Debug for FormatOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatOptions")
            .field("quote_continuous", &self.quote_continuous)
            .field("newline", &self.newline)
            .finish_non_exhaustive()
    }
}
