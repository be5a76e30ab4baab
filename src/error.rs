//! Error type for chatmark.
//!
//! Rendering itself is total: [`crate::render`] and friends are defined for
//! every input string and never fail. The only fallible operation this crate
//! exposes is writing rendered output to an [`std::io::Write`] sink, so the
//! error type is correspondingly small.
//!
//! ## Examples
//!
//! ```rust
//! use chatmark::{render_to_writer, FormatOptions};
//!
//! let mut buffer = Vec::new();
//! render_to_writer(&mut buffer, "**hi**", &FormatOptions::new()).unwrap();
//! ```

use thiserror::Error;

/// Errors that can occur while writing rendered output.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// IO error while writing to the sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
