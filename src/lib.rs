//! # rs-htmlscrubber
//!
//! Scrubs HTML down to plain text.
//!
//! This library strips markup from HTML documents while applying a small
//! set of layout rules, so the scrubbed text keeps a readable shape:
//! paragraphs and headings are separated by blank lines, list items and
//! table rows sit on their own lines, table cells are delimited, and
//! script and style content never reaches the output.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_htmlscrubber::scrub;
//!
//! let html = "<p>Hello</p><p>World</p>";
//! assert_eq!(scrub(html), "Hello\n\nWorld\n\n");
//! ```
//!
//! ## Features
//!
//! - **Block layout**: paragraphs, headings, lists, and buttons get
//!   newline breaks, with the paragraph spacing configurable
//! - **Tables**: one line per row, cells joined by a configurable delimiter
//! - **Anchor annotations**: optional `[anchor to ...]` markers carrying
//!   the link's href and title
//! - **Noise removal**: script and style bodies, comments, doctypes, and
//!   processing instructions are dropped
//! - **Tolerant parsing**: malformed markup degrades to text, it is never
//!   an error
//!
//! The scrubbing rules live on [`Scrubber`]; the free functions below are
//! one-shot conveniences over it.

mod error;
mod options;

/// Tag and text events produced by the tokenizer and consumed by the engine.
pub mod event;

/// Observability sinks for scrubbing progress.
pub mod observe;

/// The scrubbing engine and its formatting rules.
pub mod scrubber;

/// Tolerant streaming HTML tokenizer.
pub mod tokenizer;

use std::path::Path;

// Public API - re-exports
pub use error::{Error, Result};
pub use event::{Attribute, Event};
pub use observe::{FacadeSink, LogSink, MemorySink, NoopSink};
pub use options::Options;
pub use scrubber::{ANCHOR_END, ANCHOR_START, Scrubber};
pub use tokenizer::Tokenizer;

/// Scrubs an HTML string to plain text using default options.
///
/// # Arguments
///
/// * `html` - The HTML document as a string slice
///
/// # Returns
///
/// The scrubbed plain text. Scrubbing a string cannot fail.
///
/// # Example
///
/// ```rust
/// use rs_htmlscrubber::scrub;
///
/// assert_eq!(scrub("<h1>Title</h1>intro"), "Title\n\nintro");
/// ```
#[must_use]
pub fn scrub(html: &str) -> String {
    scrub_with_options(html, &Options::default())
}

/// Scrubs an HTML string to plain text with custom options.
///
/// # Arguments
///
/// * `html` - The HTML document as a string slice
/// * `options` - Configuration for spacing, delimiters, and anchors
///
/// # Returns
///
/// The scrubbed plain text. Scrubbing a string cannot fail.
///
/// # Example
///
/// ```rust
/// use rs_htmlscrubber::{scrub_with_options, Options};
///
/// let options = Options {
///     include_href: true,
///     include_href_title: true,
///     ..Options::default()
/// };
/// let text = scrub_with_options(r#"<a href="http://x.com">x</a>"#, &options);
/// assert_eq!(text, "[anchor to http://x.com]x");
/// ```
#[must_use]
pub fn scrub_with_options(html: &str, options: &Options) -> String {
    Scrubber::new(options.clone()).scrub(html)
}

/// Scrubs raw HTML bytes to plain text using default options.
///
/// # Arguments
///
/// * `bytes` - The HTML document as raw bytes, which must be UTF-8
///
/// # Returns
///
/// The scrubbed plain text, or an error when the bytes do not decode.
///
/// # Errors
///
/// Returns [`Error::Input`] when the bytes are not valid UTF-8.
///
/// # Example
///
/// ```rust
/// use rs_htmlscrubber::scrub_bytes;
///
/// let text = scrub_bytes(b"<h1>Title</h1>")?;
/// assert_eq!(text, "Title\n\n");
/// # Ok::<(), rs_htmlscrubber::Error>(())
/// ```
pub fn scrub_bytes(bytes: &[u8]) -> Result<String> {
    scrub_bytes_with_options(bytes, &Options::default())
}

/// Scrubs raw HTML bytes to plain text with custom options.
///
/// # Arguments
///
/// * `bytes` - The HTML document as raw bytes, which must be UTF-8
/// * `options` - Configuration for spacing, delimiters, and anchors
///
/// # Returns
///
/// The scrubbed plain text, or an error when the bytes do not decode.
///
/// # Errors
///
/// Returns [`Error::Input`] when the bytes are not valid UTF-8.
///
/// # Example
///
/// ```rust
/// use rs_htmlscrubber::{scrub_bytes_with_options, Options};
///
/// let options = Options {
///     table_cell_delimiter: " | ".to_string(),
///     ..Options::default()
/// };
/// let html = b"<table><tr><td>A</td><td>B</td></tr></table>";
/// assert_eq!(scrub_bytes_with_options(html, &options)?, "A | B\n");
/// # Ok::<(), rs_htmlscrubber::Error>(())
/// ```
pub fn scrub_bytes_with_options(bytes: &[u8], options: &Options) -> Result<String> {
    Scrubber::new(options.clone()).scrub_bytes(bytes)
}

/// Reads a file and scrubs its contents using default options.
///
/// # Arguments
///
/// * `path` - Path of the HTML file to read
///
/// # Returns
///
/// The scrubbed plain text, or an error when the file cannot be read or
/// does not decode as UTF-8.
///
/// # Errors
///
/// Returns [`Error::Io`] when reading fails and [`Error::Input`] when the
/// contents are not valid UTF-8.
///
/// # Example
///
/// ```rust,no_run
/// use rs_htmlscrubber::scrub_file;
///
/// let text = scrub_file("page.html")?;
/// println!("{text}");
/// # Ok::<(), rs_htmlscrubber::Error>(())
/// ```
pub fn scrub_file(path: impl AsRef<Path>) -> Result<String> {
    scrub_file_with_options(path, &Options::default())
}

/// Reads a file and scrubs its contents with custom options.
///
/// # Arguments
///
/// * `path` - Path of the HTML file to read
/// * `options` - Configuration for spacing, delimiters, and anchors
///
/// # Returns
///
/// The scrubbed plain text, or an error when the file cannot be read or
/// does not decode as UTF-8.
///
/// # Errors
///
/// Returns [`Error::Io`] when reading fails and [`Error::Input`] when the
/// contents are not valid UTF-8.
///
/// # Example
///
/// ```rust,no_run
/// use rs_htmlscrubber::{scrub_file_with_options, Options};
///
/// let options = Options {
///     paragraph_newlines: 1,
///     ..Options::default()
/// };
/// let text = scrub_file_with_options("page.html", &options)?;
/// println!("{text}");
/// # Ok::<(), rs_htmlscrubber::Error>(())
/// ```
pub fn scrub_file_with_options(path: impl AsRef<Path>, options: &Options) -> Result<String> {
    Scrubber::new(options.clone()).scrub_file(path)
}
