//! The scrubbing engine.
//!
//! [`Scrubber`] consumes tag and text events and accumulates plain text
//! under the formatting rules configured by [`Options`]: paragraph and
//! heading breaks, list and table layout, anchor annotations, script and
//! style suppression. Block breaks are top-ups: a start tag only appends
//! the newlines still missing from the end of the buffer, and never opens
//! an empty output.

mod actions;
mod state;

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::event::{attr_value, Attribute, Event};
use crate::observe::{LogSink, NoopSink};
use crate::options::Options;
use crate::tokenizer::Tokenizer;

use actions::{classify_end, classify_start, EndAction, StartAction};
use state::ScrubState;

/// Opening marker of an anchor annotation.
pub const ANCHOR_START: &str = "[anchor to ";

/// Closing marker of an anchor annotation.
pub const ANCHOR_END: &str = "]";

/// Decodes the entity references that are substituted when they arrive as
/// a whole text event. Everything else passes through undecoded.
fn decode_entity(data: &str) -> Option<&'static str> {
    match data {
        "&amp;" | "&#38;" => Some("&"),
        "&gt;" | "&#62;" => Some(">"),
        "&lt;" | "&#60;" => Some("<"),
        "&nbsp;" | "&#160;" => Some(" "),
        _ => None,
    }
}

/// Streaming HTML to plain text converter.
///
/// A `Scrubber` holds configuration and an observability sink, both fixed
/// at construction. Each call to a scrub method runs on fresh state, so a
/// single instance can process any number of documents.
///
/// # Example
///
/// ```rust
/// use rs_htmlscrubber::{Options, Scrubber};
///
/// let scrubber = Scrubber::new(Options::default());
/// assert_eq!(scrubber.scrub("<p>Hello</p>"), "Hello\n\n");
/// ```
pub struct Scrubber<'a> {
    options: Options,
    sink: &'a dyn LogSink,
}

impl Scrubber<'static> {
    /// Creates a scrubber with the given options and no log output.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            sink: &NoopSink,
        }
    }
}

impl<'a> Scrubber<'a> {
    /// Creates a scrubber that reports its progress to `sink`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rs_htmlscrubber::{MemorySink, Options, Scrubber};
    ///
    /// let sink = MemorySink::new();
    /// let scrubber = Scrubber::with_sink(Options::default(), &sink);
    /// let _ = scrubber.scrub("<video></video>");
    /// assert!(sink
    ///     .messages()
    ///     .iter()
    ///     .any(|message| message.contains("unhandled start tag: video")));
    /// ```
    #[must_use]
    pub fn with_sink(options: Options, sink: &'a dyn LogSink) -> Self {
        Self { options, sink }
    }

    /// Scrubs an HTML string to plain text.
    ///
    /// Scrubbing a string cannot fail: malformed markup degrades to text
    /// or gets dropped by the tokenizer, never rejected.
    #[must_use]
    pub fn scrub(&self, html: &str) -> String {
        self.scrub_events(Tokenizer::new(html))
    }

    /// Scrubs a pre-tokenized event stream.
    ///
    /// This is the seam for callers with their own markup source. Events
    /// are expected to follow the tokenizer's contract: lower-cased tag
    /// names and undecoded entity references in text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rs_htmlscrubber::{Event, Options, Scrubber};
    ///
    /// let scrubber = Scrubber::new(Options::default());
    /// let events = vec![
    ///     Event::start_tag("h1", &[]),
    ///     Event::text("Title"),
    ///     Event::end_tag("h1"),
    /// ];
    /// assert_eq!(scrubber.scrub_events(events), "Title\n\n");
    /// ```
    #[must_use]
    pub fn scrub_events(&self, events: impl IntoIterator<Item = Event>) -> String {
        let mut state = ScrubState::new();
        for event in events {
            self.handle_event(&mut state, &event);
        }
        state.finish()
    }

    /// Scrubs raw bytes, which must decode as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Input`] when the bytes are not valid UTF-8.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rs_htmlscrubber::{Options, Scrubber};
    ///
    /// let scrubber = Scrubber::new(Options::default());
    /// let text = scrubber.scrub_bytes(b"<p>Hi</p>")?;
    /// assert_eq!(text, "Hi\n\n");
    /// # Ok::<(), rs_htmlscrubber::Error>(())
    /// ```
    pub fn scrub_bytes(&self, bytes: &[u8]) -> Result<String> {
        match std::str::from_utf8(bytes) {
            Ok(html) => Ok(self.scrub(html)),
            Err(err) => Err(Error::Input(err.to_string())),
        }
    }

    /// Reads a file and scrubs its contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::Input`] when its contents are not valid UTF-8. Failures
    /// are also reported to the sink at error level.
    pub fn scrub_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let result = match fs::read(path) {
            Ok(bytes) => self.scrub_bytes(&bytes),
            Err(err) => Err(Error::Io(err.to_string())),
        };
        if let Err(err) = &result {
            self.sink
                .error(&format!("error reading {}, error is {err}", path.display()));
        }
        result
    }

    fn handle_event(&self, state: &mut ScrubState, event: &Event) {
        match event {
            Event::StartTag { name, attrs } => self.handle_start(state, name, attrs),
            Event::EndTag { name } => self.handle_end(state, name),
            Event::Text(data) => self.handle_text(state, data),
        }
    }

    fn handle_start(&self, state: &mut ScrubState, name: &str, attrs: &[Attribute]) {
        self.sink.debug(&format!("start tag: {name}"));
        match classify_start(name) {
            StartAction::Anchor => {
                self.sink.info("starting anchor");
                self.push_anchor(state, attrs);
            }
            StartAction::LineBreak => state.push("\n"),
            StartAction::ButtonStart => state.ensure_trailing_newlines(2),
            StartAction::EnterCode => state.code_nest += 1,
            StartAction::ListStart | StartAction::TableStart => {
                state.ensure_trailing_newlines(1);
            }
            StartAction::ParagraphStart => {
                state.ensure_trailing_newlines(self.options.paragraph_newlines);
            }
            StartAction::EnterPre => state.pre_nest += 1,
            StartAction::EnterScript => state.in_script = true,
            StartAction::EnterStyle => state.in_style = true,
            StartAction::RowStart => state.table_row_first_column = true,
            StartAction::Cell => {
                if state.table_row_first_column {
                    state.table_row_first_column = false;
                } else {
                    state.push(self.options.table_cell_delimiter.clone());
                }
            }
            StartAction::Unhandled => {
                self.sink.info(&format!("unhandled start tag: {name}"));
            }
        }
    }

    fn handle_end(&self, state: &mut ScrubState, name: &str) {
        self.sink.debug(&format!("end tag: {name}"));
        match classify_end(name) {
            EndAction::Ignore => {}
            EndAction::ButtonEnd => state.push_newlines(2),
            EndAction::ExitCode => state.code_nest = state.code_nest.saturating_sub(1),
            EndAction::ListItemEnd => {
                self.sink.info("end of list item");
                state.push("\n");
            }
            EndAction::ParagraphEnd => state.push_newlines(self.options.paragraph_newlines),
            EndAction::ExitPre => state.pre_nest = state.pre_nest.saturating_sub(1),
            EndAction::ExitScript => state.in_script = false,
            EndAction::ExitStyle => state.in_style = false,
            EndAction::TitleEnd => state.push("\n"),
            EndAction::RowEnd => {
                self.sink.info("end of table row");
                state.push("\n");
            }
            EndAction::Unhandled => {
                self.sink.info(&format!("unhandled end tag: {name}"));
            }
        }
    }

    fn handle_text(&self, state: &mut ScrubState, data: &str) {
        if data.chars().all(char::is_whitespace) {
            return;
        }
        if state.in_script || state.in_style {
            self.sink
                .info(&format!("skipping script or style data: {data}"));
            return;
        }
        if let Some(decoded) = decode_entity(data) {
            state.push(decoded);
            return;
        }
        self.sink.info(&format!("text data: {data}"));
        state.push(data);
        // preformatted text keeps its line structure
        if state.pre_nest > 0 {
            state.push("\n");
        }
    }

    /// Emits an anchor annotation from the tag's attributes. Which parts
    /// appear is governed by [`Options::include_href`] and
    /// [`Options::include_href_title`]; when both parts are present they
    /// are joined with `" - "`, and when neither is, nothing is emitted.
    fn push_anchor(&self, state: &mut ScrubState, attrs: &[Attribute]) {
        let href = if self.options.include_href {
            attr_value(attrs, "href")
        } else {
            ""
        };
        let title = if self.options.include_href_title {
            attr_value(attrs, "title")
        } else {
            ""
        };
        if href.is_empty() && title.is_empty() {
            return;
        }
        let separator = if href.is_empty() || title.is_empty() {
            ""
        } else {
            " - "
        };
        state.push(format!("{ANCHOR_START}{href}{separator}{title}{ANCHOR_END}"));
    }
}
