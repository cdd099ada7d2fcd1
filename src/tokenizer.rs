//! Streaming HTML tokenizer.
//!
//! Splits raw markup into start-tag, end-tag, and text events for the
//! scrubbing engine. The lexer is deliberately tolerant, because HTML in
//! the wild is rarely conformant: a `<` that opens no tag is literal text,
//! an unterminated tag at end of input is flushed as text, and comments,
//! doctypes, and processing instructions disappear silently. Nothing here
//! ever fails.
//!
//! Entity references are left undecoded. Downstream substitution works on
//! the raw `&...;` forms, so decoding them here would change the output.

use std::collections::VecDeque;

use crate::event::{Attribute, Event};

/// Pull tokenizer producing [`Event`]s from an HTML string.
///
/// The whole input is borrowed up front, but events are produced on demand
/// through the [`Iterator`] implementation.
///
/// # Example
///
/// ```rust
/// use rs_htmlscrubber::{Event, Tokenizer};
///
/// let events: Vec<Event> = Tokenizer::new("<p>Hi</p>").collect();
/// assert_eq!(events.len(), 3);
/// ```
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    pending: VecDeque<Event>,
    rawtext: Option<RawKind>,
}

/// Elements whose bodies are lexed as raw text until the matching end tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RawKind {
    Script,
    Style,
}

impl RawKind {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "script" => Some(Self::Script),
            "style" => Some(Self::Style),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Style => "style",
        }
    }
}

/// Bytes allowed in tag and attribute names after the leading letter.
fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b':' | b'.')
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            pending: VecDeque::new(),
            rawtext: None,
        }
    }

    /// True if position `i` starts real markup: a `<` followed by a letter,
    /// `/`, `!`, or `?`. Any other `<` is literal text.
    fn markup_at(&self, i: usize) -> bool {
        let bytes = self.input.as_bytes();
        bytes[i] == b'<'
            && matches!(
                bytes.get(i + 1),
                Some(&b) if b.is_ascii_alphabetic() || b == b'/' || b == b'!' || b == b'?'
            )
    }

    /// Collects one maximal run of character data, up to the next markup
    /// opening or end of input.
    fn lex_text(&mut self) {
        let bytes = self.input.as_bytes();
        let start = self.pos;
        let mut i = self.pos + 1;
        while i < bytes.len() && !self.markup_at(i) {
            i += 1;
        }
        self.pos = i;
        self.pending
            .push_back(Event::Text(self.input[start..i].to_string()));
    }

    fn lex_markup(&mut self) {
        match self.input.as_bytes()[self.pos + 1] {
            b'!' => self.skip_declaration(),
            b'?' => self.skip_processing_instruction(),
            b'/' => self.lex_end_tag(),
            _ => self.lex_start_tag(),
        }
    }

    /// Consumes `<!--...-->` comments, `<![CDATA[...]]>` sections, and
    /// `<!...>` declarations without emitting anything. Unterminated forms
    /// swallow the rest of the input.
    fn skip_declaration(&mut self) {
        let rest = &self.input[self.pos..];
        if let Some(body) = rest.strip_prefix("<!--") {
            self.pos = match body.find("-->") {
                Some(idx) => self.pos + 4 + idx + 3,
                None => self.input.len(),
            };
        } else if let Some(body) = rest.strip_prefix("<![CDATA[") {
            self.pos = match body.find("]]>") {
                Some(idx) => self.pos + 9 + idx + 3,
                None => self.input.len(),
            };
        } else {
            self.pos = match rest.find('>') {
                Some(idx) => self.pos + idx + 1,
                None => self.input.len(),
            };
        }
    }

    /// Consumes `<?...>` without emitting anything.
    fn skip_processing_instruction(&mut self) {
        let rest = &self.input[self.pos + 2..];
        self.pos = match rest.find('>') {
            Some(idx) => self.pos + 2 + idx + 1,
            None => self.input.len(),
        };
    }

    /// Lexes `</name ...>`. Attributes on end tags are discarded. A `</`
    /// followed by a non-letter opens a bogus comment consumed to the next
    /// `>`; an end tag that never closes is flushed as text.
    fn lex_end_tag(&mut self) {
        let bytes = self.input.as_bytes();
        let tag_start = self.pos;
        let name_start = self.pos + 2;
        if name_start >= bytes.len() || !bytes[name_start].is_ascii_alphabetic() {
            let rest = &self.input[name_start.min(self.input.len())..];
            self.pos = match rest.find('>') {
                Some(idx) => name_start + idx + 1,
                None => self.input.len(),
            };
            return;
        }

        let mut i = name_start;
        while i < bytes.len() && is_name_byte(bytes[i]) {
            i += 1;
        }
        let name = self.input[name_start..i].to_ascii_lowercase();

        match self.input[i..].find('>') {
            Some(idx) => {
                self.pos = i + idx + 1;
                self.pending.push_back(Event::EndTag { name });
            }
            None => self.emit_tail_text(tag_start),
        }
    }

    /// Lexes `<name attr=value ...>`. A self-closing tag produces a start
    /// event immediately followed by an end event. A start tag that never
    /// closes is flushed as text.
    fn lex_start_tag(&mut self) {
        let bytes = self.input.as_bytes();
        let tag_start = self.pos;
        let name_start = self.pos + 1;
        let mut i = name_start;
        while i < bytes.len() && is_name_byte(bytes[i]) {
            i += 1;
        }
        let name = self.input[name_start..i].to_ascii_lowercase();

        let mut attrs = Vec::new();
        let mut self_closing = false;
        loop {
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i >= bytes.len() {
                return self.emit_tail_text(tag_start);
            }
            match bytes[i] {
                b'>' => {
                    i += 1;
                    break;
                }
                b'/' => {
                    if bytes.get(i + 1) == Some(&b'>') {
                        self_closing = true;
                        i += 2;
                        break;
                    }
                    // stray slash between attributes
                    i += 1;
                }
                b'=' => {
                    // equals sign with no attribute name
                    i += 1;
                }
                _ => {
                    let Some((attr, next)) = self.lex_attribute(i) else {
                        // quoted value never closed
                        return self.emit_tail_text(tag_start);
                    };
                    attrs.push(attr);
                    i = next;
                }
            }
        }

        self.pos = i;
        if self_closing {
            self.pending.push_back(Event::StartTag {
                name: name.clone(),
                attrs,
            });
            self.pending.push_back(Event::EndTag { name });
        } else {
            // a self-closed script/style has no body to skip
            self.rawtext = RawKind::from_name(&name);
            self.pending.push_back(Event::StartTag { name, attrs });
        }
    }

    /// Parses one attribute starting at `i`: a name, an optional `=` with a
    /// quoted or bare value. Returns the attribute and the position just
    /// past it, or `None` when a quoted value never closes.
    fn lex_attribute(&self, mut i: usize) -> Option<(Attribute, usize)> {
        let bytes = self.input.as_bytes();
        let name_start = i;
        while i < bytes.len()
            && !bytes[i].is_ascii_whitespace()
            && !matches!(bytes[i], b'=' | b'/' | b'>')
        {
            i += 1;
        }
        let name = self.input[name_start..i].to_ascii_lowercase();

        let mut j = i;
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        if bytes.get(j) != Some(&b'=') {
            return Some((
                Attribute {
                    name,
                    value: String::new(),
                },
                i,
            ));
        }
        while j < bytes.len() && bytes[j] == b'=' {
            j += 1;
        }
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }

        match bytes.get(j) {
            Some(&quote) if quote == b'"' || quote == b'\'' => {
                let value_start = j + 1;
                let closing = self.input[value_start..].find(quote as char)?;
                let value = self.input[value_start..value_start + closing].to_string();
                Some((Attribute { name, value }, value_start + closing + 1))
            }
            _ => {
                let mut k = j;
                while k < bytes.len() && bytes[k] != b'>' && !bytes[k].is_ascii_whitespace() {
                    k += 1;
                }
                let value = self.input[j..k].to_string();
                Some((Attribute { name, value }, k))
            }
        }
    }

    /// Emits the body of a script or style element as one text event. The
    /// closing tag (if any) is left in place for the normal end-tag path;
    /// an unterminated body swallows the rest of the input with no
    /// synthetic end tag.
    fn lex_rawtext(&mut self, kind: RawKind) {
        let body_end = self.find_rawtext_end(kind.name()).unwrap_or(self.input.len());
        if body_end > self.pos {
            self.pending
                .push_back(Event::Text(self.input[self.pos..body_end].to_string()));
        }
        self.pos = body_end;
    }

    /// Finds the `</name` terminator for a rawtext body: case-insensitive
    /// name match followed by whitespace, `/`, `>`, or end of input.
    fn find_rawtext_end(&self, name: &str) -> Option<usize> {
        let bytes = self.input.as_bytes();
        let name_bytes = name.as_bytes();
        let mut i = self.pos;
        while i + 1 < bytes.len() {
            if bytes[i] == b'<' && bytes[i + 1] == b'/' {
                let rest = &bytes[i + 2..];
                if rest.len() >= name_bytes.len()
                    && rest[..name_bytes.len()].eq_ignore_ascii_case(name_bytes)
                {
                    match rest.get(name_bytes.len()) {
                        None => return Some(i),
                        Some(&b) if b.is_ascii_whitespace() || b == b'/' || b == b'>' => {
                            return Some(i)
                        }
                        Some(_) => {}
                    }
                }
            }
            i += 1;
        }
        None
    }

    /// Flushes everything from `start` to the end of input as text.
    fn emit_tail_text(&mut self, start: usize) {
        self.pending
            .push_back(Event::Text(self.input[start..].to_string()));
        self.pos = self.input.len();
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }
            if let Some(kind) = self.rawtext.take() {
                self.lex_rawtext(kind);
                continue;
            }
            if self.pos >= self.input.len() {
                return None;
            }
            if self.markup_at(self.pos) {
                self.lex_markup();
            } else {
                self.lex_text();
            }
        }
    }
}
