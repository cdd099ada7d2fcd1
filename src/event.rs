//! Parse events consumed by the scrubber.
//!
//! The scrubbing engine folds over a stream of `Event` values instead of raw
//! markup, so tokenization stays a separate concern. Any event source can
//! drive the engine as long as it honors the contract: tag names arrive
//! lower-cased, attributes come as ordered name/value pairs with duplicates
//! preserved, and entity references in text are left undecoded.

/// A single name/value attribute from a start tag.
///
/// Values are kept exactly as written in the source; entity references are
/// not decoded. A valueless attribute carries an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name, lower-cased.
    pub name: String,
    /// Raw attribute value.
    pub value: String,
}

/// One tokenized unit of HTML input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// An opening tag with its ordered attribute list.
    StartTag {
        /// Tag name, lower-cased.
        name: String,
        /// Attributes in source order; duplicate names are preserved.
        attrs: Vec<Attribute>,
    },
    /// A closing tag.
    EndTag {
        /// Tag name, lower-cased.
        name: String,
    },
    /// A run of character data between tags.
    Text(String),
}

impl Event {
    /// Builds a start tag event from a name and `(name, value)` pairs.
    #[must_use]
    pub fn start_tag(name: &str, attrs: &[(&str, &str)]) -> Self {
        Self::StartTag {
            name: name.to_string(),
            attrs: attrs
                .iter()
                .map(|(attr_name, attr_value)| Attribute {
                    name: (*attr_name).to_string(),
                    value: (*attr_value).to_string(),
                })
                .collect(),
        }
    }

    /// Builds an end tag event.
    #[must_use]
    pub fn end_tag(name: &str) -> Self {
        Self::EndTag {
            name: name.to_string(),
        }
    }

    /// Builds a text event.
    #[must_use]
    pub fn text(data: &str) -> Self {
        Self::Text(data.to_string())
    }
}

/// Finds the named attribute in an ordered attribute list and returns its
/// value.
///
/// Duplicate names are possible in wild markup; the first match wins.
/// Returns an empty string if the attribute is absent.
#[must_use]
pub fn attr_value<'a>(attrs: &'a [Attribute], name: &str) -> &'a str {
    attrs
        .iter()
        .find(|attr| attr.name == name)
        .map_or("", |attr| attr.value.as_str())
}
