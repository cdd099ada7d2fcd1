//! Tag dispatch tables.
//!
//! Tag names map to small action enums and the engine matches on the
//! action, so the per-tag behavior is visible in one place per direction.

/// What a start tag does to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StartAction {
    /// `a`: emit an anchor annotation when enabled.
    Anchor,
    /// `br`: one newline, unconditionally.
    LineBreak,
    /// `button`: ensure two trailing newlines.
    ButtonStart,
    /// `code`: enter a code context.
    EnterCode,
    /// `ol`, `ul`: ensure one trailing newline.
    ListStart,
    /// `p`, `h1`..`h6`: ensure a paragraph break.
    ParagraphStart,
    /// `pre`: enter a preformatted context.
    EnterPre,
    /// `script`: start discarding text.
    EnterScript,
    /// `style`: start discarding text.
    EnterStyle,
    /// `table`: ensure one trailing newline.
    TableStart,
    /// `tr`: mark the next cell as first in its row.
    RowStart,
    /// `td`, `th`: delimit all cells after the first.
    Cell,
    /// Anything else: no output.
    Unhandled,
}

/// What an end tag does to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EndAction {
    /// `br`: nothing, the start tag already broke the line.
    Ignore,
    /// `button`: two newlines, unconditionally.
    ButtonEnd,
    /// `code`: leave a code context.
    ExitCode,
    /// `li`: one newline.
    ListItemEnd,
    /// `p`, `h1`..`h6`: a full paragraph break.
    ParagraphEnd,
    /// `pre`: leave a preformatted context.
    ExitPre,
    /// `script`: stop discarding text.
    ExitScript,
    /// `style`: stop discarding text.
    ExitStyle,
    /// `title`: one newline.
    TitleEnd,
    /// `tr`: one newline.
    RowEnd,
    /// Anything else: no output.
    Unhandled,
}

/// True for `h1` through `h6` exactly. Expects a lower-cased name.
pub(crate) fn is_heading(name: &str) -> bool {
    matches!(name.as_bytes(), [b'h', b'1'..=b'6'])
}

pub(crate) fn classify_start(name: &str) -> StartAction {
    match name {
        "a" => StartAction::Anchor,
        "br" => StartAction::LineBreak,
        "button" => StartAction::ButtonStart,
        "code" => StartAction::EnterCode,
        "ol" | "ul" => StartAction::ListStart,
        "p" => StartAction::ParagraphStart,
        "pre" => StartAction::EnterPre,
        "script" => StartAction::EnterScript,
        "style" => StartAction::EnterStyle,
        "table" => StartAction::TableStart,
        "tr" => StartAction::RowStart,
        "td" | "th" => StartAction::Cell,
        _ if is_heading(name) => StartAction::ParagraphStart,
        _ => StartAction::Unhandled,
    }
}

pub(crate) fn classify_end(name: &str) -> EndAction {
    match name {
        "br" => EndAction::Ignore,
        "button" => EndAction::ButtonEnd,
        "code" => EndAction::ExitCode,
        "li" => EndAction::ListItemEnd,
        "p" => EndAction::ParagraphEnd,
        "pre" => EndAction::ExitPre,
        "script" => EndAction::ExitScript,
        "style" => EndAction::ExitStyle,
        "title" => EndAction::TitleEnd,
        "tr" => EndAction::RowEnd,
        _ if is_heading(name) => EndAction::ParagraphEnd,
        _ => EndAction::Unhandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_heading_matches_h1_through_h6_only() {
        for name in ["h1", "h2", "h3", "h4", "h5", "h6"] {
            assert!(is_heading(name), "{name} should be a heading");
        }
        for name in ["h", "h0", "h7", "h9", "h10", "h1x", "head", "hr"] {
            assert!(!is_heading(name), "{name} should not be a heading");
        }
    }

    #[test]
    fn test_classify_start_covers_block_tags() {
        assert_eq!(classify_start("a"), StartAction::Anchor);
        assert_eq!(classify_start("br"), StartAction::LineBreak);
        assert_eq!(classify_start("button"), StartAction::ButtonStart);
        assert_eq!(classify_start("code"), StartAction::EnterCode);
        assert_eq!(classify_start("ol"), StartAction::ListStart);
        assert_eq!(classify_start("ul"), StartAction::ListStart);
        assert_eq!(classify_start("p"), StartAction::ParagraphStart);
        assert_eq!(classify_start("h4"), StartAction::ParagraphStart);
        assert_eq!(classify_start("pre"), StartAction::EnterPre);
        assert_eq!(classify_start("script"), StartAction::EnterScript);
        assert_eq!(classify_start("style"), StartAction::EnterStyle);
        assert_eq!(classify_start("table"), StartAction::TableStart);
        assert_eq!(classify_start("tr"), StartAction::RowStart);
        assert_eq!(classify_start("td"), StartAction::Cell);
        assert_eq!(classify_start("th"), StartAction::Cell);
    }

    #[test]
    fn test_classify_start_unknown_tags_are_unhandled() {
        for name in ["div", "span", "li", "title", "h7", "body"] {
            assert_eq!(classify_start(name), StartAction::Unhandled, "{name}");
        }
    }

    #[test]
    fn test_classify_end_covers_block_tags() {
        assert_eq!(classify_end("br"), EndAction::Ignore);
        assert_eq!(classify_end("button"), EndAction::ButtonEnd);
        assert_eq!(classify_end("code"), EndAction::ExitCode);
        assert_eq!(classify_end("li"), EndAction::ListItemEnd);
        assert_eq!(classify_end("p"), EndAction::ParagraphEnd);
        assert_eq!(classify_end("h6"), EndAction::ParagraphEnd);
        assert_eq!(classify_end("pre"), EndAction::ExitPre);
        assert_eq!(classify_end("script"), EndAction::ExitScript);
        assert_eq!(classify_end("style"), EndAction::ExitStyle);
        assert_eq!(classify_end("title"), EndAction::TitleEnd);
        assert_eq!(classify_end("tr"), EndAction::RowEnd);
    }

    #[test]
    fn test_classify_end_unknown_tags_are_unhandled() {
        for name in ["div", "a", "ol", "ul", "table", "td", "th", "h10"] {
            assert_eq!(classify_end(name), EndAction::Unhandled, "{name}");
        }
    }
}
