//! Configuration options for text scrubbing.
//!
//! The `Options` struct controls formatting behavior: how much vertical
//! space surrounds paragraph-level blocks, what separates table cells, and
//! whether anchor tags contribute their target and title to the output.

/// Configuration options for text scrubbing.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_htmlscrubber::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     include_href: true,
///     include_href_title: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Number of newline characters that surround a paragraph or heading.
    ///
    /// End tags always append this many; start tags only top the buffer up
    /// to this many trailing newlines.
    ///
    /// Default: `2`
    pub paragraph_newlines: usize,

    /// Delimiter inserted between table headings and table data cells.
    ///
    /// Default: `"\t"`
    pub table_cell_delimiter: String,

    /// Include the url (`href=`) of an anchor tag in its annotation.
    ///
    /// Default: `false`
    pub include_href: bool,

    /// Include the title (`title=`) of an anchor tag in its annotation.
    ///
    /// Default: `false`
    pub include_href_title: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            paragraph_newlines: 2,
            table_cell_delimiter: "\t".to_string(),
            include_href: false,
            include_href_title: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert_eq!(opts.paragraph_newlines, 2);
        assert_eq!(opts.table_cell_delimiter, "\t");
        assert!(!opts.include_href);
        assert!(!opts.include_href_title);
    }

    #[test]
    fn test_custom_paragraph_newlines() {
        let opts = Options {
            paragraph_newlines: 1,
            ..Options::default()
        };

        assert_eq!(opts.paragraph_newlines, 1);
        assert_eq!(opts.table_cell_delimiter, "\t");
    }

    #[test]
    fn test_custom_table_delimiter() {
        let opts = Options {
            table_cell_delimiter: " | ".to_string(),
            ..Options::default()
        };

        assert_eq!(opts.table_cell_delimiter, " | ");
    }

    #[test]
    fn test_anchor_flags_can_be_toggled() {
        let opts = Options {
            include_href: true,
            include_href_title: true,
            ..Options::default()
        };

        assert!(opts.include_href);
        assert!(opts.include_href_title);
    }
}
