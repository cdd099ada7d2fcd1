use rs_htmlscrubber::{scrub, scrub_with_options, Options};

#[test]
fn test_single_row_cells_tab_delimited() {
    assert_eq!(
        scrub("<table><tr><td>A</td><td>B</td></tr></table>"),
        "A\tB\n"
    );
}

#[test]
fn test_each_row_on_its_own_line() {
    let html = "<table>\
                <tr><td>A</td><td>B</td></tr>\
                <tr><td>C</td><td>D</td></tr>\
                </table>";
    assert_eq!(scrub(html), "A\tB\nC\tD\n");
}

#[test]
fn test_header_cells_delimited_like_data_cells() {
    assert_eq!(
        scrub("<table><tr><th>Name</th><th>Age</th></tr></table>"),
        "Name\tAge\n"
    );
}

#[test]
fn test_custom_cell_delimiter() {
    let options = Options {
        table_cell_delimiter: " | ".to_string(),
        ..Options::default()
    };
    assert_eq!(
        scrub_with_options("<table><tr><td>A</td><td>B</td></tr></table>", &options),
        "A | B\n"
    );
}

#[test]
fn test_table_after_text_starts_on_new_line() {
    assert_eq!(
        scrub("before<table><tr><td>X</td></tr></table>"),
        "before\nX\n"
    );
}

#[test]
fn test_pretty_printed_table_whitespace_dropped() {
    let html = "<table>\n  <tr>\n    <td>A</td>\n    <td>B</td>\n  </tr>\n</table>";
    assert_eq!(scrub(html), "A\tB\n");
}

#[test]
fn test_first_column_flag_resets_each_row() {
    let html = "<table>\
                <tr><td>A</td><td>B</td><td>C</td></tr>\
                <tr><td>D</td></tr>\
                </table>";
    assert_eq!(scrub(html), "A\tB\tC\nD\n");
}

#[test]
fn test_cell_outside_any_row_gets_delimiter() {
    // without a tr the first-column flag is never set
    assert_eq!(scrub("<table><td>A</td></table>"), "\tA");
}

#[test]
fn test_empty_first_cell_still_counts_as_first_column() {
    assert_eq!(
        scrub("<table><tr><td></td><td>B</td></tr></table>"),
        "\tB\n"
    );
}

#[test]
fn test_mixed_header_and_data_rows() {
    let html = "<table>\
                <tr><th>Name</th><th>Value</th></tr>\
                <tr><td>alpha</td><td>1</td></tr>\
                </table>";
    assert_eq!(scrub(html), "Name\tValue\nalpha\t1\n");
}
