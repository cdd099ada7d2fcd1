//! Anchor annotation tests: the `[anchor to ...]` markers controlled by
//! the `include_href` and `include_href_title` options.

use rs_htmlscrubber::{scrub, scrub_with_options, ANCHOR_END, ANCHOR_START, Options};

fn href_options() -> Options {
    Options {
        include_href: true,
        ..Options::default()
    }
}

fn full_options() -> Options {
    Options {
        include_href: true,
        include_href_title: true,
        ..Options::default()
    }
}

#[test]
fn test_default_options_ignore_anchor_attributes() {
    assert_eq!(scrub(r#"<a href="http://x.com" title="X">link</a>"#), "link");
}

#[test]
fn test_href_annotation_precedes_link_text() {
    assert_eq!(
        scrub_with_options(r#"<a href="http://x.com">link</a>"#, &href_options()),
        "[anchor to http://x.com]link"
    );
}

#[test]
fn test_href_and_title_joined_with_dash() {
    assert_eq!(
        scrub_with_options(
            r#"<a href="http://x.com" title="X">link</a>"#,
            &full_options()
        ),
        "[anchor to http://x.com - X]link"
    );
}

#[test]
fn test_missing_title_leaves_no_separator() {
    assert_eq!(
        scrub_with_options(r#"<a href="http://x.com">link</a>"#, &full_options()),
        "[anchor to http://x.com]link"
    );
}

#[test]
fn test_title_only_when_href_flag_off() {
    let options = Options {
        include_href_title: true,
        ..Options::default()
    };
    assert_eq!(
        scrub_with_options(r#"<a href="http://x.com" title="X">link</a>"#, &options),
        "[anchor to X]link"
    );
}

#[test]
fn test_anchor_without_attributes_emits_no_annotation() {
    assert_eq!(scrub_with_options("<a>link</a>", &full_options()), "link");
}

#[test]
fn test_empty_href_value_emits_no_annotation() {
    assert_eq!(
        scrub_with_options(r#"<a href="">link</a>"#, &full_options()),
        "link"
    );
}

#[test]
fn test_href_value_stays_raw() {
    assert_eq!(
        scrub_with_options(r#"<a href="x?a=1&amp;b=2">link</a>"#, &href_options()),
        "[anchor to x?a=1&amp;b=2]link"
    );
}

#[test]
fn test_first_of_duplicate_hrefs_wins() {
    assert_eq!(
        scrub_with_options(r#"<a href="first" href="second">x</a>"#, &href_options()),
        "[anchor to first]x"
    );
}

#[test]
fn test_markup_inside_anchor_text_preserved() {
    assert_eq!(
        scrub_with_options(r#"<a href="u"><b>bold</b> text</a>"#, &href_options()),
        "[anchor to u]bold text"
    );
}

#[test]
fn test_annotation_uses_the_public_markers() {
    let text = scrub_with_options(r#"<a href="u">x</a>"#, &href_options());
    assert!(text.starts_with(ANCHOR_START));
    assert!(text.contains(ANCHOR_END));
}

#[test]
fn test_multiple_anchors_in_one_document() {
    let html = r#"<p><a href="a">one</a> and <a href="b">two</a></p>"#;
    assert_eq!(
        scrub_with_options(html, &href_options()),
        "[anchor to a]one and [anchor to b]two\n\n"
    );
}
