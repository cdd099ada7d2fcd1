//! Scrubs a small page twice: once with default options, once with anchor
//! annotations enabled.
//!
//! Run with: `cargo run --example basic`

use rs_htmlscrubber::{scrub, scrub_with_options, Options};

fn main() {
    let html = r#"<html>
  <head><title>Release notes</title></head>
  <body>
    <h1>What changed</h1>
    <p>Faster parsing and fewer crashes.</p>
    <ul>
      <li>New tokenizer</li>
      <li>Better tables</li>
    </ul>
    <a href="https://example.com/changelog" title="full changelog">Read more</a>
  </body>
</html>"#;

    println!("--- default options ---");
    println!("{}", scrub(html));

    let options = Options {
        include_href: true,
        include_href_title: true,
        ..Options::default()
    };
    println!("--- with anchor annotations ---");
    println!("{}", scrub_with_options(html, &options));
}
