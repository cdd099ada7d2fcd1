//! Command line scrubber: reads an HTML file, prints the scrubbed text,
//! and writes a copy to scrubber.txt.

use std::env;
use std::fs;
use std::process;

use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use rs_htmlscrubber::{FacadeSink, Options, Scrubber};

fn main() {
    // Warnings and errors only; raise to Info or Debug to watch the scrub
    let _ = TermLogger::init(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let Some(infile) = env::args().nth(1) else {
        eprintln!("Usage: scrub <infile>");
        process::exit(1);
    };

    // Annotate anchors with their href and title
    let options = Options {
        include_href: true,
        include_href_title: true,
        ..Options::default()
    };
    let sink = FacadeSink;
    let scrubber = Scrubber::with_sink(options, &sink);

    let clean = match scrubber.scrub_file(&infile) {
        Ok(clean) => clean,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    println!("{clean}");

    if let Err(err) = fs::write("scrubber.txt", &clean) {
        eprintln!("Failed to write scrubber.txt: {err}");
        process::exit(1);
    }
}
