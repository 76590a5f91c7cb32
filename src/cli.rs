// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The tool takes two positional arguments:
//   image-harvester <START_URL> <DEPTH>
//
// Both are deliberately optional at the parsing level: when either one is
// missing (an empty string counts as missing) we do not crawl at all and
// exit quietly, instead of printing a usage error. clap still gives us
// --help and --version for free.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Option<T>: A value that may or may not be there
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "image-harvester",
    version = "0.1.0",
    about = "A CLI tool to crawl a website and collect every image it references",
    long_about = "image-harvester starts at a seed URL, follows same-host links up to a \
                  chosen depth, and records every <img> reference it sees (together with \
                  the page it was found on) into results.json."
)]
pub struct Cli {
    /// URL to start crawling from (e.g., https://example.com)
    ///
    /// This is a positional argument. Option<String> means clap accepts
    /// its absence; main then skips the crawl entirely.
    pub start_url: Option<String>,

    /// How many levels of links to follow from the start page
    ///
    /// Depth 0 = fetch the start page only, record its images
    /// Depth 1 = also follow links found on the start page
    /// etc.
    ///
    /// Kept as a raw String on purpose: we parse it ourselves in main so
    /// that a non-numeric value degrades to "start page only" instead of
    /// becoming a hard argument error.
    pub depth: Option<String>,

    /// Substring filter for links that should never be followed
    ///
    /// Any link whose raw href contains this substring is skipped before
    /// it is resolved or fetched.
    /// #[arg(long, default_value = "...")] creates the --ignore flag
    #[arg(long, default_value = "/search")]
    pub ignore: String,
}

impl Cli {
    // Returns (start_url, depth) when both positionals were actually given
    //
    // A missing argument means "do nothing", and an empty string counts
    // as missing too: "" is neither a URL nor a depth.
    pub fn crawl_request(&self) -> Option<(String, String)> {
        let start_url = self.start_url.as_deref()?;
        let depth = self.depth.as_deref()?;

        if start_url.is_empty() || depth.is_empty() {
            return None;
        }

        Some((start_url.to_string(), depth.to_string()))
    }
}

// Turns the raw depth argument into a number
//
// Anything that does not parse as a base-10 integer becomes 0, which
// downstream means: fetch the start page, record its images, follow no
// links. A typo degrades the crawl instead of aborting it.
pub fn parse_depth(raw: &str) -> i32 {
    raw.parse().unwrap_or(0)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Option<String> for positional arguments?
//    - A plain String positional would make clap error out when it's missing
//    - Option<String> makes it optional: None when absent, Some(..) when given
//    - We want "missing argument" to mean "do nothing", not "print an error"
//
// 2. Why is depth a String and not a number?
//    - If we declared it as i32, clap itself would reject "abc" with an error
//    - parse_depth converts it ourselves, so we pick the fallback behavior
//      (treat unparseable depth as 0: fetch the start page, follow nothing)
//
// 3. What are doc comments (///) doing on the fields?
//    - clap turns them into the help text shown by --help
//    - The first line becomes the short help, the rest the long help
//
// 4. What does as_deref() do in crawl_request?
//    - Turns &Option<String> into Option<&str> so we can inspect the value
//      without taking it out of the struct
//    - The ? after it returns None early when the argument is absent
// -----------------------------------------------------------------------------
