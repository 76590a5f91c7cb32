// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Kick off the recursive crawl from the seed URL
// 3. Print a summary of what was found
// 4. Write every collected image record to results.json
//
// Rust concepts used:
// - async/await: Because the crawl makes many network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - let-else: Bailing out early when arguments are missing
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod crawler;       // src/crawler/ - the recursive crawl engine
mod extract;       // src/extract/ - pulling hrefs and img srcs out of HTML
mod output;        // src/output/ - writing results.json

// Import items we need from our modules
use cli::{parse_depth, Cli};
use clap::Parser;  // Parser trait enables the parse() method
use crawler::{CrawlTask, Crawler};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = normal run (including "no arguments given, nothing to do")
//   Err = setup failed before the crawl could start (e.g. HTTP client)
//
// Crawl-time failures never show up here: a page that can't be fetched
// only silences its own branch, and a failed results.json write is
// reported on stderr without changing the exit code.
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Both positionals are optional at the clap level, and an empty
    // string counts as absent. If either is missing we quietly do
    // nothing: no crawl, no output, exit 0.
    let Some((start_url, depth)) = cli.crawl_request() else {
        return Ok(0);
    };

    // Depth arrives as a raw string. Anything that doesn't parse as an
    // integer becomes 0: the seed page is still fetched and its images
    // recorded, but no links are followed from it.
    let depth = parse_depth(&depth);

    println!("🔍 Harvesting images from: {}", start_url);
    println!("📊 Max crawl depth: {}", depth);

    // Build the engine and run the whole crawl. crawl() only returns
    // once every branch it fanned out to has finished.
    let crawler = Crawler::new()?;
    crawler
        .crawl(CrawlTask {
            url: start_url,
            ignore: cli.ignore,
            depth,
        })
        .await;

    let pages = crawler.visited_count();
    let results = crawler.into_results();

    // Print summary
    println!();
    println!("📊 Summary:");
    println!("   📄 Pages visited: {}", pages);
    println!("   🖼️  Images found: {}", results.len());

    // Persist the results. A write failure is reported but doesn't turn
    // the run into an error: the crawl itself already succeeded.
    match output::write_results(output::RESULTS_FILE, results).await {
        Ok(()) => println!("💾 Results saved to {}", output::RESULTS_FILE),
        Err(e) => eprintln!("Error writing results to file: {}", e),
    }

    Ok(0)
}
