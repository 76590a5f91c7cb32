// src/output/json.rs
// =============================================================================
// This module writes the crawl's findings to disk as JSON.
//
// The file format is a single object with one "results" key holding the
// array of image records, pretty-printed with 2-space indentation:
//
//   {
//     "results": [
//       { "imageUrl": "...", "sourceUrl": "...", "depth": 1 },
//       ...
//     ]
//   }
//
// Rust concepts:
// - serde_json: Serialization to JSON text
// - tokio::fs: Async file I/O
// - The ? operator: Propagating errors to the caller
// =============================================================================

use anyhow::Result;
use serde::Serialize;

use crate::crawler::ImageRecord;

/// Name of the output file, written into the current working directory
pub const RESULTS_FILE: &str = "results.json";

// The top-level shape of the output file. Serializing the Vec directly
// would produce a bare array; wrapping it gives us the "results" key.
#[derive(Debug, Serialize)]
struct CrawlReport {
    results: Vec<ImageRecord>,
}

// Serializes the collected records and writes them to the given path
//
// Returns Err if serialization or the write fails; the caller decides
// how to report that (the crawl data itself is unaffected either way).
pub async fn write_results(path: &str, results: Vec<ImageRecord>) -> Result<()> {
    let report = CrawlReport { results };
    let json = serde_json::to_string_pretty(&report)?;

    tokio::fs::write(path, json).await?;

    Ok(())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a wrapper struct instead of serializing the Vec?
//    - serde_json::to_string_pretty(&vec) would write [ ... ] at the top
//      level
//    - Consumers of the file expect { "results": [ ... ] }, so we model
//      exactly that shape as a struct
//
// 2. What does to_string_pretty do?
//    - Same as to_string but with newlines and 2-space indentation
//    - Much friendlier for humans opening results.json in an editor
//
// 3. Why tokio::fs::write instead of std::fs::write?
//    - We're inside an async program; std::fs would block the runtime
//      thread while the OS writes
//    - tokio::fs moves the blocking work off the async threads for us
// -----------------------------------------------------------------------------
