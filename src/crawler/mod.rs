// src/crawler/mod.rs
// =============================================================================
// This module contains the crawl engine and its URL plumbing.
//
// Submodules:
// - engine: The recursive crawler (shared state, fetching, fan-out)
// - resolve: Turns raw hrefs into absolute URLs, splits URLs apart
//
// This file (mod.rs) is the module root - it exports the types the rest
// of the application drives the crawl with.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod engine;
mod resolve;

pub use engine::{CrawlTask, Crawler, ImageRecord};
