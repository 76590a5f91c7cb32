// src/extract/mod.rs
// =============================================================================
// This module contains all HTML extraction logic.
//
// Submodules:
// - html: Pulls link hrefs and image srcs out of a page
//
// This file (mod.rs) is the module root - it re-exports the extraction
// functions so callers can write `extract::extract_links()` without
// knowing about the internal file layout.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod html;

pub use html::{extract_images, extract_links};
