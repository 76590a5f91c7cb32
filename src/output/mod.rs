// src/output/mod.rs
// =============================================================================
// This module contains the result persistence logic.
//
// Submodules:
// - json: Serializes the image records to the results.json file
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod json;

pub use json::{write_results, RESULTS_FILE};
