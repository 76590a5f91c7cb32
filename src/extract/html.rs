// src/extract/html.rs
// =============================================================================
// This module pulls the raw material out of an HTML page:
// - every href from the <a> tags (candidate pages to crawl next)
// - every src from the <img> tags (the images we came for)
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Both functions return the attribute values exactly as written in the
// page. No resolution, no filtering, no deduplication. The crawler
// decides what to do with links; image srcs are recorded verbatim even
// when they are relative paths.
//
// Rust concepts:
// - Iterators: select -> filter_map -> map -> collect
// - Closures: Anonymous functions (|x| ...)
// - String ownership: The document dies at the end of the function,
//   so we copy the attribute values out
// =============================================================================

use scraper::{Html, Selector};

// Extracts every <a> href from the page, in document order
//
// Tags without an href attribute are skipped. Values are returned
// exactly as they appear in the markup (relative, absolute, whatever).
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // Selector::parse returns Result, so we use .unwrap() which panics on error
    // This is OK here because our selector is a constant and known to be valid
    let selector = Selector::parse("a").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

// Extracts every <img> src from the page, in document order
//
// Same rules as extract_links: missing src means the tag is skipped,
// present src is kept untouched.
pub fn extract_images(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let selector = Selector::parse("img").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("src"))
        .map(str::to_string)
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why filter_map instead of map?
//    - .attr("href") returns Option<&str> (the attribute might be absent)
//    - filter_map keeps only the Some values and unwraps them in one step
//    - A plain map would leave us with a Vec of Options to clean up after
//
// 2. What does map(str::to_string) do?
//    - .attr() gives us &str slices that borrow from the parsed document
//    - The document is dropped when this function returns
//    - to_string copies each slice into an owned String we can return
//    - str::to_string is the function itself, passed instead of |s| s.to_string()
//
// 3. Why parse the document fresh in each function?
//    - Html is cheap to parse at the sizes we deal with
//    - Sharing one parsed document across calls would force the caller
//      to hold a non-Send type, which fights the async crawler upstream
// -----------------------------------------------------------------------------
