// src/crawler/engine.rs
// =============================================================================
// This module implements the recursive crawl itself.
//
// How it works:
// 1. Check the shared visited set; if this URL was already claimed, stop
// 2. Split the URL into host and scheme (needed to resolve child links)
// 3. Fetch the page HTML
// 4. Record every <img> src on the page, whatever the depth
// 5. If depth is still positive, filter the page's links down to ones
//    that mention our host (and don't match the ignore pattern), resolve
//    them, and crawl them all concurrently
//
// The recursion fans out: every qualifying link on a page becomes its own
// concurrent crawl, and the parent waits for all of them to finish before
// it returns. There is no cap on how wide that fan-out gets and no timeout
// on individual fetches, so a page with 200 links starts 200 fetches and
// a hung connection stalls its whole branch.
//
// Rust concepts:
// - BoxFuture: How an async function is allowed to call itself
// - Mutex<T>: Shared mutable state that many tasks touch safely
// - join_all: Wait for a whole batch of futures (like Promise.all)
// =============================================================================

use anyhow::{anyhow, Result};
use futures::future::{join_all, BoxFuture, FutureExt};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Mutex;

use super::resolve::{resolve_url, split_host_scheme};
use crate::extract::{extract_images, extract_links};

// One unit of crawl work: a URL to fetch, the substring that disqualifies
// links from being followed, and how many more hops we may take from here
#[derive(Debug, Clone)]
pub struct CrawlTask {
    pub url: String,
    pub ignore: String,
    pub depth: i32,  // 0 means: record this page's images, follow nothing
}

// One image found during the crawl
//
// #[derive(Serialize, Deserialize)] lets us convert to/from JSON
// rename_all = "camelCase" turns image_url into "imageUrl" on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    /// The img src exactly as it appeared in the page (may be relative)
    pub image_url: String,
    /// The page the image was found on
    pub source_url: String,
    /// Remaining depth budget when that page was crawled
    pub depth: i32,
}

// The crawl engine: one HTTP client plus the two pieces of state every
// branch of the recursion shares
//
// Both collections sit behind a std Mutex. That works here because we
// only ever hold a lock for a few instructions and NEVER across an
// .await (holding a guard across an await would not even compile once
// the future needs to be Send).
pub struct Crawler {
    client: Client,
    /// Every URL a branch has claimed, including ones that failed to fetch
    visited: Mutex<HashSet<String>>,
    /// All images found so far, in completion order
    results: Mutex<Vec<ImageRecord>>,
}

impl Crawler {
    // Creates an engine with a fresh client and empty state
    //
    // Note: no request timeout is configured. A server that accepts the
    // connection and never responds will stall that branch (and every
    // ancestor waiting on it) indefinitely.
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Crawler {
            client,
            visited: Mutex::new(HashSet::new()),
            results: Mutex::new(Vec::new()),
        })
    }

    // Crawls one URL and, recursively, everything reachable from it
    // within the depth budget
    //
    // An async fn cannot call itself directly (the compiler cannot size
    // the resulting future), so this is a regular fn returning a boxed
    // future. The .boxed() at the bottom does the heap allocation that
    // breaks the cycle.
    pub fn crawl(&self, task: CrawlTask) -> BoxFuture<'_, ()> {
        async move {
            // Claim the URL before any network I/O. insert() returns false
            // if it was already present, which covers both "crawled earlier"
            // and "a sibling branch claimed it a moment ago and is still
            // fetching". The scope block drops the lock before we await.
            //
            // lock() only errs if another thread panicked while holding the
            // lock; there is no sensible recovery, so unwrap is fine here.
            {
                let mut visited = self.visited.lock().unwrap();
                if !visited.insert(task.url.clone()) {
                    return;
                }
            }

            println!("  Crawling [depth {}]: {}", task.depth, task.url);

            // We need the page's own host and scheme to resolve its links.
            // A URL we cannot take apart ends this branch, nothing more.
            let (host, scheme) = match split_host_scheme(&task.url) {
                Some(parts) => parts,
                None => {
                    eprintln!("  Warning: Invalid URL: {}", task.url);
                    return;
                }
            };

            // Fetch failures are local too: log, abandon this subtree, and
            // let sibling branches carry on
            let html = match self.fetch_page(&task.url).await {
                Ok(html) => html,
                Err(e) => {
                    eprintln!("  Warning: Failed to fetch {}: {}", task.url, e);
                    return;
                }
            };

            let links = extract_links(&html);
            let images = extract_images(&html);

            // Record every image BEFORE the depth check: a page at depth 0
            // still contributes its images, we just won't leave it.
            // The src goes in untouched, relative or not.
            {
                let mut results = self.results.lock().unwrap();
                for image_url in images {
                    results.push(ImageRecord {
                        image_url,
                        source_url: task.url.clone(),
                        depth: task.depth,
                    });
                }
            }

            if task.depth <= 0 {
                return;
            }

            // Keep links that mention our host and skip ones matching the
            // ignore pattern. Both are plain substring tests on the RAW
            // href, so a relative link like "/about" (no hostname in it)
            // does not survive. Survivors are resolved and crawled with
            // one less hop in the budget.
            let children: Vec<_> = links
                .into_iter()
                .filter(|link| link.contains(host.as_str()) && !link.contains(task.ignore.as_str()))
                .map(|link| {
                    self.crawl(CrawlTask {
                        url: resolve_url(&link, &host, &scheme),
                        ignore: task.ignore.clone(),
                        depth: task.depth - 1,
                    })
                })
                .collect();

            // Fan out to all children at once and wait for every one of
            // them. No concurrency cap: the page decides the width.
            join_all(children).await;
        }
        .boxed()
    }

    // Fetches a page and returns its HTML content
    async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {}", response.status()));
        }

        let html = response.text().await?;
        Ok(html)
    }

    // How many URLs the crawl claimed (successful or not)
    pub fn visited_count(&self) -> usize {
        self.visited.lock().unwrap().len()
    }

    // Consumes the engine and hands back everything it collected
    //
    // Taking self by value proves no crawl branch is still running, so
    // into_inner can take the Vec out of the Mutex without locking
    pub fn into_results(self) -> Vec<ImageRecord> {
        self.results.into_inner().unwrap()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why can't an async fn just call itself?
//    - The compiler turns an async fn into a state machine struct
//    - A recursive call would embed that struct inside itself, which has
//      no finite size
//    - Boxing the future (BoxFuture is Pin<Box<dyn Future + Send>>) adds
//      the indirection that makes the size finite, same trick as a
//      recursive enum needing Box
//
// 2. Why std::sync::Mutex and not tokio's Mutex?
//    - tokio's Mutex is for locks you hold across .await points
//    - We never do that: each lock scope is a handful of instructions
//    - The std Mutex is cheaper and keeps the critical sections honest
//
// 3. What is join_all?
//    - Takes a collection of futures, returns one future that completes
//      when all of them have
//    - The direct equivalent of JavaScript's Promise.all
//    - Combined with .await it gives us "start everything, then wait"
//
// 4. Why insert into visited before fetching?
//    - Two branches can discover the same URL at nearly the same time
//    - Whoever inserts first wins; the loser sees insert() == false and
//      backs off while the winner's fetch is still in flight
//    - Inserting after the fetch would leave a window where both fetch
//      the same page and its images get recorded twice
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn task(url: &str, depth: i32) -> CrawlTask {
        CrawlTask {
            url: url.to_string(),
            ignore: "/search".to_string(),
            depth,
        }
    }

    #[tokio::test]
    async fn test_each_page_fetched_once_despite_cycles() {
        let mut server = mockito::Server::new_async().await;
        let base = server.url();

        // Two pages that link to each other. Without the visited set this
        // would ping-pong until the depth budget ran out.
        let root = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(format!(r#"<a href="{}/two">Two</a>"#, base))
            .expect(1)
            .create_async()
            .await;
        let two = server
            .mock("GET", "/two")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(format!(r#"<a href="{}">Back</a>"#, base))
            .expect(1)
            .create_async()
            .await;

        let crawler = Crawler::new().unwrap();
        crawler.crawl(task(&base, 5)).await;

        root.assert_async().await;
        two.assert_async().await;
        assert_eq!(crawler.visited_count(), 2);
    }

    #[tokio::test]
    async fn test_trailing_slash_makes_a_distinct_url() {
        let mut server = mockito::Server::new_async().await;
        let base = server.url();

        // Deduplication is exact string matching, no normalization:
        // "/page" and "/page/" are two different URLs and both get fetched
        let root = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(format!(
                r#"<a href="{}/page">Bare</a><a href="{}/page/">Slashed</a>"#,
                base, base
            ))
            .expect(1)
            .create_async()
            .await;
        let bare = server
            .mock("GET", "/page")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body("<p>bare</p>")
            .expect(1)
            .create_async()
            .await;
        let slashed = server
            .mock("GET", "/page/")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body("<p>slashed</p>")
            .expect(1)
            .create_async()
            .await;

        let crawler = Crawler::new().unwrap();
        crawler.crawl(task(&base, 1)).await;

        root.assert_async().await;
        bare.assert_async().await;
        slashed.assert_async().await;
        assert_eq!(crawler.visited_count(), 3);
    }

    #[tokio::test]
    async fn test_images_recorded_even_at_depth_zero() {
        let mut server = mockito::Server::new_async().await;
        let base = server.url();

        let body = format!(
            r#"
            <img src="/img/one.png">
            <img src="two.jpg">
            <img src="{}/img/three.gif">
            <a href="{}/next">Next</a>
            "#,
            base, base
        );
        let root = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(body)
            .create_async()
            .await;

        // At depth 0 the link must never be followed
        let next = server
            .mock("GET", "/next")
            .with_status(200)
            .expect(0)
            .create_async()
            .await;

        let crawler = Crawler::new().unwrap();
        crawler.crawl(task(&base, 0)).await;

        root.assert_async().await;
        next.assert_async().await;

        let results = crawler.into_results();
        assert_eq!(results.len(), 3);
        for record in &results {
            assert_eq!(record.source_url, base);
            assert_eq!(record.depth, 0);
        }
        // Srcs are kept verbatim, including the relative ones
        assert_eq!(results[0].image_url, "/img/one.png");
        assert_eq!(results[1].image_url, "two.jpg");
    }

    #[tokio::test]
    async fn test_depth_two_chain_collects_from_every_level() {
        let mut server = mockito::Server::new_async().await;
        let base = server.url();

        // Seed (depth 2, no images) -> page-one (depth 1, one image)
        // -> page-two (depth 0, three images). page-one also links to a
        // "/search-results" page that the ignore filter must drop.
        let seed = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(format!(r#"<a href="{}/page-one">One</a>"#, base))
            .create_async()
            .await;
        let page_one = server
            .mock("GET", "/page-one")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(format!(
                r#"
                <img src="/img/banner.png">
                <a href="{}/page-two">Two</a>
                <a href="{}/search-results">Search</a>
                "#,
                base, base
            ))
            .create_async()
            .await;
        let page_two = server
            .mock("GET", "/page-two")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(
                r#"
                <img src="/a.png">
                <img src="/b.png">
                <img src="/c.png">
                "#,
            )
            .create_async()
            .await;
        let searchy = server
            .mock("GET", "/search-results")
            .with_status(200)
            .expect(0)
            .create_async()
            .await;

        let crawler = Crawler::new().unwrap();
        crawler.crawl(task(&base, 2)).await;

        seed.assert_async().await;
        page_one.assert_async().await;
        page_two.assert_async().await;
        searchy.assert_async().await;

        let results = crawler.into_results();
        assert_eq!(results.len(), 4);

        let at_depth_one: Vec<_> = results.iter().filter(|r| r.depth == 1).collect();
        let at_depth_zero: Vec<_> = results.iter().filter(|r| r.depth == 0).collect();
        assert_eq!(at_depth_one.len(), 1);
        assert_eq!(at_depth_zero.len(), 3);

        assert_eq!(at_depth_one[0].image_url, "/img/banner.png");
        assert_eq!(at_depth_one[0].source_url, format!("{}/page-one", base));
        for record in at_depth_zero {
            assert_eq!(record.source_url, format!("{}/page-two", base));
        }
    }

    #[tokio::test]
    async fn test_fetch_failure_leaves_sibling_results_intact() {
        let mut server = mockito::Server::new_async().await;
        let base = server.url();

        let root = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(format!(
                r#"<a href="{}/broken">Broken</a><a href="{}/gallery">Gallery</a>"#,
                base, base
            ))
            .create_async()
            .await;
        let broken = server
            .mock("GET", "/broken")
            .with_status(500)
            .expect(1)
            .create_async()
            .await;
        let gallery = server
            .mock("GET", "/gallery")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(r#"<img src="/photo.jpg">"#)
            .create_async()
            .await;

        let crawler = Crawler::new().unwrap();
        crawler.crawl(task(&base, 1)).await;

        // The 500 was attempted exactly once, its branch died quietly,
        // and the gallery's image still made it into the results
        root.assert_async().await;
        broken.assert_async().await;
        gallery.assert_async().await;
        assert_eq!(crawler.visited_count(), 3);

        let results = crawler.into_results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].image_url, "/photo.jpg");
    }

    #[tokio::test]
    async fn test_offhost_links_are_not_followed() {
        let mut server = mockito::Server::new_async().await;
        let base = server.url();

        let root = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(r#"<a href="http://elsewhere.example/pics.html">Away</a>"#)
            .create_async()
            .await;

        let crawler = Crawler::new().unwrap();
        crawler.crawl(task(&base, 3)).await;

        // The link doesn't mention our host, so only the seed was visited
        root.assert_async().await;
        assert_eq!(crawler.visited_count(), 1);
        assert_eq!(crawler.into_results().len(), 0);
    }

    #[tokio::test]
    async fn test_unparseable_url_ends_the_branch() {
        let crawler = Crawler::new().unwrap();
        crawler.crawl(task("not-a-valid-url", 3)).await;

        // Claimed in the visited set, but nothing fetched or collected
        assert_eq!(crawler.visited_count(), 1);
        assert_eq!(crawler.into_results().len(), 0);
    }
}
