//! Scraping layer for Naver News search results and article pages.
//!
//! Two submodules split the work:
//!
//! 1. [`naver`]: pages through Naver News search for one keyword, extracts
//!    per-result fields, deduplicates, and assembles tagged rows
//! 2. [`article`]: fetches a single article page and extracts its body text
//!    and publication date
//!
//! All requests share one [`reqwest::Client`] carrying a browser-like
//! user-agent; Naver serves a bot-detection page to the default reqwest
//! agent. Fetching is strictly sequential with a fixed courtesy delay
//! between search pages, and per-item failures are absorbed into the run
//! summary rather than aborting the harvest.

pub mod article;
pub mod naver;

/// User-agent sent with every search and article request.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Build the HTTP client shared by one harvest run.
pub fn http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().user_agent(USER_AGENT).build()
}
