//! Naver News search harvester.
//!
//! For one keyword, this module pages through Naver News search results,
//! extracts the per-result fields from the result markup, deduplicates
//! within the run, fetches each article for classification, and keeps only
//! results inside the trailing two-week window.
//!
//! # Search URL
//!
//! Requests go to `search.naver.com` with the news vertical, newest-first
//! sort, a fixed two-week recency filter (`nso=so%3Add%2Cp%3A2w`), and a
//! start offset of `(page-1)*10 + 1`.
//!
//! # Failure policy
//!
//! Nothing aborts a harvest. A failed search page skips to the next page; a
//! malformed result block, duplicate, failed article fetch, or stale date
//! drops that single result. Every drop increments a [`RunSummary`]
//! counter and emits a log line, so a run that lost data says so.

use crate::classify::NewsClassifier;
use crate::keywords::{DATE_ERROR, NO_DATE};
use crate::models::{NewsResult, RunSummary};
use crate::scrapers::article;
use crate::utils::truncate_for_log;
use chrono::{Local, NaiveDate};
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Fixed delay between search pages.
const PAGE_DELAY: Duration = Duration::from_millis(200);

/// Results older than this many days are dropped; exactly this old is kept.
const RECENCY_WINDOW_DAYS: i64 = 14;

/// Date format produced by the article date extraction.
const DATE_FORMAT: &str = "%Y.%m.%d";

/// Build the search URL for one keyword and 1-based page number.
fn search_url(keyword: &str, page: usize) -> String {
    let start = (page - 1) * 10 + 1;
    format!(
        "https://search.naver.com/search.naver?where=news&query={}&sort=1&nso=so%3Add%2Cp%3A2w&start={}",
        urlencoding::encode(keyword),
        start
    )
}

/// Raw fields of one search result block, before fetching and tagging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResult {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub press: String,
}

/// Extract all result blocks from a search page.
///
/// Each `.news_area` block yields a title (the `title` attribute of
/// `.news_tit`), a detail-page link (its `href`), a summary
/// (`.dsc_txt_wrap`), and an outlet name (`.info_group a`). Blocks missing
/// any of these, or carrying a link that is not an absolute URL, are
/// dropped and counted in the returned malformed tally.
pub fn extract_results(html: &str) -> (Vec<RawResult>, usize) {
    let document = Html::parse_document(html);
    let block_selector = Selector::parse(".news_area").unwrap();
    let title_selector = Selector::parse(".news_tit").unwrap();
    let summary_selector = Selector::parse(".dsc_txt_wrap").unwrap();
    let press_selector = Selector::parse(".info_group a").unwrap();

    let mut results = Vec::new();
    let mut malformed = 0usize;

    for block in document.select(&block_selector) {
        let Some(title_element) = block.select(&title_selector).next() else {
            malformed += 1;
            continue;
        };
        let (Some(title), Some(link)) = (
            title_element.value().attr("title"),
            title_element.value().attr("href"),
        ) else {
            malformed += 1;
            continue;
        };
        if Url::parse(link).is_err() {
            malformed += 1;
            continue;
        }
        let Some(summary_element) = block.select(&summary_selector).next() else {
            malformed += 1;
            continue;
        };
        let Some(press_element) = block.select(&press_selector).next() else {
            malformed += 1;
            continue;
        };

        results.push(RawResult {
            title: title.to_string(),
            link: link.to_string(),
            summary: element_text(&summary_element),
            press: element_text(&press_element),
        });
    }

    (results, malformed)
}

fn element_text(element: &scraper::ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Link and summary sets scoped to one keyword invocation.
///
/// A result is admitted once per run: the first occurrence of a link or of
/// an identical summary wins, later ones are dropped.
#[derive(Debug, Default)]
struct SeenSet {
    links: HashSet<String>,
    summaries: HashSet<String>,
}

impl SeenSet {
    /// Record the result; returns false when its link or summary was
    /// already seen.
    fn admit(&mut self, result: &RawResult) -> bool {
        if self.links.contains(&result.link) || self.summaries.contains(&result.summary) {
            return false;
        }
        self.links.insert(result.link.clone());
        self.summaries.insert(result.summary.clone());
        true
    }
}

/// Whether a formatted date string falls inside the recency window ending
/// at `today`. Sentinel and otherwise unparseable dates never qualify.
fn within_recency(date: &str, today: NaiveDate) -> bool {
    match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(parsed) => today.signed_duration_since(parsed).num_days() <= RECENCY_WINDOW_DAYS,
        Err(_) => false,
    }
}

/// Harvest one keyword across `pages` search pages.
///
/// Returns the kept results in page order plus the run summary for this
/// keyword. Fetching is strictly sequential: one request at a time with a
/// fixed delay between pages.
#[instrument(level = "info", skip_all, fields(%keyword, pages))]
pub async fn harvest(
    client: &reqwest::Client,
    classifier: &NewsClassifier<'_>,
    keyword: &str,
    pages: usize,
) -> (Vec<NewsResult>, RunSummary) {
    let mut results = Vec::new();
    let mut summary = RunSummary::default();
    let mut seen = SeenSet::default();
    let today = Local::now().date_naive();

    for page in 1..=pages {
        let url = search_url(keyword, page);
        debug!(%url, page, "Fetching search page");

        let html = match client.get(&url).send().await {
            Ok(response) if response.status().is_success() => match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    warn!(page, error = %e, "Failed reading search page body; skipping page");
                    summary.pages_skipped += 1;
                    continue;
                }
            },
            Ok(response) => {
                warn!(page, status = %response.status(), "Search page refused; skipping page");
                summary.pages_skipped += 1;
                continue;
            }
            Err(e) => {
                warn!(page, error = %e, "Search request failed; skipping page");
                summary.pages_skipped += 1;
                continue;
            }
        };
        summary.pages_fetched += 1;

        let (raw, malformed) = extract_results(&html);
        summary.malformed_skipped += malformed;
        debug!(page, count = raw.len(), malformed, "Extracted result blocks");

        for item in raw {
            if !seen.admit(&item) {
                summary.duplicate_skipped += 1;
                debug!(
                    url = %item.link,
                    summary_preview = %truncate_for_log(&item.summary, 80),
                    "Skipping duplicate result"
                );
                continue;
            }

            let (body, date) = match article::fetch_article(client, &item.link).await {
                Ok(page_html) => (
                    article::extract_body(&page_html),
                    article::extract_date(&page_html).unwrap_or_else(|| NO_DATE.to_string()),
                ),
                Err(e) => {
                    debug!(url = %item.link, error = %e, "Article fetch failed");
                    summary.article_errors += 1;
                    (String::new(), DATE_ERROR.to_string())
                }
            };

            if !within_recency(&date, today) {
                summary.stale_skipped += 1;
                debug!(url = %item.link, %date, "Dropping result outside recency window");
                continue;
            }

            let full_text = format!("{} {}", item.summary, body).to_lowercase();
            results.push(NewsResult {
                publisher: classifier.publisher(&full_text).to_string(),
                category: classifier.category(&full_text).to_string(),
                date,
                title: item.title,
                url: item.link,
                summary: item.summary,
                press: item.press,
                keyword_match: classifier.mentions_publisher(&full_text),
                textbook_in_body: classifier.mentions_textbook(&body),
            });
            summary.kept += 1;
        }

        sleep(PAGE_DELAY).await;
    }

    info!(
        keyword,
        kept = summary.kept,
        pages_fetched = summary.pages_fetched,
        pages_skipped = summary.pages_skipped,
        duplicates = summary.duplicate_skipped,
        malformed = summary.malformed_skipped,
        stale = summary.stale_skipped,
        article_errors = summary.article_errors,
        "Keyword harvest finished"
    );
    (results, summary)
}
