//! Article page fetching and field extraction.
//!
//! Given a detail-page URL from a search result, this module performs one
//! bounded-timeout GET and pulls two fields out of the returned HTML:
//!
//! - the body text, via a priority-ordered list of container selectors with
//!   a whole-document fallback
//! - the publication date, via the `article:published_time` metadata tag
//!
//! News outlets linked from Naver search vary wildly in markup, which is
//! why the body selectors are a fallback chain rather than a single query.
//! Extraction is split from fetching so the parsing half runs on static
//! fixtures in tests.

use scraper::{Html, Selector};
use std::error::Error;
use std::time::Duration;
use tracing::{debug, instrument};

/// Body container candidates, tried in order. The first two cover Naver's
/// own article viewer; the rest are common container classes on outlet
/// sites that serve their original markup.
const BODY_SELECTORS: &[&str] = &[
    "#dic_area",
    "#newsct_article",
    ".newsct_article",
    "#articleBodyContents",
    "#newsEndContents",
    ".article_body",
];

/// Metadata tag carrying the publication timestamp.
const DATE_META_SELECTOR: &str = r#"meta[property="article:published_time"]"#;

/// Per-article request timeout.
const ARTICLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetch a single article page as raw HTML.
///
/// One GET with the shared client and a 5-second timeout. Errors propagate
/// to the harvester, which degrades them to an empty body and a date error
/// sentinel instead of failing the run.
#[instrument(level = "debug", skip_all, fields(%url))]
pub async fn fetch_article(client: &reqwest::Client, url: &str) -> Result<String, Box<dyn Error>> {
    let response = client.get(url).timeout(ARTICLE_TIMEOUT).send().await?;
    let html = response.text().await?;
    debug!(bytes = html.len(), "Fetched article page");
    Ok(html)
}

/// Extract the article body text from a fetched page.
///
/// Walks [`BODY_SELECTORS`] in order and returns the visible text of the
/// first container present, whitespace-joined and trimmed. When no
/// candidate matches, falls back to the visible text of the whole document.
pub fn extract_body(html: &str) -> String {
    let document = Html::parse_document(html);

    for candidate in BODY_SELECTORS {
        let selector = match Selector::parse(candidate) {
            Ok(s) => s,
            Err(_) => continue,
        };
        if let Some(element) = document.select(&selector).next() {
            return element
                .text()
                .collect::<Vec<_>>()
                .join(" ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
        }
    }

    document
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extract the publication date from a fetched page.
///
/// Returns the first 10 characters of the `article:published_time` content
/// with hyphens replaced by dots (`2024.03.05`), or `None` when the tag is
/// absent.
pub fn extract_date(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(DATE_META_SELECTOR).ok()?;
    let content = document.select(&selector).next()?.value().attr("content")?;
    Some(content.chars().take(10).collect::<String>().replace('-', "."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_body_prefers_earlier_candidate() {
        let html = r#"
            <html><body>
                <div class="article_body">later candidate</div>
                <div id="dic_area">본문  내용입니다</div>
            </body></html>
        "#;
        assert_eq!(extract_body(html), "본문 내용입니다");
    }

    #[test]
    fn test_extract_body_falls_back_to_document_text() {
        let html = "<html><body><p>fallback</p><p>text</p></body></html>";
        assert_eq!(extract_body(html), "fallback text");
    }

    #[test]
    fn test_extract_body_joins_nested_text() {
        let html = r#"<div id="newsct_article"><p>첫 문단</p><p>둘째 문단</p></div>"#;
        assert_eq!(extract_body(html), "첫 문단 둘째 문단");
    }

    #[test]
    fn test_extract_date_reformats_iso_timestamp() {
        let html = r#"
            <html><head>
                <meta property="article:published_time" content="2024-03-05T14:20:00+09:00">
            </head><body></body></html>
        "#;
        assert_eq!(extract_date(html), Some("2024.03.05".to_string()));
    }

    #[test]
    fn test_extract_date_absent_tag() {
        let html = "<html><head><title>t</title></head><body></body></html>";
        assert_eq!(extract_date(html), None);
    }

    #[test]
    fn test_extract_date_short_content_passes_through() {
        let html = r#"<meta property="article:published_time" content="2024-03">"#;
        assert_eq!(extract_date(html), Some("2024.03".to_string()));
    }
}
