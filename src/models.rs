//! Data models for harvested news results and analyzed chat messages.
//!
//! This module defines the row types exported to CSV plus the run summaries
//! that account for every skipped item:
//! - [`NewsResult`]: one tagged search hit, produced by the harvester
//! - [`ChatMessage`]: one tagged transcript line, produced by the chat parser
//! - [`RunSummary`] / [`ChatRunSummary`]: kept/skipped counters per run
//!
//! The CSV column names are fixed by the downstream spreadsheet workflow,
//! hence the Korean `#[serde(rename)]` attributes. Yes/no columns render as
//! `O`/`X` to match that workflow.

use chrono::{NaiveDate, NaiveTime};
use serde::{Serialize, Serializer};

/// A deduplicated news search hit, tagged with publisher and topic.
///
/// Immutable once built; one harvest run collects these in keyword order,
/// preserving the order results appeared on the search pages.
#[derive(Debug, Clone, Serialize)]
pub struct NewsResult {
    /// Publisher tag: the first publisher keyword found in the text, or 기타.
    #[serde(rename = "출판사명")]
    pub publisher: String,
    /// Topic category from the news category table, or 기타.
    #[serde(rename = "카테고리")]
    pub category: String,
    /// Publication date as `YYYY.MM.DD`, or a sentinel when unavailable.
    #[serde(rename = "날짜")]
    pub date: String,
    /// Article headline from the search result.
    #[serde(rename = "제목")]
    pub title: String,
    /// Detail-page URL; unique within a run.
    #[serde(rename = "URL")]
    pub url: String,
    /// Search-result summary text; unique within a run.
    #[serde(rename = "요약")]
    pub summary: String,
    /// Outlet name shown on the search result.
    #[serde(rename = "언론사")]
    pub press: String,
    /// Whether any publisher keyword appeared in summary+body.
    #[serde(rename = "내용점검", serialize_with = "ser_flag")]
    pub keyword_match: bool,
    /// Whether 교과서 or 발행사 appeared in the article body itself.
    #[serde(rename = "본문내_교과서_또는_발행사_언급", serialize_with = "ser_flag")]
    pub textbook_in_body: bool,
}

/// One parsed and tagged transcript line.
///
/// Collected in transcript order. `publisher` and `subject` are `None` when
/// the message names neither, which serializes as an empty CSV cell.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    /// Calendar date of the message.
    #[serde(rename = "날짜")]
    pub date: NaiveDate,
    /// Time of day converted to a 24-hour clock.
    #[serde(rename = "시간", serialize_with = "ser_time")]
    pub time: NaiveTime,
    /// Sender display name, trimmed.
    #[serde(rename = "보낸사람")]
    pub sender: String,
    /// Raw message text.
    #[serde(rename = "메시지")]
    pub message: String,
    /// Chat category, with delivery questions short-circuited to 배송.
    #[serde(rename = "카테고리")]
    pub category: String,
    /// First publisher named in the message, if any.
    #[serde(rename = "출판사")]
    pub publisher: Option<String>,
    /// First school subject named in the message, if any.
    #[serde(rename = "과목")]
    pub subject: Option<String>,
    /// Whether the message contains a complaint phrase.
    #[serde(rename = "불만여부", serialize_with = "ser_flag")]
    pub is_complaint: bool,
}

/// Per-run accounting for the news harvester.
///
/// The scraping loop never aborts on a bad page or result; every drop is
/// counted here so an empty output table is distinguishable from a run that
/// silently lost everything.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Search pages fetched with a success status.
    pub pages_fetched: usize,
    /// Search pages skipped after a request error or non-success status.
    pub pages_skipped: usize,
    /// Results kept in the output table.
    pub kept: usize,
    /// Results dropped because their link or summary was already seen.
    pub duplicate_skipped: usize,
    /// Result blocks dropped for missing expected markup.
    pub malformed_skipped: usize,
    /// Results dropped for an unparseable date or one outside the window.
    pub stale_skipped: usize,
    /// Article fetches that failed and degraded to an empty body.
    pub article_errors: usize,
}

impl RunSummary {
    /// Fold another keyword's summary into this one.
    pub fn merge(&mut self, other: &RunSummary) {
        self.pages_fetched += other.pages_fetched;
        self.pages_skipped += other.pages_skipped;
        self.kept += other.kept;
        self.duplicate_skipped += other.duplicate_skipped;
        self.malformed_skipped += other.malformed_skipped;
        self.stale_skipped += other.stale_skipped;
        self.article_errors += other.article_errors;
    }
}

/// Per-run accounting for the chat parser.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChatRunSummary {
    /// Input lines examined.
    pub lines: usize,
    /// Lines matching the message pattern.
    pub matched: usize,
    /// Messages kept in the output table.
    pub kept: usize,
    /// Matched lines dropped because the sender was the bot account.
    pub bot_skipped: usize,
    /// Matched lines dropped because the timestamp failed to parse.
    pub invalid_timestamp: usize,
}

/// Render a yes/no flag as `O`/`X` for the CSV export.
fn ser_flag<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "O" } else { "X" })
}

/// Render a time as `HH:MM`; seconds are never meaningful in the export.
fn ser_time<S: Serializer>(value: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.format("%H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> NewsResult {
        NewsResult {
            publisher: "천재교육".to_string(),
            category: "교육".to_string(),
            date: "2024.03.05".to_string(),
            title: "제목".to_string(),
            url: "https://news.example.com/1".to_string(),
            summary: "요약".to_string(),
            press: "예시일보".to_string(),
            keyword_match: true,
            textbook_in_body: false,
        }
    }

    #[test]
    fn test_news_result_flags_render_as_ox() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(sample_result()).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let row = out.lines().nth(1).unwrap();
        assert!(row.ends_with(",O,X"));
    }

    #[test]
    fn test_chat_message_time_renders_without_seconds() {
        let msg = ChatMessage {
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            time: NaiveTime::from_hms_opt(14, 15, 0).unwrap(),
            sender: "김선생".to_string(),
            message: "배송 문의".to_string(),
            category: "배송".to_string(),
            publisher: None,
            subject: None,
            is_complaint: false,
        };
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(&msg).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert!(out.contains("2024-03-05,14:15,"));
    }

    #[test]
    fn test_run_summary_merge_adds_counters() {
        let mut a = RunSummary {
            pages_fetched: 2,
            kept: 5,
            duplicate_skipped: 1,
            ..RunSummary::default()
        };
        let b = RunSummary {
            pages_fetched: 3,
            pages_skipped: 1,
            kept: 4,
            stale_skipped: 2,
            ..RunSummary::default()
        };
        a.merge(&b);
        assert_eq!(a.pages_fetched, 5);
        assert_eq!(a.pages_skipped, 1);
        assert_eq!(a.kept, 9);
        assert_eq!(a.duplicate_skipped, 1);
        assert_eq!(a.stale_skipped, 2);
    }
}
