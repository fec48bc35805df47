//! KakaoTalk transcript parsing and tagging.
//!
//! Exported KakaoTalk chats are plain text where each message line starts
//! with a localized timestamp:
//!
//! ```text
//! 2024년 3월 5일 오후 2:15, 김선생 : 아직 지도서가 안 왔어요
//! ```
//!
//! One pattern is applied per line. Lines that do not match, including the
//! continuation lines of multi-line messages, are ignored but counted.
//! Matched lines are converted to [`ChatMessage`] rows tagged by the
//! [`ChatClassifier`], preserving transcript order.

use crate::classify::ChatClassifier;
use crate::keywords::BOT_SENDER;
use crate::models::{ChatMessage, ChatRunSummary};
use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, instrument};

/// Message line pattern: date, 오전/오후 marker, 12-hour time, sender, text.
static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{4})년 (\d{1,2})월 (\d{1,2})일 (오전|오후) (\d{1,2}):(\d{2}), ([^:]+) : (.+)")
        .unwrap()
});

/// Convert the captured date and 12-hour clock fields to calendar types.
///
/// 오후 adds twelve hours except for the 12 o'clock hour itself; 오전 12
/// is midnight. Out-of-range fields (a 13th month, a 25th hour) fail here
/// and the caller drops the line.
fn parse_timestamp(
    year: &str,
    month: &str,
    day: &str,
    meridiem: &str,
    hour: &str,
    minute: &str,
) -> Option<(NaiveDate, NaiveTime)> {
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;

    let hour = match meridiem {
        "오후" => (hour % 12) + 12,
        _ => hour % 12,
    };

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some((date, time))
}

/// Parse a whole transcript into tagged message rows.
///
/// Returns the rows in the order their lines appear in the source text,
/// along with the accounting of matched, dropped, and kept lines. Messages
/// from the bot account are excluded regardless of content.
#[instrument(level = "info", skip_all)]
pub fn parse_transcript(
    text: &str,
    classifier: &ChatClassifier<'_>,
) -> (Vec<ChatMessage>, ChatRunSummary) {
    let mut messages = Vec::new();
    let mut summary = ChatRunSummary::default();

    for line in text.lines() {
        summary.lines += 1;
        let Some(caps) = LINE_PATTERN.captures(line) else {
            continue;
        };
        summary.matched += 1;

        let sender = caps[7].trim().to_string();
        if sender == BOT_SENDER {
            summary.bot_skipped += 1;
            continue;
        }

        let Some((date, time)) =
            parse_timestamp(&caps[1], &caps[2], &caps[3], &caps[4], &caps[5], &caps[6])
        else {
            summary.invalid_timestamp += 1;
            debug!(line, "Dropping line with invalid timestamp");
            continue;
        };

        let message = caps[8].to_string();
        messages.push(ChatMessage {
            date,
            time,
            sender,
            category: classifier.category(&message).to_string(),
            publisher: classifier.publisher(&message).map(str::to_string),
            subject: classifier.subject(&message).map(str::to_string),
            is_complaint: classifier.is_complaint(&message),
            message,
        });
        summary.kept += 1;
    }

    info!(
        lines = summary.lines,
        matched = summary.matched,
        kept = summary.kept,
        bot_skipped = summary.bot_skipped,
        invalid_timestamp = summary.invalid_timestamp,
        "Transcript parsed"
    );
    (messages, summary)
}
