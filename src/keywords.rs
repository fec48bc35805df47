//! Static keyword tables driving publisher and category tagging.
//!
//! Every table here is process-wide, read-only data. Declaration order is
//! significant: the classifiers in [`crate::classify`] resolve matches
//! first-match-wins, so reordering a table changes which label is assigned
//! when a text matches more than one entry.
//!
//! The classifiers take these tables by reference at construction, so tests
//! can substitute smaller variants without touching the canonical data.

/// Label returned when no table entry matches.
pub const CATCH_ALL: &str = "기타";

/// Chat category assigned when a message mentions delivery, checked before
/// the category table is consulted.
pub const DELIVERY_LABEL: &str = "배송";

/// Open-chat bot account whose messages are excluded from analysis.
pub const BOT_SENDER: &str = "오픈채팅봇";

/// Date column value when an article page carries no publication metadata.
pub const NO_DATE: &str = "날짜없음";

/// Date column value when the article request or parse failed outright.
pub const DATE_ERROR: &str = "날짜오류";

/// Publisher keywords searched for in news text, in reporting priority order.
///
/// The generic term 교과서 is deliberately part of the list: an article that
/// mentions textbooks without naming a publisher is still worth collecting.
pub const NEWS_PUBLISHERS: &[&str] = &[
    "천재교육",
    "천재교과서",
    "지학사",
    "벽호",
    "프린피아",
    "미래엔",
    "교과서",
    "동아출판",
];

/// Ordered topic table for news articles. Matching is plain substring search
/// over lower-cased summary+body text, which is why the MOU entry is listed
/// in lowercase.
pub const NEWS_CATEGORY_RULES: &[(&str, &[&str])] = &[
    ("후원", &["후원", "기탁"]),
    ("기부", &["기부"]),
    ("협약/MOU", &["협약", "mou"]),
    (
        "에듀테크/디지털교육",
        &[
            "에듀테크",
            "디지털교육",
            "디지털 교육",
            "ai교육",
            "ai 교육",
            "스마트교육",
            "스마트 교육",
        ],
    ),
    ("정책", &["정책"]),
    ("출판", &["출판"]),
    ("인사/채용", &["채용", "교사"]),
    ("프린트 및 인쇄", &["인쇄", "프린트"]),
    ("공급", &["공급"]),
    ("교육", &["교육"]),
    ("이벤트", &["이벤트", "사은품"]),
];

/// Substrings that mark an article body as mentioning textbooks or a
/// publishing house directly. Checked against the body only, not the
/// search-result summary.
pub const TEXTBOOK_BODY_KEYWORDS: &[&str] = &["교과서", "발행사"];

/// Ordered category table for chat messages. Delivery questions are caught
/// by [`DELIVERY_LABEL`] before this table applies.
pub const CHAT_CATEGORY_RULES: &[(&str, &[&str])] = &[
    ("주문/결제", &["주문", "결제", "입금", "구매"]),
    ("교환/반품", &["교환", "반품", "환불"]),
    ("오류/정정", &["오류", "정정", "오타"]),
    ("자료요청", &["자료", "지도서", "답지", "평가문제"]),
    ("행사/연수", &["행사", "연수", "설명회"]),
];

/// Publisher names recognized in chat messages. The membership and order
/// differ from [`NEWS_PUBLISHERS`]: chat senders name publishers directly,
/// so the generic print-shop terms are absent here.
pub const CHAT_PUBLISHERS: &[&str] = &[
    "천재교육",
    "천재교과서",
    "미래엔",
    "동아출판",
    "지학사",
    "비상교육",
];

/// School subjects recognized in chat messages.
pub const SUBJECTS: &[&str] = &[
    "국어",
    "수학",
    "영어",
    "과학",
    "사회",
    "역사",
    "도덕",
    "음악",
    "미술",
    "체육",
    "기술가정",
    "정보",
];

/// Phrases that flag a chat message as a complaint.
pub const COMPLAINT_PHRASES: &[&str] = &[
    "안 왔",
    "안왔",
    "아직",
    "늦",
    "지연",
    "누락",
    "파손",
    "불만",
    "잘못",
    "환불",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_unique() {
        let mut labels: Vec<&str> = NEWS_CATEGORY_RULES.iter().map(|(l, _)| *l).collect();
        labels.extend(CHAT_CATEGORY_RULES.iter().map(|(l, _)| *l));
        let count = labels.len();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), count);
    }

    #[test]
    fn test_catch_all_not_a_table_label() {
        assert!(NEWS_CATEGORY_RULES.iter().all(|(l, _)| *l != CATCH_ALL));
        assert!(CHAT_CATEGORY_RULES.iter().all(|(l, _)| *l != CATCH_ALL));
        assert!(!NEWS_PUBLISHERS.contains(&CATCH_ALL));
    }

    #[test]
    fn test_no_empty_keywords() {
        for (_, kws) in NEWS_CATEGORY_RULES.iter().chain(CHAT_CATEGORY_RULES) {
            assert!(kws.iter().all(|k| !k.is_empty()));
        }
        assert!(COMPLAINT_PHRASES.iter().all(|p| !p.is_empty()));
    }
}
