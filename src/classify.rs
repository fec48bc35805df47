//! Rule-based classifiers assigning a single label per text.
//!
//! Both classifiers scan an ordered table of `(label, keywords)` pairs and
//! return the label of the first entry with any keyword present as a
//! substring. Matching is substring search, not tokenization: a keyword
//! embedded in a longer word still counts. Every classification is total,
//! falling back to 기타 when nothing matches.
//!
//! Tables are injected at construction so tests can exercise small variants;
//! `Default` wires up the canonical tables from [`crate::keywords`].

use crate::keywords::{
    CATCH_ALL, CHAT_CATEGORY_RULES, CHAT_PUBLISHERS, COMPLAINT_PHRASES, DELIVERY_LABEL,
    NEWS_CATEGORY_RULES, NEWS_PUBLISHERS, SUBJECTS, TEXTBOOK_BODY_KEYWORDS,
};

/// First keyword from `keywords` found in `text`, if any.
fn first_match<'a>(text: &str, keywords: &'a [&'a str]) -> Option<&'a str> {
    keywords.iter().copied().find(|kw| text.contains(kw))
}

/// First label from the ordered `rules` table with a keyword present in `text`.
fn first_label<'a>(text: &str, rules: &'a [(&'a str, &'a [&'a str])]) -> Option<&'a str> {
    rules
        .iter()
        .find(|(_, kws)| kws.iter().any(|kw| text.contains(kw)))
        .map(|(label, _)| *label)
}

/// Tags news text with a publisher and a topic category.
///
/// Callers are expected to pass lower-cased text: the scraping pipeline
/// classifies `lower(summary + " " + body)`, and the category table's latin
/// entries (such as `mou`) rely on that.
#[derive(Debug, Clone)]
pub struct NewsClassifier<'a> {
    categories: &'a [(&'a str, &'a [&'a str])],
    publishers: &'a [&'a str],
    body_keywords: &'a [&'a str],
}

impl Default for NewsClassifier<'static> {
    fn default() -> Self {
        Self::new(NEWS_CATEGORY_RULES, NEWS_PUBLISHERS, TEXTBOOK_BODY_KEYWORDS)
    }
}

impl<'a> NewsClassifier<'a> {
    pub fn new(
        categories: &'a [(&'a str, &'a [&'a str])],
        publishers: &'a [&'a str],
        body_keywords: &'a [&'a str],
    ) -> Self {
        Self {
            categories,
            publishers,
            body_keywords,
        }
    }

    /// Topic category for the article text, 기타 when no entry matches.
    pub fn category(&self, text: &str) -> &'a str {
        first_label(text, self.categories).unwrap_or(CATCH_ALL)
    }

    /// Publisher tag for the article text: the earliest-declared publisher
    /// keyword present, 기타 when none appears.
    pub fn publisher(&self, text: &str) -> &'a str {
        first_match(text, self.publishers).unwrap_or(CATCH_ALL)
    }

    /// Whether any publisher keyword appears at all, independent of which
    /// one [`Self::publisher`] reports.
    pub fn mentions_publisher(&self, text: &str) -> bool {
        first_match(text, self.publishers).is_some()
    }

    /// Whether the article body itself mentions textbooks or a publishing
    /// house. Checked against the body only; the summary does not count.
    pub fn mentions_textbook(&self, body: &str) -> bool {
        first_match(body, self.body_keywords).is_some()
    }
}

/// Tags chat messages with a category, publisher, subject, and complaint flag.
#[derive(Debug, Clone)]
pub struct ChatClassifier<'a> {
    categories: &'a [(&'a str, &'a [&'a str])],
    publishers: &'a [&'a str],
    subjects: &'a [&'a str],
    complaint_phrases: &'a [&'a str],
}

impl Default for ChatClassifier<'static> {
    fn default() -> Self {
        Self::new(
            CHAT_CATEGORY_RULES,
            CHAT_PUBLISHERS,
            SUBJECTS,
            COMPLAINT_PHRASES,
        )
    }
}

impl<'a> ChatClassifier<'a> {
    pub fn new(
        categories: &'a [(&'a str, &'a [&'a str])],
        publishers: &'a [&'a str],
        subjects: &'a [&'a str],
        complaint_phrases: &'a [&'a str],
    ) -> Self {
        Self {
            categories,
            publishers,
            subjects,
            complaint_phrases,
        }
    }

    /// Chat category for the message.
    ///
    /// Delivery questions dominate the support channel, so a literal 배송
    /// mention wins before the category table is consulted at all.
    pub fn category(&self, message: &str) -> &'a str {
        if message.contains(DELIVERY_LABEL) {
            return DELIVERY_LABEL;
        }
        first_label(message, self.categories).unwrap_or(CATCH_ALL)
    }

    /// First publisher named in the message, `None` when absent.
    pub fn publisher(&self, message: &str) -> Option<&'a str> {
        first_match(message, self.publishers)
    }

    /// First school subject named in the message, `None` when absent.
    pub fn subject(&self, message: &str) -> Option<&'a str> {
        first_match(message, self.subjects)
    }

    /// Whether any complaint phrase appears in the message.
    pub fn is_complaint(&self, message: &str) -> bool {
        first_match(message, self.complaint_phrases).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earlier_category_wins_on_double_match() {
        // 후원 is declared before 기부; text mentioning both gets 후원.
        let classifier = NewsClassifier::default();
        assert_eq!(classifier.category("지역 아동에 후원과 기부를 약속"), "후원");
        assert_eq!(classifier.category("교과서 기부 행사와 교육 지원"), "기부");
    }

    #[test]
    fn test_reordered_table_changes_winner() {
        let reversed: &[(&str, &[&str])] = &[("기부", &["기부"]), ("후원", &["후원", "기탁"])];
        let classifier = NewsClassifier::new(reversed, NEWS_PUBLISHERS, TEXTBOOK_BODY_KEYWORDS);
        assert_eq!(classifier.category("후원과 기부를 약속"), "기부");
    }

    #[test]
    fn test_empty_text_gets_catch_all_everything() {
        let news = NewsClassifier::default();
        assert_eq!(news.category(""), "기타");
        assert_eq!(news.publisher(""), "기타");
        assert!(!news.mentions_publisher(""));
        assert!(!news.mentions_textbook(""));

        let chat = ChatClassifier::default();
        assert_eq!(chat.category(""), "기타");
        assert_eq!(chat.publisher(""), None);
        assert_eq!(chat.subject(""), None);
        assert!(!chat.is_complaint(""));
    }

    #[test]
    fn test_substring_match_inside_longer_word() {
        let classifier = NewsClassifier::default();
        // 교육 embedded in 디지털교육업계 still matches the 에듀테크 entry
        // before the bare 교육 entry further down.
        assert_eq!(
            classifier.category("디지털교육업계 소식"),
            "에듀테크/디지털교육"
        );
        assert_eq!(classifier.category("교육계 소식"), "교육");
    }

    #[test]
    fn test_mou_requires_lowercased_input() {
        let classifier = NewsClassifier::default();
        assert_eq!(classifier.category("양사 mou 체결"), "협약/MOU");
    }

    #[test]
    fn test_publisher_first_match_and_flag_independent() {
        let classifier = NewsClassifier::default();
        let text = "미래엔과 동아출판이 함께";
        assert_eq!(classifier.publisher(text), "미래엔");
        assert!(classifier.mentions_publisher(text));
        // 교과서 alone still tags and flags: the generic term is in the list.
        assert_eq!(classifier.publisher("새 교과서 배포"), "교과서");
    }

    #[test]
    fn test_textbook_flag_is_body_only_by_contract() {
        let classifier = NewsClassifier::default();
        assert!(classifier.mentions_textbook("개정 교과서 안내"));
        assert!(classifier.mentions_textbook("발행사 공지"));
        assert!(!classifier.mentions_textbook("출판 업계 소식"));
    }

    #[test]
    fn test_delivery_short_circuits_category_table() {
        let classifier = ChatClassifier::default();
        // 주문 would match 주문/결제, but the 배송 mention wins first.
        assert_eq!(classifier.category("주문한 책 배송 확인 부탁드려요"), "배송");
        assert_eq!(classifier.category("주문 내역 확인 부탁드려요"), "주문/결제");
        assert_eq!(classifier.category("안녕하세요"), "기타");
    }

    #[test]
    fn test_complaint_and_subject_extraction() {
        let classifier = ChatClassifier::default();
        let message = "수학 답지가 잘못 왔어요";
        assert!(classifier.is_complaint(message));
        assert_eq!(classifier.subject(message), Some("수학"));

        let calm = "연수 일정 공유드립니다";
        assert!(!classifier.is_complaint(calm));
        assert_eq!(classifier.subject(calm), None);
    }

    #[test]
    fn test_chat_publisher_list_is_independent_of_news_list() {
        let classifier = ChatClassifier::default();
        assert_eq!(classifier.publisher("비상교육 교재 문의"), Some("비상교육"));
        // 벽호 is only a news-side keyword.
        assert_eq!(classifier.publisher("벽호 관련 문의"), None);
    }

    #[test]
    fn test_classification_total_over_table() {
        let classifier = NewsClassifier::default();
        let labels: Vec<&str> = NEWS_CATEGORY_RULES.iter().map(|(l, _)| *l).collect();
        for (_, kws) in NEWS_CATEGORY_RULES {
            for kw in kws.iter() {
                let label = classifier.category(kw);
                assert!(labels.contains(&label));
            }
        }
    }
}
