//! Output generation for the two exported tables.
//!
//! The harvester and the chat parser each produce one table per run, and
//! each table is exported as a UTF-8 CSV document with a fixed header row:
//!
//! ```text
//! news_results.csv   출판사명,카테고리,날짜,제목,URL,요약,언론사,내용점검,...
//! chat_analysis.csv  날짜,시간,보낸사람,메시지,카테고리,출판사,과목,불만여부
//! ```
//!
//! Row order is preserved exactly as the pipeline produced it.

pub mod csv;
