//! # edupress_watch
//!
//! A data-collection and tagging tool for textbook-publisher coverage.
//! It has two independent functions, selected by subcommand:
//!
//! - `news`: scrape Naver News search results for a fixed set of publisher
//!   keywords, fetch each article's body and publication date, tag every
//!   result with a publisher and topic category from static keyword tables,
//!   and export the table as CSV
//! - `chat`: parse an exported KakaoTalk transcript into structured rows
//!   and tag each message with a category, publisher, school subject, and
//!   complaint flag, exported as CSV
//!
//! ## Usage
//!
//! ```sh
//! edupress_watch news -p 5 -o news_results.csv
//! edupress_watch chat -i KakaoTalkChats.txt -o chat_analysis.csv
//! ```
//!
//! ## Architecture
//!
//! Both pipelines are straight-line: fetch/read input, extract rows,
//! classify each row against the keyword tables, write one CSV. HTTP
//! requests are issued one at a time with a fixed delay between search
//! pages, and per-item failures degrade to counted skips rather than
//! aborting the run.

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod chat;
mod classify;
mod cli;
mod keywords;
mod models;
mod outputs;
mod scrapers;
mod utils;

use classify::{ChatClassifier, NewsClassifier};
use cli::{Cli, Command};
use models::RunSummary;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("edupress_watch starting up");

    let args = Cli::parse();
    match args.command {
        Command::News {
            keyword,
            pages,
            output,
        } => run_news(keyword, pages, &output).await?,
        Command::Chat { input, output } => run_chat(&input, &output).await?,
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}

/// Harvest every requested keyword sequentially and export one news table.
#[instrument(level = "info", skip_all, fields(pages, output = %output))]
async fn run_news(keywords: Vec<String>, pages: usize, output: &str) -> Result<(), Box<dyn Error>> {
    let keywords: Vec<String> = if keywords.is_empty() {
        keywords::NEWS_PUBLISHERS
            .iter()
            .map(|kw| kw.to_string())
            .collect()
    } else {
        keywords
    };
    info!(keywords = keywords.len(), pages, "Starting news harvest");

    let client = scrapers::http_client()?;
    let classifier = NewsClassifier::default();

    let mut table = Vec::new();
    let mut totals = RunSummary::default();
    for keyword in &keywords {
        let (results, summary) = scrapers::naver::harvest(&client, &classifier, keyword, pages).await;
        table.extend(results);
        totals.merge(&summary);
    }

    outputs::csv::write_news_csv(output, &table)?;

    info!(
        kept = totals.kept,
        pages_fetched = totals.pages_fetched,
        pages_skipped = totals.pages_skipped,
        duplicates = totals.duplicate_skipped,
        malformed = totals.malformed_skipped,
        stale = totals.stale_skipped,
        article_errors = totals.article_errors,
        "News harvest complete"
    );
    if totals.kept == 0 {
        // An empty table with fetched pages usually means Naver changed its
        // result markup or is serving the bot page.
        tracing::warn!(
            pages_fetched = totals.pages_fetched,
            "Harvest produced no rows"
        );
    }
    Ok(())
}

/// Parse one transcript file and export the chat analysis table.
#[instrument(level = "info", skip_all, fields(input = %input, output = %output))]
async fn run_chat(input: &str, output: &str) -> Result<(), Box<dyn Error>> {
    let text = tokio::fs::read_to_string(input).await?;
    debug!(bytes = text.len(), "Read transcript");

    let classifier = ChatClassifier::default();
    let (messages, summary) = chat::parse_transcript(&text, &classifier);

    outputs::csv::write_chat_csv(output, &messages)?;

    info!(
        lines = summary.lines,
        matched = summary.matched,
        kept = summary.kept,
        bot_skipped = summary.bot_skipped,
        invalid_timestamp = summary.invalid_timestamp,
        "Chat analysis complete"
    );
    Ok(())
}
