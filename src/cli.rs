//! Command-line interface definitions.
//!
//! This module defines the CLI arguments and subcommands using the `clap`
//! crate. The binary has two independent modes: harvesting news search
//! results and analyzing an exported chat transcript.

use clap::{Parser, Subcommand};

/// Command-line arguments for the publisher monitoring tool.
///
/// # Examples
///
/// ```sh
/// # Harvest the built-in publisher keyword set, 10 pages per keyword
/// edupress_watch news
///
/// # Harvest one keyword across 3 pages into a chosen file
/// edupress_watch news -k 천재교육 -p 3 -o chunjae.csv
///
/// # Analyze an exported KakaoTalk transcript
/// edupress_watch chat -i KakaoTalkChats.txt
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Harvest Naver News search results for publisher keywords
    News {
        /// Keyword to search for; repeatable. Defaults to the built-in
        /// publisher keyword list.
        #[arg(short, long)]
        keyword: Vec<String>,

        /// Number of search pages to fetch per keyword
        #[arg(short, long, default_value_t = 10)]
        pages: usize,

        /// Output CSV path
        #[arg(short, long, default_value = "news_results.csv")]
        output: String,
    },

    /// Analyze an exported KakaoTalk transcript
    Chat {
        /// Path to the exported transcript text file
        #[arg(short, long)]
        input: String,

        /// Output CSV path
        #[arg(short, long, default_value = "chat_analysis.csv")]
        output: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_defaults() {
        let cli = Cli::parse_from(["edupress_watch", "news"]);
        match cli.command {
            Command::News {
                keyword,
                pages,
                output,
            } => {
                assert!(keyword.is_empty());
                assert_eq!(pages, 10);
                assert_eq!(output, "news_results.csv");
            }
            Command::Chat { .. } => panic!("expected news subcommand"),
        }
    }

    #[test]
    fn test_news_repeatable_keywords() {
        let cli = Cli::parse_from([
            "edupress_watch",
            "news",
            "-k",
            "천재교육",
            "-k",
            "지학사",
            "-p",
            "3",
        ]);
        match cli.command {
            Command::News { keyword, pages, .. } => {
                assert_eq!(keyword, vec!["천재교육", "지학사"]);
                assert_eq!(pages, 3);
            }
            Command::Chat { .. } => panic!("expected news subcommand"),
        }
    }

    #[test]
    fn test_chat_arguments() {
        let cli = Cli::parse_from([
            "edupress_watch",
            "chat",
            "--input",
            "KakaoTalkChats.txt",
            "--output",
            "out.csv",
        ]);
        match cli.command {
            Command::Chat { input, output } => {
                assert_eq!(input, "KakaoTalkChats.txt");
                assert_eq!(output, "out.csv");
            }
            Command::News { .. } => panic!("expected chat subcommand"),
        }
    }
}
