//! CSV export for harvested news and analyzed chat tables.
//!
//! Headers and cell rendering come from the serde attributes on the row
//! types in [`crate::models`], so the column set here always matches what
//! the pipeline produced.

use crate::models::{ChatMessage, NewsResult};
use std::error::Error;
use tracing::{info, instrument};

/// Write the harvested news table to `path`.
#[instrument(level = "info", skip_all, fields(%path, rows = results.len()))]
pub fn write_news_csv(path: &str, results: &[NewsResult]) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in results {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!(path, rows = results.len(), "Wrote news CSV");
    Ok(())
}

/// Write the analyzed chat table to `path`.
#[instrument(level = "info", skip_all, fields(%path, rows = messages.len()))]
pub fn write_chat_csv(path: &str, messages: &[ChatMessage]) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in messages {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!(path, rows = messages.len(), "Wrote chat CSV");
    Ok(())
}
