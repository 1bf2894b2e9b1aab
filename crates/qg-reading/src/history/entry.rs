//! History entry type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reading::Reading;

/// One reading recorded in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Sequential id, starting at 1.
    pub id: u32,
    /// When the reading was made.
    pub timestamp: DateTime<Utc>,
    /// The question asked.
    pub query: String,
    /// Geomantic figure name.
    pub geomantic: String,
    /// Primary hexagram name.
    pub iching: String,
    /// Tarot card name.
    pub tarot: String,
    /// Saved reading file name inside the data directory, empty when the
    /// reading was not saved.
    pub filename: String,
    /// One-line summary.
    pub summary: String,
}

impl HistoryEntry {
    /// Build an entry for a reading.
    pub fn from_reading(id: u32, reading: &Reading, filename: impl Into<String>) -> Self {
        Self {
            id,
            timestamp: reading.timestamp,
            query: reading.query.clone(),
            geomantic: reading.figure.name.clone(),
            iching: reading.iching.primary.english.clone(),
            tarot: reading.tarot.card.name.clone(),
            filename: filename.into(),
            summary: reading.summary(),
        }
    }

    /// Whether `keyword` occurs in the query, figure, or summary, ignoring case.
    pub fn matches(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        [&self.query, &self.geomantic, &self.summary]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
