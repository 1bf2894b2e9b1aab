//! History storage and export.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::Serialize;

use super::entry::HistoryEntry;
use crate::error::{ReadingError, ReadingResult};
use crate::reading::Reading;

/// File name of the history inside the data directory.
pub const HISTORY_FILE: &str = "history.json";

/// Archive export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// JSON with metadata.
    Json,
    /// Plain text archive.
    Text,
    /// One CSV row per reading.
    Csv,
}

impl ExportFormat {
    /// Parse a format name.
    pub fn parse(s: &str) -> ReadingResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            other => Err(ReadingError::UnknownExportFormat(other.to_string())),
        }
    }

    /// Usual file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "txt",
            Self::Csv => "csv",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Text => write!(f, "text"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

#[derive(Serialize)]
struct ExportMetadata {
    export_date: DateTime<Utc>,
    total_readings: usize,
    system: &'static str,
}

#[derive(Serialize)]
struct JsonExport<'a> {
    metadata: ExportMetadata,
    readings: &'a [HistoryEntry],
}

/// A chronological, file-backed list of past readings.
#[derive(Debug, Clone)]
pub struct ReadingHistory {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl ReadingHistory {
    /// An empty history that will be stored at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
        }
    }

    /// Load `history.json` from `data_dir`.
    ///
    /// A missing file gives an empty history; so does a corrupt one, with a
    /// warning.
    pub fn open(data_dir: &Path) -> Self {
        let path = data_dir.join(HISTORY_FILE);
        let entries = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<Vec<HistoryEntry>>(&text) {
                Ok(entries) => {
                    debug!("loaded {} history entries from {}", entries.len(), path.display());
                    entries
                }
                Err(e) => {
                    warn!("history at {} is unreadable ({e}); starting empty", path.display());
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };
        Self { path, entries }
    }

    /// Where the history is stored.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the history to disk, creating its directory if needed.
    pub fn save(&self) -> ReadingResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.entries)?)?;
        info!(
            "saved {} history entries to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Record a reading and return the new entry's id.
    pub fn add(&mut self, reading: &Reading, filename: impl Into<String>) -> u32 {
        let id = self.entries.last().map_or(1, |e| e.id + 1);
        self.entries
            .push(HistoryEntry::from_reading(id, reading, filename));
        id
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The last `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Entries whose query, figure, or summary contains `keyword`.
    pub fn search(&self, keyword: &str) -> Vec<&HistoryEntry> {
        self.entries.iter().filter(|e| e.matches(keyword)).collect()
    }

    /// The entry with `id`.
    pub fn get(&self, id: u32) -> ReadingResult<&HistoryEntry> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .ok_or(ReadingError::ReadingNotFound(id))
    }

    /// JSON export with metadata.
    pub fn export_json(&self) -> ReadingResult<String> {
        let export = JsonExport {
            metadata: ExportMetadata {
                export_date: Utc::now(),
                total_readings: self.entries.len(),
                system: "quadruple.goddess",
            },
            readings: &self.entries,
        };
        Ok(serde_json::to_string_pretty(&export)?)
    }

    /// Plain text archive.
    pub fn export_text(&self) -> String {
        let rule = "=".repeat(60);
        let mut out = format!("{rule}\nQUADRUPLE GODDESS READING ARCHIVE\n");
        out.push_str(&format!(
            "Export Date: {}\n",
            Utc::now().format("%Y-%m-%d %H:%M:%S")
        ));
        out.push_str(&format!("Total Readings: {}\n{rule}\n\n", self.entries.len()));
        for entry in &self.entries {
            out.push_str(&format!("READING #{}\n", entry.id));
            out.push_str(&format!(
                "Date: {}\n",
                entry.timestamp.format("%Y-%m-%d %H:%M:%S")
            ));
            out.push_str(&format!("Query: {}\n", entry.query));
            out.push_str(&format!("Summary: {}\n", entry.summary));
            if !entry.filename.is_empty() {
                out.push_str(&format!("File: {}\n", entry.filename));
            }
            out.push_str(&format!("{}\n\n", "-".repeat(40)));
        }
        out
    }

    /// CSV with a header and one row per reading.
    pub fn export_csv(&self) -> ReadingResult<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for entry in &self.entries {
            writer.serialize(entry)?;
        }
        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Render in `format`.
    pub fn export_string(&self, format: ExportFormat) -> ReadingResult<String> {
        match format {
            ExportFormat::Json => self.export_json(),
            ExportFormat::Text => Ok(self.export_text()),
            ExportFormat::Csv => self.export_csv(),
        }
    }

    /// Render in `format` and write to `path`.
    pub fn export(&self, format: ExportFormat, path: &Path) -> ReadingResult<()> {
        let content = self.export_string(format)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        info!("exported {} readings as {format} to {}", self.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::{ReadingRequest, run_reading};
    use crate::tables::Correspondences;
    use chrono::TimeZone;
    use qg_oracle::ScriptedSource;

    fn reading(query: &str, heads: bool, minute: u32) -> Reading {
        let tables = Correspondences::default();
        let mut src = ScriptedSource::constant_bit(heads);
        let at = Utc.with_ymd_and_hms(2024, 1, 7, 12, minute, 0).unwrap();
        run_reading(&tables, &ReadingRequest::new(query), &at, &mut src)
    }

    fn history() -> ReadingHistory {
        let mut h = ReadingHistory::new("unused/history.json");
        h.add(&reading("Career move", true, 0), "reading_a.json");
        h.add(&reading("Love life", false, 1), "");
        h.add(&reading("career again", true, 2), "reading_c.json");
        h
    }

    #[test]
    fn ids_are_sequential() {
        let h = history();
        let ids: Vec<u32> = h.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(h.get(2).unwrap().query, "Love life");
        assert!(matches!(h.get(9), Err(ReadingError::ReadingNotFound(9))));
    }

    #[test]
    fn recent_keeps_newest() {
        let h = history();
        let recent = h.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[1].id, 3);
        assert_eq!(h.recent(10).len(), 3);
    }

    #[test]
    fn search_ignores_case_and_covers_figure() {
        let h = history();
        assert_eq!(h.search("CAREER").len(), 2);
        // all tails draws Populus
        assert_eq!(h.search("populus").len(), 1);
        assert_eq!(h.search("The Creative").len(), 2);
        assert!(h.search("nothing").is_empty());
    }

    #[test]
    fn save_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut h = ReadingHistory::open(dir.path());
        assert!(h.is_empty());
        h.add(&reading("q", true, 0), "");
        h.save().unwrap();

        let reopened = ReadingHistory::open(dir.path());
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.entries()[0].geomantic, "Via");
    }

    #[test]
    fn corrupt_history_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(HISTORY_FILE), "{not json").unwrap();
        let h = ReadingHistory::open(dir.path());
        assert!(h.is_empty());
    }

    #[test]
    fn export_formats() {
        let h = history();
        let json: serde_json::Value = serde_json::from_str(&h.export_json().unwrap()).unwrap();
        assert_eq!(json["metadata"]["total_readings"], 3);
        assert_eq!(json["metadata"]["system"], "quadruple.goddess");
        assert_eq!(json["readings"][0]["geomantic"], "Via");

        let text = h.export_text();
        assert!(text.contains("QUADRUPLE GODDESS READING ARCHIVE"));
        assert!(text.contains("READING #2"));
        assert!(text.contains("File: reading_a.json"));

        let csv = h.export_csv().unwrap();
        let rows: Vec<&str> = csv.lines().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[0].starts_with("id,timestamp,query,geomantic"));
    }

    #[test]
    fn parse_formats() {
        assert_eq!(ExportFormat::parse("JSON").unwrap(), ExportFormat::Json);
        assert_eq!(ExportFormat::parse("txt").unwrap(), ExportFormat::Text);
        assert_eq!(ExportFormat::Text.extension(), "txt");
        assert!(matches!(
            ExportFormat::parse("xml"),
            Err(ReadingError::UnknownExportFormat(_))
        ));
    }

    #[test]
    fn export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("archive.csv");
        history().export(ExportFormat::Csv, &path).unwrap();
        assert!(fs::read_to_string(path).unwrap().contains("Love life"));
    }
}
