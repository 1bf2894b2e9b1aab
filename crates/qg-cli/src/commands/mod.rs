pub mod cast;
pub mod export;
pub mod geomancy;
pub mod history;
pub mod hours;
pub mod jafr;
pub mod reading;
pub mod reference;
pub mod square;
pub mod tarot;

use log::debug;
use qg_reading::{Correspondences, ReadingConfig, ReadingHistory};

/// Load the correspondence tables named by the configuration.
fn load_tables(config: &ReadingConfig) -> Correspondences {
    debug!("loading tables from {}", config.tables_dir.display());
    Correspondences::load(&config.tables_dir)
}

/// Open the reading history in the configured data directory.
fn open_history(config: &ReadingConfig) -> ReadingHistory {
    debug!("opening history in {}", config.data_dir.display());
    ReadingHistory::open(&config.data_dir)
}

/// Shorten text for table cells.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
