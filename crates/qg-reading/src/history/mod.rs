//! Reading history, saved reading files, and exports.

pub mod entry;
pub mod log;
pub mod store;

pub use entry::HistoryEntry;
pub use log::{ExportFormat, ReadingHistory};
pub use store::{reading_csv, save_reading, save_square};
