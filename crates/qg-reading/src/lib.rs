//! Full readings for the Quadruple Goddess divination system.
//!
//! Combines a geomantic figure, an I Ching consultation, a tarot card, the
//! current planetary hour, and a Jafr talisman into a single [`Reading`]
//! with synthesis text at one of three depths. Also holds the
//! correspondence tables the draws resolve against and the on-disk reading
//! history with its exports.

pub mod config;
pub mod draw;
pub mod error;
pub mod history;
pub mod hours;
pub mod numerology;
pub mod reading;
pub mod render;
pub mod synthesis;
pub mod tables;

pub use config::ReadingConfig;
pub use error::{ReadingError, ReadingResult};
pub use history::{ExportFormat, HistoryEntry, ReadingHistory};
pub use reading::{Depth, Perspective, Reading, ReadingRequest, run_reading};
pub use tables::Correspondences;
