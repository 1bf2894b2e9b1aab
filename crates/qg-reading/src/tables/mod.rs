//! Correspondence tables the draws resolve against.
//!
//! Each table loads from `<dir>/<name>.json` when the file exists and falls
//! back to the built-in data otherwise. A file that exists but does not
//! parse is reported with a warning and replaced by the built-in data.

pub mod geomancy;
pub mod hexagrams;
pub mod jafr;
pub mod planets;
pub mod tarot;

use std::path::Path;

use log::{debug, info, warn};
use serde::de::DeserializeOwned;

pub use geomancy::{GeomancyTable, GeomanticFigure};
pub use hexagrams::{HexagramRecord, HexagramTable};
pub use jafr::{JafrRecord, JafrTable};
pub use tarot::{Suit, TarotCard, TarotDeck};

/// All correspondence tables for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Correspondences {
    /// The 64 hexagrams.
    pub hexagrams: HexagramTable,
    /// The 16 geomantic figures.
    pub geomancy: GeomancyTable,
    /// The tarot deck.
    pub tarot: TarotDeck,
    /// Jafr records by figure name.
    pub jafr: JafrTable,
}

/// Where a table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSource {
    /// Read from a file.
    File,
    /// No file; built-in data.
    Default,
    /// File present but unreadable; built-in data.
    Fallback,
}

fn load_table<T: DeserializeOwned + Default>(dir: &Path, name: &str) -> (T, TableSource) {
    let path = dir.join(format!("{name}.json"));
    if !path.exists() {
        debug!("{} not found, using built-in {name} table", path.display());
        return (T::default(), TableSource::Default);
    }
    let parsed = std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()));
    match parsed {
        Ok(table) => {
            info!("loaded {name} table from {}", path.display());
            (table, TableSource::File)
        }
        Err(e) => {
            warn!("failed to load {}: {e}; using built-in {name} table", path.display());
            (T::default(), TableSource::Fallback)
        }
    }
}

impl Correspondences {
    /// Load every table from `dir`, falling back per table.
    pub fn load(dir: &Path) -> Self {
        Self::load_with_sources(dir).0
    }

    /// Load every table and report where each came from, in the order
    /// hexagrams, geomancy, tarot, jafr.
    pub fn load_with_sources(dir: &Path) -> (Self, [TableSource; 4]) {
        let (hexagrams, s1) = load_table(dir, "iching");
        let (geomancy, s2) = load_table(dir, "geomancy");
        let (tarot, s3) = load_table(dir, "tarot");
        let (jafr, s4) = load_table(dir, "jafr");
        let tables = Self {
            hexagrams,
            geomancy,
            tarot,
            jafr,
        };
        (tables, [s1, s2, s3, s4])
    }
}
