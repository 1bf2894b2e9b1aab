//! Saved reading files and magic squares.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::info;
use qg_oracle::{MagicSquare, render_plain};

use crate::error::ReadingResult;
use crate::reading::Reading;
use crate::render::render_reading;

/// Write `reading` as `reading_<YYYYmmdd_HHMMSS>.json` in `dir`, with a
/// `.txt` companion. Returns the JSON path.
pub fn save_reading(reading: &Reading, dir: &Path) -> ReadingResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let stem = format!("reading_{}", reading.timestamp.format("%Y%m%d_%H%M%S"));
    let json_path = dir.join(format!("{stem}.json"));
    fs::write(&json_path, serde_json::to_string_pretty(reading)?)?;
    fs::write(dir.join(format!("{stem}.txt")), render_reading(reading))?;
    info!("saved reading to {}", json_path.display());
    Ok(json_path)
}

/// Write a square as plain rows under a short header. Returns the path.
pub fn save_square(square: &MagicSquare, title: &str, dir: &Path) -> ReadingResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let now = Utc::now();
    let path = dir.join(format!(
        "{}_{}.txt",
        title.replace(' ', "_"),
        now.format("%Y%m%d_%H%M%S")
    ));
    let mut out = format!("Magic Square: {title}\n");
    out.push_str(&format!("Generated: {}\n", now.to_rfc3339()));
    out.push_str(&format!("{}\n\n", "=".repeat(40)));
    out.push_str(&render_plain(square));
    fs::write(&path, out)?;
    info!("saved square to {}", path.display());
    Ok(path)
}

/// One reading as CSV: a row per system.
pub fn reading_csv(reading: &Reading) -> ReadingResult<String> {
    let figure = &reading.figure;
    let hexagram = &reading.iching.primary;
    let card = &reading.tarot.card;
    let jafr = &reading.talisman.jafr;
    let figure_planet = figure.planet.to_string();
    let talisman_planet = reading.talisman.planet.to_string();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["System", "Name", "Meaning", "Element", "Planet"])?;
    writer.write_record([
        "Geomancy",
        figure.name.as_str(),
        figure.meaning.as_str(),
        figure.element.as_str(),
        figure_planet.as_str(),
    ])?;
    writer.write_record([
        "I Ching",
        hexagram.english.as_str(),
        hexagram.judgment.as_str(),
        hexagram.element.as_str(),
        "",
    ])?;
    writer.write_record([
        "Tarot",
        card.name.as_str(),
        card.meaning.as_str(),
        card.element.as_str(),
        card.planet.as_str(),
    ])?;
    writer.write_record([
        "Jafr",
        jafr.letter.as_str(),
        jafr.purpose.as_str(),
        "",
        talisman_planet.as_str(),
    ])?;
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::{ReadingRequest, run_reading};
    use crate::tables::Correspondences;
    use chrono::TimeZone;
    use qg_oracle::{Planet, ScriptedSource, planet_square};

    fn sample() -> Reading {
        let tables = Correspondences::default();
        let mut src = ScriptedSource::constant_bit(true);
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 15).unwrap();
        run_reading(&tables, &ReadingRequest::new("saved"), &at, &mut src)
    }

    #[test]
    fn reading_files_are_named_by_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let reading = sample();
        let path = save_reading(&reading, dir.path()).unwrap();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("reading_20240305_093015.json")
        );
        let back: Reading = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, reading);
        let text = fs::read_to_string(dir.path().join("reading_20240305_093015.txt")).unwrap();
        assert!(text.contains("Query: saved"));
    }

    #[test]
    fn square_file_has_plain_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_square(&planet_square(Planet::Saturn), "Saturn square", dir.path()).unwrap();
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        assert!(name.starts_with("Saturn_square_"));
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Magic Square: Saturn square\n"));
        assert!(text.contains("  4   9   2"));
    }

    #[test]
    fn csv_has_a_row_per_system() {
        let csv = reading_csv(&sample()).unwrap();
        let rows: Vec<&str> = csv.lines().collect();
        assert_eq!(rows[0], "System,Name,Meaning,Element,Planet");
        assert_eq!(rows.len(), 5);
        assert!(rows[1].starts_with("Geomancy,Via,"));
        assert!(rows[2].starts_with("I Ching,The Creative,"));
    }
}
