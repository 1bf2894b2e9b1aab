use std::fs;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use log::warn;
use qg_reading::{HistoryEntry, Reading, ReadingConfig};
use qg_reading::render::render_reading;

fn print_entries(entries: &[&HistoryEntry]) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Date", "Query", "Geomancy", "I Ching", "Tarot"]);
    for entry in entries {
        let query = if entry.query.is_empty() {
            "General reading".to_string()
        } else {
            super::truncate(&entry.query, 40)
        };
        table.add_row(vec![
            entry.id.to_string(),
            entry.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            query,
            entry.geomantic.clone(),
            entry.iching.clone(),
            entry.tarot.clone(),
        ]);
    }
    println!("{table}");
}

pub fn list(config: &ReadingConfig, count: usize) -> Result<(), String> {
    let history = super::open_history(config);
    if history.is_empty() {
        println!("  No readings yet.");
        return Ok(());
    }
    let recent: Vec<&HistoryEntry> = history.recent(count).iter().collect();
    print_entries(&recent);
    println!();
    println!("  {} of {} readings", recent.len(), history.len());
    Ok(())
}

pub fn search(config: &ReadingConfig, keyword: &str) -> Result<(), String> {
    let history = super::open_history(config);
    let found = history.search(keyword);
    if found.is_empty() {
        println!("  No readings match \"{keyword}\".");
        return Ok(());
    }
    print_entries(&found);
    println!();
    println!("  {} matching readings", found.len());
    Ok(())
}

pub fn show(config: &ReadingConfig, id: u32) -> Result<(), String> {
    let history = super::open_history(config);
    let entry = history.get(id).map_err(|e| e.to_string())?;

    println!(
        "  {} {}",
        format!("Reading #{}", entry.id).bold(),
        entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
    );
    println!("  {}", entry.summary);
    println!();

    if entry.filename.is_empty() {
        println!("  Query: {}", entry.query);
        return Ok(());
    }
    let saved = config.data_dir.join(&entry.filename);
    if !saved.exists() {
        warn!("reading #{id} points at missing file {}", saved.display());
        eprintln!(
            "  {} could not load reading file {}",
            "warning:".yellow(),
            saved.display()
        );
        println!("  Query: {}", entry.query);
        return Ok(());
    }
    let text = fs::read_to_string(&saved)
        .map_err(|e| format!("cannot read {}: {e}", saved.display()))?;
    let reading: Reading = serde_json::from_str(&text)
        .map_err(|e| format!("cannot parse {}: {e}", saved.display()))?;
    print!("{}", render_reading(&reading));
    Ok(())
}
