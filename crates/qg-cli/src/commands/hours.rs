use chrono::{Local, NaiveDate};
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use qg_reading::hours::{moon_phase, planetary_hour_at, schedule_for};

pub fn run(date: Option<&str>) -> Result<(), String> {
    let now = Local::now().naive_local();
    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| format!("invalid date \"{s}\": {e}"))?,
        None => now.date(),
    };

    let current = planetary_hour_at(now);
    println!(
        "  {} {} ({} hour {})",
        "Current hour:".bold(),
        current.planet,
        current.period,
        current.hour_number
    );
    println!("  {}", current.planet.quality().dimmed());
    println!("  Moon phase: {}", moon_phase(date));
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Period", "Hour", "Planet", "Quality"]);
    for slot in schedule_for(date) {
        table.add_row(vec![
            slot.period.to_string(),
            slot.hour.to_string(),
            slot.planet.to_string(),
            slot.planet.quality().to_string(),
        ]);
    }
    println!("  Planetary hours for {date}");
    println!("{table}");
    Ok(())
}
