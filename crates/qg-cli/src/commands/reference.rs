use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use qg_oracle::Planet;
use qg_oracle::trigram::symbols_for_key;
use qg_reading::tables::TableSource;
use qg_reading::tables::planets::{correspondence, essence};
use qg_reading::{Correspondences, ReadingConfig};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn source_note(source: TableSource) -> &'static str {
    match source {
        TableSource::File => "loaded from tables directory",
        TableSource::Default => "built-in",
        TableSource::Fallback => "built-in (table file unreadable)",
    }
}

pub fn run(config: &ReadingConfig, topic: &str) -> Result<(), String> {
    let (tables, sources) = Correspondences::load_with_sources(&config.tables_dir);
    let (table, title, source) = match topic.trim().to_lowercase().as_str() {
        "iching" | "i-ching" | "hexagrams" => (iching(&tables), "Hexagrams", Some(sources[0])),
        "geomancy" | "figures" => (geomancy(&tables), "Geomantic figures", Some(sources[1])),
        "tarot" | "cards" => (tarot(&tables), "Tarot", Some(sources[2])),
        "jafr" => (jafr(&tables), "Jafr", Some(sources[3])),
        "planets" => (planets(), "Planets", None),
        _ => {
            return Err(format!(
                "unknown reference: \"{topic}\". Use: iching, geomancy, tarot, jafr, planets"
            ));
        }
    };

    match source {
        Some(source) => println!(
            "  {} {}",
            title.bold(),
            format!("({})", source_note(source)).dimmed()
        ),
        None => println!("  {}", title.bold()),
    }
    println!("{table}");
    Ok(())
}

fn iching(tables: &Correspondences) -> Table {
    let mut table = new_table(vec!["#", "Key", "Trigrams", "Name", "Chinese", "Element"]);
    for (key, record) in tables.hexagrams.in_order() {
        let (upper, lower) = symbols_for_key(key);
        table.add_row(vec![
            record.number.to_string(),
            key.to_string(),
            format!("{upper}{lower}"),
            record.english.clone(),
            record.chinese.clone(),
            record.element.clone(),
        ]);
    }
    table
}

fn geomancy(tables: &Correspondences) -> Table {
    let mut table = new_table(vec!["Key", "Name", "Planet", "Element", "Meaning"]);
    for figure in tables.geomancy.figures.values() {
        table.add_row(vec![
            figure.key.clone(),
            figure.name.clone(),
            figure.planet.to_string(),
            figure.element.clone(),
            super::truncate(&figure.meaning, 60),
        ]);
    }
    table
}

fn tarot(tables: &Correspondences) -> Table {
    let mut table = new_table(vec!["Arcana", "#", "Name", "Element", "Planet"]);
    for card in &tables.tarot.major_arcana {
        table.add_row(vec![
            "Major".to_string(),
            card.number.to_string(),
            card.name.clone(),
            card.element.clone(),
            card.planet.clone(),
        ]);
    }
    for (suit, cards) in &tables.tarot.minor_arcana {
        for card in cards {
            table.add_row(vec![
                suit.to_string(),
                card.number.to_string(),
                card.name.clone(),
                card.element.clone(),
                card.planet.clone(),
            ]);
        }
    }
    table
}

fn jafr(tables: &Correspondences) -> Table {
    let mut table = new_table(vec!["Figure", "Letter", "Value", "Square", "Angel", "Use"]);
    for (figure, record) in &tables.jafr.records {
        table.add_row(vec![
            figure.clone(),
            record.letter.clone(),
            record.value.to_string(),
            record.square.clone(),
            record.angel.clone(),
            super::truncate(&record.purpose, 50),
        ]);
    }
    table
}

fn planets() -> Table {
    let mut table = new_table(vec![
        "Planet", "Day", "Element", "Metal", "Color", "Square", "Essence",
    ]);
    for planet in Planet::CHALDEAN {
        let c = correspondence(planet);
        let n = planet.square_size();
        table.add_row(vec![
            planet.to_string(),
            c.day.to_string(),
            c.element.to_string(),
            c.metal.to_string(),
            c.color.to_string(),
            format!("{n}x{n}"),
            essence(planet).to_string(),
        ]);
    }
    table
}
