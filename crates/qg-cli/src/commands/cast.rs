use colored::Colorize;
use qg_oracle::{CastingMethod, LineDetail};
use qg_reading::ReadingConfig;
use qg_reading::reading::consult_iching;
use qg_reading::render::render_hexagram;

pub fn run(config: &ReadingConfig, method: Option<&str>) -> Result<(), String> {
    let method = method.map_or(config.method, CastingMethod::parse_or_random);
    let tables = super::load_tables(config);
    let mut rng = config.rng();
    let iching = consult_iching(&tables, method, &mut rng);

    println!("  {} ({method})", "I Ching".bold());
    println!();
    for line in render_hexagram(&iching).lines() {
        println!("  {line}");
    }

    println!();
    println!("  {}", "Casting record".dimmed());
    for (i, line) in iching.cast.lines.iter().enumerate() {
        let how = match &line.detail {
            LineDetail::Coins { tosses } => {
                let faces: Vec<&str> = tosses
                    .iter()
                    .map(|&heads| if heads { "H" } else { "T" })
                    .collect();
                format!("coins {}", faces.join(""))
            }
            LineDetail::Stalks { divisions } => {
                let removed: Vec<String> =
                    divisions.iter().map(|d| d.removed.to_string()).collect();
                format!("stalks removed {}", removed.join("/"))
            }
            LineDetail::Flip => "flip".to_string(),
        };
        let value = line.value.map_or_else(|| "-".to_string(), |v| v.to_string());
        let note = if line.filled { " (filled)" } else { "" };
        println!(
            "  {}. {how} -> {value} {}{note}",
            i + 1,
            line.line
        );
    }

    Ok(())
}
