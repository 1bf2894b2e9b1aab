use std::path::Path;

use chrono::Local;
use colored::Colorize;
use qg_oracle::CastingMethod;
use qg_reading::history::{reading_csv, save_reading};
use qg_reading::render::render_reading;
use qg_reading::{Depth, Perspective, ReadingConfig, ReadingRequest, run_reading};

pub fn run(
    config: &ReadingConfig,
    query: &str,
    method: Option<&str>,
    depth: Option<&str>,
    perspective: &str,
    save: bool,
    csv: Option<&Path>,
) -> Result<(), String> {
    let depth = match depth {
        Some(name) => Depth::parse(name).ok_or_else(|| {
            format!("unknown depth: \"{name}\". Use: standard, detailed, comprehensive")
        })?,
        None => config.depth,
    };
    let perspective = Perspective::parse(perspective).ok_or_else(|| {
        format!(
            "unknown perspective: \"{perspective}\". Use: geomancy, iching, tarot, jafr, balanced"
        )
    })?;
    let request = ReadingRequest::new(query)
        .with_method(method.map_or(config.method, CastingMethod::parse_or_random))
        .with_depth(depth)
        .with_perspective(perspective);

    let tables = super::load_tables(config);
    let mut rng = config.rng();
    let reading = run_reading(&tables, &request, &Local::now(), &mut rng);

    print!("{}", render_reading(&reading));

    if let Some(path) = csv {
        let content = reading_csv(&reading).map_err(|e| e.to_string())?;
        std::fs::write(path, content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    }

    if save {
        let path = save_reading(&reading, &config.data_dir).map_err(|e| e.to_string())?;
        let mut history = super::open_history(config);
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let id = history.add(&reading, filename);
        history.save().map_err(|e| e.to_string())?;
        println!();
        println!(
            "  {} reading #{id} to {}",
            "Saved".green(),
            path.display()
        );
    }

    Ok(())
}
