use std::path::Path;

use qg_reading::{ExportFormat, ReadingConfig};

pub fn run(config: &ReadingConfig, format: &str, output: Option<&Path>) -> Result<(), String> {
    let format = ExportFormat::parse(format)
        .map_err(|e| format!("{e}. Use: json, text, csv"))?;
    let history = super::open_history(config);

    if let Some(path) = output {
        history.export(format, path).map_err(|e| e.to_string())?;
        println!("  Exported {} readings to {}", history.len(), path.display());
    } else {
        let content = history.export_string(format).map_err(|e| e.to_string())?;
        print!("{content}");
    }

    Ok(())
}
