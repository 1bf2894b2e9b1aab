use colored::Colorize;
use qg_oracle::{Planet, custom_square, render_square, square_for_planet};
use qg_reading::ReadingConfig;
use qg_reading::history::save_square;

pub fn run(
    config: &ReadingConfig,
    planet: Option<&str>,
    size: Option<usize>,
    save: bool,
) -> Result<(), String> {
    let (square, title) = match size {
        Some(n) => {
            let square = custom_square(n).map_err(|e| e.to_string())?;
            (square, format!("Custom {n}x{n}"))
        }
        None => {
            let name = planet.unwrap_or("saturn");
            let (square, order) = square_for_planet(name);
            let planet = Planet::for_square_size(order)
                .map_or_else(|| name.to_string(), |p| p.to_string());
            (square, planet)
        }
    };

    print!("{}", render_square(&square, &title));
    if !square.is_magic() {
        println!("  {}", "(sequential fill: not magic)".dimmed());
    }

    if save {
        let dir = config.data_dir.join("magic_squares");
        let path = save_square(&square, &title, &dir).map_err(|e| e.to_string())?;
        println!("  Saved to {}", path.display());
    }

    Ok(())
}
