use colored::Colorize;
use qg_reading::ReadingConfig;
use qg_reading::draw::draw_geomantic_figure;
use qg_reading::render::render_figure;

pub fn run(config: &ReadingConfig) -> Result<(), String> {
    let tables = super::load_tables(config);
    let mut rng = config.rng();
    let figure = draw_geomantic_figure(&tables.geomancy, &mut rng);

    println!("  {}", "Geomantic figure".bold());
    println!();
    for line in render_figure(&figure).lines() {
        println!("  {line}");
    }
    Ok(())
}
