use qg_reading::ReadingConfig;
use qg_reading::draw::draw_talisman;
use qg_reading::render::{render_figure, render_talisman};

pub fn run(config: &ReadingConfig) -> Result<(), String> {
    let tables = super::load_tables(config);
    let mut rng = config.rng();
    let talisman = draw_talisman(&tables, &mut rng);

    print!("{}", render_figure(&talisman.figure));
    println!();
    print!("{}", render_talisman(&talisman));
    Ok(())
}
