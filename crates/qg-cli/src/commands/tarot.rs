use colored::Colorize;
use qg_reading::ReadingConfig;
use qg_reading::draw::draw_tarot_card;

pub fn run(config: &ReadingConfig) -> Result<(), String> {
    let tables = super::load_tables(config);
    let mut rng = config.rng();
    let drawn = draw_tarot_card(&tables.tarot, &mut rng);
    let card = &drawn.card;

    println!("  {} [{}]", card.name.bold(), drawn.suit.dimmed());
    println!();
    println!("  {}", card.meaning);
    println!();
    println!("  element: {}", card.element);
    println!("  planet:  {}", card.planet);
    Ok(())
}
