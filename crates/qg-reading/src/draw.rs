//! Random draws: geomantic figures, tarot cards, and Jafr talismans.

use qg_oracle::{MagicSquare, Planet, RandomSource, planet_square};
use serde::{Deserialize, Serialize};

use crate::tables::tarot::fallback_card;
use crate::tables::{
    Correspondences, GeomancyTable, GeomanticFigure, JafrRecord, Suit, TarotCard, TarotDeck,
};

/// Label used for the suit of a major arcana card.
pub const MAJOR_ARCANA: &str = "Major Arcana";

/// Draw a geomantic figure from four fair bits, head first.
pub fn draw_geomantic_figure<R: RandomSource + ?Sized>(
    table: &GeomancyTable,
    rng: &mut R,
) -> GeomanticFigure {
    let key: String = (0..4)
        .map(|_| if rng.next_bit() { '1' } else { '0' })
        .collect();
    table.lookup(&key)
}

/// Dot rows of a figure, head first: `●` for one dot, `● ●` for two.
pub fn figure_rows(key: &str) -> Vec<&'static str> {
    key.chars()
        .map(|c| if c == '1' { "  ●" } else { "● ●" })
        .collect()
}

/// A drawn tarot card with the label of the suit it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    /// The card.
    pub card: TarotCard,
    /// `Major Arcana` or the minor suit name.
    pub suit: String,
}

fn pick<'a, R: RandomSource + ?Sized>(cards: &'a [TarotCard], rng: &mut R) -> Option<&'a TarotCard> {
    if cards.is_empty() {
        return None;
    }
    let i = rng.next_in_range(0, cards.len() as u32 - 1) as usize;
    cards.get(i)
}

/// Draw a card: a fair bit picks the major arcana, otherwise a uniform suit
/// and then a uniform card within it.
///
/// An empty major arcana falls through to the minor suits; an empty suit
/// yields The Fool.
pub fn draw_tarot_card<R: RandomSource + ?Sized>(deck: &TarotDeck, rng: &mut R) -> DrawnCard {
    if rng.next_bit() {
        if let Some(card) = pick(&deck.major_arcana, rng) {
            return DrawnCard {
                card: card.clone(),
                suit: MAJOR_ARCANA.to_string(),
            };
        }
    }

    let suit = Suit::ALL[rng.next_in_range(0, 3) as usize];
    match pick(deck.suit(suit), rng) {
        Some(card) => DrawnCard {
            card: card.clone(),
            suit: suit.to_string(),
        },
        None => DrawnCard {
            card: fallback_card(),
            suit: MAJOR_ARCANA.to_string(),
        },
    }
}

/// A talisman: a figure, its Jafr correspondences, and its planet's square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talisman {
    /// The base figure.
    pub figure: GeomanticFigure,
    /// Its Jafr record.
    pub jafr: JafrRecord,
    /// The figure's planet.
    pub planet: Planet,
    /// That planet's square.
    pub square: MagicSquare,
}

/// Build the talisman for a figure already drawn.
pub fn talisman_for(tables: &Correspondences, figure: GeomanticFigure) -> Talisman {
    let jafr = tables.jafr.lookup(&figure.name);
    let planet = figure.planet;
    Talisman {
        figure,
        jafr,
        planet,
        square: planet_square(planet),
    }
}

/// Draw a figure and build its talisman.
pub fn draw_talisman<R: RandomSource + ?Sized>(tables: &Correspondences, rng: &mut R) -> Talisman {
    let figure = draw_geomantic_figure(&tables.geomancy, rng);
    talisman_for(tables, figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qg_oracle::ScriptedSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn figure_bits_read_head_first() {
        let table = GeomancyTable::default();
        let mut src = ScriptedSource::from_bits(vec![false, true, true, true]);
        let figure = draw_geomantic_figure(&table, &mut src);
        assert_eq!(figure.key, "0111");
        assert_eq!(figure.name, "Caput Draconis");
        assert_eq!(src.bits_drawn(), 4);
    }

    #[test]
    fn figure_rows_render_dots() {
        assert_eq!(figure_rows("1001"), vec!["  ●", "● ●", "● ●", "  ●"]);
    }

    #[test]
    fn major_draw() {
        let deck = TarotDeck::default();
        let mut src = ScriptedSource::new(vec![true], vec![21]);
        let drawn = draw_tarot_card(&deck, &mut src);
        assert_eq!(drawn.suit, MAJOR_ARCANA);
        assert_eq!(drawn.card.name, "The World");
    }

    #[test]
    fn minor_draw_picks_suit_then_card() {
        let deck = TarotDeck::default();
        let mut src = ScriptedSource::new(vec![false], vec![2, 0]);
        let drawn = draw_tarot_card(&deck, &mut src);
        assert_eq!(drawn.suit, "Swords");
        assert_eq!(drawn.card.name, "Ace of Swords");
    }

    #[test]
    fn empty_deck_falls_back_to_the_fool() {
        let deck = TarotDeck {
            major_arcana: Vec::new(),
            minor_arcana: Default::default(),
        };
        let mut rng = StdRng::seed_from_u64(1);
        let drawn = draw_tarot_card(&deck, &mut rng);
        assert_eq!(drawn.card.name, "The Fool");
    }

    #[test]
    fn talisman_uses_figure_planet_square() {
        let tables = Correspondences::default();
        // 1101 is Puer, ruled by Mars.
        let mut src = ScriptedSource::from_bits(vec![true, true, false, true]);
        let talisman = draw_talisman(&tables, &mut src);
        assert_eq!(talisman.figure.name, "Puer");
        assert_eq!(talisman.planet, Planet::Mars);
        assert_eq!(talisman.square.size(), 5);
        assert_eq!(talisman.jafr.letter, "Lam");
    }
}
