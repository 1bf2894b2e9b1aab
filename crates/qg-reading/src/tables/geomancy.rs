//! The sixteen geomantic figures.

use std::collections::BTreeMap;

use qg_oracle::Planet;
use serde::{Deserialize, Serialize};

/// One geomantic figure and its correspondences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeomanticFigure {
    /// Latin name.
    pub name: String,
    /// Four bits, head to feet; `1` is a single dot.
    pub key: String,
    /// Divinatory meaning.
    pub meaning: String,
    /// Ruling planet.
    pub planet: Planet,
    /// Classical element.
    pub element: String,
}

impl GeomanticFigure {
    /// Fallback for keys missing from the table.
    pub fn unknown(key: &str) -> Self {
        Self {
            name: "Unknown".to_string(),
            key: key.to_string(),
            meaning: "No meaning available.".to_string(),
            planet: Planet::Moon,
            element: "Water".to_string(),
        }
    }

    /// The key read as a binary number.
    pub fn value(&self) -> u32 {
        u32::from_str_radix(&self.key, 2).unwrap_or(0)
    }
}

/// Geomantic figures keyed by their four-bit key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeomancyTable {
    /// Figures keyed by key.
    pub figures: BTreeMap<String, GeomanticFigure>,
}

const FIGURES: [(&str, &str, Planet, &str, &str); 16] = [
    ("1111", "Via", Planet::Moon, "Water", "The Way. Change, journeys, and a path opening ahead."),
    ("0000", "Populus", Planet::Moon, "Water", "The People. Gatherings, crowds, and reflection of others' will."),
    ("0110", "Conjunctio", Planet::Mercury, "Air", "Union. Meetings, agreements, and the joining of forces."),
    ("1001", "Carcer", Planet::Saturn, "Earth", "The Prison. Restriction, delay, and firm boundaries."),
    ("0011", "Fortuna Major", Planet::Sun, "Fire", "Greater Fortune. Lasting success won by inner strength."),
    ("1100", "Fortuna Minor", Planet::Sun, "Fire", "Lesser Fortune. Quick help from outside that does not last."),
    ("0101", "Acquisitio", Planet::Jupiter, "Air", "Gain. Profit, increase, and things coming in."),
    ("1010", "Amissio", Planet::Venus, "Fire", "Loss. Things slipping away; good for letting go."),
    ("1000", "Laetitia", Planet::Jupiter, "Water", "Joy. Happiness, health, and rising spirits."),
    ("0001", "Tristitia", Planet::Saturn, "Air", "Sorrow. Sadness and stagnation, but stable foundations."),
    ("1011", "Puella", Planet::Venus, "Water", "The Girl. Harmony, beauty, and pleasant company."),
    ("1101", "Puer", Planet::Mars, "Fire", "The Boy. Rash energy, courage, and conflict."),
    ("0100", "Rubeus", Planet::Mars, "Water", "Red. Passion, anger, and danger; pause before acting."),
    ("0010", "Albus", Planet::Mercury, "Air", "White. Peace, wisdom, and clear thought."),
    ("0111", "Caput Draconis", Planet::Jupiter, "Earth", "Head of the Dragon. Beginnings and entrances."),
    ("1110", "Cauda Draconis", Planet::Saturn, "Fire", "Tail of the Dragon. Endings, exits, and release."),
];

impl Default for GeomancyTable {
    fn default() -> Self {
        let figures = FIGURES
            .iter()
            .map(|&(key, name, planet, element, meaning)| {
                let figure = GeomanticFigure {
                    name: name.to_string(),
                    key: key.to_string(),
                    meaning: meaning.to_string(),
                    planet,
                    element: element.to_string(),
                };
                (key.to_string(), figure)
            })
            .collect();
        Self { figures }
    }
}

impl GeomancyTable {
    /// Figure for `key`, or [`GeomanticFigure::unknown`].
    pub fn lookup(&self, key: &str) -> GeomanticFigure {
        self.figures
            .get(key)
            .cloned()
            .unwrap_or_else(|| GeomanticFigure::unknown(key))
    }

    /// Figure with the given name, case-insensitively.
    pub fn by_name(&self, name: &str) -> Option<&GeomanticFigure> {
        self.figures
            .values()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Number of figures.
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }
}

/// Names of the built-in figures in traditional order.
pub fn figure_names() -> impl Iterator<Item = &'static str> {
    FIGURES.iter().map(|f| f.1)
}
