//! The tarot deck: 22 major arcana and four suits of fourteen.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A minor arcana suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// Fire, will.
    Wands,
    /// Water, feeling.
    Cups,
    /// Air, thought.
    Swords,
    /// Earth, matter.
    Pentacles,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Wands, Self::Cups, Self::Swords, Self::Pentacles];

    fn element(self) -> &'static str {
        match self {
            Self::Wands => "Fire",
            Self::Cups => "Water",
            Self::Swords => "Air",
            Self::Pentacles => "Earth",
        }
    }

    fn planet(self) -> &'static str {
        match self {
            Self::Wands => "Sun",
            Self::Cups => "Moon",
            Self::Swords => "Mercury",
            Self::Pentacles => "Venus",
        }
    }

    fn domain(self) -> &'static str {
        match self {
            Self::Wands => "will and creative drive",
            Self::Cups => "feeling and relationship",
            Self::Swords => "thought and conflict",
            Self::Pentacles => "work, money, and the body",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wands => write!(f, "Wands"),
            Self::Cups => write!(f, "Cups"),
            Self::Swords => write!(f, "Swords"),
            Self::Pentacles => write!(f, "Pentacles"),
        }
    }
}

/// One tarot card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TarotCard {
    /// Card name.
    pub name: String,
    /// Number within its arcana (0-21 major, 1-14 minor).
    pub number: u32,
    /// Upright meaning.
    pub meaning: String,
    /// Elemental attribution.
    pub element: String,
    /// Astrological attribution.
    pub planet: String,
}

/// The full deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TarotDeck {
    /// Trumps 0-21.
    pub major_arcana: Vec<TarotCard>,
    /// Pip and court cards by suit.
    pub minor_arcana: BTreeMap<Suit, Vec<TarotCard>>,
}

const MAJOR: [(&str, &str, &str, &str); 22] = [
    ("The Fool", "New beginnings, spontaneity, a leap of faith.", "Air", "Uranus"),
    ("The Magician", "Manifestation, skill, and willpower.", "Air", "Mercury"),
    ("The High Priestess", "Intuition, hidden knowledge, the inner voice.", "Water", "Moon"),
    ("The Empress", "Abundance, nurture, and fertility.", "Earth", "Venus"),
    ("The Emperor", "Authority, structure, and stability.", "Fire", "Mars"),
    ("The Hierophant", "Tradition, teaching, and shared belief.", "Earth", "Venus"),
    ("The Lovers", "Union, choice, and alignment of values.", "Air", "Mercury"),
    ("The Chariot", "Directed will, control, and victory.", "Water", "Moon"),
    ("Strength", "Courage, patience, and gentle mastery.", "Fire", "Sun"),
    ("The Hermit", "Solitude, introspection, and inner guidance.", "Earth", "Mercury"),
    ("Wheel of Fortune", "Cycles, fate, and turning points.", "Fire", "Jupiter"),
    ("Justice", "Fairness, truth, and cause and effect.", "Air", "Venus"),
    ("The Hanged Man", "Surrender, pause, and a new perspective.", "Water", "Neptune"),
    ("Death", "Endings, transformation, and transition.", "Water", "Mars"),
    ("Temperance", "Balance, moderation, and blending.", "Fire", "Jupiter"),
    ("The Devil", "Bondage, attachment, and materialism.", "Earth", "Saturn"),
    ("The Tower", "Sudden upheaval and revelation.", "Fire", "Mars"),
    ("The Star", "Hope, renewal, and serenity.", "Air", "Saturn"),
    ("The Moon", "Illusion, fear, and the subconscious.", "Water", "Jupiter"),
    ("The Sun", "Joy, success, and vitality.", "Fire", "Sun"),
    ("Judgement", "Awakening, reckoning, and absolution.", "Fire", "Pluto"),
    ("The World", "Completion, integration, and fulfilment.", "Earth", "Saturn"),
];

const RANKS: [(&str, &str); 14] = [
    ("Ace", "A new seed"),
    ("Two", "Balance and choice"),
    ("Three", "Growth and collaboration"),
    ("Four", "Stability and rest"),
    ("Five", "Struggle and loss"),
    ("Six", "Harmony restored"),
    ("Seven", "Assessment and challenge"),
    ("Eight", "Movement and diligence"),
    ("Nine", "Near fulfilment"),
    ("Ten", "Completion and burden"),
    ("Page", "Curiosity and messages"),
    ("Knight", "Pursuit and action"),
    ("Queen", "Mature care and mastery"),
    ("King", "Command and responsibility"),
];

fn suit_cards(suit: Suit) -> Vec<TarotCard> {
    RANKS
        .iter()
        .enumerate()
        .map(|(i, (rank, theme))| TarotCard {
            name: format!("{rank} of {suit}"),
            number: (i + 1) as u32,
            meaning: format!("{theme} in matters of {}.", suit.domain()),
            element: suit.element().to_string(),
            planet: suit.planet().to_string(),
        })
        .collect()
}

impl Default for TarotDeck {
    fn default() -> Self {
        let major_arcana = MAJOR
            .iter()
            .enumerate()
            .map(|(i, &(name, meaning, element, planet))| TarotCard {
                name: name.to_string(),
                number: i as u32,
                meaning: meaning.to_string(),
                element: element.to_string(),
                planet: planet.to_string(),
            })
            .collect();
        let minor_arcana = Suit::ALL.into_iter().map(|s| (s, suit_cards(s))).collect();
        Self {
            major_arcana,
            minor_arcana,
        }
    }
}

impl TarotDeck {
    /// Cards of `suit`, empty if the suit is missing.
    pub fn suit(&self, suit: Suit) -> &[TarotCard] {
        self.minor_arcana.get(&suit).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of cards.
    pub fn len(&self) -> usize {
        self.major_arcana.len() + self.minor_arcana.values().map(Vec::len).sum::<usize>()
    }

    /// Whether the deck has no cards at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Card with the given name, case-insensitively.
    pub fn by_name(&self, name: &str) -> Option<&TarotCard> {
        self.major_arcana
            .iter()
            .chain(self.minor_arcana.values().flatten())
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

/// The card drawn when the deck cannot supply one.
pub fn fallback_card() -> TarotCard {
    TarotCard {
        name: "The Fool".to_string(),
        number: 0,
        meaning: "New beginnings and unlimited potential.".to_string(),
        element: "Air".to_string(),
        planet: "Uranus".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_deck() {
        let deck = TarotDeck::default();
        assert_eq!(deck.major_arcana.len(), 22);
        for suit in Suit::ALL {
            assert_eq!(deck.suit(suit).len(), 14);
        }
        assert_eq!(deck.len(), 78);
    }

    #[test]
    fn major_numbers_run_zero_to_twenty_one() {
        let deck = TarotDeck::default();
        let numbers: Vec<u32> = deck.major_arcana.iter().map(|c| c.number).collect();
        assert_eq!(numbers, (0..22).collect::<Vec<_>>());
        assert_eq!(deck.major_arcana[21].name, "The World");
    }

    #[test]
    fn minor_cards_named_by_rank_and_suit() {
        let deck = TarotDeck::default();
        let cups = deck.suit(Suit::Cups);
        assert_eq!(cups[0].name, "Ace of Cups");
        assert_eq!(cups[13].name, "King of Cups");
        assert_eq!(cups[13].number, 14);
        assert_eq!(cups[0].element, "Water");
        assert!(deck.by_name("queen of swords").is_some());
    }

    #[test]
    fn suit_keys_serialize_lowercase() {
        let deck = TarotDeck::default();
        let json = serde_json::to_string(&deck).unwrap();
        assert!(json.contains("\"pentacles\""));
        let back: TarotDeck = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 78);
    }
}
