//! The eight trigrams.
//!
//! Each trigram corresponds to one three-character '0'/'1' pattern. A
//! hexagram key's first three characters give its upper trigram, the last
//! three its lower trigram.

use serde::{Deserialize, Serialize};

use crate::hexagram::Line;

/// Glyph returned for a pattern that names no trigram.
pub const UNKNOWN_SYMBOL: char = '?';

/// One of the eight trigrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigram {
    /// ☰ 111
    Heaven,
    /// ☱ 110
    Lake,
    /// ☲ 101
    Fire,
    /// ☳ 100
    Thunder,
    /// ☴ 011
    Wind,
    /// ☵ 010
    Water,
    /// ☶ 001
    Mountain,
    /// ☷ 000
    Earth,
}

impl Trigram {
    /// All trigrams, from 111 down to 000.
    pub const ALL: [Self; 8] = [
        Self::Heaven,
        Self::Lake,
        Self::Fire,
        Self::Thunder,
        Self::Wind,
        Self::Water,
        Self::Mountain,
        Self::Earth,
    ];

    /// Resolve a three-character pattern.
    pub fn from_pattern(pattern: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.pattern() == pattern)
    }

    /// Resolve three lines given in key order.
    pub fn from_lines(lines: [Line; 3]) -> Self {
        let index = lines.iter().fold(0u8, |acc, l| (acc << 1) | l.bit());
        // ALL is ordered from 0b111 down to 0b000.
        Self::ALL[usize::from(7 - index)]
    }

    /// The three-character pattern.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Heaven => "111",
            Self::Lake => "110",
            Self::Fire => "101",
            Self::Thunder => "100",
            Self::Wind => "011",
            Self::Water => "010",
            Self::Mountain => "001",
            Self::Earth => "000",
        }
    }

    /// The Unicode trigram glyph.
    pub fn symbol(self) -> char {
        match self {
            Self::Heaven => '☰',
            Self::Lake => '☱',
            Self::Fire => '☲',
            Self::Thunder => '☳',
            Self::Wind => '☴',
            Self::Water => '☵',
            Self::Mountain => '☶',
            Self::Earth => '☷',
        }
    }

    /// Resolve a glyph back to its trigram.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.symbol() == symbol)
    }

    /// A short phrase for the trigram's nature.
    pub fn essence(self) -> &'static str {
        match self {
            Self::Heaven => "Creative force",
            Self::Lake => "Joyful lake",
            Self::Fire => "Illuminating fire",
            Self::Thunder => "Awakening thunder",
            Self::Wind => "Penetrating wind",
            Self::Water => "Deep water",
            Self::Mountain => "Stable mountain",
            Self::Earth => "Receptive ground",
        }
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Heaven => write!(f, "Heaven"),
            Self::Lake => write!(f, "Lake"),
            Self::Fire => write!(f, "Fire"),
            Self::Thunder => write!(f, "Thunder"),
            Self::Wind => write!(f, "Wind"),
            Self::Water => write!(f, "Water"),
            Self::Mountain => write!(f, "Mountain"),
            Self::Earth => write!(f, "Earth"),
        }
    }
}

/// Glyph for a raw pattern, or [`UNKNOWN_SYMBOL`].
pub fn symbol_for_pattern(pattern: &str) -> char {
    Trigram::from_pattern(pattern).map_or(UNKNOWN_SYMBOL, Trigram::symbol)
}

/// `(upper, lower)` glyphs for a raw six-character key.
///
/// Keys of the wrong length resolve to the unknown glyph on both halves.
pub fn symbols_for_key(key: &str) -> (char, char) {
    if key.len() != 6 || !key.is_ascii() {
        return (UNKNOWN_SYMBOL, UNKNOWN_SYMBOL);
    }
    (symbol_for_pattern(&key[..3]), symbol_for_pattern(&key[3..]))
}

/// Upper and lower trigram of a hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrigramPair {
    /// Top three lines.
    pub upper: Trigram,
    /// Bottom three lines.
    pub lower: Trigram,
}

impl std::fmt::Display for TrigramPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} over {} {}",
            self.upper.symbol(),
            self.upper,
            self.lower.symbol(),
            self.lower
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_resolves() {
        for bits in 0u8..8 {
            let pattern = format!("{bits:03b}");
            let trigram = Trigram::from_pattern(&pattern);
            assert!(trigram.is_some(), "pattern {pattern} unresolved");
            assert_ne!(symbol_for_pattern(&pattern), UNKNOWN_SYMBOL);
        }
    }

    #[test]
    fn patterns_are_distinct() {
        let mut patterns: Vec<&str> = Trigram::ALL.iter().map(|t| t.pattern()).collect();
        patterns.sort_unstable();
        patterns.dedup();
        assert_eq!(patterns.len(), 8);
    }

    #[test]
    fn named_patterns() {
        assert_eq!(Trigram::from_pattern("111"), Some(Trigram::Heaven));
        assert_eq!(Trigram::from_pattern("110"), Some(Trigram::Lake));
        assert_eq!(Trigram::from_pattern("101"), Some(Trigram::Fire));
        assert_eq!(Trigram::from_pattern("100"), Some(Trigram::Thunder));
        assert_eq!(Trigram::from_pattern("011"), Some(Trigram::Wind));
        assert_eq!(Trigram::from_pattern("010"), Some(Trigram::Water));
        assert_eq!(Trigram::from_pattern("001"), Some(Trigram::Mountain));
        assert_eq!(Trigram::from_pattern("000"), Some(Trigram::Earth));
    }

    #[test]
    fn from_lines_matches_pattern() {
        for trigram in Trigram::ALL {
            let lines: Vec<Line> = trigram
                .pattern()
                .chars()
                .map(|c| Line::from_bit(c == '1'))
                .collect();
            assert_eq!(Trigram::from_lines([lines[0], lines[1], lines[2]]), trigram);
        }
    }

    #[test]
    fn unknown_patterns_hit_sentinel() {
        assert_eq!(symbol_for_pattern("12"), UNKNOWN_SYMBOL);
        assert_eq!(symbol_for_pattern("abc"), UNKNOWN_SYMBOL);
        assert_eq!(symbols_for_key("1111"), (UNKNOWN_SYMBOL, UNKNOWN_SYMBOL));
    }

    #[test]
    fn key_symbols_split_upper_lower() {
        assert_eq!(symbols_for_key("111000"), ('☰', '☷'));
        assert_eq!(symbols_for_key("010101"), ('☵', '☲'));
    }

    #[test]
    fn symbol_round_trip() {
        for trigram in Trigram::ALL {
            assert_eq!(Trigram::from_symbol(trigram.symbol()), Some(trigram));
        }
        assert_eq!(Trigram::from_symbol('x'), None);
    }

    #[test]
    fn pair_display() {
        let pair = TrigramPair {
            upper: Trigram::Water,
            lower: Trigram::Fire,
        };
        assert_eq!(pair.to_string(), "☵ Water over ☲ Fire");
    }
}
