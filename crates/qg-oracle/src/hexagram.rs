//! Hexagrams, binary keys, and changing-line sets.
//!
//! A hexagram is stored top line first, matching its [`BinaryKey`]. Line
//! numbers used for interpretation count from the bottom: line 1 is the
//! bottom line at index 5, line 6 is the top line at index 0.

use serde::{Deserialize, Serialize};

use crate::error::{OracleError, OracleResult};
use crate::trigram::{Trigram, TrigramPair};

/// A single hexagram line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Broken line, bit 0.
    Yin,
    /// Solid line, bit 1.
    Yang,
}

impl Line {
    /// Line from a bit: `true` is yang.
    pub fn from_bit(bit: bool) -> Self {
        if bit { Self::Yang } else { Self::Yin }
    }

    /// The line as 0 or 1.
    pub fn bit(self) -> u8 {
        match self {
            Self::Yin => 0,
            Self::Yang => 1,
        }
    }

    /// The opposite line.
    pub fn flipped(self) -> Self {
        match self {
            Self::Yin => Self::Yang,
            Self::Yang => Self::Yin,
        }
    }

    /// The line as a key character.
    pub fn as_char(self) -> char {
        match self {
            Self::Yin => '0',
            Self::Yang => '1',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Yin),
            '1' => Some(Self::Yang),
            _ => None,
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yin => write!(f, "yin"),
            Self::Yang => write!(f, "yang"),
        }
    }
}

/// A six-character '0'/'1' string, top line first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BinaryKey(String);

impl BinaryKey {
    /// Parse and validate a key.
    pub fn parse(s: &str) -> OracleResult<Self> {
        if s.len() == Hexagram::LINE_COUNT && s.chars().all(|c| c == '0' || c == '1') {
            Ok(Self(s.to_string()))
        } else {
            Err(OracleError::InvalidBinaryKey(s.to_string()))
        }
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Characters 0..3, the upper trigram.
    pub fn upper_pattern(&self) -> &str {
        &self.0[..3]
    }

    /// Characters 3..6, the lower trigram.
    pub fn lower_pattern(&self) -> &str {
        &self.0[3..]
    }

    /// The key read as a binary number (0-63).
    pub fn value(&self) -> u32 {
        self.0
            .chars()
            .fold(0, |acc, c| (acc << 1) | u32::from(c == '1'))
    }
}

impl TryFrom<String> for BinaryKey {
    type Error = OracleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BinaryKey> for String {
    fn from(key: BinaryKey) -> Self {
        key.0
    }
}

impl std::fmt::Display for BinaryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Line numbers (1-6, bottom-up) flagged as moving during a casting.
///
/// Keeps insertion order and never holds a duplicate or an out-of-range
/// number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangingLines(Vec<u8>);

impl ChangingLines {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from line numbers, dropping duplicates and numbers
    /// outside 1..=6.
    pub fn from_lines(lines: impl IntoIterator<Item = u8>) -> Self {
        let mut set = Self::new();
        for line in lines {
            set.insert(line);
        }
        set
    }

    /// Add a line number. Returns false if it was already present or is
    /// not in 1..=6.
    pub fn insert(&mut self, line: u8) -> bool {
        if !(1..=6).contains(&line) || self.0.contains(&line) {
            return false;
        }
        self.0.push(line);
        true
    }

    /// Whether `line` is flagged.
    pub fn contains(&self, line: u8) -> bool {
        self.0.contains(&line)
    }

    /// Number of changing lines.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no line is changing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The line numbers in insertion order.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Iterate over the line numbers.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// Apply `f` to every line number, keeping the result a valid set.
    pub fn remap(&self, f: impl Fn(u8) -> u8) -> Self {
        Self::from_lines(self.iter().map(f))
    }
}

impl std::fmt::Display for ChangingLines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|n| n.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Six lines, top line first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hexagram {
    lines: [Line; 6],
}

impl Hexagram {
    /// Number of lines in every hexagram.
    pub const LINE_COUNT: usize = 6;

    /// Build from lines in storage order (top first).
    pub fn new(lines: [Line; 6]) -> Self {
        Self { lines }
    }

    /// Build from a validated key.
    pub fn from_key(key: &BinaryKey) -> Self {
        let mut lines = [Line::Yin; 6];
        for (slot, c) in lines.iter_mut().zip(key.as_str().chars()) {
            *slot = Line::from_char(c).unwrap_or(Line::Yin);
        }
        Self { lines }
    }

    /// Parse a key string straight into a hexagram.
    pub fn parse(s: &str) -> OracleResult<Self> {
        BinaryKey::parse(s).map(|key| Self::from_key(&key))
    }

    /// Lines in storage order (top first).
    pub fn lines(&self) -> &[Line; 6] {
        &self.lines
    }

    /// Storage index of a 1-based bottom-up line number.
    pub fn index_of(line_number: u8) -> Option<usize> {
        if (1..=6).contains(&line_number) {
            Some(Self::LINE_COUNT - usize::from(line_number))
        } else {
            None
        }
    }

    /// The line with the given 1-based bottom-up number.
    pub fn line(&self, line_number: u8) -> Option<Line> {
        Self::index_of(line_number).map(|idx| self.lines[idx])
    }

    /// The binary key for this hexagram.
    pub fn key(&self) -> BinaryKey {
        BinaryKey(self.lines.iter().map(|l| l.as_char()).collect())
    }

    /// Upper trigram (top three lines).
    pub fn upper(&self) -> Trigram {
        Trigram::from_lines([self.lines[0], self.lines[1], self.lines[2]])
    }

    /// Lower trigram (bottom three lines).
    pub fn lower(&self) -> Trigram {
        Trigram::from_lines([self.lines[3], self.lines[4], self.lines[5]])
    }

    /// Both trigrams.
    pub fn trigrams(&self) -> TrigramPair {
        TrigramPair {
            upper: self.upper(),
            lower: self.lower(),
        }
    }

    /// Flip every line whose number is in `changing`.
    pub fn transform(&self, changing: &ChangingLines) -> Self {
        let mut lines = self.lines;
        for number in changing.iter() {
            if let Some(idx) = Self::index_of(number) {
                lines[idx] = lines[idx].flipped();
            }
        }
        Self { lines }
    }

    /// Number of yang lines.
    pub fn yang_count(&self) -> usize {
        self.lines.iter().filter(|l| **l == Line::Yang).count()
    }
}

impl std::fmt::Display for Hexagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn key_parse_validates() {
        assert!(BinaryKey::parse("101010").is_ok());
        assert_eq!(
            BinaryKey::parse("10101"),
            Err(OracleError::InvalidBinaryKey("10101".to_string()))
        );
        assert!(BinaryKey::parse("10a010").is_err());
        assert!(BinaryKey::parse("1010101").is_err());
    }

    #[test]
    fn key_halves_and_value() {
        let key = BinaryKey::parse("110001").unwrap();
        assert_eq!(key.upper_pattern(), "110");
        assert_eq!(key.lower_pattern(), "001");
        assert_eq!(key.value(), 49);
    }

    #[test]
    fn key_serde_rejects_bad_input() {
        let ok: Result<BinaryKey, _> = serde_json::from_str("\"000111\"");
        assert!(ok.is_ok());
        let bad: Result<BinaryKey, _> = serde_json::from_str("\"0001\"");
        assert!(bad.is_err());
    }

    #[test]
    fn line_numbers_count_from_bottom() {
        let hex = Hexagram::parse("100000").unwrap();
        assert_eq!(hex.line(6), Some(Line::Yang));
        assert_eq!(hex.line(1), Some(Line::Yin));
        assert_eq!(hex.line(0), None);
        assert_eq!(hex.line(7), None);
        assert_eq!(Hexagram::index_of(1), Some(5));
        assert_eq!(Hexagram::index_of(6), Some(0));
    }

    #[test]
    fn changing_lines_reject_duplicates_and_range() {
        let mut set = ChangingLines::new();
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(!set.insert(0));
        assert!(!set.insert(7));
        assert_eq!(set.as_slice(), &[3]);
        assert_eq!(ChangingLines::from_lines([1, 4, 1, 9]).as_slice(), &[1, 4]);
    }

    #[test]
    fn changing_lines_display() {
        assert_eq!(ChangingLines::from_lines([2, 5]).to_string(), "[2, 5]");
        assert_eq!(ChangingLines::new().to_string(), "[]");
    }

    #[test]
    fn transform_flips_line_one_at_bottom() {
        let hex = Hexagram::parse("111111").unwrap();
        let changed = hex.transform(&ChangingLines::from_lines([1]));
        assert_eq!(changed.key().as_str(), "111110");
    }

    #[test]
    fn trigram_halves() {
        let hex = Hexagram::parse("010100").unwrap();
        assert_eq!(hex.upper(), Trigram::Water);
        assert_eq!(hex.lower(), Trigram::Thunder);
    }

    fn arb_hexagram() -> impl Strategy<Value = Hexagram> {
        prop::array::uniform6(any::<bool>()).prop_map(|bits| Hexagram::new(bits.map(Line::from_bit)))
    }

    proptest! {
        #[test]
        fn transform_is_an_involution(hex in arb_hexagram(), lines in prop::collection::vec(1u8..=6, 0..6)) {
            let changing = ChangingLines::from_lines(lines);
            prop_assert_eq!(hex.transform(&changing).transform(&changing), hex);
        }
    }
}
