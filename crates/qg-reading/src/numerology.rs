//! Numerical analysis for comprehensive readings.
//!
//! Binary keys are read as decimal values and reduced by repeated digit
//! summing to a single digit, then compared across the three systems.

use qg_oracle::{BinaryKey, Trigram, TrigramPair};
use serde::{Deserialize, Serialize};

/// Sum digits repeatedly until the value is at most 9.
pub fn reduce_number(mut n: u32) -> u32 {
    while n > 9 {
        let mut sum = 0;
        while n > 0 {
            sum += n % 10;
            n /= 10;
        }
        n = sum;
    }
    n
}

/// Traditional meaning of a reduced number.
pub fn number_meaning(n: u32) -> &'static str {
    match n {
        1 => "Unity, Beginning",
        2 => "Duality, Balance",
        3 => "Creativity, Trinity",
        4 => "Stability, Foundation",
        5 => "Change, Movement",
        6 => "Harmony, Balance",
        7 => "Wisdom, Mystery",
        8 => "Power, Manifestation",
        9 => "Completion, Wisdom",
        _ => "Mystery",
    }
}

fn vibration_meaning(n: u32) -> &'static str {
    match n {
        1 => "Creative impulse, new beginning",
        2 => "Harmonizing dualities, partnership",
        3 => "Creative expression, trinity in action",
        4 => "Foundation building, stabilization",
        5 => "Transformational change, alchemical process",
        6 => "Harmonic integration, beauty",
        7 => "Mystical insight, inner wisdom",
        8 => "Manifestation power, infinity in action",
        9 => "Completion, wisdom synthesis",
        _ => "Unique vibrational signature",
    }
}

/// Archetype named by a figure's decimal value.
pub fn numerical_archetype(value: u32) -> &'static str {
    match value {
        0 => "The Void - Infinite potential",
        1 => "The Magician - Conscious creation",
        2 => "The High Priestess - Intuitive wisdom",
        3 => "The Empress - Creative abundance",
        4 => "The Emperor - Structural authority",
        5 => "The Hierophant - Traditional wisdom",
        6 => "The Lovers - Harmonious choice",
        7 => "The Chariot - Directed will",
        8 => "Strength - Courageous mastery",
        9 => "The Hermit - Inner wisdom",
        10 => "Wheel of Fortune - Cyclical change",
        11 => "Justice - Balance and truth",
        12 => "The Hanged Man - Sacrificial wisdom",
        13 => "Death - Transformational ending",
        14 => "Temperance - Alchemical blending",
        15 => "The Devil - Material bondage",
        _ => "Unique numerical signature",
    }
}

/// Shape of a bit pattern.
pub fn binary_pattern(bits: &str) -> &'static str {
    if bits.chars().eq(bits.chars().rev()) {
        "Palindrome symmetry - balanced energy"
    } else if bits.contains("1111") {
        "Strong yang emphasis"
    } else if bits.contains("0000") {
        "Strong yin emphasis"
    } else {
        "Dynamic interplay of yin and yang"
    }
}

/// A relationship found between the three systems' numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pattern {
    /// The figure equals the hexagram's last four bits.
    EmbeddedFigure,
    /// Figure value plus upper trigram value is a multiple of 8.
    OctaveResonance,
    /// Figure value plus card number is a multiple of 9.
    Enneadic,
    /// The figure reads the same both ways.
    GeomanticPalindrome,
    /// Upper and lower trigrams are the same.
    TrigramSymmetry,
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmbeddedFigure => write!(f, "Geomantic pattern embedded in I Ching structure"),
            Self::OctaveResonance => write!(f, "Octave resonance (mod 8)"),
            Self::Enneadic => write!(f, "Enneadic pattern (mod 9)"),
            Self::GeomanticPalindrome => write!(f, "Geomantic palindrome symmetry"),
            Self::TrigramSymmetry => write!(f, "I Ching trigram symmetry"),
        }
    }
}

fn bits_value(bits: &str) -> u32 {
    u32::from_str_radix(bits, 2).unwrap_or(0)
}

fn ones(bits: &str) -> u32 {
    bits.chars().filter(|&c| c == '1').count() as u32
}

/// Patterns linking a figure key, a hexagram key, and a card number.
pub fn find_patterns(figure_key: &str, hexagram: &BinaryKey, card_number: u32) -> Vec<Pattern> {
    let mut patterns = Vec::new();
    let hex = hexagram.as_str();
    if hex.ends_with(figure_key) && figure_key.len() == 4 {
        patterns.push(Pattern::EmbeddedFigure);
    }
    let figure = bits_value(figure_key);
    if (figure + bits_value(hexagram.upper_pattern())) % 8 == 0 {
        patterns.push(Pattern::OctaveResonance);
    }
    if card_number > 0 && (figure + card_number) % 9 == 0 {
        patterns.push(Pattern::Enneadic);
    }
    if figure_key.chars().eq(figure_key.chars().rev()) {
        patterns.push(Pattern::GeomanticPalindrome);
    }
    if hexagram.upper_pattern() == hexagram.lower_pattern() {
        patterns.push(Pattern::TrigramSymmetry);
    }
    patterns
}

/// How the three numbers relate: shared divisors, an additive sequence, or
/// a ratio near the golden mean.
pub fn harmonic_alignment(numbers: [u32; 3]) -> String {
    let divisors: Vec<String> = (2..10)
        .filter(|d| numbers.iter().filter(|&&n| n > 0).all(|n| n % d == 0))
        .map(|d| d.to_string())
        .collect();
    if numbers.iter().any(|&n| n > 0) && !divisors.is_empty() {
        return format!("Harmonic resonance at multiples of {}", divisors.join(", "));
    }
    if numbers[2] == numbers[0] + numbers[1] {
        return "Fibonacci sequence alignment".to_string();
    }
    if numbers[1] > 0 {
        let ratio = f64::from(numbers[2]) / f64::from(numbers[1]);
        if ratio > 1.5 && ratio < 1.7 {
            return "Golden ratio approximation detected".to_string();
        }
    }
    "Numbers show unique harmonic signature".to_string()
}

/// How the lower trigram supports the upper.
pub fn trigram_interplay(trigrams: TrigramPair) -> String {
    use Trigram::{Earth, Fire, Heaven, Water};
    match (trigrams.lower, trigrams.upper) {
        (Heaven, Heaven) => "Heaven upon Heaven: Pure creative force, ultimate power".to_string(),
        (Heaven, Earth) => {
            "Heaven upon Earth: Creative manifestation, ideal meeting reality".to_string()
        }
        (Earth, Heaven) => "Earth upon Heaven: Receptive to divine inspiration".to_string(),
        (Fire, Water) => {
            "Fire upon Water: Passion meeting emotion, transformative alchemy".to_string()
        }
        (Water, Fire) => {
            "Water upon Fire: Emotion tempering passion, controlled transformation".to_string()
        }
        (lower, upper) => format!(
            "{} (foundation) supporting {} (expression)",
            lower.essence(),
            upper.essence()
        ),
    }
}

/// A number with its single-digit reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reduced {
    /// The value before reduction.
    pub value: u32,
    /// Its reduction.
    pub reduced: u32,
}

impl Reduced {
    /// Reduce `value`.
    pub fn of(value: u32) -> Self {
        Self {
            value,
            reduced: reduce_number(value),
        }
    }
}

impl std::fmt::Display for Reduced {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} → {}: {}",
            self.value,
            self.reduced,
            number_meaning(self.reduced)
        )
    }
}

/// The full numerical profile of a reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Numerology {
    /// Figure key as a decimal value.
    pub figure_value: u32,
    /// King Wen number of the primary hexagram.
    pub hexagram_number: u32,
    /// Card number.
    pub card_number: u32,
    /// Ones in the figure key, reduced.
    pub figure_digit_sum: Reduced,
    /// Ones in the hexagram key, reduced.
    pub hexagram_digit_sum: Reduced,
    /// Card number, reduced.
    pub card_reduced: Reduced,
    /// Sum of the three numbers, reduced.
    pub core_vibration: Reduced,
    /// Meaning of the core vibration.
    pub vibration_meaning: String,
    /// Patterns found.
    pub patterns: Vec<Pattern>,
    /// Harmonic alignment summary.
    pub harmonic: String,
    /// Trigram interplay summary.
    pub interplay: String,
}

/// Analyze a figure key, a hexagram key and number, and a card number.
pub fn analyze(
    figure_key: &str,
    hexagram: &BinaryKey,
    hexagram_number: u32,
    card_number: u32,
    trigrams: TrigramPair,
) -> Numerology {
    let figure_value = bits_value(figure_key);
    let core = Reduced::of(figure_value + hexagram_number + card_number);
    Numerology {
        figure_value,
        hexagram_number,
        card_number,
        figure_digit_sum: Reduced::of(ones(figure_key)),
        hexagram_digit_sum: Reduced::of(ones(hexagram.as_str())),
        card_reduced: Reduced::of(card_number),
        vibration_meaning: vibration_meaning(core.reduced).to_string(),
        core_vibration: core,
        patterns: find_patterns(figure_key, hexagram, card_number),
        harmonic: harmonic_alignment([figure_value, hexagram_number, card_number]),
        interplay: trigram_interplay(trigrams),
    }
}
