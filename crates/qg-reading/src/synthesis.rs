//! Synthesis text tying the four systems together.

use serde::{Deserialize, Serialize};

use crate::numerology::{binary_pattern, numerical_archetype};
use crate::reading::{Depth, Perspective, Reading};
use crate::tables::{GeomanticFigure, HexagramRecord, TarotCard};

/// Practical advice drawn from a reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    /// Next few days.
    pub immediate: String,
    /// This week.
    pub short_term: String,
    /// Longer arc.
    pub long_term: String,
    /// Talismanic timing.
    pub ritual: String,
}

/// Build recommendations from the three drawn symbols.
pub fn recommendations(
    figure: &GeomanticFigure,
    hexagram: &HexagramRecord,
    card: &TarotCard,
) -> Recommendations {
    Recommendations {
        immediate: format!("Focus on the energy of {}", figure.name),
        short_term: format!("Meditate on {}", hexagram.english),
        long_term: format!("Develop {} qualities", card.name),
        ritual: format!("Create talisman during {} hour", figure.planet),
    }
}

/// The first sentence of `text`, without its full stop.
pub fn first_sentence(text: &str) -> &str {
    text.split('.').next().unwrap_or(text).trim()
}

/// What to avoid under a figure.
pub fn contraindication(figure: &str) -> &'static str {
    match figure {
        "Via" => "rushing without direction",
        "Cauda Draconis" => "clinging to the past",
        "Puer" => "reckless action without planning",
        "Amissio" => "trying to hold onto what must be released",
        _ => "impatience",
    }
}

/// A concrete first step for a figure.
pub fn figure_action(figure: &str) -> String {
    match figure {
        "Via" => "Take the first step on a new path".to_string(),
        "Cauda Draconis" => "Release what no longer serves you".to_string(),
        "Puer" => "Act with courage but consider consequences".to_string(),
        "Amissio" => "Practice non-attachment and letting go".to_string(),
        other => format!("Work with {other} through practical application"),
    }
}

/// Compass direction of an element.
pub fn direction(element: &str) -> &'static str {
    match element {
        "Fire" => "South",
        "Water" => "West",
        "Air" => "East",
        "Earth" => "North",
        _ => "Center",
    }
}

/// The three elements of a reading, figure first.
fn elements(reading: &Reading) -> [&str; 3] {
    [
        reading.figure.element.as_str(),
        reading.iching.primary.element.as_str(),
        reading.tarot.card.element.as_str(),
    ]
}

/// Elements joined with `+`, skipping blanks.
pub fn combined_elements(elements: &[&str]) -> String {
    elements
        .iter()
        .filter(|e| !e.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Rhythm suggested by the dominant classical element.
///
/// Ties resolve in the order Fire, Water, Air, Earth.
pub fn optimal_rhythm(elements: &[&str]) -> &'static str {
    let mut distinct: Vec<&str> = elements.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    let count = |name: &str| distinct.iter().filter(|e| e.contains(name)).count();
    let dominant = ["Fire", "Water", "Air", "Earth"]
        .into_iter()
        .fold(("Fire", 0), |best, name| {
            let n = count(name);
            if n > best.1 { (name, n) } else { best }
        });
    match dominant.0 {
        "Water" => "Fluid, intuitive timing; follow emotional cues",
        "Air" => "Mental focus in morning, communication in afternoon",
        "Earth" => "Slow, steady progress with weekly checkpoints",
        _ => "Quick, decisive actions in 3-day cycles",
    }
}

/// Framing text for a starting perspective; `None` for balanced.
pub fn perspective_intro(reading: &Reading) -> Option<String> {
    let text = match reading.perspective {
        Perspective::Balanced => return None,
        Perspective::Geomancy => format!(
            "Starting with geomancy: the earthly foundation, {}. Geomancy is the \
             microcosm, the practical situation; form precedes manifestation.",
            reading.figure.name
        ),
        Perspective::IChing => format!(
            "Starting with the I Ching: cosmic principle, hexagram #{}. The I Ching \
             is the macrocosm; principle precedes form.",
            reading.iching.primary.number
        ),
        Perspective::Tarot => format!(
            "Starting with tarot: the archetype of {}. Tarot mediates between heaven \
             and earth; psyche precedes experience.",
            reading.tarot.card.name
        ),
        Perspective::Jafr => format!(
            "Starting with Jafr: the {} talisman. Jafr is practical magic; intention \
             precedes result.",
            reading.figure.name
        ),
    };
    Some(text)
}

/// Synthesis text for the reading's depth.
pub fn synthesize(reading: &Reading) -> String {
    let mut out = String::new();
    push_core(&mut out, reading);
    if reading.depth != Depth::Standard {
        push_detailed(&mut out, reading);
    }
    if reading.depth == Depth::Comprehensive {
        push_comprehensive(&mut out, reading);
    }
    out
}

fn push_core(out: &mut String, reading: &Reading) {
    let figure = &reading.figure;
    let hexagram = &reading.iching.primary;
    let card = &reading.tarot.card;

    out.push_str("INTEGRATED SYNTHESIS\n");
    out.push_str("Core insights:\n");
    out.push_str(&format!(
        "  Geomancy: {} - {}\n",
        figure.name,
        first_sentence(&figure.meaning)
    ));
    out.push_str(&format!(
        "  I Ching: #{} {} - {}\n",
        hexagram.number, hexagram.english, hexagram.judgment
    ));
    out.push_str(&format!("  Tarot: {} - {}\n", card.name, card.meaning));
    out.push_str(&format!(
        "Elemental blend: {}\n",
        combined_elements(&elements(reading))
    ));
}

fn push_detailed(out: &mut String, reading: &Reading) {
    let figure = &reading.figure;
    let hexagram = &reading.iching.primary;
    let card = &reading.tarot.card;

    out.push_str("\nTemporal alignment:\n");
    out.push_str(&format!(
        "  Current planetary hour: {} ({} hour {})\n",
        reading.hour.planet, reading.hour.period, reading.hour.hour_number
    ));
    out.push_str(&format!("  Optimal action time: next {} hour\n", figure.planet));
    out.push_str(&format!("  Moon phase: {}\n", reading.moon));

    out.push_str("\nPractical recommendations:\n");
    out.push_str(&format!(
        "  Immediate: focus on {}; avoid {}\n",
        first_sentence(&figure.meaning).to_lowercase(),
        contraindication(&figure.name)
    ));
    out.push_str(&format!(
        "  Short-term: develop {} energy; cultivate a {} mindset\n",
        card.name.to_lowercase(),
        hexagram.english.to_lowercase()
    ));
    out.push_str(&format!(
        "  Ritual: use the talisman during the {p} hour on {p}'s day\n",
        p = figure.planet
    ));
    out.push_str(&format!(
        "  Meditate on: the integration of {} ({}), {} ({}), and {} ({})\n",
        figure.element, figure.name, hexagram.element, hexagram.english, card.element, card.name
    ));

    let cast = &reading.iching.cast;
    if cast.has_changes() {
        out.push_str(&format!("\nTransformation: lines {} are changing", cast.changing));
        if let Some(secondary) = &reading.iching.secondary {
            out.push_str(&format!(
                ", evolving toward #{} {}",
                secondary.number, secondary.english
            ));
        }
        out.push('\n');
    }
}

fn push_comprehensive(out: &mut String, reading: &Reading) {
    let Some(numbers) = &reading.numerology else {
        return;
    };
    let figure = &reading.figure;
    let cast = &reading.iching.cast;
    let elements = elements(reading);

    out.push_str("\nMathematical correspondences:\n");
    out.push_str(&format!(
        "  Geomancy binary: {} (decimal {}): {}\n",
        figure.key,
        numbers.figure_value,
        numerical_archetype(numbers.figure_value)
    ));
    out.push_str(&format!(
        "  I Ching binary: {} (hexagram #{}, {} yang lines): {}\n",
        cast.key,
        numbers.hexagram_number,
        cast.primary.yang_count(),
        binary_pattern(cast.key.as_str())
    ));
    out.push_str(&format!(
        "  Tarot number: {} ({})\n",
        numbers.card_number, reading.tarot.suit
    ));

    out.push_str("\nTrigrams:\n");
    for (label, trigram) in [("Lower", cast.trigrams.lower), ("Upper", cast.trigrams.upper)] {
        out.push_str(&format!(
            "  {label}: {} {} - {}\n",
            trigram.symbol(),
            trigram,
            trigram.essence()
        ));
    }
    out.push_str(&format!("  Combined: {}\n", numbers.interplay));

    out.push_str("\nMathematical patterns:\n");
    if numbers.patterns.is_empty() {
        out.push_str("  Unique numerical signature (no common patterns)\n");
    }
    for pattern in &numbers.patterns {
        out.push_str(&format!("  {pattern}\n"));
    }
    out.push_str(&format!(
        "  Geomancy digit sum: {}\n",
        numbers.figure_digit_sum
    ));
    out.push_str(&format!(
        "  I Ching digit sum: {}\n",
        numbers.hexagram_digit_sum
    ));
    if numbers.card_number > 0 {
        out.push_str(&format!("  Tarot number: {}\n", numbers.card_reduced));
    }

    out.push_str("\nVibration:\n");
    out.push_str(&format!(
        "  Core vibration: {} ({})\n",
        numbers.core_vibration.reduced, numbers.vibration_meaning
    ));
    out.push_str(&format!("  Harmonic alignment: {}\n", numbers.harmonic));

    out.push_str("\nRhythm:\n");
    out.push_str(&format!(
        "  {} hour: {}\n",
        reading.hour.planet,
        reading.hour.planet.quality()
    ));
    out.push_str(&format!("  Optimal rhythm: {}\n", optimal_rhythm(&elements)));

    out.push_str("\nRitual structure:\n");
    out.push_str(&format!("  Time: during {}'s hour\n", reading.hour.planet));
    out.push_str(&format!("  Facing: {}\n", direction(&figure.element)));
    out.push_str(&format!("  Action: {}\n", figure_action(&figure.name)));

    out.push_str("\nReflective questions:\n");
    out.push_str(&format!(
        "  1. How does the pattern {} reflect in my current situation?\n",
        figure.key
    ));
    out.push_str(&format!(
        "  2. What does the movement from {} to {} teach about my path?\n",
        cast.trigrams.lower, cast.trigrams.upper
    ));
    out.push_str(&format!(
        "  3. How can I embody {} while grounded in {}?\n",
        reading.tarot.card.name, figure.name
    ));
}
