//! Plain-text rendering of hexagrams, figures, talismans, and readings.

use qg_oracle::{Hexagram, Line, render_square};

use crate::draw::{Talisman, figure_rows};
use crate::reading::{IChingReading, Reading};
use crate::synthesis::perspective_intro;
use crate::tables::GeomanticFigure;

const YANG: &str = "━━━━━━━━━";
const YIN: &str = "━━━   ━━━";

/// Draw the six lines, line 6 on top, marking moving lines.
pub fn render_lines(hexagram: &Hexagram, changing: &[u8]) -> String {
    let mut out = String::new();
    for number in (1..=6u8).rev() {
        let line = hexagram.line(number).unwrap_or(Line::Yin);
        let glyph = match line {
            Line::Yang => YANG,
            Line::Yin => YIN,
        };
        let marker = if changing.contains(&number) {
            match line {
                Line::Yang => "  o",
                Line::Yin => "  x",
            }
        } else {
            ""
        };
        out.push_str(&format!("  {number} {glyph}{marker}\n"));
    }
    out
}

/// Text block for a hexagram consultation.
pub fn render_hexagram(iching: &IChingReading) -> String {
    let cast = &iching.cast;
    let record = &iching.primary;
    let trigrams = cast.trigrams;
    let changing: Vec<u8> = cast.changing.iter().collect();

    let mut out = String::new();
    out.push_str(&format!(
        "Hexagram {}: {} ({})\n",
        record.number, record.english, record.chinese
    ));
    out.push_str(&format!(
        "Upper: {} {}  Lower: {} {}\n",
        trigrams.upper.symbol(),
        trigrams.upper,
        trigrams.lower.symbol(),
        trigrams.lower
    ));
    out.push_str(&format!("Binary: {}  Method: {}\n", cast.key, cast.method));
    out.push_str(&format!("Judgment: {}\n", record.judgment));
    out.push_str(&render_lines(&cast.primary, &changing));

    if cast.has_changes() {
        out.push_str(&format!("Changing lines: {}\n", cast.changing));
    }
    if let (Some(secondary), Some(record)) = (&cast.secondary, &iching.secondary) {
        out.push_str(&format!(
            "Evolving to: Hexagram {}: {} ({})\n",
            record.number, record.english, secondary.key
        ));
        out.push_str(&render_lines(&secondary.hexagram, &[]));
    }
    out
}

/// Text block for a geomantic figure.
pub fn render_figure(figure: &GeomanticFigure) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", figure.name, figure.key));
    for row in figure_rows(&figure.key) {
        out.push_str(&format!("    {row}\n"));
    }
    out.push_str(&format!(
        "Planet: {}  Element: {}\n",
        figure.planet, figure.element
    ));
    out.push_str(&format!("{}\n", figure.meaning));
    out
}

/// Text block for a talisman, including its square.
pub fn render_talisman(talisman: &Talisman) -> String {
    let jafr = &talisman.jafr;
    let mut out = String::new();
    out.push_str(&format!("Talisman of {}\n", talisman.figure.name));
    out.push_str(&format!("  Letter: {} (value {})\n", jafr.letter, jafr.value));
    out.push_str(&format!("  Angel: {}\n", jafr.angel));
    out.push_str(&format!("  Divine name: {}\n", jafr.divine_name));
    out.push_str(&format!("  Use: {}\n", jafr.purpose));
    out.push('\n');
    out.push_str(&render_square(&talisman.square, &talisman.planet.to_string()));
    out
}

/// Full text of a reading.
pub fn render_reading(reading: &Reading) -> String {
    let rule = "=".repeat(60);
    let mut out = String::new();

    out.push_str(&format!("{rule}\nQUADRUPLE GODDESS READING\n{rule}\n"));
    out.push_str(&format!("Query: {}\n", reading.query_or_general()));
    out.push_str(&format!(
        "Date: {}\n",
        reading.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!(
        "Depth: {}  Perspective: {}\n",
        reading.depth, reading.perspective
    ));
    out.push_str(&format!(
        "Planetary hour: {} ({} hour {})  Moon: {}\n",
        reading.hour.planet, reading.hour.period, reading.hour.hour_number, reading.moon
    ));
    if let Some(intro) = perspective_intro(reading) {
        out.push_str(&format!("\n{intro}\n"));
    }

    out.push_str("\n--- GEOMANCY ---\n");
    out.push_str(&render_figure(&reading.figure));

    out.push_str("\n--- I CHING ---\n");
    out.push_str(&render_hexagram(&reading.iching));

    let card = &reading.tarot.card;
    out.push_str("\n--- TAROT ---\n");
    out.push_str(&format!("{} ({})\n", card.name, reading.tarot.suit));
    out.push_str(&format!(
        "Element: {}  Planet: {}\n{}\n",
        card.element, card.planet, card.meaning
    ));

    out.push_str("\n--- JAFR ---\n");
    out.push_str(&render_talisman(&reading.talisman));

    out.push_str(&format!("\n{rule}\n"));
    out.push_str(&reading.synthesis);

    let recs = &reading.recommendations;
    out.push_str("\nRecommendations:\n");
    out.push_str(&format!("  Immediate: {}\n", recs.immediate));
    out.push_str(&format!("  Short-term: {}\n", recs.short_term));
    out.push_str(&format!("  Long-term: {}\n", recs.long_term));
    out.push_str(&format!("  Ritual: {}\n", recs.ritual));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::{ReadingRequest, consult_iching, run_reading};
    use crate::tables::Correspondences;
    use chrono::{TimeZone, Utc};
    use qg_oracle::{CastingMethod, ScriptedSource};

    #[test]
    fn lines_print_top_first_with_markers() {
        let hexagram = Hexagram::parse("100000").unwrap();
        let text = render_lines(&hexagram, &[6]);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], "  6 ━━━━━━━━━  o");
        assert_eq!(rows[5], "  1 ━━━   ━━━");
    }

    #[test]
    fn hexagram_block_shows_evolution() {
        let tables = Correspondences::default();
        let mut src = ScriptedSource::constant_bit(true);
        let iching = consult_iching(&tables, CastingMethod::Coins, &mut src);
        let text = render_hexagram(&iching);
        assert!(text.starts_with("Hexagram 1: The Creative"));
        assert!(text.contains("Upper: ☰ Heaven  Lower: ☰ Heaven"));
        assert!(text.contains("Changing lines: [1, 2, 3, 4, 5, 6]"));
        assert!(text.contains("Evolving to: Hexagram 2: The Receptive (000000)"));
    }

    #[test]
    fn unchanged_hexagram_has_no_evolution() {
        let tables = Correspondences::default();
        let mut src = ScriptedSource::constant_bit(false);
        let iching = consult_iching(&tables, CastingMethod::Random, &mut src);
        let text = render_hexagram(&iching);
        assert!(text.starts_with("Hexagram 2: The Receptive"));
        assert!(!text.contains("Evolving to"));
        assert!(!text.contains("Changing lines"));
    }

    #[test]
    fn full_reading_text() {
        let tables = Correspondences::default();
        let mut src = ScriptedSource::constant_bit(true);
        let at = Utc.with_ymd_and_hms(2024, 1, 7, 12, 0, 0).unwrap();
        let reading = run_reading(&tables, &ReadingRequest::new(""), &at, &mut src);
        let text = render_reading(&reading);
        assert!(text.contains("Query: General reading"));
        assert!(text.contains("Via (1111)"));
        assert!(text.contains("Moon (9x9 Magic Square):"));
        assert!(text.contains("Magic Constant: 369"));
        assert!(text.contains("INTEGRATED SYNTHESIS"));
        assert!(text.contains("Ritual: Create talisman during Moon hour"));
    }
}
