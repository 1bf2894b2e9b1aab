//! Hexagram casting methods.
//!
//! Three methods produce a hexagram and its changing lines:
//! - **Coins**: three coins per line, heads 3 and tails 2, totals 6-9
//! - **Yarrow**: three divisions of a 50-stalk pool per line
//! - **Random**: six fair bits, never any changing lines
//!
//! Lines are generated in casting order and reversed into storage order
//! (top first) before the hexagram is built. Every [`Casting`] keeps the
//! per-line record in casting order so callers can inspect how each line
//! was produced.

use serde::{Deserialize, Serialize};

use crate::hexagram::{ChangingLines, Hexagram, Line};
use crate::random::RandomSource;

/// Stalks in the pool at the start of every yarrow line.
pub const YARROW_POOL: u32 = 50;

/// How a hexagram is cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CastingMethod {
    /// Three-coin method.
    #[default]
    Coins,
    /// Yarrow-stalk method.
    Yarrow,
    /// Six independent fair bits.
    Random,
}

impl CastingMethod {
    /// Parse a method name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "coins" | "coin" => Some(Self::Coins),
            "yarrow" | "stalks" | "yarrow-stalks" => Some(Self::Yarrow),
            "random" => Some(Self::Random),
            _ => None,
        }
    }

    /// Parse a method name, treating anything unrecognized as `Random`.
    pub fn parse_or_random(s: &str) -> Self {
        Self::parse(s).unwrap_or(Self::Random)
    }

    /// All methods.
    pub fn all() -> &'static [Self] {
        &[Self::Coins, Self::Yarrow, Self::Random]
    }
}

impl std::fmt::Display for CastingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Coins => write!(f, "coins"),
            Self::Yarrow => write!(f, "yarrow"),
            Self::Random => write!(f, "random"),
        }
    }
}

/// One division of the yarrow-stalk pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StalkDivision {
    /// Stalks being divided, after the hung stalk was removed.
    pub pool: u32,
    /// Size of the first group.
    pub group1: u32,
    /// Size of the second group.
    pub group2: u32,
    /// Sum of both group remainders, taken out of the pool.
    pub removed: u32,
}

/// How a single line came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineDetail {
    /// Three coin flips, `true` for heads.
    Coins {
        /// The three flips.
        tosses: [bool; 3],
    },
    /// Three yarrow divisions.
    Stalks {
        /// The three divisions in order.
        divisions: [StalkDivision; 3],
    },
    /// A single fair bit.
    Flip,
}

/// A line as produced during casting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastLine {
    /// The line value computed by the method (6-9 when it decides the
    /// line), or `None` for a plain flip.
    pub value: Option<u8>,
    /// The resulting line.
    pub line: Line,
    /// Whether the line is moving.
    pub changing: bool,
    /// Whether the value decided nothing and the line was filled with a
    /// fair bit instead.
    pub filled: bool,
    /// Method-specific record.
    pub detail: LineDetail,
}

/// The outcome of one casting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Casting {
    /// The method used.
    pub method: CastingMethod,
    /// The hexagram in storage order.
    pub hexagram: Hexagram,
    /// Moving line numbers.
    pub changing: ChangingLines,
    /// Per-line records in casting order.
    pub lines: Vec<CastLine>,
}

/// Map a line value to its line and whether it moves.
///
/// 6 is old yin, 7 young yang, 8 young yin, 9 old yang. Any other value
/// decides nothing.
pub fn line_from_value(value: u8) -> Option<(Line, bool)> {
    match value {
        6 => Some((Line::Yin, true)),
        7 => Some((Line::Yang, false)),
        8 => Some((Line::Yin, false)),
        9 => Some((Line::Yang, true)),
        _ => None,
    }
}

/// Score three coin tosses (heads 3, tails 2) and read the line.
///
/// Three tails are old yin, three heads old yang; otherwise one odd coin
/// out decides a young line.
pub fn coin_line(tosses: [bool; 3]) -> (u8, Line, bool) {
    match tosses.iter().filter(|&&heads| heads).count() {
        0 => (6, Line::Yin, true),
        1 => (7, Line::Yang, false),
        2 => (8, Line::Yin, false),
        _ => (9, Line::Yang, true),
    }
}

/// Remainder of a stalk group modulo 4, with 0 read as 4.
pub fn stalk_remainder(group: u32) -> u32 {
    match group % 4 {
        0 => 4,
        r => r,
    }
}

/// Contribution of the third division's removed-stalk sum.
///
/// A sum of 4 contributes 2 and a sum of 8 contributes 3; every other sum
/// contributes nothing.
pub fn third_division_value(removed: u32) -> u8 {
    match removed {
        4 => 2,
        8 => 3,
        _ => 0,
    }
}

/// Cast a hexagram with the given method.
pub fn cast<R: RandomSource + ?Sized>(method: CastingMethod, rng: &mut R) -> Casting {
    match method {
        CastingMethod::Coins => cast_coins(rng),
        CastingMethod::Yarrow => cast_yarrow(rng),
        CastingMethod::Random => cast_random(rng),
    }
}

/// Three-coin method.
///
/// Changing lines are numbered by their 1-based casting position.
pub fn cast_coins<R: RandomSource + ?Sized>(rng: &mut R) -> Casting {
    let mut changing = ChangingLines::new();
    let mut lines = Vec::with_capacity(Hexagram::LINE_COUNT);

    for position in 0..Hexagram::LINE_COUNT as u8 {
        let tosses = [rng.next_bit(), rng.next_bit(), rng.next_bit()];
        let (total, line, moving) = coin_line(tosses);
        if moving {
            changing.insert(position + 1);
        }
        lines.push(CastLine {
            value: Some(total),
            line,
            changing: moving,
            filled: false,
            detail: LineDetail::Coins { tosses },
        });
    }

    Casting {
        method: CastingMethod::Coins,
        hexagram: assemble(&lines),
        changing,
        lines,
    }
}

/// Yarrow-stalk method.
///
/// A line whose value is not 6-9 is filled with a fair bit and never
/// moves. Changing lines are recorded as `6 - position` and remapped to
/// `7 - n` once the sequence is reversed.
pub fn cast_yarrow<R: RandomSource + ?Sized>(rng: &mut R) -> Casting {
    let mut changing = ChangingLines::new();
    let mut lines = Vec::with_capacity(Hexagram::LINE_COUNT);

    for position in 0..Hexagram::LINE_COUNT as u8 {
        let (divisions, value) = divide_stalks(rng);
        let (line, moving, filled) = match line_from_value(value) {
            Some((line, moving)) => {
                if moving {
                    changing.insert(6 - position);
                }
                (line, moving, false)
            }
            None => (Line::from_bit(rng.next_bit()), false, true),
        };
        lines.push(CastLine {
            value: Some(value),
            line,
            changing: moving,
            filled,
            detail: LineDetail::Stalks { divisions },
        });
    }

    Casting {
        method: CastingMethod::Yarrow,
        hexagram: assemble(&lines),
        changing: changing.remap(|n| 7 - n),
        lines,
    }
}

/// Six fair bits with no changing lines.
pub fn cast_random<R: RandomSource + ?Sized>(rng: &mut R) -> Casting {
    let lines: Vec<CastLine> = (0..Hexagram::LINE_COUNT)
        .map(|_| CastLine {
            value: None,
            line: Line::from_bit(rng.next_bit()),
            changing: false,
            filled: false,
            detail: LineDetail::Flip,
        })
        .collect();

    Casting {
        method: CastingMethod::Random,
        hexagram: assemble(&lines),
        changing: ChangingLines::new(),
        lines,
    }
}

fn divide_stalks<R: RandomSource + ?Sized>(rng: &mut R) -> ([StalkDivision; 3], u8) {
    let mut stalks = YARROW_POOL;
    let mut divisions = [StalkDivision::default(); 3];
    let mut value = 0;

    for (n, slot) in divisions.iter_mut().enumerate() {
        stalks = stalks.saturating_sub(1);
        let group1 = if stalks > 1 {
            rng.next_in_range(1, stalks - 1)
        } else {
            1
        };
        let group2 = stalks.saturating_sub(group1);
        let removed = stalk_remainder(group1) + stalk_remainder(group2);
        *slot = StalkDivision {
            pool: stalks,
            group1,
            group2,
            removed,
        };
        stalks = stalks.saturating_sub(removed);
        if n == 2 {
            value = third_division_value(removed);
        }
    }

    (divisions, value)
}

/// Reverse casting order into storage order.
fn assemble(lines: &[CastLine]) -> Hexagram {
    let mut stored = [Line::Yin; 6];
    for (slot, cast) in stored.iter_mut().zip(lines.iter().rev()) {
        *slot = cast.line;
    }
    Hexagram::new(stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn line_values_map() {
        assert_eq!(line_from_value(6), Some((Line::Yin, true)));
        assert_eq!(line_from_value(7), Some((Line::Yang, false)));
        assert_eq!(line_from_value(8), Some((Line::Yin, false)));
        assert_eq!(line_from_value(9), Some((Line::Yang, true)));
        assert_eq!(line_from_value(0), None);
        assert_eq!(line_from_value(5), None);
    }

    #[test]
    fn coin_line_agrees_with_line_values() {
        for bits in 0u8..8 {
            let tosses = [bits & 1 != 0, bits & 2 != 0, bits & 4 != 0];
            let (total, line, moving) = coin_line(tosses);
            let expected: u8 = tosses.iter().map(|&h| if h { 3 } else { 2 }).sum();
            assert_eq!(total, expected);
            assert_eq!(line_from_value(total), Some((line, moving)));
        }
    }

    #[test]
    fn remainder_reads_zero_as_four() {
        assert_eq!(stalk_remainder(8), 4);
        assert_eq!(stalk_remainder(9), 1);
        assert_eq!(stalk_remainder(11), 3);
        assert_eq!(stalk_remainder(0), 4);
    }

    #[test]
    fn method_parse() {
        assert_eq!(CastingMethod::parse("coins"), Some(CastingMethod::Coins));
        assert_eq!(CastingMethod::parse("Yarrow"), Some(CastingMethod::Yarrow));
        assert_eq!(CastingMethod::parse("random"), Some(CastingMethod::Random));
        assert_eq!(CastingMethod::parse("tea leaves"), None);
        assert_eq!(
            CastingMethod::parse_or_random("tea leaves"),
            CastingMethod::Random
        );
    }

    #[test]
    fn all_heads_gives_six_old_yang() {
        let mut src = ScriptedSource::constant_bit(true);
        let casting = cast_coins(&mut src);
        assert_eq!(casting.hexagram.key().as_str(), "111111");
        assert_eq!(casting.changing.as_slice(), &[1, 2, 3, 4, 5, 6]);
        assert!(casting.lines.iter().all(|l| l.value == Some(9)));
        assert_eq!(src.bits_drawn(), 18);
    }

    #[test]
    fn all_tails_gives_six_old_yin() {
        let mut src = ScriptedSource::constant_bit(false);
        let casting = cast_coins(&mut src);
        assert_eq!(casting.hexagram.key().as_str(), "000000");
        assert_eq!(casting.changing.len(), 6);
    }

    #[test]
    fn coin_lines_are_reversed_into_storage() {
        // First line three heads (9), then five lines of heads-heads-tails (8).
        let mut bits = vec![true, true, true];
        for _ in 0..5 {
            bits.extend([true, true, false]);
        }
        let mut src = ScriptedSource::from_bits(bits);
        let casting = cast_coins(&mut src);
        // Casting order 9,8,8,8,8,8 → stored top-first reversed.
        assert_eq!(casting.hexagram.key().as_str(), "000001");
        assert_eq!(casting.changing.as_slice(), &[1]);
        assert_eq!(casting.lines[0].value, Some(9));
        assert_eq!(casting.lines[1].value, Some(8));
    }

    #[test]
    fn random_method_never_changes() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let casting = cast_random(&mut rng);
            assert!(casting.changing.is_empty());
            assert!(casting.lines.iter().all(|l| !l.changing));
        }
    }

    #[test]
    fn random_method_reads_bits_in_casting_order() {
        let mut src = ScriptedSource::from_bits(vec![true, false, false, false, false, false]);
        let casting = cast_random(&mut src);
        assert_eq!(casting.hexagram.key().as_str(), "000001");
    }

    #[test]
    fn yarrow_divisions_follow_the_pool() {
        let mut rng = StdRng::seed_from_u64(11);
        let casting = cast_yarrow(&mut rng);
        for line in &casting.lines {
            let LineDetail::Stalks { divisions } = line.detail else {
                panic!("yarrow line without stalk record");
            };
            assert_eq!(divisions[0].pool, YARROW_POOL - 1);
            for pair in divisions.windows(2) {
                assert_eq!(pair[1].pool, pair[0].pool - pair[0].removed - 1);
            }
            for d in &divisions {
                assert!(d.group1 >= 1 && d.group2 >= 1);
                assert_eq!(d.group1 + d.group2, d.pool);
                assert_eq!(d.removed, stalk_remainder(d.group1) + stalk_remainder(d.group2));
            }
        }
    }

    // The stated remainder rule only rewards third-division sums of 4 or 8,
    // but a 50-stalk pool makes the third division always remove 3 or 7.
    // Every yarrow line therefore decides nothing and is filled with a fair
    // bit, and the method never yields changing lines.
    #[test]
    fn yarrow_third_division_never_scores() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..200 {
            let casting = cast_yarrow(&mut rng);
            assert!(casting.changing.is_empty());
            for line in &casting.lines {
                let LineDetail::Stalks { divisions } = line.detail else {
                    panic!("yarrow line without stalk record");
                };
                assert!(matches!(divisions[2].removed, 3 | 7));
                assert_eq!(line.value, Some(0));
                assert!(line.filled);
            }
        }
    }

    #[test]
    fn third_division_scoring_rule() {
        assert_eq!(third_division_value(4), 2);
        assert_eq!(third_division_value(8), 3);
        assert_eq!(third_division_value(5), 0);
        assert_eq!(third_division_value(7), 0);
    }

    #[test]
    fn yarrow_fill_bits_come_from_source() {
        // Integer script drives the divisions; the bit script fills lines.
        let mut src = ScriptedSource::new(vec![true], vec![20]);
        let casting = cast_yarrow(&mut src);
        assert_eq!(casting.hexagram.key().as_str(), "111111");
        assert!(casting.changing.is_empty());
    }

    proptest! {
        #[test]
        fn every_method_yields_six_valid_lines(seed in any::<u64>(), which in 0usize..3) {
            let method = CastingMethod::all()[which];
            let mut rng = StdRng::seed_from_u64(seed);
            let casting = cast(method, &mut rng);
            prop_assert_eq!(casting.lines.len(), 6);
            prop_assert!(casting.hexagram.key().as_str().chars().all(|c| c == '0' || c == '1'));
            prop_assert!(casting.changing.iter().all(|n| (1..=6).contains(&n)));
        }

        #[test]
        fn coin_totals_decide_changing(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let casting = cast_coins(&mut rng);
            for (position, line) in casting.lines.iter().enumerate() {
                let total = line.value.unwrap_or(0);
                prop_assert!((6..=9).contains(&total));
                let moving = total == 6 || total == 9;
                prop_assert_eq!(line.changing, moving);
                prop_assert_eq!(casting.changing.contains(position as u8 + 1), moving);
            }
        }
    }
}
