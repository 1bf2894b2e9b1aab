//! Hexagram consultation: casting, trigram resolution, and derivation of
//! the secondary hexagram from changing lines.

use serde::{Deserialize, Serialize};

use crate::casting::{CastLine, CastingMethod, cast};
use crate::hexagram::{BinaryKey, ChangingLines, Hexagram};
use crate::random::RandomSource;
use crate::trigram::TrigramPair;

/// The hexagram a primary becomes once its changing lines have moved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryHexagram {
    /// The transformed hexagram.
    pub hexagram: Hexagram,
    /// Its binary key.
    pub key: BinaryKey,
    /// Its trigrams.
    pub trigrams: TrigramPair,
}

/// A full consultation: primary hexagram plus optional secondary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramCast {
    /// The casting method used.
    pub method: CastingMethod,
    /// The cast hexagram.
    pub primary: Hexagram,
    /// Binary key of the primary.
    pub key: BinaryKey,
    /// Trigrams of the primary.
    pub trigrams: TrigramPair,
    /// Moving lines.
    pub changing: ChangingLines,
    /// Present only when at least one line is moving.
    pub secondary: Option<SecondaryHexagram>,
    /// Per-line casting records in casting order.
    pub lines: Vec<CastLine>,
}

impl HexagramCast {
    /// Whether any line is moving.
    pub fn has_changes(&self) -> bool {
        !self.changing.is_empty()
    }
}

/// Derive the secondary hexagram, or `None` when nothing moves.
///
/// The secondary is terminal: it carries no changing lines of its own.
pub fn derive_secondary(primary: &Hexagram, changing: &ChangingLines) -> Option<SecondaryHexagram> {
    if changing.is_empty() {
        return None;
    }
    let hexagram = primary.transform(changing);
    Some(SecondaryHexagram {
        key: hexagram.key(),
        trigrams: hexagram.trigrams(),
        hexagram,
    })
}

/// Cast a hexagram and resolve everything derived from it.
pub fn consult_oracle<R: RandomSource + ?Sized>(method: CastingMethod, rng: &mut R) -> HexagramCast {
    let casting = cast(method, rng);
    let secondary = derive_secondary(&casting.hexagram, &casting.changing);
    HexagramCast {
        method,
        key: casting.hexagram.key(),
        trigrams: casting.hexagram.trigrams(),
        primary: casting.hexagram,
        changing: casting.changing,
        secondary,
        lines: casting.lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;
    use crate::trigram::Trigram;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn all_heads_moves_to_the_receptive() {
        let mut src = ScriptedSource::constant_bit(true);
        let cast = consult_oracle(CastingMethod::Coins, &mut src);
        assert_eq!(cast.key.as_str(), "111111");
        assert_eq!(cast.changing.len(), 6);
        let secondary = cast.secondary.expect("all lines move");
        assert_eq!(secondary.key.as_str(), "000000");
        assert_eq!(secondary.trigrams.upper, Trigram::Earth);
        assert_eq!(secondary.trigrams.lower, Trigram::Earth);
        assert_eq!(cast.trigrams.upper, Trigram::Heaven);
    }

    #[test]
    fn no_secondary_without_changes() {
        let mut rng = StdRng::seed_from_u64(5);
        let cast = consult_oracle(CastingMethod::Random, &mut rng);
        assert!(!cast.has_changes());
        assert!(cast.secondary.is_none());
    }

    #[test]
    fn secondary_flips_only_changing_lines() {
        let primary = Hexagram::parse("101010").unwrap();
        let changing = ChangingLines::from_lines([1, 6]);
        let secondary = derive_secondary(&primary, &changing).unwrap();
        assert_eq!(secondary.key.as_str(), "001011");
        assert_eq!(secondary.trigrams.upper, Trigram::Mountain);
        assert_eq!(secondary.trigrams.lower, Trigram::Wind);
    }

    #[test]
    fn reflipping_restores_primary() {
        let mut rng = StdRng::seed_from_u64(77);
        for _ in 0..50 {
            let cast = consult_oracle(CastingMethod::Coins, &mut rng);
            if let Some(secondary) = &cast.secondary {
                assert_eq!(secondary.hexagram.transform(&cast.changing), cast.primary);
            }
        }
    }

    #[test]
    fn key_matches_primary() {
        let mut rng = StdRng::seed_from_u64(9);
        let cast = consult_oracle(CastingMethod::Coins, &mut rng);
        assert_eq!(cast.key, cast.primary.key());
        assert_eq!(cast.trigrams, cast.primary.trigrams());
    }
}
