//! Oracle core for the Quadruple Goddess divination system.
//!
//! Provides I Ching hexagram casting (coins, yarrow stalks, uniform random),
//! trigram resolution, changing-line transformation into a secondary
//! hexagram, and planetary magic squares (fixed traditional tables plus a
//! Siamese-method constructor for odd orders). All randomness flows through
//! an injectable [`RandomSource`].

pub mod casting;
pub mod error;
pub mod hexagram;
pub mod oracle;
pub mod planet;
pub mod random;
pub mod square;
pub mod trigram;

pub use casting::{CastLine, CastingMethod, Casting, LineDetail, StalkDivision, cast};
pub use error::{OracleError, OracleResult, SizeReason};
pub use hexagram::{BinaryKey, ChangingLines, Hexagram, Line};
pub use oracle::{HexagramCast, SecondaryHexagram, consult_oracle, derive_secondary};
pub use planet::Planet;
pub use random::{RandomSource, ScriptedSource};
pub use square::{
    MagicSquare, custom_square, magic_constant, planet_square, render_plain, render_square, siamese,
    square_for_planet,
};
pub use trigram::{Trigram, TrigramPair};
