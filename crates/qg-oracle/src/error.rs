//! Error types for the oracle core.

/// Errors that can occur in oracle operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// A magic square size could not be used.
    #[error("invalid square size {size}: {reason}")]
    InvalidSquareSize {
        /// The requested order.
        size: usize,
        /// Why it was rejected.
        reason: SizeReason,
    },

    /// Square rows were missing, ragged, or not N×N.
    #[error("malformed square: {0}")]
    MalformedSquare(String),

    /// A hexagram key was not six characters of '0' and '1'.
    #[error("invalid binary key: \"{0}\"")]
    InvalidBinaryKey(String),

    /// A planet name did not match one of the seven classical planets.
    #[error("unknown planet: {0}")]
    UnknownPlanet(String),
}

/// Why a square size was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeReason {
    /// Outside 3..=9.
    OutOfRange,
    /// Even, but the Siamese method needs an odd order.
    EvenForSiamese,
}

impl std::fmt::Display for SizeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange => write!(f, "must be between 3 and 9"),
            Self::EvenForSiamese => write!(f, "the Siamese method requires an odd size"),
        }
    }
}

impl OracleError {
    /// A size outside 3..=9.
    pub fn out_of_range(size: usize) -> Self {
        Self::InvalidSquareSize {
            size,
            reason: SizeReason::OutOfRange,
        }
    }

    /// An even size handed to the Siamese method.
    pub fn even_for_siamese(size: usize) -> Self {
        Self::InvalidSquareSize {
            size,
            reason: SizeReason::EvenForSiamese,
        }
    }
}

/// Convenience result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;
