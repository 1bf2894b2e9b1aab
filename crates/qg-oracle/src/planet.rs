//! The seven classical planets.

use serde::{Deserialize, Serialize};

use crate::error::{OracleError, OracleResult};

/// A classical planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    /// Order 3 square.
    Saturn,
    /// Order 4 square.
    Jupiter,
    /// Order 5 square.
    Mars,
    /// Order 6 square.
    Sun,
    /// Order 7 square.
    Venus,
    /// Order 8 square.
    Mercury,
    /// Order 9 square.
    Moon,
}

impl Planet {
    /// The planets in Chaldean order, slowest to fastest.
    pub const CHALDEAN: [Self; 7] = [
        Self::Saturn,
        Self::Jupiter,
        Self::Mars,
        Self::Sun,
        Self::Venus,
        Self::Mercury,
        Self::Moon,
    ];

    /// Parse a planet name, case-insensitively.
    pub fn parse(s: &str) -> OracleResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "saturn" => Ok(Self::Saturn),
            "jupiter" => Ok(Self::Jupiter),
            "mars" => Ok(Self::Mars),
            "sun" => Ok(Self::Sun),
            "venus" => Ok(Self::Venus),
            "mercury" => Ok(Self::Mercury),
            "moon" => Ok(Self::Moon),
            _ => Err(OracleError::UnknownPlanet(s.to_string())),
        }
    }

    /// Order of the planet's traditional magic square.
    pub fn square_size(self) -> usize {
        match self {
            Self::Saturn => 3,
            Self::Jupiter => 4,
            Self::Mars => 5,
            Self::Sun => 6,
            Self::Venus => 7,
            Self::Mercury => 8,
            Self::Moon => 9,
        }
    }

    /// The planet whose square has order `size`.
    pub fn for_square_size(size: usize) -> Option<Self> {
        Self::CHALDEAN.into_iter().find(|p| p.square_size() == size)
    }

    /// Position in the Chaldean sequence.
    pub fn chaldean_index(self) -> usize {
        match self {
            Self::Saturn => 0,
            Self::Jupiter => 1,
            Self::Mars => 2,
            Self::Sun => 3,
            Self::Venus => 4,
            Self::Mercury => 5,
            Self::Moon => 6,
        }
    }

    /// Ruler of a weekday, counted from Sunday (0) to Saturday (6).
    pub fn day_ruler(days_from_sunday: u32) -> Self {
        match days_from_sunday % 7 {
            0 => Self::Sun,
            1 => Self::Moon,
            2 => Self::Mars,
            3 => Self::Mercury,
            4 => Self::Jupiter,
            5 => Self::Venus,
            _ => Self::Saturn,
        }
    }

    /// Traditional qualities of the planet.
    pub fn quality(self) -> &'static str {
        match self {
            Self::Sun => "Vitality, success, leadership",
            Self::Moon => "Intuition, emotions, receptivity",
            Self::Mercury => "Communication, intellect, travel",
            Self::Venus => "Love, beauty, harmony",
            Self::Mars => "Action, courage, conflict",
            Self::Jupiter => "Expansion, luck, wisdom",
            Self::Saturn => "Discipline, structure, karma",
        }
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Saturn => write!(f, "Saturn"),
            Self::Jupiter => write!(f, "Jupiter"),
            Self::Mars => write!(f, "Mars"),
            Self::Sun => write!(f, "Sun"),
            Self::Venus => write!(f, "Venus"),
            Self::Mercury => write!(f, "Mercury"),
            Self::Moon => write!(f, "Moon"),
        }
    }
}
