//! Planetary correspondences.

use qg_oracle::Planet;
use serde::Serialize;

/// Traditional attributions of a planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanetCorrespondence {
    /// The planet.
    pub planet: Planet,
    /// Classical element.
    pub element: &'static str,
    /// Weekday it rules.
    pub day: &'static str,
    /// Associated metal.
    pub metal: &'static str,
    /// Associated color.
    pub color: &'static str,
}

/// Correspondences of `planet`.
pub fn correspondence(planet: Planet) -> PlanetCorrespondence {
    let (element, day, metal, color) = match planet {
        Planet::Sun => ("Fire", "Sunday", "Gold", "Gold/Yellow"),
        Planet::Moon => ("Water", "Monday", "Silver", "Silver/White"),
        Planet::Mercury => ("Air", "Wednesday", "Quicksilver", "Orange/Yellow"),
        Planet::Venus => ("Water", "Friday", "Copper", "Green"),
        Planet::Mars => ("Fire", "Tuesday", "Iron", "Red"),
        Planet::Jupiter => ("Air", "Thursday", "Tin", "Blue/Purple"),
        Planet::Saturn => ("Earth", "Saturday", "Lead", "Black/Indigo"),
    };
    PlanetCorrespondence {
        planet,
        element,
        day,
        metal,
        color,
    }
}

/// A phrase for the planet's inner nature.
pub fn essence(planet: Planet) -> &'static str {
    match planet {
        Planet::Sun => "Vital consciousness, creative will",
        Planet::Moon => "Receptive intuition, emotional wisdom",
        Planet::Mercury => "Adaptive intellect, communicative bridge",
        Planet::Venus => "Harmonizing love, aesthetic appreciation",
        Planet::Mars => "Dynamic action, courageous initiative",
        Planet::Jupiter => "Expansive wisdom, abundant growth",
        Planet::Saturn => "Structural discipline, karmic lessons",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_matches_day_ruler() {
        const DAYS: [&str; 7] = [
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ];
        for (i, day) in DAYS.iter().enumerate() {
            assert_eq!(correspondence(Planet::day_ruler(i as u32)).day, *day);
        }
    }
}
