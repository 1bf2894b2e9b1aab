//! Jafr correspondences for talisman work, keyed by geomantic figure.

use std::collections::BTreeMap;

use qg_oracle::Planet;
use serde::{Deserialize, Serialize};

/// Talismanic correspondences of one geomantic figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JafrRecord {
    /// Arabic letter.
    pub letter: String,
    /// Abjad value of the letter.
    pub value: u32,
    /// Magic square description, e.g. `3×3 Saturn`.
    pub square: String,
    /// Angelic governor.
    pub angel: String,
    /// Divine name invoked.
    pub divine_name: String,
    /// Primary use.
    #[serde(rename = "use")]
    pub purpose: String,
}

impl JafrRecord {
    /// Fallback for figures missing from the table.
    pub fn unknown() -> Self {
        Self {
            letter: "Unknown".to_string(),
            value: 0,
            square: "3×3 Saturn".to_string(),
            angel: "Unknown".to_string(),
            divine_name: "Unknown".to_string(),
            purpose: "No specific use available.".to_string(),
        }
    }
}

/// Jafr records keyed by figure name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JafrTable {
    /// Records by figure name.
    pub records: BTreeMap<String, JafrRecord>,
}

/// Angelic governor of a planet.
pub fn planet_angel(planet: Planet) -> &'static str {
    match planet {
        Planet::Sun => "Ruqyail",
        Planet::Moon => "Jibril",
        Planet::Mars => "Samsamail",
        Planet::Mercury => "Mikail",
        Planet::Jupiter => "Sarfiyail",
        Planet::Venus => "Anyail",
        Planet::Saturn => "Kasfiyail",
    }
}

// (figure, planet, letter, abjad value, divine name, use)
const RECORDS: [(&str, Planet, &str, u32, &str, &str); 16] = [
    ("Via", Planet::Moon, "Alif", 1, "Al-Hadi", "Safe travel and finding the right path"),
    ("Populus", Planet::Moon, "Ba", 2, "Al-Jami", "Gathering support and community"),
    ("Conjunctio", Planet::Mercury, "Jim", 3, "Al-Wadud", "Reconciliation and union"),
    ("Carcer", Planet::Saturn, "Dal", 4, "Al-Qabid", "Binding and protecting boundaries"),
    ("Fortuna Major", Planet::Sun, "Ha", 5, "Al-Fattah", "Lasting success and victory"),
    ("Fortuna Minor", Planet::Sun, "Waw", 6, "Al-Basit", "Swift aid and momentum"),
    ("Acquisitio", Planet::Jupiter, "Zay", 7, "Ar-Razzaq", "Increase of wealth and gain"),
    ("Amissio", Planet::Venus, "Ḥa", 8, "Al-Ghani", "Releasing loss and attachment"),
    ("Laetitia", Planet::Jupiter, "Ta", 9, "Al-Latif", "Joy, health, and good news"),
    ("Tristitia", Planet::Saturn, "Ya", 10, "As-Sabur", "Endurance through hardship"),
    ("Puella", Planet::Venus, "Kaf", 20, "Al-Jamil", "Harmony, beauty, and attraction"),
    ("Puer", Planet::Mars, "Lam", 30, "Al-Qawi", "Courage and strength in conflict"),
    ("Rubeus", Planet::Mars, "Mim", 40, "Al-Aziz", "Mastering passion and anger"),
    ("Albus", Planet::Mercury, "Nun", 50, "Al-Hakim", "Clarity of mind and peace"),
    ("Caput Draconis", Planet::Jupiter, "Sin", 60, "Al-Mubdi", "Auspicious beginnings"),
    ("Cauda Draconis", Planet::Saturn, "Ayn", 70, "Al-Muid", "Endings and release"),
];

impl Default for JafrTable {
    fn default() -> Self {
        let records = RECORDS
            .iter()
            .map(|&(figure, planet, letter, value, divine_name, purpose)| {
                let n = planet.square_size();
                let record = JafrRecord {
                    letter: letter.to_string(),
                    value,
                    square: format!("{n}×{n} {planet}"),
                    angel: planet_angel(planet).to_string(),
                    divine_name: divine_name.to_string(),
                    purpose: purpose.to_string(),
                };
                (figure.to_string(), record)
            })
            .collect();
        Self { records }
    }
}

impl JafrTable {
    /// Record for `figure`, or [`JafrRecord::unknown`].
    pub fn lookup(&self, figure: &str) -> JafrRecord {
        self.records
            .get(figure)
            .cloned()
            .unwrap_or_else(JafrRecord::unknown)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::geomancy::figure_names;

    #[test]
    fn every_figure_has_a_record() {
        let table = JafrTable::default();
        assert_eq!(table.len(), 16);
        for name in figure_names() {
            assert_ne!(table.lookup(name).value, 0, "missing {name}");
        }
    }

    #[test]
    fn abjad_values_ascend() {
        let values: Vec<u32> = RECORDS.iter().map(|r| r.3).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn square_follows_planet() {
        let table = JafrTable::default();
        let puer = table.lookup("Puer");
        assert_eq!(puer.square, "5×5 Mars");
        assert_eq!(puer.angel, "Samsamail");
    }

    #[test]
    fn use_field_name_on_the_wire() {
        let record = JafrTable::default().lookup("Via");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["use"], "Safe travel and finding the right path");
    }

    #[test]
    fn unknown_figure() {
        assert_eq!(JafrTable::default().lookup("Nobody"), JafrRecord::unknown());
    }
}
