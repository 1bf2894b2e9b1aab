//! A full four-system reading.

use chrono::{DateTime, TimeZone, Utc};
use qg_oracle::{CastingMethod, HexagramCast, RandomSource, consult_oracle};
use serde::{Deserialize, Serialize};

use crate::draw::{DrawnCard, Talisman, draw_geomantic_figure, draw_tarot_card, talisman_for};
use crate::hours::{MoonPhase, PlanetaryHour, moon_phase, planetary_hour_at};
use crate::numerology::{Numerology, analyze};
use crate::synthesis::{Recommendations, recommendations, synthesize};
use crate::tables::{Correspondences, GeomanticFigure, HexagramRecord};

/// How much interpretation a reading carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    /// Core meanings and combined elements.
    #[default]
    Standard,
    /// Adds timing, moon phase, recommendations, and transformation.
    Detailed,
    /// Adds the numerical analysis.
    Comprehensive,
}

impl Depth {
    /// Parse a depth name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "basic" => Some(Self::Standard),
            "detailed" => Some(Self::Detailed),
            "comprehensive" | "full" => Some(Self::Comprehensive),
            _ => None,
        }
    }

    /// All depths, shallowest first.
    pub fn all() -> &'static [Self] {
        &[Self::Standard, Self::Detailed, Self::Comprehensive]
    }

    /// One-line description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Standard => "Core meanings and basic synthesis",
            Self::Detailed => "Extended interpretations with practical guidance",
            Self::Comprehensive => "Full synthesis with mathematical analysis",
        }
    }
}

impl std::fmt::Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Detailed => write!(f, "detailed"),
            Self::Comprehensive => write!(f, "comprehensive"),
        }
    }
}

/// Which system a reading is framed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Perspective {
    /// Earth, the microcosm.
    Geomancy,
    /// Heaven, the macrocosm.
    IChing,
    /// Archetypes mediating the two.
    Tarot,
    /// Talismanic action.
    Jafr,
    /// All systems weighted equally.
    #[default]
    Balanced,
}

impl Perspective {
    /// Parse a perspective name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace([' ', '-', '_'], "").as_str() {
            "geomancy" => Some(Self::Geomancy),
            "iching" => Some(Self::IChing),
            "tarot" => Some(Self::Tarot),
            "jafr" => Some(Self::Jafr),
            "balanced" => Some(Self::Balanced),
            _ => None,
        }
    }

    /// All perspectives.
    pub fn all() -> &'static [Self] {
        &[
            Self::Geomancy,
            Self::IChing,
            Self::Tarot,
            Self::Jafr,
            Self::Balanced,
        ]
    }
}

impl std::fmt::Display for Perspective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Geomancy => write!(f, "geomancy"),
            Self::IChing => write!(f, "iching"),
            Self::Tarot => write!(f, "tarot"),
            Self::Jafr => write!(f, "jafr"),
            Self::Balanced => write!(f, "balanced"),
        }
    }
}

/// A hexagram consultation resolved against the hexagram table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IChingReading {
    /// The raw consultation.
    pub cast: HexagramCast,
    /// Record of the primary hexagram.
    pub primary: HexagramRecord,
    /// Record of the secondary hexagram, when lines move.
    pub secondary: Option<HexagramRecord>,
}

/// Consult the oracle and look up both hexagrams.
pub fn consult_iching<R: RandomSource + ?Sized>(
    tables: &Correspondences,
    method: CastingMethod,
    rng: &mut R,
) -> IChingReading {
    let cast = consult_oracle(method, rng);
    let primary = tables.hexagrams.lookup(&cast.key);
    let secondary = cast
        .secondary
        .as_ref()
        .map(|s| tables.hexagrams.lookup(&s.key));
    IChingReading {
        cast,
        primary,
        secondary,
    }
}

/// What to ask and how to read it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReadingRequest {
    /// The question; empty for a general reading.
    pub query: String,
    /// Casting method for the hexagram.
    pub method: CastingMethod,
    /// Interpretation depth.
    pub depth: Depth,
    /// Starting perspective.
    pub perspective: Perspective,
}

impl ReadingRequest {
    /// A request with default method, depth, and perspective.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Set the casting method.
    pub fn with_method(mut self, method: CastingMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the depth.
    pub fn with_depth(mut self, depth: Depth) -> Self {
        self.depth = depth;
        self
    }

    /// Set the perspective.
    pub fn with_perspective(mut self, perspective: Perspective) -> Self {
        self.perspective = perspective;
        self
    }
}

/// A complete reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// The question asked.
    pub query: String,
    /// When the reading was made.
    pub timestamp: DateTime<Utc>,
    /// Interpretation depth.
    pub depth: Depth,
    /// Starting perspective.
    pub perspective: Perspective,
    /// Casting method used for the hexagram.
    pub method: CastingMethod,
    /// The geomantic figure.
    pub figure: GeomanticFigure,
    /// The hexagram consultation.
    pub iching: IChingReading,
    /// The tarot card.
    pub tarot: DrawnCard,
    /// Planetary hour at the time of reading.
    pub hour: PlanetaryHour,
    /// Moon phase on the day of reading.
    pub moon: MoonPhase,
    /// Talisman built from the figure.
    pub talisman: Talisman,
    /// Numerical analysis; comprehensive readings only.
    pub numerology: Option<Numerology>,
    /// Practical recommendations.
    pub recommendations: Recommendations,
    /// Synthesis text for the chosen depth.
    pub synthesis: String,
}

impl Reading {
    /// One-line summary of the three drawn symbols.
    pub fn summary(&self) -> String {
        format!(
            "Geomancy: {} | I Ching: {} | Tarot: {}",
            self.figure.name, self.iching.primary.english, self.tarot.card.name
        )
    }

    /// Display query, or `General reading` when none was given.
    pub fn query_or_general(&self) -> &str {
        if self.query.trim().is_empty() {
            "General reading"
        } else {
            &self.query
        }
    }
}

/// Run a full reading at wall-clock time `at`.
///
/// Draws the figure, casts the hexagram, then draws the card, all from
/// `rng` in that order.
pub fn run_reading<R, Tz>(
    tables: &Correspondences,
    request: &ReadingRequest,
    at: &DateTime<Tz>,
    rng: &mut R,
) -> Reading
where
    R: RandomSource + ?Sized,
    Tz: TimeZone,
{
    let figure = draw_geomantic_figure(&tables.geomancy, rng);
    let iching = consult_iching(tables, request.method, rng);
    let tarot = draw_tarot_card(&tables.tarot, rng);

    let local = at.naive_local();
    let hour = planetary_hour_at(local);
    let moon = moon_phase(local.date());
    let talisman = talisman_for(tables, figure.clone());

    let numerology = (request.depth == Depth::Comprehensive).then(|| {
        analyze(
            &figure.key,
            &iching.cast.key,
            u32::from(iching.primary.number),
            tarot.card.number,
            iching.cast.trigrams,
        )
    });
    let recommendations = recommendations(&figure, &iching.primary, &tarot.card);

    let mut reading = Reading {
        query: request.query.clone(),
        timestamp: at.with_timezone(&Utc),
        depth: request.depth,
        perspective: request.perspective,
        method: request.method,
        figure,
        iching,
        tarot,
        hour,
        moon,
        talisman,
        numerology,
        recommendations,
        synthesis: String::new(),
    };
    reading.synthesis = synthesize(&reading);
    reading
}

#[cfg(test)]
mod tests {
    use super::*;
    use qg_oracle::{Planet, ScriptedSource};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn noon_sunday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 7, 12, 0, 0).unwrap()
    }

    #[test]
    fn parse_depth_and_perspective() {
        assert_eq!(Depth::parse("Detailed"), Some(Depth::Detailed));
        assert_eq!(Depth::parse("deep"), None);
        assert_eq!(Perspective::parse("I Ching"), Some(Perspective::IChing));
        assert_eq!(Perspective::parse("i-ching"), Some(Perspective::IChing));
        assert_eq!(Perspective::parse("nope"), None);
        for depth in Depth::all() {
            assert_eq!(Depth::parse(&depth.to_string()), Some(*depth));
        }
    }

    #[test]
    fn all_heads_reading() {
        let tables = Correspondences::default();
        let mut src = ScriptedSource::constant_bit(true);
        let request = ReadingRequest::new("Will it rain?");
        let reading = run_reading(&tables, &request, &noon_sunday(), &mut src);

        assert_eq!(reading.figure.name, "Via");
        assert_eq!(reading.iching.primary.english, "The Creative");
        assert_eq!(
            reading.iching.secondary.as_ref().map(|r| r.english.as_str()),
            Some("The Receptive")
        );
        assert_eq!(reading.tarot.card.name, "The Fool");
        assert_eq!(reading.talisman.planet, Planet::Moon);
        assert_eq!(reading.talisman.square.size(), 9);
        assert_eq!(reading.hour.planet, Planet::Mars);
        assert!(reading.numerology.is_none());
        assert_eq!(
            reading.summary(),
            "Geomancy: Via | I Ching: The Creative | Tarot: The Fool"
        );
    }

    #[test]
    fn comprehensive_carries_numerology() {
        let tables = Correspondences::default();
        let mut rng = StdRng::seed_from_u64(11);
        let request = ReadingRequest::new("").with_depth(Depth::Comprehensive);
        let reading = run_reading(&tables, &request, &noon_sunday(), &mut rng);
        let numerology = reading.numerology.as_ref().expect("comprehensive");
        assert_eq!(numerology.figure_value, reading.figure.value());
        assert_eq!(reading.query_or_general(), "General reading");
    }

    #[test]
    fn random_method_never_has_secondary() {
        let tables = Correspondences::default();
        let mut rng = StdRng::seed_from_u64(3);
        let request = ReadingRequest::new("q").with_method(CastingMethod::Random);
        let reading = run_reading(&tables, &request, &noon_sunday(), &mut rng);
        assert!(reading.iching.secondary.is_none());
        assert!(reading.iching.cast.changing.is_empty());
    }

    #[test]
    fn seeded_readings_repeat() {
        let tables = Correspondences::default();
        let request = ReadingRequest::new("same").with_method(CastingMethod::Yarrow);
        let a = run_reading(&tables, &request, &noon_sunday(), &mut StdRng::seed_from_u64(8));
        let b = run_reading(&tables, &request, &noon_sunday(), &mut StdRng::seed_from_u64(8));
        assert_eq!(a, b);
    }

    #[test]
    fn reading_survives_json() {
        let tables = Correspondences::default();
        let mut rng = StdRng::seed_from_u64(21);
        let request = ReadingRequest::new("json").with_depth(Depth::Detailed);
        let reading = run_reading(&tables, &request, &noon_sunday(), &mut rng);
        let json = serde_json::to_string(&reading).unwrap();
        let back: Reading = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reading);
    }
}
