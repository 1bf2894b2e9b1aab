//! Planetary hours and moon phase.
//!
//! A simplified model: day runs 06:00-18:00 and night 18:00-06:00, each
//! split into twelve equal hours. The planetary day runs from 06:00 to
//! 06:00, so the hours before dawn belong to the previous day's ruler.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Timelike};
use qg_oracle::Planet;
use serde::{Deserialize, Serialize};

const SUNRISE_HOUR: u32 = 6;
const SUNSET_HOUR: u32 = 18;

/// Day or night half of the planetary day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Sunrise to sunset.
    Day,
    /// Sunset to sunrise.
    Night,
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Night => write!(f, "night"),
        }
    }
}

/// The planetary hour at a moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetaryHour {
    /// Ruling planet.
    pub planet: Planet,
    /// Hour within the period, 1-12.
    pub hour_number: u32,
    /// Day or night.
    pub period: Period,
}

impl PlanetaryHour {
    /// Whether the hour falls in the day period.
    pub fn is_daytime(&self) -> bool {
        self.period == Period::Day
    }
}

/// One row of a day's schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledHour {
    /// Hour within the period, 1-12.
    pub hour: u32,
    /// Ruling planet.
    pub planet: Planet,
    /// Day or night.
    pub period: Period,
}

fn hour_ruler(date: NaiveDate, hours_since_sunrise: u32) -> Planet {
    let ruler = Planet::day_ruler(date.weekday().num_days_from_sunday());
    let index = (ruler.chaldean_index() + hours_since_sunrise as usize) % 7;
    Planet::CHALDEAN[index]
}

/// The planetary hour at a wall-clock time.
pub fn planetary_hour_at(at: NaiveDateTime) -> PlanetaryHour {
    let hour = at.hour();
    let (date, since_sunrise) = if hour >= SUNRISE_HOUR {
        (at.date(), hour - SUNRISE_HOUR)
    } else {
        let previous = at.date().checked_sub_days(Days::new(1)).unwrap_or(at.date());
        (previous, hour + 24 - SUNRISE_HOUR)
    };
    let period = if since_sunrise < SUNSET_HOUR - SUNRISE_HOUR {
        Period::Day
    } else {
        Period::Night
    };
    PlanetaryHour {
        planet: hour_ruler(date, since_sunrise),
        hour_number: since_sunrise % 12 + 1,
        period,
    }
}

/// The 24 hours of a planetary day: twelve day hours, then twelve night.
pub fn schedule_for(date: NaiveDate) -> Vec<ScheduledHour> {
    (0..24)
        .map(|i| ScheduledHour {
            hour: i % 12 + 1,
            planet: hour_ruler(date, i),
            period: if i < 12 { Period::Day } else { Period::Night },
        })
        .collect()
}

/// Approximate lunar phase band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoonPhase {
    /// First quarter of the cycle.
    WaxingCrescent,
    /// Second quarter.
    FirstQuarter,
    /// Third quarter.
    WaningGibbous,
    /// Last quarter.
    LastQuarter,
}

impl std::fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WaxingCrescent => write!(f, "Waxing Crescent"),
            Self::FirstQuarter => write!(f, "First Quarter"),
            Self::WaningGibbous => write!(f, "Waning Gibbous"),
            Self::LastQuarter => write!(f, "Last Quarter"),
        }
    }
}

/// Mean synodic month in days.
pub const LUNAR_CYCLE_DAYS: f64 = 29.53;

fn reference_new_moon() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 11).unwrap_or_default()
}

/// Fraction of the lunar cycle elapsed on `date`, in `0.0..1.0`.
pub fn lunar_age(date: NaiveDate) -> f64 {
    let days = (date - reference_new_moon()).num_days() as f64;
    days.rem_euclid(LUNAR_CYCLE_DAYS) / LUNAR_CYCLE_DAYS
}

/// Phase band on `date`.
pub fn moon_phase(date: NaiveDate) -> MoonPhase {
    match lunar_age(date) {
        a if a < 0.25 => MoonPhase::WaxingCrescent,
        a if a < 0.5 => MoonPhase::FirstQuarter,
        a if a < 0.75 => MoonPhase::WaningGibbous,
        _ => MoonPhase::LastQuarter,
    }
}
