//! Turns an [`Observation`] into display-ready readings.
//!
//! Every field either carries a rounded value or a fixed placeholder. The
//! placeholders differ per field because the dashboard has always shown them
//! that way: a missing temperature reads `0`, a missing wind chill `N/A`, a
//! missing humidity `Null`.

use crate::config::TemperatureUnit;
use crate::nws::Observation;
use crate::units::{round_to, Speed, Temperature};
use std::fmt;

const NO_TIMESTAMP: &str = "00:00:00";
const NULL: &str = "Null";
const NOT_APPLICABLE: &str = "N/A";
const ZERO: &str = "0";
const NO_PRECIPITATION: &str = "0.00";

#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    /// A measured value, already rounded to `places` decimals.
    Value { value: f64, places: usize },
    /// A compass point.
    Label(&'static str),
    /// What to show when the station did not report the field.
    Missing(&'static str),
}

impl Reading {
    fn measured(value: f64, places: usize) -> Reading {
        Reading::Value {
            value: round_to(value, places),
            places,
        }
    }

    #[cfg(test)]
    fn value(&self) -> Option<f64> {
        match self {
            Reading::Value { value, .. } => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Reading::Value { value, places } => write!(f, "{:.*}", places, value),
            Reading::Label(s) | Reading::Missing(s) => f.write_str(s),
        }
    }
}

/// A temperature in both scales; the renderer picks one.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureReading {
    pub celsius: Reading,
    pub fahrenheit: Reading,
}

impl TemperatureReading {
    fn new(t: Option<Temperature>, missing: &'static str) -> TemperatureReading {
        match t {
            Some(t) => TemperatureReading {
                celsius: Reading::measured(t.in_celsius(), 1),
                fahrenheit: Reading::measured(t.in_fahrenheit(), 1),
            },
            None => TemperatureReading {
                celsius: Reading::Missing(missing),
                fahrenheit: Reading::Missing(missing),
            },
        }
    }

    pub fn in_unit(&self, unit: TemperatureUnit) -> &Reading {
        match unit {
            TemperatureUnit::Fahrenheit => &self.fahrenheit,
            TemperatureUnit::Celsius => &self.celsius,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conditions {
    pub timestamp: String,
    pub description: String,
    pub icon: String,
    pub temperature: TemperatureReading,
    pub humidity: Reading,
    pub wind_chill: TemperatureReading,
    pub heat_index: TemperatureReading,
    pub dewpoint: TemperatureReading,
    pub precipitation: Reading,
    /// Miles per hour.
    pub wind_speed: Reading,
    /// Miles per hour.
    pub wind_gust: Reading,
    pub wind_direction: Reading,
}

fn mph(speed: Option<Speed>) -> Reading {
    speed.map_or(Reading::Missing(ZERO), |s| {
        Reading::measured(s.in_miles_per_hour(), 2)
    })
}

fn text(s: &Option<String>, missing: &str) -> String {
    s.clone().unwrap_or_else(|| missing.to_string())
}

impl From<&Observation> for Conditions {
    fn from(obs: &Observation) -> Conditions {
        Conditions {
            timestamp: text(&obs.timestamp, NO_TIMESTAMP),
            description: text(&obs.description, NULL),
            icon: text(&obs.icon, NULL),
            temperature: TemperatureReading::new(obs.temperature, ZERO),
            humidity: obs
                .humidity
                .map_or(Reading::Missing(NULL), |h| Reading::measured(h, 1)),
            wind_chill: TemperatureReading::new(obs.wind_chill, NOT_APPLICABLE),
            heat_index: TemperatureReading::new(obs.heat_index, NOT_APPLICABLE),
            dewpoint: TemperatureReading::new(obs.dewpoint, ZERO),
            precipitation: obs
                .precipitation_last_6_hours
                .map_or(Reading::Missing(NO_PRECIPITATION), |p| {
                    Reading::measured(p, 2)
                }),
            wind_speed: mph(obs.wind_speed),
            wind_gust: mph(obs.wind_gust),
            wind_direction: obs
                .wind_direction
                .map_or(Reading::Missing(ZERO), |b| Reading::Label(b.to_compass())),
        }
    }
}
