use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_STATION: &str = "KSFO";
pub const DEFAULT_ZONE: &str = "CAZ006";
pub const DEFAULT_RADAR: &str = "MUX";
pub const DEFAULT_API_BASE: &str = "https://api.weather.gov";
pub const DEFAULT_RADAR_URL: &str = "https://radblast.wunderground.com/cgi-bin/radar/WUNIDS_map?station={station}&num=10&delay=50&rainsnow=1&smooth=1";
pub const DEFAULT_OUTPUT: &str = "/opt/opennms/jetty-webapps/opennms/includes/weather.jsp";
pub const DEFAULT_RADAR_PATH: &str = "/opt/opennms/jetty-webapps/opennms/includes/radar.gif";
pub const DEFAULT_RADAR_SRC: &str = "/opennms/includes/radar.gif";
pub const DEFAULT_USER_AGENT: &str = concat!("weather-panel/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 500;

static STATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9]{3,5}$").unwrap());
static ZONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{2}[CZ][0-9]{3}$").unwrap());
static RADAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9]{3,4}$").unwrap());

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid {kind} id: {value:?}")]
pub struct InvalidId {
    kind: &'static str,
    value: String,
}

fn parse_id(kind: &'static str, re: &Regex, s: &str) -> Result<String, InvalidId> {
    let id = s.trim().to_ascii_uppercase();
    if re.is_match(&id) {
        Ok(id)
    } else {
        Err(InvalidId {
            kind,
            value: s.to_string(),
        })
    }
}

macro_rules! identifier {
    ($name:ident, $kind:literal, $re:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = InvalidId;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_id($kind, &$re, s).map($name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

identifier!(StationId, "station", STATION_RE);
identifier!(ZoneId, "zone", ZONE_RE);
identifier!(RadarId, "radar", RADAR_RE);

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TemperatureUnit {
    Fahrenheit,
    Celsius,
}

/// Everything a single run needs. Built once by the binary and passed down.
#[derive(Debug, Clone)]
pub struct Config {
    pub station: StationId,
    pub zone: ZoneId,
    pub unit: TemperatureUnit,
    /// `None` disables the radar download and the radar image tag.
    pub radar: Option<RadarId>,
    pub api_base: String,
    /// URL of the radar image with `{station}` standing in for the radar id.
    pub radar_url: String,
    pub output: PathBuf,
    pub radar_path: PathBuf,
    /// Where the dashboard serves `radar_path` from.
    pub radar_src: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub retry_delay: Duration,
}

impl Config {
    pub fn radar_url_for(&self, radar: &RadarId) -> String {
        self.radar_url.replace("{station}", radar.as_str())
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            station: StationId(DEFAULT_STATION.to_string()),
            zone: ZoneId(DEFAULT_ZONE.to_string()),
            unit: TemperatureUnit::Fahrenheit,
            radar: Some(RadarId(DEFAULT_RADAR.to_string())),
            api_base: DEFAULT_API_BASE.to_string(),
            radar_url: DEFAULT_RADAR_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            radar_path: PathBuf::from(DEFAULT_RADAR_PATH),
            radar_src: DEFAULT_RADAR_SRC.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        }
    }
}
