use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use weather_panel::config::{self, Config, RadarId, StationId, TemperatureUnit, ZoneId};

/// Render current NWS conditions and alerts into an OpenNMS JSP fragment.
#[derive(Debug, Parser)]
#[clap(version)]
struct Args {
    /// Observation station, e.g. KSFO.
    #[clap(long, env = "WEATHER_PANEL_STATION", default_value = config::DEFAULT_STATION)]
    station: StationId,

    /// Forecast zone to list active alerts for, e.g. CAZ006.
    #[clap(long, env = "WEATHER_PANEL_ZONE", default_value = config::DEFAULT_ZONE)]
    zone: ZoneId,

    #[clap(long, env = "WEATHER_PANEL_UNIT", value_enum, default_value_t = TemperatureUnit::Fahrenheit)]
    unit: TemperatureUnit,

    /// Radar station whose image is shown under the conditions.
    #[clap(long, env = "WEATHER_PANEL_RADAR", default_value = config::DEFAULT_RADAR)]
    radar: RadarId,

    /// Leave the radar image out.
    #[clap(long, env = "WEATHER_PANEL_NO_RADAR")]
    no_radar: bool,

    #[clap(long, env = "WEATHER_PANEL_API_BASE", default_value = config::DEFAULT_API_BASE)]
    api_base: String,

    /// Radar image URL; `{station}` is replaced with the radar id.
    #[clap(long, env = "WEATHER_PANEL_RADAR_URL", default_value = config::DEFAULT_RADAR_URL)]
    radar_url: String,

    #[clap(long, env = "WEATHER_PANEL_OUTPUT", default_value = config::DEFAULT_OUTPUT)]
    output: PathBuf,

    #[clap(long, env = "WEATHER_PANEL_RADAR_PATH", default_value = config::DEFAULT_RADAR_PATH)]
    radar_path: PathBuf,

    /// Image source the fragment uses for the radar file.
    #[clap(long, env = "WEATHER_PANEL_RADAR_SRC", default_value = config::DEFAULT_RADAR_SRC)]
    radar_src: String,

    /// api.weather.gov rejects requests without one.
    #[clap(long, env = "WEATHER_PANEL_USER_AGENT", default_value = config::DEFAULT_USER_AGENT)]
    user_agent: String,

    #[clap(long, env = "WEATHER_PANEL_TIMEOUT_SECS", default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[clap(long, env = "WEATHER_PANEL_RETRY_DELAY_MS", default_value_t = config::DEFAULT_RETRY_DELAY_MS)]
    retry_delay_ms: u64,
}

impl Args {
    fn into_config(self) -> Config {
        Config {
            station: self.station,
            zone: self.zone,
            unit: self.unit,
            radar: if self.no_radar { None } else { Some(self.radar) },
            api_base: self.api_base,
            radar_url: self.radar_url,
            output: self.output,
            radar_path: self.radar_path,
            radar_src: self.radar_src,
            user_agent: self.user_agent,
            timeout: Duration::from_secs(self.timeout_secs),
            retry_delay: Duration::from_millis(self.retry_delay_ms),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("weather_panel=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match weather_panel::run(&args.into_config()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "weather fragment not updated");
            ExitCode::from(err.exit_code())
        }
    }
}
