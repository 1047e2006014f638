pub mod conditions;
pub mod config;
pub mod error;
pub mod nws;
pub mod output;
pub mod render;
pub mod units;

use conditions::Conditions;
use config::Config;
use error::Error;
use nws::Client;
use tracing::{info, warn};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub alerts: usize,
    pub radar: bool,
}

/// Fetches the latest observation and alerts, refreshes the radar image and
/// writes the fragment. Any fetch failure other than the radar aborts the run
/// before anything is written.
pub fn run(config: &Config) -> Result<Summary, Error> {
    let client = Client::new(config)?;

    let observation = client.get_latest_observation(&config.station)?;
    let conditions = Conditions::from(&observation);
    let alerts = client.get_active_alerts(&config.zone)?;

    let radar = match &config.radar {
        Some(radar) => refresh_radar(&client, config, radar),
        None => false,
    };

    let html = render::render(config, &conditions, &alerts, radar);
    output::replace(&config.output, html.as_bytes())?;
    info!(
        path = %config.output.display(),
        station = %config.station,
        alerts = alerts.len(),
        radar,
        "wrote weather fragment"
    );

    Ok(Summary {
        alerts: alerts.len(),
        radar,
    })
}

/// Downloads and stores the radar image. On failure the previous image is left
/// alone and the fragment goes out without a radar tag.
fn refresh_radar(client: &Client, config: &Config, radar: &config::RadarId) -> bool {
    let url = config.radar_url_for(radar);
    let stored = client
        .get_radar(radar, &url)
        .map_err(Error::from)
        .and_then(|image| output::replace(&config.radar_path, &image));
    match stored {
        Ok(()) => true,
        Err(err) => {
            warn!(%radar, error = %err, "radar image not refreshed, omitting it");
            false
        }
    }
}
