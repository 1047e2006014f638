use crate::config::{Config, RadarId, StationId, ZoneId};
use crate::error::{FetchError, Request};
use crate::units::{Bearing, Speed, Temperature};
use reqwest::blocking;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;
use std::rc::Rc;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

mod geojson;

const GEO_JSON: &str = "application/geo+json";

#[derive(Debug)]
struct ClientState {
    ua: String,
    base: String,
    retry_delay: Duration,
    client: blocking::Client,
}

/// Blocking api.weather.gov client. Every call is attempted at most twice:
/// once, and once more after `retry_delay` if the first failure was a
/// transport error or a 5xx.
#[derive(Clone, Debug)]
pub struct Client {
    state: Rc<ClientState>,
}

impl Client {
    pub fn new(config: &Config) -> Result<Client, FetchError> {
        let client = blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            // Reported against the first call the client would have made.
            .map_err(|source| FetchError::Transport {
                request: Request::Observation,
                source,
            })?;
        Ok(Client {
            state: Rc::new(ClientState {
                ua: config.user_agent.clone(),
                base: config.api_base.trim_end_matches('/').to_string(),
                retry_delay: config.retry_delay,
                client,
            }),
        })
    }

    pub fn get_latest_observation(&self, station: &StationId) -> Result<Observation, FetchError> {
        let url = format!("{}/stations/{}/observations/latest", self.state.base, station);
        let body = self.get_text(Request::Observation, &url)?;
        geojson::observation::parse(&body).map_err(|source| FetchError::Parse {
            request: Request::Observation,
            source,
        })
    }

    pub fn get_active_alerts(&self, zone: &ZoneId) -> Result<Vec<Alert>, FetchError> {
        let url = format!("{}/alerts/active/zone/{}", self.state.base, zone);
        let body = self.get_text(Request::Alerts, &url)?;
        geojson::alerts::parse(&body).map_err(|source| FetchError::Parse {
            request: Request::Alerts,
            source,
        })
    }

    /// Downloads the radar loop for `radar` from `url`, returning the raw image bytes.
    pub fn get_radar(&self, radar: &RadarId, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!(%radar, url, "fetching radar image");
        self.with_retry(|| {
            let res = self.send(Request::Radar, url, None)?;
            let content_type = res
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            if !content_type.starts_with("image/") {
                return Err(FetchError::NotAnImage {
                    request: Request::Radar,
                    content_type,
                });
            }
            let bytes = res.bytes().map_err(|source| FetchError::Transport {
                request: Request::Radar,
                source,
            })?;
            Ok(bytes.to_vec())
        })
    }

    fn get_text(&self, request: Request, url: &str) -> Result<String, FetchError> {
        debug!(%request, url, "fetching");
        self.with_retry(|| {
            self.send(request, url, Some(GEO_JSON))?
                .text()
                .map_err(|source| FetchError::Transport { request, source })
        })
    }

    /// Issues a GET and turns anything other than a 200 into [`FetchError::Status`].
    fn send(
        &self,
        request: Request,
        url: &str,
        accept: Option<&str>,
    ) -> Result<blocking::Response, FetchError> {
        let mut req = self
            .state
            .client
            .get(url)
            .header(USER_AGENT, &self.state.ua);
        if let Some(accept) = accept {
            req = req.header(ACCEPT, accept);
        }
        let res = req
            .send()
            .map_err(|source| FetchError::Transport { request, source })?;
        let status = res.status();
        if status != StatusCode::OK {
            let body = res.text().unwrap_or_default();
            return Err(FetchError::Status {
                request,
                status,
                body,
            });
        }
        Ok(res)
    }

    fn with_retry<T, F>(&self, f: F) -> Result<T, FetchError>
    where
        F: Fn() -> Result<T, FetchError>,
    {
        match f() {
            Err(err) if err.is_retryable() => {
                warn!(
                    request = %err.request(),
                    error = %err,
                    delay = ?self.state.retry_delay,
                    "retrying once"
                );
                thread::sleep(self.state.retry_delay);
                f()
            }
            res => res,
        }
    }
}

/// The latest observation for a station. Every field may be missing upstream.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Observation {
    pub timestamp: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub temperature: Option<Temperature>,
    /// Relative humidity, percent.
    pub humidity: Option<f64>,
    pub wind_chill: Option<Temperature>,
    pub heat_index: Option<Temperature>,
    pub dewpoint: Option<Temperature>,
    /// In whatever unit upstream reports, normally millimetres.
    pub precipitation_last_6_hours: Option<f64>,
    pub wind_speed: Option<Speed>,
    pub wind_gust: Option<Speed>,
    pub wind_direction: Option<Bearing>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Alert {
    pub headline: Option<String>,
    pub event: Option<String>,
}

impl Alert {
    /// The text shown on the dashboard for this alert.
    pub fn title(&self) -> &str {
        self.headline
            .as_deref()
            .or(self.event.as_deref())
            .unwrap_or("Null")
    }
}
