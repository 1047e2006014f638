use super::{Alert, Observation};
use crate::error::ParseError;
use crate::units::{Bearing, Speed, Temperature};
use serde_derive::Deserialize;

/// A `{ "value": ..., "unitCode": ... }` pair. api.weather.gov sends `null`
/// values freely, and sometimes nulls or leaves out the whole object.
#[derive(Debug, Deserialize)]
struct Value {
    #[serde(default)]
    value: Option<f64>,
    #[serde(rename = "unitCode", default)]
    unit: Option<String>,
}

impl Value {
    fn unit_is(&self, suffix: &str) -> bool {
        self.unit.as_deref().map_or(false, |u| u.ends_with(suffix))
    }

    fn temperature(&self) -> Option<Temperature> {
        let v = self.value?;
        Some(if self.unit_is("degF") {
            Temperature::from_fahrenheit(v)
        } else {
            Temperature::from_celsius(v)
        })
    }

    fn speed(&self) -> Option<Speed> {
        let v = self.value?;
        Some(if self.unit_is("km_h-1") {
            Speed::from_kilometers_per_hour(v)
        } else {
            Speed::from_meters_per_second(v)
        })
    }

    fn bearing(&self) -> Option<Bearing> {
        self.value.map(Bearing::from_degrees)
    }

    fn raw(&self) -> Option<f64> {
        self.value
    }
}

pub mod observation {
    use super::*;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Properties {
        #[serde(default)]
        timestamp: Option<String>,
        #[serde(default)]
        text_description: Option<String>,
        #[serde(default)]
        icon: Option<String>,
        #[serde(default)]
        temperature: Option<Value>,
        #[serde(default)]
        relative_humidity: Option<Value>,
        #[serde(default)]
        wind_chill: Option<Value>,
        #[serde(default)]
        heat_index: Option<Value>,
        #[serde(default)]
        dewpoint: Option<Value>,
        #[serde(default)]
        precipitation_last6_hours: Option<Value>,
        #[serde(default)]
        wind_speed: Option<Value>,
        #[serde(default)]
        wind_gust: Option<Value>,
        #[serde(default)]
        wind_direction: Option<Value>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Response {
        properties: Properties,
    }

    impl Response {
        pub fn to_observation(&self) -> Observation {
            let p = &self.properties;
            Observation {
                timestamp: p.timestamp.clone(),
                description: p.text_description.clone(),
                icon: p.icon.clone(),
                temperature: p.temperature.as_ref().and_then(Value::temperature),
                humidity: p.relative_humidity.as_ref().and_then(Value::raw),
                wind_chill: p.wind_chill.as_ref().and_then(Value::temperature),
                heat_index: p.heat_index.as_ref().and_then(Value::temperature),
                dewpoint: p.dewpoint.as_ref().and_then(Value::temperature),
                precipitation_last_6_hours: p
                    .precipitation_last6_hours
                    .as_ref()
                    .and_then(Value::raw),
                wind_speed: p.wind_speed.as_ref().and_then(Value::speed),
                wind_gust: p.wind_gust.as_ref().and_then(Value::speed),
                wind_direction: p.wind_direction.as_ref().and_then(Value::bearing),
            }
        }
    }

    pub fn parse(body: &str) -> Result<Observation, ParseError> {
        let res = serde_json::from_str::<Response>(body)?;
        Ok(res.to_observation())
    }
}

pub mod alerts {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Properties {
        #[serde(default)]
        headline: Option<String>,
        #[serde(default)]
        event: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    struct Feature {
        properties: Properties,
    }

    #[derive(Debug, Deserialize)]
    pub struct Response {
        #[serde(default)]
        features: Vec<Feature>,
    }

    impl Response {
        pub fn to_alerts(&self) -> Vec<Alert> {
            self.features
                .iter()
                .map(|f| Alert {
                    headline: f.properties.headline.clone(),
                    event: f.properties.event.clone(),
                })
                .collect()
        }
    }

    pub fn parse(body: &str) -> Result<Vec<Alert>, ParseError> {
        let res = serde_json::from_str::<Response>(body)?;
        Ok(res.to_alerts())
    }
}
