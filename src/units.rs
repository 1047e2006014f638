const MPS_TO_MPH: f64 = 2.23694;

const COMPASS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature {
    c: f64,
}

impl Temperature {
    pub fn from_celsius(c: f64) -> Temperature {
        Temperature { c }
    }

    pub fn from_fahrenheit(f: f64) -> Temperature {
        Temperature {
            c: (f - 32.0) * 5.0 / 9.0,
        }
    }

    pub fn in_celsius(&self) -> f64 {
        self.c
    }

    pub fn in_fahrenheit(&self) -> f64 {
        9.0 / 5.0 * self.c + 32.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speed {
    mps: f64,
}

impl Speed {
    pub fn from_meters_per_second(mps: f64) -> Speed {
        Speed { mps }
    }

    pub fn from_kilometers_per_hour(kph: f64) -> Speed {
        Speed { mps: kph / 3.6 }
    }

    pub fn in_meters_per_second(&self) -> f64 {
        self.mps
    }

    pub fn in_miles_per_hour(&self) -> f64 {
        self.mps * MPS_TO_MPH
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bearing {
    deg: f64,
}

impl Bearing {
    pub fn from_degrees(deg: f64) -> Bearing {
        Bearing { deg }
    }

    pub fn to_compass(&self) -> &'static str {
        get_compass(self.deg)
    }
}

/// Maps a wind direction in degrees onto one of the 16 compass points.
///
/// Input outside `[0, 360)` is wrapped first, so `get_compass(d)` and
/// `get_compass(d + 360.0)` always agree. A NaN bearing maps to `"N"`.
pub fn get_compass(degrees: f64) -> &'static str {
    let deg = degrees.rem_euclid(360.0);
    if !deg.is_finite() {
        return COMPASS[0];
    }
    let index = (deg / 22.5 + 0.5).floor() as usize % COMPASS.len();
    COMPASS[index]
}

/// Rounds to `places` decimals from the exact binary value, the way Python's
/// `round` does: `2.675` is stored as `2.67499..` and rounds to `2.67`.
pub fn round_to(v: f64, places: usize) -> f64 {
    format!("{:.*}", places, v).parse().unwrap_or(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compass_sectors() {
        assert_eq!(get_compass(0.0), "N");
        assert_eq!(get_compass(11.24), "N");
        assert_eq!(get_compass(11.25), "NNE");
        assert_eq!(get_compass(90.0), "E");
        assert_eq!(get_compass(180.0), "S");
        assert_eq!(get_compass(270.0), "W");
        assert_eq!(get_compass(348.75), "N");
        assert_eq!(get_compass(348.74), "NNW");
        assert_eq!(get_compass(359.9), "N");
    }

    #[test]
    fn compass_wraps_full_turns() {
        let mut d = 0.0;
        while d < 360.0 {
            let label = get_compass(d);
            assert!(COMPASS.contains(&label), "{} -> {}", d, label);
            assert_eq!(label, get_compass(d + 360.0), "{}", d);
            assert_eq!(label, get_compass(d - 360.0), "{}", d);
            d += 0.5;
        }
    }

    #[test]
    fn compass_every_label_reachable() {
        for (i, label) in COMPASS.iter().enumerate() {
            assert_eq!(get_compass(i as f64 * 22.5), *label);
        }
    }

    #[test]
    fn compass_nan() {
        assert_eq!(get_compass(f64::NAN), "N");
    }

    #[test]
    fn fahrenheit_conversion() {
        assert_eq!(round_to(Temperature::from_celsius(20.0).in_fahrenheit(), 1), 68.0);
        assert_eq!(round_to(Temperature::from_celsius(-40.0).in_fahrenheit(), 1), -40.0);
        assert_eq!(round_to(Temperature::from_celsius(100.0).in_fahrenheit(), 1), 212.0);
        let t = Temperature::from_fahrenheit(50.0);
        assert!((t.in_celsius() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn speed_conversion() {
        assert_eq!(round_to(Speed::from_meters_per_second(1.0).in_miles_per_hour(), 2), 2.24);
        let s = Speed::from_kilometers_per_hour(36.0);
        assert!((s.in_meters_per_second() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(12.345, 1), 12.3);
        assert_eq!(round_to(12.36, 1), 12.4);
        assert_eq!(round_to(-3.26, 1), -3.3);
        assert_eq!(round_to(0.0, 2), 0.0);
    }

    #[test]
    fn rounding_uses_exact_value() {
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round_to(1.115, 2), 1.11);
        assert_eq!(round_to(1.005, 2), 1.0);
        assert!(round_to(f64::NAN, 1).is_nan());
    }
}
