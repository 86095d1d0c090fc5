use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A latitude/longitude pair as used in `/points/{lat},{lon}` paths.
///
/// No range checks are performed: out-of-range values are passed through
/// and the API answers them with a `404` or `400`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Canonical `"<lat>,<lon>"` form used for path segments and the
    /// `point` alert filter.
    pub fn path_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected \"<latitude>,<longitude>\", got '{0}'")]
pub struct ParseCoordinateError(String);

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoordinateError(s.to_string());

        let (lat, lon) = s.split_once(',').ok_or_else(err)?;
        let latitude = lat.trim().parse::<f64>().map_err(|_| err())?;
        let longitude = lon.trim().parse::<f64>().map_err(|_| err())?;

        Ok(Self::new(latitude, longitude))
    }
}
