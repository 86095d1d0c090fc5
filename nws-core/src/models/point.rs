use serde::{Deserialize, Serialize};
use std::fmt;

use super::Feature;

pub type Point = Feature<PointProperties>;

/// Metadata for the forecast grid cell covering a coordinate, as returned by
/// `/points/{lat},{lon}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointProperties {
    pub grid_id: String,
    pub grid_x: i32,
    pub grid_y: i32,
    pub forecast: String,
    pub forecast_hourly: String,
    pub forecast_grid_data: String,
    pub observation_stations: String,
    #[serde(default)]
    pub forecast_office: Option<String>,
    #[serde(default)]
    pub forecast_zone: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub fire_weather_zone: Option<String>,
    pub time_zone: String,
    #[serde(default)]
    pub radar_station: Option<String>,
}

impl PointProperties {
    pub fn grid_ref(&self) -> GridRef {
        GridRef {
            office: self.grid_id.clone(),
            x: self.grid_x,
            y: self.grid_y,
        }
    }
}

/// A forecast office plus grid X/Y, identifying one forecast cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridRef {
    pub office: String,
    pub x: i32,
    pub y: i32,
}

impl GridRef {
    pub fn new(office: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            office: office.into(),
            x,
            y,
        }
    }
}

impl fmt::Display for GridRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{},{}", self.office, self.x, self.y)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;

    #[test]
    fn decodes_point_and_grid_ref() {
        let point: Point = decode(fixtures::POINT_TOP.as_bytes()).unwrap();

        assert_eq!(point.properties.grid_ref(), GridRef::new("TOP", 31, 80));
        assert_eq!(point.properties.time_zone, "America/Chicago");
        assert_eq!(point.properties.radar_station.as_deref(), Some("KTWX"));
        assert_eq!(point.properties.grid_ref().to_string(), "TOP/31,80");
    }

    #[test]
    fn point_missing_grid_is_rejected() {
        let body = br#"{"properties": {"gridId": "TOP", "timeZone": "America/Chicago"}}"#;
        assert!(decode::<Point>(body).is_err());
    }
}
