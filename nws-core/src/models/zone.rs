use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{Feature, FeatureCollection, Timestamp};

pub type Zone = Feature<ZoneProperties>;

pub type ZoneCollection = FeatureCollection<ZoneProperties>;

pub type ZoneForecast = Feature<ZoneForecastProperties>;

/// Zone families accepted in `/zones/{type}` paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneType {
    Land,
    Marine,
    Forecast,
    Public,
    Coastal,
    Offshore,
    Fire,
    County,
}

impl ZoneType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ZoneType::Land => "land",
            ZoneType::Marine => "marine",
            ZoneType::Forecast => "forecast",
            ZoneType::Public => "public",
            ZoneType::Coastal => "coastal",
            ZoneType::Offshore => "offshore",
            ZoneType::Fire => "fire",
            ZoneType::County => "county",
        }
    }

    pub const fn all() -> &'static [ZoneType] {
        &[
            ZoneType::Land,
            ZoneType::Marine,
            ZoneType::Forecast,
            ZoneType::Public,
            ZoneType::Coastal,
            ZoneType::Offshore,
            ZoneType::Fire,
            ZoneType::County,
        ]
    }
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown zone type '{0}'. Supported types: land, marine, forecast, public, coastal, offshore, fire, county.")]
pub struct ParseZoneTypeError(String);

impl FromStr for ZoneType {
    type Err = ParseZoneTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lower = value.to_lowercase();

        ZoneType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| ParseZoneTypeError(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneProperties {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub effective_date: Option<Timestamp>,
    #[serde(default)]
    pub expiration_date: Option<Timestamp>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub forecast_office: Option<String>,
    #[serde(default)]
    pub grid_identifier: Option<String>,
    #[serde(default)]
    pub cwa: Vec<String>,
    #[serde(default)]
    pub time_zone: Vec<String>,
    #[serde(default)]
    pub observation_stations: Vec<String>,
    #[serde(default)]
    pub radar_station: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneForecastProperties {
    #[serde(default)]
    pub zone: Option<String>,
    pub updated: Timestamp,
    pub periods: Vec<ZoneForecastPeriod>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneForecastPeriod {
    pub number: u32,
    pub name: String,
    pub detailed_forecast: String,
}
