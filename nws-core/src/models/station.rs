use serde::{Deserialize, Serialize};

use super::{Feature, FeatureCollection, QuantitativeValue};

pub type Station = Feature<StationProperties>;

pub type StationCollection = FeatureCollection<StationProperties>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationProperties {
    #[serde(rename = "@id")]
    pub id: String,
    /// ICAO-style identifier used in station paths, e.g. `KMHK`.
    pub station_identifier: String,
    pub name: String,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub elevation: Option<QuantitativeValue>,
    #[serde(default)]
    pub forecast: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub fire_weather_zone: Option<String>,
}
