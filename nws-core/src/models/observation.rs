use serde::{Deserialize, Serialize};

use super::{Feature, FeatureCollection, QuantitativeValue, Timestamp};

pub type Observation = Feature<ObservationProperties>;

pub type ObservationCollection = FeatureCollection<ObservationProperties>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationProperties {
    #[serde(rename = "@id")]
    pub id: String,
    /// Station URL, e.g. `https://api.weather.gov/stations/KMHK`.
    pub station: String,
    pub timestamp: Timestamp,
    #[serde(default)]
    pub raw_message: Option<String>,
    #[serde(default)]
    pub text_description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub present_weather: Vec<PresentWeather>,
    #[serde(default)]
    pub elevation: Option<QuantitativeValue>,
    #[serde(default)]
    pub temperature: Option<QuantitativeValue>,
    #[serde(default)]
    pub dewpoint: Option<QuantitativeValue>,
    #[serde(default)]
    pub wind_direction: Option<QuantitativeValue>,
    #[serde(default)]
    pub wind_speed: Option<QuantitativeValue>,
    #[serde(default)]
    pub wind_gust: Option<QuantitativeValue>,
    #[serde(default)]
    pub barometric_pressure: Option<QuantitativeValue>,
    #[serde(default)]
    pub sea_level_pressure: Option<QuantitativeValue>,
    #[serde(default)]
    pub visibility: Option<QuantitativeValue>,
    #[serde(default)]
    pub max_temperature_last24_hours: Option<QuantitativeValue>,
    #[serde(default)]
    pub min_temperature_last24_hours: Option<QuantitativeValue>,
    #[serde(default)]
    pub precipitation_last_hour: Option<QuantitativeValue>,
    #[serde(default)]
    pub precipitation_last3_hours: Option<QuantitativeValue>,
    #[serde(default)]
    pub precipitation_last6_hours: Option<QuantitativeValue>,
    #[serde(default)]
    pub relative_humidity: Option<QuantitativeValue>,
    #[serde(default)]
    pub wind_chill: Option<QuantitativeValue>,
    #[serde(default)]
    pub heat_index: Option<QuantitativeValue>,
    #[serde(default)]
    pub cloud_layers: Vec<CloudLayer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudLayer {
    #[serde(default)]
    pub base: Option<QuantitativeValue>,
    /// METAR sky cover code: `FEW`, `SCT`, `BKN`, `OVC`, ...
    #[serde(default)]
    pub amount: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentWeather {
    #[serde(default)]
    pub intensity: Option<String>,
    #[serde(default)]
    pub modifier: Option<String>,
    #[serde(default)]
    pub weather: Option<String>,
    #[serde(default)]
    pub raw_string: Option<String>,
    #[serde(default)]
    pub in_vicinity: Option<bool>,
}
