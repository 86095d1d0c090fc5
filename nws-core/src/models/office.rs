use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A forecast office. Served as flat JSON-LD rather than a GeoJSON feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Office {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<OfficeAddress>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub fax_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub nws_region: Option<String>,
    #[serde(default)]
    pub responsible_counties: Vec<String>,
    #[serde(default)]
    pub responsible_forecast_zones: Vec<String>,
    #[serde(default)]
    pub responsible_fire_zones: Vec<String>,
    #[serde(default)]
    pub approved_observation_stations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeAddress {
    #[serde(default)]
    pub street_address: Option<String>,
    #[serde(default)]
    pub address_locality: Option<String>,
    #[serde(default)]
    pub address_region: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficeCollection {
    #[serde(rename = "@graph", alias = "features")]
    pub offices: Vec<Office>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlineCollection {
    #[serde(rename = "@graph")]
    pub headlines: Vec<Headline>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Headline {
    #[serde(rename = "@id")]
    pub url: String,
    pub id: String,
    pub office: String,
    pub important: bool,
    pub issuance_time: Timestamp,
    pub link: String,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub content: String,
}
