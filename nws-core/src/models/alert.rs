use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::{FeatureCollection, Timestamp};

pub type AlertCollection = FeatureCollection<Alert>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertStatus {
    Actual,
    Exercise,
    System,
    Test,
    Draft,
}

impl AlertStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Actual => "actual",
            AlertStatus::Exercise => "exercise",
            AlertStatus::System => "system",
            AlertStatus::Test => "test",
            AlertStatus::Draft => "draft",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertMessageType {
    Alert,
    Update,
    Cancel,
}

impl AlertMessageType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlertMessageType::Alert => "alert",
            AlertMessageType::Update => "update",
            AlertMessageType::Cancel => "cancel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertCategory {
    Met,
    Geo,
    Safety,
    Security,
    Rescue,
    Fire,
    Health,
    Env,
    Transport,
    Infra,
    #[serde(rename = "CBRNE")]
    Cbrne,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertSeverity {
    Extreme,
    Severe,
    Moderate,
    Minor,
    Unknown,
}

impl AlertSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Extreme => "Extreme",
            AlertSeverity::Severe => "Severe",
            AlertSeverity::Moderate => "Moderate",
            AlertSeverity::Minor => "Minor",
            AlertSeverity::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertCertainty {
    Observed,
    Likely,
    Possible,
    Unlikely,
    Unknown,
}

impl AlertCertainty {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlertCertainty::Observed => "Observed",
            AlertCertainty::Likely => "Likely",
            AlertCertainty::Possible => "Possible",
            AlertCertainty::Unlikely => "Unlikely",
            AlertCertainty::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertUrgency {
    Immediate,
    Expected,
    Future,
    Past,
    Unknown,
}

impl AlertUrgency {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlertUrgency::Immediate => "Immediate",
            AlertUrgency::Expected => "Expected",
            AlertUrgency::Future => "Future",
            AlertUrgency::Past => "Past",
            AlertUrgency::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertResponse {
    Shelter,
    Evacuate,
    Prepare,
    Execute,
    Avoid,
    Monitor,
    Assess,
    AllClear,
    None,
}

/// Another alert this one updates or cancels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "@id")]
    pub id: String,
    pub identifier: String,
    pub sender: String,
    pub sent: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geocode {
    #[serde(rename = "SAME", default)]
    pub same: Vec<String>,
    #[serde(rename = "UGC", default)]
    pub ugc: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub area_desc: String,
    #[serde(default)]
    pub geocode: Geocode,
    #[serde(default)]
    pub affected_zones: Vec<String>,
    #[serde(default)]
    pub references: Vec<Reference>,
    pub sent: Timestamp,
    pub effective: Timestamp,
    #[serde(default)]
    pub onset: Option<Timestamp>,
    pub expires: Timestamp,
    #[serde(default)]
    pub ends: Option<Timestamp>,
    pub status: AlertStatus,
    pub message_type: AlertMessageType,
    pub category: AlertCategory,
    pub severity: AlertSeverity,
    pub certainty: AlertCertainty,
    pub urgency: AlertUrgency,
    pub event: String,
    pub sender: String,
    pub sender_name: String,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instruction: Option<String>,
    pub response: AlertResponse,
    #[serde(default)]
    pub parameters: HashMap<String, Vec<String>>,
}

/// Active alert counts, broken down by region, area and zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertCount {
    pub total: u64,
    pub land: u64,
    pub marine: u64,
    #[serde(default)]
    pub regions: BTreeMap<String, u64>,
    #[serde(default)]
    pub areas: BTreeMap<String, u64>,
    #[serde(default)]
    pub zones: BTreeMap<String, u64>,
}

/// Event names the API recognizes, e.g. "Tornado Warning".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertTypes {
    pub event_types: Vec<String>,
}
