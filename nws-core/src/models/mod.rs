//! Response models, one canonical schema per resource.
//!
//! Most resources arrive as GeoJSON features whose payload lives under
//! `properties`; [`Feature`] and [`FeatureCollection`] carry that envelope
//! and the per-resource structs describe only the payload.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

pub mod alert;
pub mod forecast;
pub mod observation;
pub mod office;
pub mod point;
pub mod station;
pub mod zone;

pub use alert::{
    Alert, AlertCategory, AlertCertainty, AlertCollection, AlertCount, AlertMessageType,
    AlertResponse, AlertSeverity, AlertStatus, AlertTypes, AlertUrgency, Geocode, Reference,
};
pub use forecast::{Forecast, ForecastPeriod, ForecastProperties};
pub use observation::{
    CloudLayer, Observation, ObservationCollection, ObservationProperties, PresentWeather,
};
pub use office::{Headline, HeadlineCollection, Office, OfficeAddress, OfficeCollection};
pub use point::{GridRef, Point, PointProperties};
pub use station::{Station, StationCollection, StationProperties};
pub use zone::{
    Zone, ZoneCollection, ZoneForecast, ZoneForecastPeriod, ZoneForecastProperties,
    ZoneProperties, ZoneType,
};

/// Timestamps keep the offset the API sent (forecast periods are local
/// time, most other fields are UTC).
pub type Timestamp = DateTime<FixedOffset>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature<P> {
    #[serde(default)]
    pub id: Option<String>,
    pub properties: P,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection<P> {
    pub features: Vec<Feature<P>>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl<P> FeatureCollection<P> {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// The `properties` of each feature, in response order.
    pub fn items(&self) -> impl Iterator<Item = &P> {
        self.features.iter().map(|f| &f.properties)
    }
}

/// Link to the next page. Exposed as-is; the client does not follow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub next: Option<String>,
}

/// A measurement with its WMO unit code, e.g. `wmoUnit:degC`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeValue {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub unit_code: Option<String>,
    #[serde(default)]
    pub quality_control: Option<String>,
}
