//! Descriptors for every route the client knows how to call.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

use crate::{
    Coordinate, NwsError, Result,
    models::{GridRef, ZoneType},
    services::alerts::AlertQuery,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Insertion-ordered query parameters, one value per name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`, replacing the value if the name is already present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.0.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Parses an `application/x-www-form-urlencoded` query string.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::new();
        for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
            params.insert(name, value);
        }
        params
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// One API call: where it goes, how, and with which query string.
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    Point(Coordinate),
    GridForecast(GridRef),
    GridForecastHourly(GridRef),
    Stations,
    Station(String),
    StationObservations {
        station_id: String,
        range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    },
    LatestObservation(String),
    Alerts(AlertQuery),
    ActiveAlerts(AlertQuery),
    ActiveAlertCount,
    ActiveAlertsForZone(String),
    ActiveAlertsForArea(String),
    ActiveAlertsForRegion(String),
    AlertTypes,
    Zones(ZoneType),
    Zone(ZoneType, String),
    ZoneForecast(ZoneType, String),
    Offices,
    Office(String),
    OfficeHeadlines(String),
    /// A path and query lifted from a URL the API handed back, e.g. a
    /// point's `observationStations` link or a pagination `next` link.
    Linked { path: String, query: QueryParams },
}

impl Endpoint {
    /// Builds a [`Endpoint::Linked`] from an absolute URL or an
    /// absolute path. The query string is kept; a fragment is dropped.
    pub fn linked(target: &str) -> Result<Self> {
        if target.starts_with('/') {
            let without_fragment = target.split('#').next().unwrap_or_default();
            let (path, query) = match without_fragment.split_once('?') {
                Some((path, query)) => (path, query),
                None => (without_fragment, ""),
            };

            return Ok(Endpoint::Linked {
                path: path.to_string(),
                query: QueryParams::from_query(query),
            });
        }

        let url = url::Url::parse(target)
            .map_err(|e| NwsError::InvalidRequest(format!("Invalid linked URL '{target}': {e}")))?;

        Ok(Endpoint::Linked {
            path: url.path().to_string(),
            query: QueryParams::from_query(url.query().unwrap_or_default()),
        })
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::Point(coordinate) => format!("/points/{}", coordinate.path_string()),
            Endpoint::GridForecast(grid) => {
                format!("/gridpoints/{}/{},{}/forecast", grid.office, grid.x, grid.y)
            }
            Endpoint::GridForecastHourly(grid) => {
                format!("/gridpoints/{}/{},{}/forecast/hourly", grid.office, grid.x, grid.y)
            }
            Endpoint::Stations => "/stations".to_string(),
            Endpoint::Station(id) => format!("/stations/{id}"),
            Endpoint::StationObservations { station_id, .. } => {
                format!("/stations/{station_id}/observations")
            }
            Endpoint::LatestObservation(id) => format!("/stations/{id}/observations/latest"),
            Endpoint::Alerts(_) => "/alerts".to_string(),
            Endpoint::ActiveAlerts(_) => "/alerts/active".to_string(),
            Endpoint::ActiveAlertCount => "/alerts/active/count".to_string(),
            Endpoint::ActiveAlertsForZone(zone) => format!("/alerts/active/zone/{zone}"),
            Endpoint::ActiveAlertsForArea(area) => format!("/alerts/active/area/{area}"),
            Endpoint::ActiveAlertsForRegion(region) => format!("/alerts/active/region/{region}"),
            Endpoint::AlertTypes => "/alerts/types".to_string(),
            Endpoint::Zones(kind) => format!("/zones/{kind}"),
            Endpoint::Zone(kind, id) => format!("/zones/{kind}/{id}"),
            Endpoint::ZoneForecast(kind, id) => format!("/zones/{kind}/{id}/forecast"),
            Endpoint::Offices => "/offices".to_string(),
            Endpoint::Office(id) => format!("/offices/{id}"),
            Endpoint::OfficeHeadlines(id) => format!("/offices/{id}/headlines"),
            Endpoint::Linked { path, .. } => path.clone(),
        }
    }

    pub const fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    /// Query parameters, or `None` when there are none to send.
    pub fn query_items(&self) -> Option<QueryParams> {
        let params = match self {
            Endpoint::Alerts(query) | Endpoint::ActiveAlerts(query) => query.to_params(),
            Endpoint::StationObservations {
                range: Some((start, end)),
                ..
            } => {
                let mut params = QueryParams::new();
                params.insert("start", iso8601(start));
                params.insert("end", iso8601(end));
                params
            }
            Endpoint::Linked { query, .. } => query.clone(),
            _ => return None,
        };

        (!params.is_empty()).then_some(params)
    }
}

/// RFC 3339 with millisecond precision, the form the API expects in
/// query strings.
pub fn iso8601(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlertSeverity, AlertStatus};
    use chrono::TimeZone;

    fn grid() -> GridRef {
        GridRef {
            office: "TOP".into(),
            x: 31,
            y: 80,
        }
    }

    #[test]
    fn paths_interpolate_identifiers() {
        let cases = [
            (
                Endpoint::Point(Coordinate::new(39.7456, -97.0892)),
                "/points/39.7456,-97.0892",
            ),
            (Endpoint::GridForecast(grid()), "/gridpoints/TOP/31,80/forecast"),
            (
                Endpoint::GridForecastHourly(grid()),
                "/gridpoints/TOP/31,80/forecast/hourly",
            ),
            (Endpoint::Station("KTOP".into()), "/stations/KTOP"),
            (
                Endpoint::LatestObservation("KTOP".into()),
                "/stations/KTOP/observations/latest",
            ),
            (Endpoint::ActiveAlertCount, "/alerts/active/count"),
            (Endpoint::ActiveAlertsForArea("KS".into()), "/alerts/active/area/KS"),
            (Endpoint::Zones(ZoneType::Forecast), "/zones/forecast"),
            (
                Endpoint::ZoneForecast(ZoneType::Forecast, "KSZ009".into()),
                "/zones/forecast/KSZ009/forecast",
            ),
            (Endpoint::OfficeHeadlines("TOP".into()), "/offices/TOP/headlines"),
        ];

        for (endpoint, path) in cases {
            assert_eq!(endpoint.path(), path);
            assert_eq!(endpoint.method(), HttpMethod::Get);
        }
    }

    #[test]
    fn empty_alert_query_is_absent() {
        assert_eq!(Endpoint::Alerts(AlertQuery::default()).query_items(), None);
        assert_eq!(Endpoint::ActiveAlerts(AlertQuery::default()).query_items(), None);
        assert_eq!(Endpoint::Offices.query_items(), None);
    }

    #[test]
    fn alert_query_keeps_declaration_order() {
        let query = AlertQuery::new()
            .limit(5)
            .severity(AlertSeverity::Severe)
            .area("KS")
            .status(AlertStatus::Actual);

        let params = Endpoint::Alerts(query).query_items().expect("params");
        let names: Vec<_> = params.iter().map(|(k, _)| k).collect();

        assert_eq!(names, ["status", "area", "severity", "limit"]);
        assert_eq!(params.get("severity"), Some("Severe"));
        assert_eq!(params.get("limit"), Some("5"));
    }

    #[test]
    fn observation_range_uses_fractional_seconds() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 2, 12, 30, 0).unwrap();

        let endpoint = Endpoint::StationObservations {
            station_id: "KTOP".into(),
            range: Some((start, end)),
        };
        let params = endpoint.query_items().expect("params");

        assert_eq!(params.get("start"), Some("2024-03-01T00:00:00.000Z"));
        assert_eq!(params.get("end"), Some("2024-03-02T12:30:00.000Z"));

        let no_range = Endpoint::StationObservations {
            station_id: "KTOP".into(),
            range: None,
        };
        assert_eq!(no_range.query_items(), None);
    }

    #[test]
    fn insert_replaces_existing_name() {
        let mut params = QueryParams::new();
        params.insert("zone", "KSZ009");
        params.insert("zone", "KSZ010");

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("zone"), Some("KSZ010"));
    }

    #[test]
    fn linked_takes_path_from_absolute_url() {
        let endpoint =
            Endpoint::linked("https://api.weather.gov/gridpoints/TOP/31,80/stations").unwrap();
        assert_eq!(endpoint.path(), "/gridpoints/TOP/31,80/stations");

        let endpoint = Endpoint::linked("/offices/TOP").unwrap();
        assert_eq!(endpoint.path(), "/offices/TOP");

        assert!(matches!(
            Endpoint::linked("offices/TOP"),
            Err(NwsError::InvalidRequest(_))
        ));
    }

    #[test]
    fn linked_keeps_query_from_path_or_url() {
        for target in [
            "/alerts/active?area=KS&limit=5",
            "https://api.weather.gov/alerts/active?area=KS&limit=5#top",
        ] {
            let endpoint = Endpoint::linked(target).unwrap();
            assert_eq!(endpoint.path(), "/alerts/active");

            let params = endpoint.query_items().expect("params");
            assert_eq!(params.get("area"), Some("KS"));
            assert_eq!(params.get("limit"), Some("5"));
        }

        let endpoint = Endpoint::linked("/stations?cursor=abc%3D%3D").unwrap();
        assert_eq!(
            endpoint.query_items().and_then(|p| p.get("cursor").map(str::to_string)),
            Some("abc==".to_string())
        );

        assert_eq!(Endpoint::linked("/offices/TOP#x").unwrap().query_items(), None);
    }
}
