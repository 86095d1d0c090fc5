use crate::{
    Coordinate, Endpoint, Result,
    endpoint::QueryParams,
    executor::Executor,
    models::{
        AlertCertainty, AlertCollection, AlertCount, AlertMessageType, AlertSeverity, AlertStatus,
        AlertTypes, AlertUrgency,
    },
};

/// Filters accepted by `/alerts` and `/alerts/active`. Unset fields are
/// left out of the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertQuery {
    pub status: Option<AlertStatus>,
    pub message_type: Option<AlertMessageType>,
    pub event: Option<String>,
    pub code: Option<String>,
    pub area: Option<String>,
    pub point: Option<Coordinate>,
    pub region: Option<String>,
    pub region_type: Option<String>,
    pub zone: Option<String>,
    pub urgency: Option<AlertUrgency>,
    pub severity: Option<AlertSeverity>,
    pub certainty: Option<AlertCertainty>,
    pub limit: Option<u32>,
}

impl AlertQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: AlertStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn message_type(mut self, message_type: AlertMessageType) -> Self {
        self.message_type = Some(message_type);
        self
    }

    /// Event name, e.g. "Tornado Warning".
    pub fn event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// State or marine area code, e.g. "KS" or "GM".
    pub fn area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    pub fn point(mut self, point: Coordinate) -> Self {
        self.point = Some(point);
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// "land" or "marine".
    pub fn region_type(mut self, region_type: impl Into<String>) -> Self {
        self.region_type = Some(region_type.into());
        self
    }

    pub fn zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    pub fn urgency(mut self, urgency: AlertUrgency) -> Self {
        self.urgency = Some(urgency);
        self
    }

    pub fn severity(mut self, severity: AlertSeverity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn certainty(mut self, certainty: AlertCertainty) -> Self {
        self.certainty = Some(certainty);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query parameters in a fixed order regardless of the order the
    /// builder methods were called in.
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();

        if let Some(status) = self.status {
            params.insert("status", status.as_str());
        }
        if let Some(message_type) = self.message_type {
            params.insert("message_type", message_type.as_str());
        }
        if let Some(event) = &self.event {
            params.insert("event", event.as_str());
        }
        if let Some(code) = &self.code {
            params.insert("code", code.as_str());
        }
        if let Some(area) = &self.area {
            params.insert("area", area.as_str());
        }
        if let Some(point) = self.point {
            params.insert("point", point.path_string());
        }
        if let Some(region) = &self.region {
            params.insert("region", region.as_str());
        }
        if let Some(region_type) = &self.region_type {
            params.insert("region_type", region_type.as_str());
        }
        if let Some(zone) = &self.zone {
            params.insert("zone", zone.as_str());
        }
        if let Some(urgency) = self.urgency {
            params.insert("urgency", urgency.as_str());
        }
        if let Some(severity) = self.severity {
            params.insert("severity", severity.as_str());
        }
        if let Some(certainty) = self.certainty {
            params.insert("certainty", certainty.as_str());
        }
        if let Some(limit) = self.limit {
            params.insert("limit", limit.to_string());
        }

        params
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AlertsService<'a> {
    executor: &'a Executor,
}

impl<'a> AlertsService<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// Historical and active alerts matching the query.
    pub async fn alerts(&self, query: AlertQuery) -> Result<AlertCollection> {
        self.executor.execute(&Endpoint::Alerts(query), None).await
    }

    pub async fn active(&self, query: AlertQuery) -> Result<AlertCollection> {
        self.executor
            .execute(&Endpoint::ActiveAlerts(query), None)
            .await
    }

    pub async fn active_count(&self) -> Result<AlertCount> {
        self.executor
            .execute(&Endpoint::ActiveAlertCount, None)
            .await
    }

    pub async fn active_for_zone(&self, zone_id: &str) -> Result<AlertCollection> {
        self.executor
            .execute(&Endpoint::ActiveAlertsForZone(zone_id.to_string()), None)
            .await
    }

    pub async fn active_for_area(&self, area: &str) -> Result<AlertCollection> {
        self.executor
            .execute(&Endpoint::ActiveAlertsForArea(area.to_string()), None)
            .await
    }

    /// Marine region, e.g. "GL" for the Great Lakes.
    pub async fn active_for_region(&self, region: &str) -> Result<AlertCollection> {
        self.executor
            .execute(&Endpoint::ActiveAlertsForRegion(region.to_string()), None)
            .await
    }

    pub async fn types(&self) -> Result<AlertTypes> {
        self.executor.execute(&Endpoint::AlertTypes, None).await
    }
}
