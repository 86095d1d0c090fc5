use chrono::{DateTime, Utc};

use crate::{
    Endpoint, Result,
    executor::Executor,
    models::{Observation, ObservationCollection},
};

#[derive(Debug, Clone, Copy)]
pub struct ObservationsService<'a> {
    executor: &'a Executor,
}

impl<'a> ObservationsService<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// Most recent observation reported by the station.
    pub async fn latest(&self, station_id: &str) -> Result<Observation> {
        self.executor
            .execute(&Endpoint::LatestObservation(station_id.to_string()), None)
            .await
    }

    /// Whatever the API returns for the station without a time window.
    pub async fn recent(&self, station_id: &str) -> Result<ObservationCollection> {
        let endpoint = Endpoint::StationObservations {
            station_id: station_id.to_string(),
            range: None,
        };
        self.executor.execute(&endpoint, None).await
    }

    pub async fn between(
        &self,
        station_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ObservationCollection> {
        let endpoint = Endpoint::StationObservations {
            station_id: station_id.to_string(),
            range: Some((start, end)),
        };
        self.executor.execute(&endpoint, None).await
    }
}
