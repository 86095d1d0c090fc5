use tracing::debug;

use super::points;
use crate::{
    Coordinate, Endpoint, Result,
    executor::Executor,
    models::{Station, StationCollection},
};

#[derive(Debug, Clone, Copy)]
pub struct StationsService<'a> {
    executor: &'a Executor,
}

impl<'a> StationsService<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// First page of `/stations`; pagination is not followed.
    pub async fn all(&self) -> Result<StationCollection> {
        self.executor.execute(&Endpoint::Stations, None).await
    }

    pub async fn station(&self, station_id: &str) -> Result<Station> {
        self.executor
            .execute(&Endpoint::Station(station_id.to_string()), None)
            .await
    }

    /// Observation stations serving the grid cell that contains the
    /// coordinate, nearest first.
    pub async fn stations_for_point(&self, coordinate: Coordinate) -> Result<StationCollection> {
        let point = points::resolve(self.executor, coordinate).await?;
        let endpoint = Endpoint::linked(&point.properties.observation_stations)?;

        debug!(path = %endpoint.path(), "point resolved, fetching observation stations");
        self.executor.execute(&endpoint, None).await
    }
}
