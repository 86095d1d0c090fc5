use tracing::debug;

use super::points;
use crate::{
    Coordinate, Endpoint, Result,
    executor::Executor,
    models::{Forecast, GridRef},
};

#[derive(Debug, Clone, Copy)]
pub struct ForecastsService<'a> {
    executor: &'a Executor,
}

impl<'a> ForecastsService<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// Resolves the coordinate to its grid cell, then fetches the 12-hour
    /// period forecast for it.
    pub async fn forecast_for_point(&self, coordinate: Coordinate) -> Result<Forecast> {
        let grid = points::resolve(self.executor, coordinate)
            .await?
            .properties
            .grid_ref();

        debug!(%grid, "point resolved, fetching forecast");
        self.forecast_for_grid(&grid).await
    }

    /// Same as [`ForecastsService::forecast_for_point`] with hourly periods.
    pub async fn hourly_forecast_for_point(&self, coordinate: Coordinate) -> Result<Forecast> {
        let grid = points::resolve(self.executor, coordinate)
            .await?
            .properties
            .grid_ref();

        debug!(%grid, "point resolved, fetching hourly forecast");
        self.hourly_forecast_for_grid(&grid).await
    }

    pub async fn forecast_for_grid(&self, grid: &GridRef) -> Result<Forecast> {
        self.executor
            .execute(&Endpoint::GridForecast(grid.clone()), None)
            .await
    }

    pub async fn hourly_forecast_for_grid(&self, grid: &GridRef) -> Result<Forecast> {
        self.executor
            .execute(&Endpoint::GridForecastHourly(grid.clone()), None)
            .await
    }
}
