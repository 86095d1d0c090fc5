use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::{
    Configuration, Endpoint, Format, Result,
    executor::Executor,
    services::{
        AlertsService, ForecastsService, ObservationsService, OfficesService, PointsService,
        StationsService, ZonesService,
    },
    transport::{ReqwestTransport, Transport},
};

/// Entry point to the API. Owns the configuration and the transport; the
/// per-resource services borrow both.
///
/// ```no_run
/// # async fn run() -> nws_core::Result<()> {
/// use nws_core::{Client, Configuration, Coordinate};
///
/// let client = Client::new(Configuration::default().with_user_agent("(my-app, me@example.com)"));
/// let forecast = client
///     .forecasts()
///     .forecast_for_point(Coordinate::new(39.7456, -97.0892))
///     .await?;
///
/// for period in &forecast.properties.periods {
///     println!("{}: {}", period.name, period.short_forecast);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    executor: Executor,
}

impl Client {
    pub fn new(config: Configuration) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(config: Configuration, transport: Arc<dyn Transport>) -> Self {
        Self {
            executor: Executor::new(config, transport),
        }
    }

    pub fn configuration(&self) -> &Configuration {
        self.executor.configuration()
    }

    /// Applies to every call made after it returns.
    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.executor.set_user_agent(user_agent.into());
    }

    pub fn points(&self) -> PointsService<'_> {
        PointsService::new(&self.executor)
    }

    pub fn forecasts(&self) -> ForecastsService<'_> {
        ForecastsService::new(&self.executor)
    }

    pub fn stations(&self) -> StationsService<'_> {
        StationsService::new(&self.executor)
    }

    pub fn observations(&self) -> ObservationsService<'_> {
        ObservationsService::new(&self.executor)
    }

    pub fn alerts(&self) -> AlertsService<'_> {
        AlertsService::new(&self.executor)
    }

    pub fn zones(&self) -> ZonesService<'_> {
        ZonesService::new(&self.executor)
    }

    pub fn offices(&self) -> OfficesService<'_> {
        OfficesService::new(&self.executor)
    }

    /// Body of any endpoint in any format, undecoded.
    pub async fn fetch_raw(&self, endpoint: &Endpoint, format: Option<Format>) -> Result<Vec<u8>> {
        self.executor.execute_raw(endpoint, format).await
    }

    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        format: Option<Format>,
    ) -> Result<T> {
        self.executor.execute(endpoint, format).await
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}
