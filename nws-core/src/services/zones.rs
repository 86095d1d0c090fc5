use crate::{
    Endpoint, Result,
    executor::Executor,
    models::{Zone, ZoneCollection, ZoneForecast, ZoneType},
};

#[derive(Debug, Clone, Copy)]
pub struct ZonesService<'a> {
    executor: &'a Executor,
}

impl<'a> ZonesService<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    pub async fn zones(&self, zone_type: ZoneType) -> Result<ZoneCollection> {
        self.executor
            .execute(&Endpoint::Zones(zone_type), None)
            .await
    }

    pub async fn zone(&self, zone_type: ZoneType, zone_id: &str) -> Result<Zone> {
        self.executor
            .execute(&Endpoint::Zone(zone_type, zone_id.to_string()), None)
            .await
    }

    /// Text forecast for the zone. Not every zone type publishes one.
    pub async fn forecast(&self, zone_type: ZoneType, zone_id: &str) -> Result<ZoneForecast> {
        self.executor
            .execute(&Endpoint::ZoneForecast(zone_type, zone_id.to_string()), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Configuration, NwsError, transport::stub::StubTransport};
    use std::sync::Arc;

    const ZONE_KSZ035: &str = r#"{
        "id": "https://api.weather.gov/zones/forecast/KSZ035",
        "properties": {
            "id": "KSZ035",
            "type": "public",
            "name": "Riley",
            "state": "KS",
            "cwa": ["TOP"]
        }
    }"#;

    fn executor(stub: &StubTransport) -> Executor {
        Executor::new(Configuration::default(), Arc::new(stub.clone()))
    }

    #[tokio::test]
    async fn zone_listing_by_type() {
        let body = format!(r#"{{"features": [{ZONE_KSZ035}]}}"#);
        let stub = StubTransport::new().reply(200, &body);
        let executor = executor(&stub);

        let zones = ZonesService::new(&executor)
            .zones(ZoneType::Forecast)
            .await
            .unwrap();

        assert_eq!(zones.items().next().map(|z| z.name.as_str()), Some("Riley"));
        assert_eq!(stub.paths(), ["/zones/forecast"]);
    }

    #[tokio::test]
    async fn single_zone() {
        let stub = StubTransport::new().reply(200, ZONE_KSZ035);
        let executor = executor(&stub);

        let zone = ZonesService::new(&executor)
            .zone(ZoneType::Forecast, "KSZ035")
            .await
            .unwrap();

        assert_eq!(zone.properties.state.as_deref(), Some("KS"));
        assert_eq!(stub.paths(), ["/zones/forecast/KSZ035"]);
    }

    #[tokio::test]
    async fn zone_forecast() {
        let stub = StubTransport::new().reply(
            200,
            r#"{"properties": {
                "updated": "2024-03-01T20:31:00+00:00",
                "periods": [{"number": 1, "name": "Tonight", "detailedForecast": "Clear."}]
            }}"#,
        );
        let executor = executor(&stub);

        let forecast = ZonesService::new(&executor)
            .forecast(ZoneType::Public, "KSZ035")
            .await
            .unwrap();

        assert_eq!(forecast.properties.periods[0].detailed_forecast, "Clear.");
        assert_eq!(stub.paths(), ["/zones/public/KSZ035/forecast"]);
    }

    #[tokio::test]
    async fn unknown_zone_is_not_found() {
        let stub = StubTransport::new().reply(404, "");
        let executor = executor(&stub);

        let err = ZonesService::new(&executor)
            .zone(ZoneType::Fire, "ZZZ999")
            .await
            .unwrap_err();

        assert!(matches!(err, NwsError::NotFound));
    }
}
