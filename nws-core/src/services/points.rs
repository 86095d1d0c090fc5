use tracing::debug;

use crate::{Coordinate, Endpoint, Result, executor::Executor, models::Point};

#[derive(Debug, Clone, Copy)]
pub struct PointsService<'a> {
    executor: &'a Executor,
}

impl<'a> PointsService<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// Grid cell, office and related links for a coordinate.
    pub async fn point(&self, coordinate: Coordinate) -> Result<Point> {
        resolve(self.executor, coordinate).await
    }
}

/// First stage of every point-based chained lookup. Never cached: each
/// call hits `/points` again.
pub(crate) async fn resolve(executor: &Executor, coordinate: Coordinate) -> Result<Point> {
    debug!(%coordinate, "resolving point");
    executor.execute(&Endpoint::Point(coordinate), None).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Configuration, NwsError,
        models::{GridRef, point::fixtures::POINT_TOP},
        transport::stub::StubTransport,
    };
    use std::sync::Arc;

    #[tokio::test]
    async fn point_hits_points_path() {
        let stub = StubTransport::new().reply(200, POINT_TOP);
        let executor = Executor::new(Configuration::default(), Arc::new(stub.clone()));

        let point = PointsService::new(&executor)
            .point(Coordinate::new(39.7456, -97.0892))
            .await
            .unwrap();

        assert_eq!(point.properties.grid_ref(), GridRef::new("TOP", 31, 80));
        assert_eq!(stub.paths(), ["/points/39.7456,-97.0892"]);
    }

    #[tokio::test]
    async fn out_of_range_point_surfaces_api_error() {
        let stub = StubTransport::new().reply(
            400,
            r#"{"title":"Invalid Parameter","detail":"Parameter \"point\" is invalid"}"#,
        );
        let executor = Executor::new(Configuration::default(), Arc::new(stub.clone()));

        let err = PointsService::new(&executor)
            .point(Coordinate::new(123.0, -400.0))
            .await
            .unwrap_err();

        assert!(matches!(err, NwsError::InvalidRequest(ref m) if m.contains("invalid")));
        assert_eq!(stub.paths(), ["/points/123,-400"]);
    }
}
