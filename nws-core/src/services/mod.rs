//! One service per resource family. Services are borrowed views over the
//! client's executor and hold no state of their own.

pub mod alerts;
pub mod forecasts;
pub mod observations;
pub mod offices;
pub mod points;
pub mod stations;
pub mod zones;

pub use alerts::{AlertQuery, AlertsService};
pub use forecasts::ForecastsService;
pub use observations::ObservationsService;
pub use offices::OfficesService;
pub use points::PointsService;
pub use stations::StationsService;
pub use zones::ZonesService;
