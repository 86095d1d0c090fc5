//! Async client for the National Weather Service API (`api.weather.gov`).
//!
//! This crate defines:
//! - Endpoint descriptors for every supported route
//! - A request executor with a pluggable transport
//! - Typed response models and the error taxonomy
//! - Per-resource services behind a single [`Client`]
//!
//! It is used by `nws-cli`, but can also be reused by other binaries or services.

mod client;

pub mod config;
pub mod coordinate;
pub mod decode;
pub mod endpoint;
pub mod error;
pub mod executor;
pub mod format;
pub mod models;
pub mod services;
pub mod transport;

pub use client::Client;
pub use config::Configuration;
pub use coordinate::{Coordinate, ParseCoordinateError};
pub use endpoint::{Endpoint, HttpMethod, QueryParams};
pub use error::{BoxError, NwsError, Result};
pub use format::{Format, ParseFormatError};
pub use models::{GridRef, ZoneType};
pub use services::AlertQuery;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};
