//! Core library for the `metaweather` CLI.
//!
//! This crate defines:
//! - Service configuration (host, endpoint paths, timeout)
//! - A transport abstraction with a reqwest-backed implementation
//! - The location resolver and weather fetcher
//! - Shared domain models and the error taxonomy
//!
//! It is used by `metaweather-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod location;
pub mod model;
pub mod transport;
pub mod weather;

mod wire;

pub use client::WeatherClient;
pub use config::ServiceConfig;
pub use error::{Failure, ResolveError, TransportError, WeatherError};
pub use model::{LocationId, WeatherReport};
pub use transport::{HttpTransport, Transport};
