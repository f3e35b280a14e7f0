//! HTTP client for the land-registry API.
//!
//! [`RegistryApi`] wraps the registry's JSON endpoints using [`reqwest`].
//! The domain lookups (`lookup_land`, `verify_chain`) never fail: any
//! transport or status error is logged and normalized into a result
//! payload the UI can render directly.

pub mod api;
pub mod config;
pub mod registry;

pub use api::{ApiError, RegistryApi};
pub use config::ApiConfig;
