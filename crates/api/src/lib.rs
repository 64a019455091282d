//! # LedgerView API
//!
//! A read-only HTTP facade exposing a node's local ledger view as JSON:
//! recent blocks and single-block lookup straight from the chain store,
//! peer lists fetched over the async data-request bus.
//!
//! ```text
//! HTTP request
//!      │
//!      ▼
//! ┌─────────────────┐   OPTIONS short-circuit / header injection
//! │  CORS layer     │
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐   GET /blocks/…        ┌──────────────┐
//! │  Route handlers ├───────────────────────▶│  Chain store │
//! │                 │                        └──────────────┘
//! │                 │   GET /…_peers/        ┌──────────────┐
//! │                 ├──▶ Data bridge ───────▶│   Data bus   │
//! └────────┬────────┘    (bounded wait)      └──────┬───────┘
//!          ▼                                        │ callback
//!   Serialization envelope ◀────────────────────────┘
//! ```
//!
//! The engineering core is the **data bridge**: each handler task parks
//! on a fresh one-shot wait state while the bus answers on its own
//! execution context, bounded by a fixed 5-second budget. Everything
//! else is formatting and glue.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod middleware;
pub mod routes;
pub mod service;

pub use domain::bridge::{BridgeError, DataBridge, WAIT_BUDGET};
pub use domain::config::{ApiConfig, ConfigError};
pub use domain::error::{ApiError, ServerError};
pub use domain::serialize::{serialize, serialize_one, Schema};
pub use middleware::CorsLayer;
pub use routes::AppState;
pub use service::{ApiService, BASE_PATH};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
