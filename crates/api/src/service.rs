//! HTTP service assembly and lifecycle.

use crate::domain::bridge::DataBridge;
use crate::domain::config::ApiConfig;
use crate::domain::error::ServerError;
use crate::middleware::cors::CorsLayer;
use crate::routes::{self, AppState};
use axum::Router;
use ledgerview_bus::DataBus;
use ledgerview_store::ChainStore;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Versioned prefix every route is served under.
pub const BASE_PATH: &str = "/api/v0alpha";

/// The read-only ledger-view HTTP service.
pub struct ApiService {
    config: ApiConfig,
    state: AppState,
}

impl ApiService {
    /// Assemble the service over a chain store and a data bus.
    ///
    /// Validates the configuration up front so a bad listen address
    /// fails here rather than at bind time.
    pub fn new(
        config: ApiConfig,
        store: Arc<dyn ChainStore>,
        bus: Arc<dyn DataBus>,
    ) -> Result<Self, ServerError> {
        config.validate()?;
        let state = AppState {
            store,
            bridge: Arc::new(DataBridge::new(bus)),
        };
        Ok(Self { config, state })
    }

    /// Build the full router: versioned routes behind the CORS layer.
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .nest(BASE_PATH, routes::router(self.state.clone()))
            .layer(CorsLayer::new())
    }

    /// Bind the listen address and serve in a background task.
    pub async fn start(self) -> Result<JoinHandle<()>, ServerError> {
        let addr = self.config.socket_addr();
        let router = self.router();
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(ServerError::Bind)?;
        info!(%addr, base_path = BASE_PATH, "api server listening");
        let handle = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, router).await {
                error!(%err, "api server terminated");
            }
        });
        Ok(handle)
    }
}
