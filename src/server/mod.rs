//! HTTP API for the portfolio site
//!
//! Serves the project catalog and accepts contact form submissions. All
//! handlers share one [`AppState`] through an `Arc`; the catalog inside it
//! is immutable, so no locking is involved.

pub mod handlers;
pub mod responses;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::contact::{ContactDelivery, LogDelivery};
use crate::error::Result;

/// State shared by every request.
pub struct AppState {
    pub catalog: Catalog,
    pub delivery: Arc<dyn ContactDelivery>,
    pub success_message: String,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        delivery: Arc<dyn ContactDelivery>,
        success_message: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            delivery,
            success_message: success_message.into(),
        }
    }
}

/// Build the API router
pub fn router(state: Arc<AppState>, permissive_cors: bool) -> Router {
    let router = Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/projects", get(handlers::list_projects))
        .route("/api/projects/{slug}", get(handlers::get_project))
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/contact", post(handlers::submit_contact))
        .layer(TraceLayer::new_for_http());

    let router = if permissive_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}

pub struct PortfolioServer {
    state: Arc<AppState>,
    addr: SocketAddr,
    permissive_cors: bool,
}

impl PortfolioServer {
    pub fn new(state: AppState, addr: SocketAddr, permissive_cors: bool) -> Self {
        Self {
            state: Arc::new(state),
            addr,
            permissive_cors,
        }
    }

    /// Server for `config`, loading the configured catalog and logging
    /// submissions instead of sending them.
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        let catalog = Catalog::load(config.catalog.path.as_deref())?;
        let state = AppState::new(
            catalog,
            Arc::new(LogDelivery),
            config.contact.success_message.clone(),
        );
        Ok(Self::new(
            state,
            config.socket_addr()?,
            config.server.permissive_cors,
        ))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Bind the configured address and serve until the process exits.
    pub async fn start(self) -> Result<()> {
        let listener = TcpListener::bind(self.addr).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener.
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        info!(
            "Starting portfolio API on {} ({} projects)",
            listener.local_addr()?,
            self.state.catalog.len()
        );
        let app = router(self.state, self.permissive_cors);
        axum::serve(listener, app).await?;
        Ok(())
    }
}
