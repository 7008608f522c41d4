//! API server implementation

use axum::{
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{handlers, AppState};

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to (default: 127.0.0.1 for security)
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on (default: 8090)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable CSV export (default: true)
    #[serde(default = "default_export_enabled")]
    pub export_enabled: bool,

    /// Simulate upstream latency on mock-backed endpoints (default: true)
    #[serde(default = "default_simulate_latency")]
    pub simulate_latency: bool,

    /// Allow cross-origin requests from the dashboard dev server
    #[serde(default)]
    pub cors_enabled: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8090
}
fn default_export_enabled() -> bool {
    true
}
fn default_simulate_latency() -> bool {
    true
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            export_enabled: default_export_enabled(),
            simulate_latency: default_simulate_latency(),
            cors_enabled: false,
        }
    }
}

/// Build the Axum router with all routes
pub fn build_router(state: AppState) -> Router {
    let cors_enabled = state.config.cors_enabled;

    let router = Router::new()
        .route("/healthz", get(handlers::health::healthz))
        // Auth
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/logout", post(handlers::auth::logout))
        .route("/api/auth/session", get(handlers::auth::session))
        // Data source monitoring
        .route("/api/data-sources/status", get(handlers::data_sources::status))
        .route("/api/data-sources/metrics", get(handlers::data_sources::metrics))
        .route(
            "/api/data-sources/conflicts",
            get(handlers::data_sources::conflicts).post(handlers::data_sources::resolve_conflict),
        )
        // Manual intelligence
        .route("/api/intelligence", post(handlers::intelligence::create))
        // Trigger panel
        .route("/api/triggers", get(handlers::triggers::list))
        .route("/api/triggers/export", get(handlers::triggers::export))
        .route("/api/signals/groups", get(handlers::signals::groups))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if cors_enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// API Server
pub struct ApiServer {
    state: AppState,
}

impl ApiServer {
    /// Server over the seeded directory and fixture stores.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            state: AppState::seeded(config),
        }
    }

    /// Server over externally wired state.
    pub fn with_state(state: AppState) -> Self {
        Self { state }
    }

    /// Start the API server
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr: SocketAddr = format!("{}:{}", self.state.config.host, self.state.config.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

        let router = build_router(self.state);

        info!("🛩  Cockpit API starting on http://{}", addr);
        info!("   Health:      http://{}/healthz", addr);
        info!("   Triggers:    http://{}/api/triggers", addr);
        info!("   Sources:     http://{}/api/data-sources/status", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
