//! HTTP server implementation.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{http::HeaderValue, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::http::routes::create_router;
use crate::state::AppState;

/// Router with CORS and request tracing applied.
pub fn build_app(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.server.allowed_origins);
    create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let values: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(values))
}

/// The HTTP server.
pub struct ApiServer {
    host: String,
    port: u16,
    state: Arc<AppState>,
}

impl ApiServer {
    pub fn new(host: impl Into<String>, port: u16, state: Arc<AppState>) -> Self {
        Self {
            host: host.into(),
            port,
            state,
        }
    }

    /// Server bound to the configured host and port.
    pub fn from_state(state: Arc<AppState>) -> Self {
        let host = state.config.server.host.clone();
        let port = state.config.server.port;
        Self::new(host, port, state)
    }

    /// Get the server address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Serve until Ctrl-C.
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = build_app(self.state.clone());

        let addr: SocketAddr = self.addr().parse()?;
        let listener = TcpListener::bind(addr).await?;

        info!("Server listening on {}", addr);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentgate_config::Config;
    use agentgate_plugins::PluginManager;
    use agentgate_services::Services;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    fn state_with_origins(origins: &[&str]) -> Arc<AppState> {
        let mut config = Config::default();
        config.server.allowed_origins = origins.iter().map(|o| o.to_string()).collect();
        Arc::new(AppState::new(
            Arc::new(config),
            Services::in_memory(),
            Arc::new(PluginManager::new()),
        ))
    }

    fn health_from(origin: &str) -> Request<Body> {
        Request::builder()
            .uri("/health")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_server_addr() {
        let server = ApiServer::new("127.0.0.1", 9000, Arc::new(AppState::default()));
        assert_eq!(server.addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_server_from_state() {
        let server = ApiServer::from_state(Arc::new(AppState::default()));
        assert_eq!(server.addr(), "0.0.0.0:8010");
    }

    #[tokio::test]
    async fn test_cors_wildcard() {
        let app = build_app(state_with_origins(&["*"]));
        let response = app.oneshot(health_from("http://any.example")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_cors_allow_list() {
        let app = build_app(state_with_origins(&["http://localhost:3000"]));

        let response = app
            .clone()
            .oneshot(health_from("http://localhost:3000"))
            .await
            .unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );

        let response = app.oneshot(health_from("http://evil.example")).await.unwrap();
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
