//! HTTP server
//!
//! Combines the webhook, health and metrics routers over one shared
//! dataset and metrics registry.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::dataset::Dataset;
use crate::observability::{Logger, MetricsRegistry};

use super::config::HttpServerConfig;
use super::observability_routes::{health_routes, observability_routes};
use super::webhook_routes::{webhook_routes, WebhookState};

/// Webhook HTTP server
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Creates a server over the dataset with default configuration.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_config(dataset, HttpServerConfig::default())
    }

    /// Creates a server over the dataset with custom configuration.
    pub fn with_config(dataset: Arc<Dataset>, config: HttpServerConfig) -> Self {
        let router = Self::build_router(dataset, &config);
        Self { config, router }
    }

    fn build_router(dataset: Arc<Dataset>, config: &HttpServerConfig) -> Router {
        let metrics = Arc::new(MetricsRegistry::new());
        let webhook_state = Arc::new(WebhookState::new(dataset, metrics.clone()));

        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .nest("/observability", observability_routes(metrics))
            .merge(webhook_routes(webhook_state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .expect("Invalid socket address");

        Logger::info("server_started", &[("addr", &addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Candidate;

    fn zoo() -> Arc<Dataset> {
        Arc::new(
            Dataset::new(
                vec!["furry".into()],
                vec![
                    Candidate::new("cat", vec![1]),
                    Candidate::new("fish", vec![0]),
                ],
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_server_builds() {
        let server = HttpServer::new(zoo());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_custom_port() {
        let server = HttpServer::with_config(zoo(), HttpServerConfig::with_port(9999));
        assert_eq!(server.socket_addr(), "0.0.0.0:9999");
    }
}
