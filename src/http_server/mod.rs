//! HTTP transport
//!
//! Thin plumbing around the core: the webhook endpoint, health check,
//! metrics exposure and server configuration. Session keys are parsed
//! out of path-like strings here and nowhere else.

mod config;
mod errors;
mod observability_routes;
mod server;
mod webhook_routes;

pub use config::HttpServerConfig;
pub use errors::{ErrorResponse, WebhookError, WebhookResult};
pub use observability_routes::{health_routes, observability_routes, HealthResponse};
pub use server::HttpServer;
pub use webhook_routes::{webhook_routes, WebhookRequest, WebhookResponse, WebhookState};
