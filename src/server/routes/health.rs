//! Root and health endpoints

use actix_web::{web, HttpResponse, Result as ActixResult};
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// Configure root and health routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check));
}

/// Welcome payload served at the API root
#[derive(Debug, Clone, Serialize)]
struct Welcome {
    message: Cow<'static, str>,
    version: Cow<'static, str>,
}

/// Basic health status
#[derive(Debug, Clone, Serialize)]
struct HealthStatus {
    status: Cow<'static, str>,
    timestamp: chrono::DateTime<chrono::Utc>,
    version: Cow<'static, str>,
}

/// GET / - Welcome message
async fn root() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(Welcome {
        message: Cow::Borrowed("Welcome to the Tariff Tracker API"),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
    }))
}

/// GET /health - Health check
///
/// Used by load balancers and monitoring; reports liveness only.
async fn health_check() -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    Ok(HttpResponse::Ok().json(HealthStatus {
        status: Cow::Borrowed("healthy"),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
    }))
}
