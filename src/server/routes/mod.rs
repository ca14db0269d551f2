//! HTTP route modules
//!
//! Route handlers organized by functionality. Payload shapes follow the
//! published API contract: plain JSON documents on success, the standard
//! `{error: {...}}` body from `TrackerError` on failure.

pub mod calculate;
pub mod health;
pub mod products;
pub mod tariffs;

use actix_web::web;

/// Register every route on the app
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);
    cfg.service(
        web::scope("/api")
            .configure(products::configure_routes)
            .configure(calculate::configure_routes)
            .configure(tariffs::configure_routes),
    );
}
