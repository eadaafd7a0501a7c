//! Route definitions for the FarmEasy platform

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create the page routes
///
/// Each route is a direct verb+path mapping onto one handler; the static
/// asset service and middleware layers are attached in `create_app`.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        // Landing page
        .route("/", get(handlers::home))
        // Farmer registration
        .route(
            "/register",
            get(handlers::show_register_form).post(handlers::register_farmer),
        )
        // Dashboard and profile
        .route("/dashboard/:id", get(handlers::dashboard))
        .route("/profile/:id", get(handlers::profile))
        // Crop entry
        .route(
            "/add-crop",
            get(handlers::show_add_crop_form).post(handlers::add_crop),
        )
        // Sales (placeholder)
        .route("/sales/:id", get(handlers::sales))
        // Health probe
        .route("/health", get(handlers::health_check))
}
