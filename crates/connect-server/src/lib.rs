//! connect-server
//!
//! HTTP surface for help offers, professionals, and errands.

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router over the given state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/help-types", get(routes::offers::list_help_types))
        .route(
            "/offers",
            get(routes::offers::list_offers).post(routes::offers::submit_offer),
        )
        .route("/offers/search", get(routes::offers::search_offers))
        .route(
            "/professionals",
            get(routes::professionals::list_professionals)
                .post(routes::professionals::register_professional),
        )
        .route(
            "/professionals/search",
            post(routes::professionals::search_professionals),
        )
        .route(
            "/errands",
            get(routes::errands::list_errands).post(routes::errands::post_errand),
        )
        .route("/errands/{id}", get(routes::errands::get_errand))
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::audit::audit_log))
                .layer(cors),
        )
        .with_state(state)
}
