//! mesmer-api
//!
//! HTTP surface of the Mesmer assessment platform: the questionnaire
//! catalog and the assessment submit/fetch lifecycle, served over axum to
//! the collaborating frontend.

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Questionnaire (public schema data)
        .route(
            "/questionnaire",
            get(routes::questionnaire::get_questionnaire),
        )
        .route("/assessments", get(routes::assessments::list_assessments))
        .route("/assessments", post(routes::assessments::submit_assessment))
        .route(
            "/assessments/{id}",
            get(routes::assessments::get_assessment),
        )
        .route(
            "/assessments/{id}",
            delete(routes::assessments::delete_assessment),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
