use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/check-in", post(handlers::check_in_form))
        .route("/dashboard", get(handlers::dashboard))
        .route("/api/check-in", post(handlers::api_check_in))
        .route("/api/status", get(handlers::status))
        .route("/api/dashboard", get(handlers::api_dashboard))
        .with_state(state)
}
