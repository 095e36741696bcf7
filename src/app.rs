use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/session", get(handlers::get_session))
        .route("/api/continue", post(handlers::continue_onboarding))
        .route("/api/log", post(handlers::toggle_log))
        .route("/api/complete", post(handlers::complete_day))
        .route("/api/demo", post(handlers::seed_demo))
        .route("/api/navigate", post(handlers::navigate))
        .route("/api/reset", post(handlers::reset_all))
        .with_state(state)
}
