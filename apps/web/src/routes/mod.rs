pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::jobs::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(handlers::FORM_PATH, get(handlers::handle_form))
        .route(handlers::RECOMMEND_PATH, post(handlers::handle_recommend))
        .route(handlers::RESULTS_PATH, get(handlers::handle_results))
        .with_state(state)
}
