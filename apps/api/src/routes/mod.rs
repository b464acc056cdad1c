pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::inference::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/predict", post(handlers::handle_predict))
        .with_state(state)
}
