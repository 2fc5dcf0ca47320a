pub mod calculate;
pub mod debug;
pub mod home;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/calculate", post(calculate::calculate_footprint))
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
