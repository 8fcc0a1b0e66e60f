pub mod welcome;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome::welcome_handler))
        .route("/generate-resume", post(handlers::handle_generate_resume))
        .with_state(state)
}
