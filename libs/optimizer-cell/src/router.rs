use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;
use crate::suggester::AppointmentSuggester;

#[derive(Clone)]
pub struct OptimizerCellState {
    pub config: Arc<AppConfig>,
    pub suggester: Arc<dyn AppointmentSuggester>,
}

pub fn optimizer_routes(state: OptimizerCellState) -> Router {
    Router::new()
        .route("/defaults", get(handlers::get_defaults))
        .route("/suggestions", post(handlers::suggest_times))
        .with_state(state)
}
