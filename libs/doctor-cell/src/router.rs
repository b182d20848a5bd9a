use std::sync::Arc;

use axum::{routing::get, Router};

use shared_config::AppConfig;
use shared_database::ViewCache;

use crate::handlers;
use crate::models::DoctorRepository;

#[derive(Clone)]
pub struct DoctorCellState {
    pub config: Arc<AppConfig>,
    pub doctors: DoctorRepository,
    pub views: Arc<ViewCache>,
}

pub fn doctor_routes(state: DoctorCellState) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors).post(handlers::create_doctor))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .with_state(state)
}
