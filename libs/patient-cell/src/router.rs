use std::sync::Arc;

use axum::{routing::get, Router};

use shared_config::AppConfig;
use shared_database::ViewCache;

use crate::handlers::*;
use crate::models::PatientRepository;

#[derive(Clone)]
pub struct PatientCellState {
    pub config: Arc<AppConfig>,
    pub patients: PatientRepository,
    pub views: Arc<ViewCache>,
}

pub fn patient_routes(state: PatientCellState) -> Router {
    Router::new()
        .route("/", get(list_patients).post(create_patient))
        .route("/{id}", get(get_patient))
        .with_state(state)
}
