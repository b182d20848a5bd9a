use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::AppointmentRepository;
use doctor_cell::DoctorRepository;
use patient_cell::PatientRepository;
use shared_database::ViewCache;

use crate::handlers;

#[derive(Clone)]
pub struct DashboardCellState {
    pub patients: PatientRepository,
    pub doctors: DoctorRepository,
    pub appointments: AppointmentRepository,
    pub views: Arc<ViewCache>,
}

pub fn dashboard_routes(state: DashboardCellState) -> Router {
    Router::new()
        .route("/", get(handlers::get_dashboard))
        .with_state(state)
}
