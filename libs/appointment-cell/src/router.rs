use std::sync::Arc;

use axum::{routing::get, Router};

use doctor_cell::DoctorRepository;
use patient_cell::PatientRepository;
use shared_config::AppConfig;
use shared_database::ViewCache;

use crate::handlers;
use crate::models::AppointmentRepository;

/// Appointments need read access to the patient and doctor stores to resolve
/// references at booking time.
#[derive(Clone)]
pub struct AppointmentCellState {
    pub config: Arc<AppConfig>,
    pub appointments: AppointmentRepository,
    pub patients: PatientRepository,
    pub doctors: DoctorRepository,
    pub views: Arc<ViewCache>,
}

pub fn appointment_routes(state: AppointmentCellState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::list_appointments).post(handlers::create_appointment),
        )
        .route("/{appointment_id}", get(handlers::get_appointment))
        .with_state(state)
}
