use axum::{routing::get, Router};

use appointment_cell::appointment_routes;
use dashboard_cell::dashboard_routes;
use doctor_cell::doctor_routes;
use optimizer_cell::optimizer_routes;
use patient_cell::patient_routes;

use crate::panic::panic_boundary;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "MediTrack API is running!" }))
        .nest("/patients", patient_routes(state.patient_state()))
        .nest("/doctors", doctor_routes(state.doctor_state()))
        .nest("/appointments", appointment_routes(state.appointment_state()))
        .nest("/dashboard", dashboard_routes(state.dashboard_state()))
        .nest("/optimizer", optimizer_routes(state.optimizer_state()))
        .layer(panic_boundary(&state.config))
}
