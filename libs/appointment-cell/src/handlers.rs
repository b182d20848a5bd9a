use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::{ActionError, AppError, Created};
use shared_utils::FormBody;

use crate::models::{Appointment, AppointmentSearchQuery, NewAppointmentForm};
use crate::router::AppointmentCellState;
use crate::services::appointment::list_body;
use crate::services::AppointmentService;

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<AppointmentCellState>,
    FormBody(form): FormBody<NewAppointmentForm>,
) -> Result<Created<Appointment>, ActionError> {
    let appointment_service = AppointmentService::new(&state);

    appointment_service.create_appointment(form).await
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<AppointmentCellState>,
    Query(query): Query<AppointmentSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let appointment_service = AppointmentService::new(&state);

    let Some(term) = query.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(Json(appointment_service.appointments_view().await?));
    };

    let appointments = appointment_service.search_appointments(term).await?;
    Ok(Json(list_body(&appointments)))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<AppointmentCellState>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let appointment_service = AppointmentService::new(&state);

    let appointment = appointment_service.get_appointment(&appointment_id).await?;

    Ok(Json(json!(appointment)))
}
