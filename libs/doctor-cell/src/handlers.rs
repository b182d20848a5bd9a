use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::{ActionError, AppError, Created};
use shared_utils::FormBody;

use crate::models::{Doctor, DoctorSearchQuery, NewDoctorForm};
use crate::router::DoctorCellState;
use crate::services::doctor::list_body;
use crate::services::DoctorService;

#[axum::debug_handler]
pub async fn create_doctor(
    State(state): State<DoctorCellState>,
    FormBody(form): FormBody<NewDoctorForm>,
) -> Result<Created<Doctor>, ActionError> {
    let doctor_service = DoctorService::new(&state);

    doctor_service.create_doctor(form).await
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<DoctorCellState>,
    Query(query): Query<DoctorSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::new(&state);

    if let Some(term) = query.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        let doctors = doctor_service.search_doctors(term).await?;
        return Ok(Json(list_body(&doctors)));
    }

    Ok(Json(doctor_service.doctors_view().await?))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<DoctorCellState>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::new(&state);

    let doctor = doctor_service.get_doctor(&doctor_id).await?;

    Ok(Json(json!(doctor)))
}
