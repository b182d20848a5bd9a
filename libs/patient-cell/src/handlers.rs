use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::{ActionError, AppError, Created};
use shared_utils::FormBody;

use crate::models::{NewPatientForm, Patient, PatientSearchQuery};
use crate::router::PatientCellState;
use crate::services::patient::list_body;
use crate::services::PatientService;

#[axum::debug_handler]
pub async fn create_patient(
    State(state): State<PatientCellState>,
    FormBody(form): FormBody<NewPatientForm>,
) -> Result<Created<Patient>, ActionError> {
    let service = PatientService::new(&state);

    service.create_patient(form).await
}

#[axum::debug_handler]
pub async fn list_patients(
    State(state): State<PatientCellState>,
    Query(query): Query<PatientSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(&state);

    match query.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(term) => {
            let patients = service.search_patients(term).await?;
            Ok(Json(list_body(&patients)))
        }
        None => Ok(Json(service.patients_view().await?)),
    }
}

#[axum::debug_handler]
pub async fn get_patient(
    State(state): State<PatientCellState>,
    Path(patient_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(&state);

    let patient = service.get_patient(&patient_id).await?;

    Ok(Json(json!(patient)))
}
