use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde_json::{json, Value};
use tracing::{debug, info};

use shared_config::IdStrategy;
use shared_database::{StoreError, View, ViewCache};
use shared_models::{ActionError, AppError, Created};
use shared_utils::display::{avatar_url, initials};
use shared_utils::ids::{generate_id, PATIENT_PREFIX};

use crate::models::{NewPatientForm, Patient, PatientRepository};
use crate::router::PatientCellState;
use crate::schema::ValidPatient;

pub const DEFAULT_MEDICAL_HISTORY: &str = "N/A";
pub const INITIALS_FALLBACK: &str = "NP";

/// Views that show patient data and go stale when a patient is added.
pub const DEPENDENT_VIEWS: [View; 2] = [View::Patients, View::Dashboard];

pub struct PatientService {
    patients: PatientRepository,
    views: Arc<ViewCache>,
    id_strategy: IdStrategy,
}

impl PatientService {
    pub fn new(state: &PatientCellState) -> Self {
        Self {
            patients: state.patients.clone(),
            views: state.views.clone(),
            id_strategy: state.config.id_strategy,
        }
    }

    pub async fn create_patient(&self, form: NewPatientForm) -> Result<Created<Patient>, ActionError> {
        debug!("Creating new patient: {:?}", form.name);

        let valid = form.validate().map_err(ActionError::Validation)?;

        let id = generate_id(self.id_strategy, PATIENT_PREFIX);
        let patient = build_patient(valid, id, Utc::now().date_naive());

        let patient = self.patients.append(patient).await?;
        self.views.invalidate(&DEPENDENT_VIEWS).await;

        info!("Patient {} created with ID: {}", patient.name, patient.id);

        Ok(Created::new(
            format!("Patient \"{}\" added successfully.", patient.name),
            patient,
        ))
    }

    pub async fn get_patient(&self, patient_id: &str) -> Result<Patient, AppError> {
        debug!("Fetching patient: {}", patient_id);

        self.patients
            .find_by_id(patient_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Patient not found".to_string()))
    }

    pub async fn list_patients(&self) -> Result<Vec<Patient>, StoreError> {
        self.patients.list().await
    }

    pub async fn search_patients(&self, term: &str) -> Result<Vec<Patient>, StoreError> {
        debug!("Searching patients for: {}", term);

        let patients = self.patients.list().await?;
        Ok(patients.into_iter().filter(|p| p.matches(term)).collect())
    }

    /// The patient list view, served from the view cache while fresh.
    pub async fn patients_view(&self) -> Result<Value, AppError> {
        self.views
            .get_or_render(View::Patients, || async {
                let patients = self.list_patients().await?;
                Ok::<_, AppError>(list_body(&patients))
            })
            .await
    }
}

pub fn list_body(patients: &[Patient]) -> Value {
    json!({
        "patients": patients,
        "total": patients.len()
    })
}

/// Derives the stored record from a validated form.
pub fn build_patient(valid: ValidPatient, id: String, today: NaiveDate) -> Patient {
    let avatar = avatar_url(&initials(&valid.name, INITIALS_FALLBACK));

    Patient {
        id,
        name: valid.name,
        age: valid.age,
        gender: valid.gender,
        contact: valid.contact,
        address: valid.address,
        medical_history: valid
            .medical_history
            .unwrap_or_else(|| DEFAULT_MEDICAL_HISTORY.to_string()),
        last_visit: today,
        avatar_url: avatar,
    }
}
