use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{debug, info};

use shared_config::IdStrategy;
use shared_database::{StoreError, View, ViewCache};
use shared_models::{ActionError, AppError, Created};
use shared_utils::display::{avatar_url, initials, truncate_chars};
use shared_utils::ids::{generate_id, DOCTOR_PREFIX};

use crate::models::{AvailabilitySlot, Doctor, DoctorRepository, NewDoctorForm};
use crate::router::DoctorCellState;
use crate::schema::ValidDoctor;

pub const INITIALS_FALLBACK: &str = "DR";
pub const MAX_DESCRIPTION_CHARS: usize = 50;

pub const DEPENDENT_VIEWS: [View; 2] = [View::Doctors, View::Dashboard];

pub struct DoctorService {
    doctors: DoctorRepository,
    views: Arc<ViewCache>,
    id_strategy: IdStrategy,
}

impl DoctorService {
    pub fn new(state: &DoctorCellState) -> Self {
        Self {
            doctors: state.doctors.clone(),
            views: state.views.clone(),
            id_strategy: state.config.id_strategy,
        }
    }

    /// Create a new doctor profile
    pub async fn create_doctor(&self, form: NewDoctorForm) -> Result<Created<Doctor>, ActionError> {
        debug!("Creating new doctor profile for: {:?}", form.name);

        let valid = form.validate().map_err(ActionError::Validation)?;

        let id = generate_id(self.id_strategy, DOCTOR_PREFIX);
        let doctor = self.doctors.append(build_doctor(valid, id)).await?;
        self.views.invalidate(&DEPENDENT_VIEWS).await;

        info!("Doctor {} created with ID: {}", doctor.name, doctor.id);

        Ok(Created::new(
            format!("Doctor \"{}\" added successfully.", doctor.name),
            doctor,
        ))
    }

    pub async fn get_doctor(&self, doctor_id: &str) -> Result<Doctor, AppError> {
        debug!("Fetching doctor: {}", doctor_id);

        self.doctors
            .find_by_id(doctor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))
    }

    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, StoreError> {
        self.doctors.list().await
    }

    /// Case-insensitive match on name or specialization.
    pub async fn search_doctors(&self, term: &str) -> Result<Vec<Doctor>, StoreError> {
        debug!("Searching doctors for: {}", term);

        let doctors = self.doctors.list().await?;
        Ok(doctors.into_iter().filter(|d| d.matches(term)).collect())
    }

    pub async fn doctors_view(&self) -> Result<Value, AppError> {
        self.views
            .get_or_render(View::Doctors, || async {
                let doctors = self.list_doctors().await?;
                Ok::<_, AppError>(list_body(&doctors))
            })
            .await
    }
}

pub fn list_body(doctors: &[Doctor]) -> Value {
    json!({
        "doctors": doctors,
        "total": doctors.len()
    })
}

/// Free-text availability becomes a single "Custom" entry; without one the
/// doctor gets the weekday placeholder schedule.
pub fn availability_from_description(description: Option<&str>) -> Vec<AvailabilitySlot> {
    match description {
        Some(text) => vec![AvailabilitySlot {
            day: "Custom".to_string(),
            times: vec![truncate_chars(text, MAX_DESCRIPTION_CHARS)],
        }],
        None => vec![AvailabilitySlot::new("Mon-Fri", &["9am-5pm (Details TBC)"])],
    }
}

pub fn build_doctor(valid: ValidDoctor, id: String) -> Doctor {
    let avatar = avatar_url(&initials(&valid.name, INITIALS_FALLBACK));

    Doctor {
        id,
        availability: availability_from_description(valid.availability_description.as_deref()),
        name: valid.name,
        specialization: valid.specialization,
        department: valid.department,
        contact: valid.contact,
        avatar_url: avatar,
    }
}
