use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{debug, info, warn};

use doctor_cell::{Doctor, DoctorRepository};
use patient_cell::{Patient, PatientRepository};
use shared_config::IdStrategy;
use shared_database::{StoreError, View, ViewCache};
use shared_models::{ActionError, AppError, Created, FieldErrors};
use shared_utils::display::to_twelve_hour;
use shared_utils::ids::{generate_id, APPOINTMENT_PREFIX};

use crate::models::{Appointment, AppointmentRepository, AppointmentStatus, NewAppointmentForm};
use crate::router::AppointmentCellState;
use crate::schema::ValidAppointment;

pub const PATIENT_NOT_FOUND: &str = "Selected patient not found.";
pub const DOCTOR_NOT_FOUND: &str = "Selected doctor not found.";

pub const DEPENDENT_VIEWS: [View; 2] = [View::Appointments, View::Dashboard];

pub struct AppointmentService {
    appointments: AppointmentRepository,
    patients: PatientRepository,
    doctors: DoctorRepository,
    views: Arc<ViewCache>,
    id_strategy: IdStrategy,
}

impl AppointmentService {
    pub fn new(state: &AppointmentCellState) -> Self {
        Self {
            appointments: state.appointments.clone(),
            patients: state.patients.clone(),
            doctors: state.doctors.clone(),
            views: state.views.clone(),
            id_strategy: state.config.id_strategy,
        }
    }

    /// Book a new appointment. The referenced patient and doctor must exist;
    /// the patient is checked first and the first missing reference is reported.
    pub async fn create_appointment(&self, form: NewAppointmentForm) -> Result<Created<Appointment>, ActionError> {
        debug!(
            "Booking appointment for patient {:?} with doctor {:?}",
            form.patient_id, form.doctor_id
        );

        let valid = form.validate().map_err(ActionError::Validation)?;

        let Some(patient) = self.patients.find_by_id(&valid.patient_id).await? else {
            warn!("Appointment references unknown patient {}", valid.patient_id);
            return Err(ActionError::NotFound(PATIENT_NOT_FOUND.to_string()));
        };
        let Some(doctor) = self.doctors.find_by_id(&valid.doctor_id).await? else {
            warn!("Appointment references unknown doctor {}", valid.doctor_id);
            return Err(ActionError::NotFound(DOCTOR_NOT_FOUND.to_string()));
        };

        let id = generate_id(self.id_strategy, APPOINTMENT_PREFIX);
        let appointment = build_appointment(valid, id, &patient, &doctor)?;

        let appointment = self.appointments.append(appointment).await?;
        self.views.invalidate(&DEPENDENT_VIEWS).await;

        info!(
            "Appointment {} booked for {} with {}",
            appointment.id, appointment.patient_name, appointment.doctor_name
        );

        Ok(Created::new(
            format!(
                "Appointment for {} with {} on {} at {} scheduled successfully.",
                appointment.patient_name, appointment.doctor_name, appointment.date, appointment.time
            ),
            appointment,
        ))
    }

    pub async fn get_appointment(&self, appointment_id: &str) -> Result<Appointment, AppError> {
        debug!("Fetching appointment: {}", appointment_id);

        self.appointments
            .find_by_id(appointment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))
    }

    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, StoreError> {
        self.appointments.list().await
    }

    /// Case-insensitive match on patient name, doctor name or appointment type.
    pub async fn search_appointments(&self, term: &str) -> Result<Vec<Appointment>, StoreError> {
        debug!("Searching appointments for: {}", term);

        let appointments = self.appointments.list().await?;
        Ok(appointments.into_iter().filter(|a| a.matches(term)).collect())
    }

    pub async fn appointments_view(&self) -> Result<Value, AppError> {
        self.views
            .get_or_render(View::Appointments, || async {
                let appointments = self.list_appointments().await?;
                Ok::<_, AppError>(list_body(&appointments))
            })
            .await
    }
}

pub fn list_body(appointments: &[Appointment]) -> Value {
    json!({
        "appointments": appointments,
        "total": appointments.len()
    })
}

/// Derives the stored record, copying the names of the resolved references
/// and converting the time to its 12-hour display form.
pub fn build_appointment(
    valid: ValidAppointment,
    id: String,
    patient: &Patient,
    doctor: &Doctor,
) -> Result<Appointment, ActionError> {
    let Some(time) = to_twelve_hour(&valid.time) else {
        let mut errors = FieldErrors::new();
        errors.add("time", "Invalid time format. Use HH:MM (24-hour).");
        return Err(ActionError::Validation(errors));
    };

    Ok(Appointment {
        id,
        patient_id: patient.id.clone(),
        patient_name: patient.name.clone(),
        doctor_id: doctor.id.clone(),
        doctor_name: doctor.name.clone(),
        date: valid.date,
        time,
        appointment_type: valid.appointment_type,
        status: AppointmentStatus::Scheduled,
        notes: valid.notes,
    })
}
