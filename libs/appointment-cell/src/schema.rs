use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use shared_models::FieldErrors;
use shared_utils::validation::FormValidator;

use crate::models::{AppointmentType, NewAppointmentForm};

static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$").expect("time pattern compiles"));

pub const INVALID_TYPE_MESSAGE: &str =
    "Invalid enum value. Expected 'Check-up' | 'Consultation' | 'Follow-up' | 'Procedure'.";

#[derive(Debug, Clone, PartialEq)]
pub struct ValidAppointment {
    pub patient_id: String,
    pub doctor_id: String,
    pub date: NaiveDate,
    /// Still in 24-hour `HH:MM` form.
    pub time: String,
    pub appointment_type: AppointmentType,
    pub notes: Option<String>,
}

impl NewAppointmentForm {
    pub fn validate(&self) -> Result<ValidAppointment, FieldErrors> {
        let mut v = FormValidator::new();

        let patient_id = v.text("patientId", self.patient_id.as_ref(), 1, "Patient selection is required.");
        let doctor_id = v.text("doctorId", self.doctor_id.as_ref(), 1, "Doctor selection is required.");
        let date = v.date(
            "date",
            self.date.as_ref(),
            "Appointment date is required.",
            "That's not a valid date!",
        );
        let time = v.pattern(
            "time",
            self.time.as_ref(),
            &TIME_PATTERN,
            "Invalid time format. Use HH:MM (24-hour).",
        );
        let appointment_type = v.choice::<AppointmentType>(
            "type",
            self.appointment_type.as_ref(),
            "Appointment type is required.",
            INVALID_TYPE_MESSAGE,
        );
        let notes = v.optional_text("notes", self.notes.as_ref(), 0, "");

        let (Some(patient_id), Some(doctor_id), Some(date), Some(time), Some(appointment_type), Some(notes)) =
            (patient_id, doctor_id, date, time, appointment_type, notes)
        else {
            return Err(v.into_errors());
        };
        v.finish()?;

        Ok(ValidAppointment {
            patient_id,
            doctor_id,
            date,
            time,
            appointment_type,
            notes: notes.filter(|n| !n.is_empty()),
        })
    }
}
