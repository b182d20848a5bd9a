use shared_models::FieldErrors;
use shared_utils::validation::{FormValidator, IntegerRule};

use crate::models::{OptimizerForm, SuggestionRequest};

const DURATION_RULE: IntegerRule<'static> = IntegerRule {
    not_a_number: "Expected number, received nan",
    not_integer: "Expected integer, received float",
    not_positive: "Duration must be a positive number.",
    max: Some((u32::MAX as i64, "Duration is too long.")),
};

impl OptimizerForm {
    pub fn validate(&self) -> Result<SuggestionRequest, FieldErrors> {
        let mut v = FormValidator::new();

        let patient_history = v.text(
            "patientHistory",
            self.patient_history.as_ref(),
            10,
            "Patient history is too short.",
        );
        let doctor_availability = v.text(
            "doctorAvailability",
            self.doctor_availability.as_ref(),
            10,
            "Doctor availability is too short.",
        );
        let appointment_type = v.text(
            "appointmentType",
            self.appointment_type.as_ref(),
            3,
            "Appointment type is required.",
        );
        let appointment_duration = v.integer("appointmentDuration", self.appointment_duration.as_ref(), &DURATION_RULE);
        let patient_preferences = v.optional_text("patientPreferences", self.patient_preferences.as_ref(), 0, "");

        let (
            Some(patient_history),
            Some(doctor_availability),
            Some(appointment_type),
            Some(appointment_duration),
            Some(patient_preferences),
        ) = (
            patient_history,
            doctor_availability,
            appointment_type,
            appointment_duration,
            patient_preferences,
        )
        else {
            return Err(v.into_errors());
        };
        v.finish()?;

        Ok(SuggestionRequest {
            patient_history,
            doctor_availability,
            patient_preferences: patient_preferences.filter(|p| !p.trim().is_empty()),
            appointment_type,
            // bounded to 1..=u32::MAX above
            appointment_duration: appointment_duration as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_form() -> OptimizerForm {
        let sample = SuggestionRequest::sample();
        OptimizerForm {
            patient_history: Some(json!(sample.patient_history)),
            doctor_availability: Some(json!(sample.doctor_availability)),
            patient_preferences: Some(json!("")),
            appointment_type: Some(json!(sample.appointment_type)),
            appointment_duration: Some(json!("45")),
        }
    }

    #[test]
    fn test_duration_is_coerced() {
        let request = sample_form().validate().unwrap();
        assert_eq!(request.appointment_duration, 45);
        assert_eq!(request.patient_preferences, None);
    }

    #[test]
    fn test_short_inputs() {
        let form = OptimizerForm {
            patient_history: Some(json!("short")),
            doctor_availability: Some(json!("short")),
            patient_preferences: None,
            appointment_type: Some(json!("GP")),
            appointment_duration: Some(json!(-15)),
        };

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("patientHistory").unwrap(), ["Patient history is too short."]);
        assert_eq!(errors.get("doctorAvailability").unwrap(), ["Doctor availability is too short."]);
        assert_eq!(errors.get("appointmentType").unwrap(), ["Appointment type is required."]);
        assert_eq!(errors.get("appointmentDuration").unwrap(), ["Duration must be a positive number."]);
    }

    #[test]
    fn test_fractional_duration() {
        let mut form = sample_form();
        form.appointment_duration = Some(json!(30.5));

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("appointmentDuration").unwrap(), ["Expected integer, received float"]);
    }
}
