use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SAMPLE_PATIENT_HISTORY: &str = "\
- Patient A: Mon 9 AM (30 min), Tue 2 PM (45 min), Fri 11 AM (30 min)
- Patient B: Wed 10 AM (60 min), Thu 3 PM (30 min)
- Patient C: Mon 3 PM (45 min), Fri 9 AM (60 min)
- General trend: Morning slots (9-11 AM) are popular for shorter appointments (30-45 min). \
Afternoon slots (2-4 PM) are preferred for longer consultations (60 min+). \
Mid-day (12-1 PM) is usually less busy.";

pub const SAMPLE_DOCTOR_AVAILABILITY: &str = "\
- Dr. Smith: Mon 9 AM - 5 PM, Tue 9 AM - 1 PM, Wed 1 PM - 5 PM, Thu Off, Fri 9 AM - 12 PM. \
Lunch break 12 PM - 1 PM daily.
- Dr. Jones: Mon 10 AM - 6 PM, Tue Off, Wed 10 AM - 2 PM, Thu 9 AM - 5 PM, Fri 1 PM - 4 PM. \
Lunch break 1 PM - 2 PM daily.";

pub const SAMPLE_PATIENT_PREFERENCES: &str = "Prefers afternoon appointments if possible.";
pub const SAMPLE_APPOINTMENT_TYPE: &str = "New Patient Consultation";
pub const SAMPLE_APPOINTMENT_DURATION: u32 = 45;

/// Input handed to the suggestion collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub patient_history: String,
    pub doctor_availability: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_preferences: Option<String>,
    pub appointment_type: String,
    /// Minutes.
    pub appointment_duration: u32,
}

impl SuggestionRequest {
    /// Pre-filled values for the optimizer form.
    pub fn sample() -> Self {
        Self {
            patient_history: SAMPLE_PATIENT_HISTORY.to_string(),
            doctor_availability: SAMPLE_DOCTOR_AVAILABILITY.to_string(),
            patient_preferences: Some(SAMPLE_PATIENT_PREFERENCES.to_string()),
            appointment_type: SAMPLE_APPOINTMENT_TYPE.to_string(),
            appointment_duration: SAMPLE_APPOINTMENT_DURATION,
        }
    }
}

/// Collaborator output. Anything beyond these two fields is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SuggestionResponse {
    pub suggested_times: Vec<String>,
    pub reasoning: String,
}

/// Raw optimizer form body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerForm {
    pub patient_history: Option<Value>,
    pub doctor_availability: Option<Value>,
    pub patient_preferences: Option<Value>,
    pub appointment_type: Option<Value>,
    pub appointment_duration: Option<Value>,
}
