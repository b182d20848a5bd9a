use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use shared_database::{Entity, Repository};
use shared_models::ActionRecord;

pub type DoctorRepository = Arc<dyn Repository<Doctor>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub department: String,
    pub contact: String,
    pub availability: Vec<AvailabilitySlot>,
    pub avatar_url: String,
}

impl Entity for Doctor {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ActionRecord for Doctor {
    const KEY: &'static str = "doctor";
}

impl Doctor {
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.specialization.to_lowercase().contains(&term)
    }
}

/// One day (or day range) of a doctor's schedule with its time ranges,
/// e.g. `{"day": "Mon", "times": ["9am-12pm", "2pm-5pm"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub day: String,
    pub times: Vec<String>,
}

impl AvailabilitySlot {
    pub fn new(day: &str, times: &[&str]) -> Self {
        Self {
            day: day.to_string(),
            times: times.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDoctorForm {
    pub name: Option<Value>,
    pub specialization: Option<Value>,
    pub department: Option<Value>,
    pub contact: Option<Value>,
    pub availability_description: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoctorSearchQuery {
    pub search: Option<String>,
}
