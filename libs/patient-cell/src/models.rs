use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use shared_database::{Entity, Repository};
use shared_models::ActionRecord;

pub type PatientRepository = Arc<dyn Repository<Patient>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "Other" => Ok(Gender::Other),
            other => Err(format!("unknown gender '{}'", other)),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub contact: String,
    pub address: String,
    pub medical_history: String,
    pub last_visit: NaiveDate,
    pub avatar_url: String,
}

impl Entity for Patient {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ActionRecord for Patient {
    const KEY: &'static str = "patient";
}

impl Patient {
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.contact.to_lowercase().contains(&term)
    }
}

/// Raw "new patient" form body. Every field is an optional raw value so that
/// missing or wrongly typed values are reported per field by the schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatientForm {
    pub name: Option<Value>,
    pub age: Option<Value>,
    pub gender: Option<Value>,
    pub contact: Option<Value>,
    pub address: Option<Value>,
    pub medical_history: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientSearchQuery {
    pub search: Option<String>,
}
