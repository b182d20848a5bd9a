// libs/appointment-cell/src/models.rs
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use shared_database::{Entity, Repository};
use shared_models::ActionRecord;

pub type AppointmentRepository = Arc<dyn Repository<Appointment>>;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// A booked appointment. Patient and doctor names are copied from the
/// referenced records when the appointment is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub date: NaiveDate,
    /// 12-hour display time, e.g. `02:30 PM`.
    pub time: String,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Entity for Appointment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl ActionRecord for Appointment {
    const KEY: &'static str = "appointment";
}

impl Appointment {
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.patient_name.to_lowercase().contains(&term)
            || self.doctor_name.to_lowercase().contains(&term)
            || self.appointment_type.to_string().to_lowercase().contains(&term)
    }

    pub fn is_upcoming(&self) -> bool {
        self.status.is_upcoming()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentType {
    #[serde(rename = "Check-up")]
    CheckUp,
    Consultation,
    #[serde(rename = "Follow-up")]
    FollowUp,
    Procedure,
}

impl AppointmentType {
    pub const ALL: [AppointmentType; 4] = [
        AppointmentType::CheckUp,
        AppointmentType::Consultation,
        AppointmentType::FollowUp,
        AppointmentType::Procedure,
    ];
}

impl FromStr for AppointmentType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.to_string() == value)
            .ok_or_else(|| format!("unknown appointment type '{}'", value))
    }
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentType::CheckUp => write!(f, "Check-up"),
            AppointmentType::Consultation => write!(f, "Consultation"),
            AppointmentType::FollowUp => write!(f, "Follow-up"),
            AppointmentType::Procedure => write!(f, "Procedure"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    Pending,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::Pending,
    ];

    pub fn is_upcoming(&self) -> bool {
        matches!(self, AppointmentStatus::Scheduled | AppointmentStatus::Pending)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "Scheduled"),
            AppointmentStatus::Completed => write!(f, "Completed"),
            AppointmentStatus::Cancelled => write!(f, "Cancelled"),
            AppointmentStatus::Pending => write!(f, "Pending"),
        }
    }
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

/// Raw "new appointment" form body; checked by the schema before use.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointmentForm {
    pub patient_id: Option<Value>,
    pub doctor_id: Option<Value>,
    pub date: Option<Value>,
    pub time: Option<Value>,
    #[serde(rename = "type")]
    pub appointment_type: Option<Value>,
    pub notes: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentSearchQuery {
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_round_trips_through_display() {
        for t in AppointmentType::ALL {
            assert_eq!(t.to_string().parse::<AppointmentType>().unwrap(), t);
        }
        assert!("Surgery".parse::<AppointmentType>().is_err());
    }

    #[test]
    fn test_type_serializes_with_form_labels() {
        assert_eq!(serde_json::to_value(AppointmentType::CheckUp).unwrap(), "Check-up");
        assert_eq!(serde_json::to_value(AppointmentType::FollowUp).unwrap(), "Follow-up");
    }

    #[test]
    fn test_upcoming_statuses() {
        let upcoming: Vec<_> = AppointmentStatus::ALL.into_iter().filter(|s| s.is_upcoming()).collect();
        assert_eq!(upcoming, vec![AppointmentStatus::Scheduled, AppointmentStatus::Pending]);
    }
}
