use serde::{Deserialize, Serialize};

use appointment_cell::{Appointment, AppointmentStatus};

pub const RECENT_APPOINTMENTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_patients: usize,
    pub total_doctors: usize,
    /// Appointments that are `Scheduled` or `Pending`.
    pub upcoming_appointments: usize,
    pub appointments_by_status: Vec<StatusCount>,
    /// Newest first.
    pub recent_appointments: Vec<Appointment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: AppointmentStatus,
    pub count: usize,
}
