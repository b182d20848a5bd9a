use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use appointment_cell::{Appointment, AppointmentRepository, AppointmentStatus};
use doctor_cell::DoctorRepository;
use patient_cell::PatientRepository;
use shared_database::{View, ViewCache};
use shared_models::AppError;

use crate::models::{DashboardSummary, StatusCount, RECENT_APPOINTMENTS};
use crate::router::DashboardCellState;

pub struct DashboardService {
    patients: PatientRepository,
    doctors: DoctorRepository,
    appointments: AppointmentRepository,
    views: Arc<ViewCache>,
}

impl DashboardService {
    pub fn new(state: &DashboardCellState) -> Self {
        Self {
            patients: state.patients.clone(),
            doctors: state.doctors.clone(),
            appointments: state.appointments.clone(),
            views: state.views.clone(),
        }
    }

    pub async fn summary(&self) -> Result<DashboardSummary, AppError> {
        debug!("Rendering dashboard summary");

        let total_patients = self.patients.count().await?;
        let total_doctors = self.doctors.count().await?;
        let appointments = self.appointments.list().await?;

        Ok(summarize(total_patients, total_doctors, &appointments))
    }

    pub async fn dashboard_view(&self) -> Result<Value, AppError> {
        self.views
            .get_or_render(View::Dashboard, || async {
                let summary = self.summary().await?;
                serde_json::to_value(summary).map_err(|e| AppError::Internal(e.to_string()))
            })
            .await
    }
}

pub fn summarize(total_patients: usize, total_doctors: usize, appointments: &[Appointment]) -> DashboardSummary {
    let appointments_by_status = AppointmentStatus::ALL
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: appointments.iter().filter(|a| a.status == status).count(),
        })
        .collect();

    DashboardSummary {
        total_patients,
        total_doctors,
        upcoming_appointments: appointments.iter().filter(|a| a.is_upcoming()).count(),
        appointments_by_status,
        recent_appointments: appointments.iter().rev().take(RECENT_APPOINTMENTS).cloned().collect(),
    }
}
