use std::sync::Arc;

use tracing::info;

use appointment_cell::seed::sample_appointments;
use appointment_cell::{AppointmentCellState, AppointmentRepository};
use dashboard_cell::DashboardCellState;
use doctor_cell::seed::sample_doctors;
use doctor_cell::{DoctorCellState, DoctorRepository};
use optimizer_cell::{AppointmentSuggester, OpenAiSuggester, OptimizerCellState};
use patient_cell::seed::sample_patients;
use patient_cell::{PatientCellState, PatientRepository};
use shared_config::AppConfig;
use shared_database::{InMemoryRepository, ViewCache};

/// Everything the cells share: configuration, the three entity stores, the
/// rendered-view cache and the suggestion collaborator.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub patients: PatientRepository,
    pub doctors: DoctorRepository,
    pub appointments: AppointmentRepository,
    pub views: Arc<ViewCache>,
    pub suggester: Arc<dyn AppointmentSuggester>,
}

impl AppState {
    /// In-memory stores, seeded with the sample records unless disabled, and
    /// the OpenAI-compatible suggester.
    pub fn in_memory(config: AppConfig) -> Self {
        let suggester = Arc::new(OpenAiSuggester::new(&config));
        Self::with_suggester(config, suggester)
    }

    pub fn with_suggester(config: AppConfig, suggester: Arc<dyn AppointmentSuggester>) -> Self {
        let (patients, doctors, appointments) = if config.seed_sample_data {
            info!("Seeding sample patients, doctors and appointments");
            (sample_patients(), sample_doctors(), sample_appointments())
        } else {
            (Vec::new(), Vec::new(), Vec::new())
        };

        Self {
            config: Arc::new(config),
            patients: Arc::new(InMemoryRepository::with_records(patients)),
            doctors: Arc::new(InMemoryRepository::with_records(doctors)),
            appointments: Arc::new(InMemoryRepository::with_records(appointments)),
            views: Arc::new(ViewCache::new()),
            suggester,
        }
    }

    pub fn patient_state(&self) -> PatientCellState {
        PatientCellState {
            config: self.config.clone(),
            patients: self.patients.clone(),
            views: self.views.clone(),
        }
    }

    pub fn doctor_state(&self) -> DoctorCellState {
        DoctorCellState {
            config: self.config.clone(),
            doctors: self.doctors.clone(),
            views: self.views.clone(),
        }
    }

    pub fn appointment_state(&self) -> AppointmentCellState {
        AppointmentCellState {
            config: self.config.clone(),
            appointments: self.appointments.clone(),
            patients: self.patients.clone(),
            doctors: self.doctors.clone(),
            views: self.views.clone(),
        }
    }

    pub fn dashboard_state(&self) -> DashboardCellState {
        DashboardCellState {
            patients: self.patients.clone(),
            doctors: self.doctors.clone(),
            appointments: self.appointments.clone(),
            views: self.views.clone(),
        }
    }

    pub fn optimizer_state(&self) -> OptimizerCellState {
        OptimizerCellState {
            config: self.config.clone(),
            suggester: self.suggester.clone(),
        }
    }
}
