pub mod handlers;
pub mod models;
pub mod router;
pub mod schema;
pub mod seed;
pub mod services;

pub use models::*;
pub use router::{patient_routes, PatientCellState};
pub use services::PatientService;
