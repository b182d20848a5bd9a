pub mod handlers;
pub mod models;
pub mod router;
pub mod schema;
pub mod seed;
pub mod services;

pub use models::*;
pub use router::{doctor_routes, DoctorCellState};
pub use services::DoctorService;
