pub mod handlers;
pub mod models;
pub mod router;
pub mod schema;
pub mod seed;
pub mod services;

pub use models::*;
pub use router::{appointment_routes, AppointmentCellState};
pub use services::AppointmentService;
