pub mod handlers;
pub mod models;
pub mod router;
pub mod schema;
pub mod services;
pub mod suggester;

pub use models::*;
pub use router::{optimizer_routes, OptimizerCellState};
pub use services::{OpenAiSuggester, OptimizerService};
pub use suggester::{AppointmentSuggester, SuggestionError};
