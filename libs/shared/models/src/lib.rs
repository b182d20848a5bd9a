pub mod action;
pub mod error;

pub use action::{ActionError, ActionRecord, Created, FieldErrors, FORM_FIELD, INVALID_FORM_MESSAGE};
pub use error::AppError;
