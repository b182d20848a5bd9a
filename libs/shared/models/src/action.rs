//! Result contract shared by every mutation action.
//!
//! A successful action answers `201 {success, <entity>}`; a failed one answers
//! `{error, errors?}` where `errors` maps field names (and `_form` for
//! form-wide problems) to human-readable messages.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{error, warn};

/// Key used for errors that belong to the form as a whole.
pub const FORM_FIELD: &str = "_form";

pub const INVALID_FORM_MESSAGE: &str = "Invalid data. Please check the form fields.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn add_form_error(&mut self, message: impl Into<String>) {
        self.add(FORM_FIELD, message);
    }

    pub fn form(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add_form_error(message);
        errors
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// A record type that can be returned from a mutation action, serialized
/// under `KEY` next to the success message.
pub trait ActionRecord: Serialize {
    const KEY: &'static str;
}

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Invalid data. Please check the form fields.")]
    Validation(FieldErrors),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Store(String),
}

impl ActionError {
    pub fn status(&self) -> StatusCode {
        match self {
            ActionError::Validation(_) => StatusCode::BAD_REQUEST,
            ActionError::NotFound(_) => StatusCode::NOT_FOUND,
            ActionError::Conflict(_) => StatusCode::CONFLICT,
            ActionError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn field_errors(&self) -> Option<FieldErrors> {
        match self {
            ActionError::Validation(errors) => Some(errors.clone()),
            ActionError::NotFound(_) => None,
            ActionError::Conflict(msg) | ActionError::Store(msg) => Some(FieldErrors::form(msg.clone())),
        }
    }
}

#[derive(Serialize)]
struct FailureBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<FieldErrors>,
}

impl IntoResponse for ActionError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ActionError::Validation(errors) => {
                warn!("Rejected form input on fields: {:?}", errors.fields().collect::<Vec<_>>())
            }
            ActionError::NotFound(msg) => warn!("Action rejected: {}", msg),
            ActionError::Conflict(msg) | ActionError::Store(msg) => error!("Action failed: {}: {}", status, msg),
        }

        let body = FailureBody {
            error: self.to_string(),
            errors: self.field_errors(),
        };

        (status, Json(body)).into_response()
    }
}

/// Successful outcome of a mutation action.
#[derive(Debug, Clone)]
pub struct Created<T> {
    pub message: String,
    pub record: T,
}

impl<T> Created<T> {
    pub fn new(message: impl Into<String>, record: T) -> Self {
        Self {
            message: message.into(),
            record,
        }
    }
}

impl<T: ActionRecord> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let record = match serde_json::to_value(&self.record) {
            Ok(value) => value,
            Err(e) => {
                error!("Failed to serialize created {}: {}", T::KEY, e);
                return ActionError::Store(format!("Failed to serialize {}", T::KEY)).into_response();
            }
        };

        let mut body = Map::new();
        body.insert("success".to_string(), Value::String(self.message));
        body.insert(T::KEY.to_string(), record);

        (StatusCode::CREATED, Json(Value::Object(body))).into_response()
    }
}
