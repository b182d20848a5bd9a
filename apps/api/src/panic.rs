use std::any::Any;

use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};
use tracing::error;

use shared_config::AppConfig;

pub const PANIC_MESSAGE: &str = "Oops! Something went wrong.";

/// Turns a panicking request into a 500 with a friendly message. The panic
/// text is only echoed back in development.
#[derive(Debug, Clone, Copy)]
pub struct PanicResponder {
    expose_detail: bool,
}

impl PanicResponder {
    pub fn new(expose_detail: bool) -> Self {
        Self { expose_detail }
    }
}

pub fn panic_boundary(config: &AppConfig) -> CatchPanicLayer<PanicResponder> {
    CatchPanicLayer::custom(PanicResponder::new(config.is_development()))
}

fn panic_detail(err: &(dyn Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    }
}

impl ResponseForPanic for PanicResponder {
    type ResponseBody = Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response<Self::ResponseBody> {
        let detail = panic_detail(err.as_ref());
        error!("Request handler panicked: {}", detail);

        let body = if self.expose_detail {
            json!({ "error": PANIC_MESSAGE, "detail": detail })
        } else {
            json!({ "error": PANIC_MESSAGE })
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
