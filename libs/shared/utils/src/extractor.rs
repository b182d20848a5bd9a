use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::warn;

use shared_models::{ActionError, FieldErrors};

/// JSON form body whose rejections (malformed JSON, wrong content type,
/// non-object body) answer with the mutation result contract instead of
/// axum's plain-text rejection.
#[derive(Debug, Clone)]
pub struct FormBody<T>(pub T);

impl<T, S> FromRequest<S> for FormBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ActionError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(form)) => Ok(FormBody(form)),
            Err(rejection) => {
                warn!("Unreadable form body: {}", rejection.body_text());
                Err(ActionError::Validation(FieldErrors::form(rejection.body_text())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Method;
    use serde_json::{json, Value};

    use crate::test_utils::{json_request, raw_request};

    #[tokio::test]
    async fn test_reads_json_body() {
        let request = json_request(Method::POST, "/patients", &json!({ "name": "Test User" }));

        let FormBody(form) = FormBody::<Value>::from_request(request, &()).await.unwrap();
        assert_eq!(form["name"], "Test User");
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_form_error() {
        let request = raw_request(Method::POST, "/patients", Some("application/json"), "{\"name\": ");

        let err = FormBody::<Value>::from_request(request, &()).await.unwrap_err();
        let errors = err.field_errors().unwrap();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["_form"]);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_a_form_error() {
        let request = raw_request(Method::POST, "/patients", None, "{}");

        let err = FormBody::<Value>::from_request(request, &()).await.unwrap_err();
        assert!(matches!(err, ActionError::Validation(_)));
    }
}
