//! HTTP error mapping for editor endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ckeditor_core::EditorError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// The shared settings hold a value the editor rejects.
    #[error("Invalid editor settings: {0}")]
    Settings(EditorError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl HttpError {
    fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::Settings(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HttpError::Editor(err) => match err {
                EditorError::UnsupportedElement { .. }
                | EditorError::InvalidValue(_)
                | EditorError::UnknownTag(_) => StatusCode::BAD_REQUEST,
                EditorError::UnknownCommand(_) => StatusCode::NOT_FOUND,
                EditorError::TypeMismatch { .. }
                | EditorError::Unbound
                | EditorError::Settings(_)
                | EditorError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!("Internal error: {:?}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_mistakes_are_client_errors() {
        let err = HttpError::from(EditorError::UnsupportedElement {
            found: "div".to_string(),
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = HttpError::from(EditorError::UnknownCommand("launch".to_string()));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn server_faults_hide_details() {
        let err = HttpError::from(EditorError::Unbound);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let err = HttpError::Settings(EditorError::InvalidValue("not a size".to_string()));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
