//! Mapping of counter errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tally_core::{CounterError, ErrorKind};

/// A refused counter operation, rendered as `{"Message": ...}`.
#[derive(Debug)]
pub struct CounterRejection(pub CounterError);

impl From<CounterError> for CounterRejection {
    fn from(err: CounterError) -> Self {
        Self(err)
    }
}

impl CounterRejection {
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::AlreadyExists => StatusCode::CONFLICT,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for CounterRejection {
    fn into_response(self) -> Response {
        let body = Json(json!({ "Message": self.0.to_string() }));
        (self.status(), body).into_response()
    }
}
