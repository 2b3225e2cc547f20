//! HTTP mapping of station boundary errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use station_core::StationError;

/// Wrapper so `StationError` can be returned from handlers.
#[derive(Debug)]
pub struct GatewayError(pub StationError);

impl From<StationError> for GatewayError {
    fn from(e: StationError) -> Self {
        Self(e)
    }
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            StationError::MalformedSample(_) | StationError::Parse(_) => StatusCode::BAD_REQUEST,
            StationError::UnknownRoute { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status(), self.0.to_string()).into_response()
    }
}
