//! HTTP API for the analytics engine

pub mod handlers;
pub mod routes;
pub mod server;
pub mod types;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use tracing::error;

use crate::api::types::ApiResponse;
use crate::SpeechLensError;

// Validation failures are the caller's fault; everything else is ours.
impl IntoResponse for SpeechLensError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!("request failed: {self}");
        }
        (status, Json(ApiResponse::<()>::error(self.to_string()))).into_response()
    }
}
