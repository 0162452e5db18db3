pub mod badge;
pub mod contact;
pub mod ping;

use axum::{http::StatusCode, Json};

use crate::domain::errors::BadgeError;
use crate::interface_adapters::protocol::Envelope;

// Maps workflow errors onto the response contract: validation failures keep
// their field detail, collaborator failures are logged server-side and
// answered with a generic message.
pub fn error_response(err: BadgeError) -> (StatusCode, Json<Envelope>) {
    match err {
        BadgeError::Validation(errors) => (
            StatusCode::BAD_REQUEST,
            Json(Envelope {
                success: false,
                message: "Validation failed".to_string(),
                errors: Some(errors),
            }),
        ),
        BadgeError::Generation(detail) => {
            tracing::error!(%detail, "badge generation failed");
            internal_error("Failed to generate badge")
        }
        BadgeError::Dispatch(detail) => {
            tracing::error!(%detail, "badge email dispatch failed");
            internal_error("Failed to send badge")
        }
        BadgeError::Sink(detail) => {
            tracing::error!(%detail, "contact submission could not be recorded");
            internal_error("Failed to submit message")
        }
    }
}

fn internal_error(message: &str) -> (StatusCode, Json<Envelope>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(Envelope::failure(message)),
    )
}
