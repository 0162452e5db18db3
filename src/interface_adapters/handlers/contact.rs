use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::interface_adapters::handlers::error_response;
use crate::interface_adapters::protocol::{ContactBody, Envelope};
use crate::interface_adapters::state::AppState;
use crate::use_cases::submit_contact::SubmitContactUseCase;
use crate::use_cases::validate::ContactInput;

// Accept a contact-form submission and hand it to the submission sink.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ContactBody>,
) -> Result<Json<Envelope>, (StatusCode, Json<Envelope>)> {
    let use_case = SubmitContactUseCase {
        sink: state.sink.clone(),
    };
    let input = ContactInput {
        name: body.name,
        email: body.email,
        subject: body.subject,
        message: body.message,
    };

    use_case.execute(input).await.map_err(error_response)?;

    Ok(Json(Envelope::ok("Message received")))
}
