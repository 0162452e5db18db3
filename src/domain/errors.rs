use serde::Serialize;

// Per-field validation violation reported back to clients.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

// Domain-level errors for the badge and contact workflows.
// Only Validation carries client-facing detail; the rest hold internal
// collaborator messages that must stay out of responses.
#[derive(Debug)]
pub enum BadgeError {
    Validation(Vec<FieldError>),
    Generation(String),
    Dispatch(String),
    Sink(String),
}
