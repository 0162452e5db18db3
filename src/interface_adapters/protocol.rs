use serde::{Deserialize, Serialize};

use crate::domain::errors::FieldError;

// Query parameters for the badge fetch endpoint. Everything is optional on
// the wire; presence rules are enforced by the validator so missing fields
// come back as field errors instead of extractor rejections.
#[derive(Debug, Deserialize)]
pub struct BadgeQuery {
    pub email: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
    pub download: Option<String>,
}

// JSON body shared by the badge fetch (POST) and badge send endpoints.
#[derive(Debug, Deserialize)]
pub struct BadgeBody {
    pub email: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}

// JSON body for the contact endpoint.
#[derive(Debug, Deserialize)]
pub struct ContactBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

// Success/failure envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl Envelope {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            errors: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }
}

// Response payload for the liveness probe.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub msg: String,
}
