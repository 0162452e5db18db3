use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::entities::NormalizedIdentity;
use crate::domain::ports::{BadgeRenderer, EmailDispatcher};

// The clients defined here wrap reqwest to talk to the collaborator
// services. Handlers only ever see the ports, never these types.

// Error payload shape shared by the collaborator services.
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    message: String,
}

#[derive(Debug)]
enum CollaboratorError {
    Transport(reqwest::Error),
    Upstream {
        status: StatusCode,
        message: Option<String>,
    },
    Decode(reqwest::Error),
}

impl fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollaboratorError::Transport(err) => write!(f, "transport error: {err}"),
            CollaboratorError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "upstream error {status}: {message}")
                } else {
                    write!(f, "upstream error {status}")
                }
            }
            CollaboratorError::Decode(err) => write!(f, "response decode error: {err}"),
        }
    }
}

// Identity payload sent to the renderer service.
#[derive(Serialize)]
struct RenderPayload<'a> {
    name: &'a str,
    email: &'a str,
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none")]
    photo_url: Option<&'a str>,
}

impl<'a> RenderPayload<'a> {
    fn from_identity(identity: &'a NormalizedIdentity) -> Self {
        Self {
            name: &identity.name,
            email: &identity.email,
            photo_url: identity.photo_url.as_deref(),
        }
    }
}

// Thin wrapper around reqwest for the badge renderer service.
#[derive(Clone)]
pub struct RendererClient {
    http: Client,
    pub base_url: String,
}

impl RendererClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl BadgeRenderer for RendererClient {
    async fn render(&self, identity: &NormalizedIdentity) -> Result<Vec<u8>, String> {
        let url = format!("{}/render", self.base_url);
        let res = self
            .http
            .post(url)
            .json(&RenderPayload::from_identity(identity))
            .send()
            .await
            .map_err(|err| CollaboratorError::Transport(err).to_string())?;
        let status = res.status();

        if !status.is_success() {
            let message = res
                .json::<UpstreamErrorBody>()
                .await
                .ok()
                .map(|payload| payload.message);
            return Err(CollaboratorError::Upstream { status, message }.to_string());
        }

        let bytes = res
            .bytes()
            .await
            .map_err(|err| CollaboratorError::Decode(err).to_string())?;

        Ok(bytes.to_vec())
    }
}

// Mail payload sent to the dispatcher service. The badge travels inline as
// base64 so the dispatcher does not re-render it.
#[derive(Serialize)]
struct MailPayload<'a> {
    to: &'a str,
    name: &'a str,
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none")]
    photo_url: Option<&'a str>,
    badge_base64: String,
}

// Thin wrapper around reqwest for the email dispatcher service.
#[derive(Clone)]
pub struct MailerClient {
    http: Client,
    pub base_url: String,
}

impl MailerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl EmailDispatcher for MailerClient {
    async fn send(&self, identity: &NormalizedIdentity, badge_png: &[u8]) -> Result<(), String> {
        let url = format!("{}/send", self.base_url);
        let payload = MailPayload {
            to: &identity.email,
            name: &identity.name,
            photo_url: identity.photo_url.as_deref(),
            badge_base64: BASE64.encode(badge_png),
        };

        let res = self
            .http
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|err| CollaboratorError::Transport(err).to_string())?;
        let status = res.status();

        if !status.is_success() {
            let message = res
                .json::<UpstreamErrorBody>()
                .await
                .ok()
                .map(|payload| payload.message);
            return Err(CollaboratorError::Upstream { status, message }.to_string());
        }

        Ok(())
    }
}
