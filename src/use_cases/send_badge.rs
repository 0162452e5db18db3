use std::sync::Arc;

use crate::domain::errors::BadgeError;
use crate::domain::ports::{BadgeRenderer, EmailDispatcher};
use crate::use_cases::normalize::normalize;
use crate::use_cases::validate::{BadgeInput, validate_badge_input};

// Outcome of a successful email delivery.
pub struct SendBadgeOutcome {
    pub recipient: String,
}

// Email badge delivery use case. The badge is rendered once and the same
// bytes are handed to the dispatcher.
pub struct SendBadgeUseCase {
    pub renderer: Arc<dyn BadgeRenderer>,
    pub dispatcher: Arc<dyn EmailDispatcher>,
}

impl SendBadgeUseCase {
    pub async fn execute(&self, input: BadgeInput) -> Result<SendBadgeOutcome, BadgeError> {
        let request = validate_badge_input(input)?;
        let identity = normalize(request);

        let png = self
            .renderer
            .render(&identity)
            .await
            .map_err(BadgeError::Generation)?;

        self.dispatcher
            .send(&identity, &png)
            .await
            .map_err(BadgeError::Dispatch)?;

        Ok(SendBadgeOutcome {
            recipient: identity.email,
        })
    }
}
