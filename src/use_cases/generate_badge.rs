use std::sync::Arc;

use crate::domain::errors::BadgeError;
use crate::domain::ports::BadgeRenderer;
use crate::use_cases::normalize::{attachment_filename, normalize};
use crate::use_cases::validate::{BadgeInput, validate_badge_input};

// Badge produced for inline delivery. The filename is present only when the
// caller signalled download intent.
pub struct InlineBadge {
    pub png: Vec<u8>,
    pub filename: Option<String>,
}

// Inline badge delivery use case with an injected renderer.
pub struct GenerateBadgeUseCase {
    pub renderer: Arc<dyn BadgeRenderer>,
}

impl GenerateBadgeUseCase {
    pub async fn execute(&self, input: BadgeInput, download: bool) -> Result<InlineBadge, BadgeError> {
        let request = validate_badge_input(input)?;
        let identity = normalize(request);

        let png = self
            .renderer
            .render(&identity)
            .await
            .map_err(BadgeError::Generation)?;

        let filename = download.then(|| attachment_filename(&identity.name));

        Ok(InlineBadge { png, filename })
    }
}
