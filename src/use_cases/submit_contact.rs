use std::sync::Arc;

use crate::domain::errors::BadgeError;
use crate::domain::ports::SubmissionSink;
use crate::use_cases::validate::{ContactInput, validate_contact_input};

// Contact submission use case with an injected sink.
pub struct SubmitContactUseCase {
    pub sink: Arc<dyn SubmissionSink>,
}

impl SubmitContactUseCase {
    pub async fn execute(&self, input: ContactInput) -> Result<(), BadgeError> {
        let submission = validate_contact_input(input)?;

        self.sink
            .record(&submission)
            .await
            .map_err(BadgeError::Sink)?;

        Ok(())
    }
}
