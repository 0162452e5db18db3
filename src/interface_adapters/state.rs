use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::ContactSubmission;
use crate::domain::origin::OriginPolicy;
use crate::domain::ports::{BadgeRenderer, EmailDispatcher, SubmissionSink};

// Application state shared across handlers. Ports are held as Arc<dyn Trait>
// so any implementation can be injected (production clients or test fakes).
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<dyn BadgeRenderer>,
    pub mailer: Arc<dyn EmailDispatcher>,
    pub sink: Arc<dyn SubmissionSink>,
    pub origins: OriginPolicy,
}

// Submission sink that writes contact messages to the service log.
pub struct LogSink;

#[async_trait]
impl SubmissionSink for LogSink {
    async fn record(&self, submission: &ContactSubmission) -> Result<(), String> {
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            subject = %submission.subject,
            message = %submission.message,
            "contact submission received"
        );
        Ok(())
    }
}
