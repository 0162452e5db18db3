use async_trait::async_trait;

use crate::domain::entities::{ContactSubmission, NormalizedIdentity};

// Port for the badge image renderer collaborator. Produces PNG bytes.
#[async_trait]
pub trait BadgeRenderer: Send + Sync {
    async fn render(&self, identity: &NormalizedIdentity) -> Result<Vec<u8>, String>;
}

// Port for the email dispatcher collaborator. Receives the identity together
// with the already-rendered badge so the emailed artifact matches what an
// inline caller would get.
#[async_trait]
pub trait EmailDispatcher: Send + Sync {
    async fn send(&self, identity: &NormalizedIdentity, badge_png: &[u8]) -> Result<(), String>;
}

// Port for recording contact submissions.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn record(&self, submission: &ContactSubmission) -> Result<(), String>;
}
