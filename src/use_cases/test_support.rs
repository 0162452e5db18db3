use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::entities::{ContactSubmission, NormalizedIdentity};
use crate::domain::ports::{BadgeRenderer, EmailDispatcher, SubmissionSink};

// PNG bytes returned by the recording renderer in tests.
pub const FAKE_PNG: &[u8] = b"\x89PNG\r\n\x1a\nfake";

// Renderer fake that records every identity it was asked to render.
#[derive(Clone)]
pub struct RecordingRenderer {
    pub rendered: Arc<Mutex<Vec<NormalizedIdentity>>>,
    pub should_fail: bool,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            rendered: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }
}

#[async_trait]
impl BadgeRenderer for RecordingRenderer {
    async fn render(&self, identity: &NormalizedIdentity) -> Result<Vec<u8>, String> {
        if self.should_fail {
            return Err("render failed".to_string());
        }
        let mut guard = self.rendered.lock().expect("rendered mutex poisoned");
        guard.push(identity.clone());
        Ok(FAKE_PNG.to_vec())
    }
}

// Dispatcher fake that records the identity and badge bytes it was handed.
#[derive(Clone)]
pub struct RecordingDispatcher {
    pub sent: Arc<Mutex<Vec<(NormalizedIdentity, Vec<u8>)>>>,
    pub should_fail: bool,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }
}

#[async_trait]
impl EmailDispatcher for RecordingDispatcher {
    async fn send(&self, identity: &NormalizedIdentity, badge_png: &[u8]) -> Result<(), String> {
        if self.should_fail {
            return Err("dispatch failed".to_string());
        }
        let mut guard = self.sent.lock().expect("sent mutex poisoned");
        guard.push((identity.clone(), badge_png.to_vec()));
        Ok(())
    }
}

// Sink fake that records every submission.
#[derive(Clone)]
pub struct RecordingSink {
    pub recorded: Arc<Mutex<Vec<ContactSubmission>>>,
    pub should_fail: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            recorded: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }
}

#[async_trait]
impl SubmissionSink for RecordingSink {
    async fn record(&self, submission: &ContactSubmission) -> Result<(), String> {
        if self.should_fail {
            return Err("record failed".to_string());
        }
        let mut guard = self.recorded.lock().expect("recorded mutex poisoned");
        guard.push(submission.clone());
        Ok(())
    }
}
