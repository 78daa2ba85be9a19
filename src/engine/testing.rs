// Test double for the generative service, shared by unit tests.

use crate::atoms::error::{EngineError, EngineResult};
use crate::atoms::traits::GenerativeService;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

pub struct MockService {
    reply: Option<String>,
    revoked: bool,
    configured: AtomicBool,
    text_calls: AtomicUsize,
    image_calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
    last_image: Mutex<Option<String>>,
}

impl MockService {
    pub fn replying(reply: &str) -> Self {
        Self::build(Some(reply.to_string()))
    }

    pub fn failing() -> Self {
        Self::build(None)
    }

    /// Reports configured, then fails the call as if the key was cleared
    /// in between.
    pub fn credential_revoked() -> Self {
        MockService { revoked: true, ..Self::build(None) }
    }

    fn build(reply: Option<String>) -> Self {
        MockService {
            reply,
            revoked: false,
            configured: AtomicBool::new(true),
            text_calls: AtomicUsize::new(0),
            image_calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            last_image: Mutex::new(None),
        }
    }

    pub fn unconfigured(self) -> Self {
        self.configured.store(false, Ordering::SeqCst);
        self
    }

    pub fn text_calls(&self) -> usize {
        self.text_calls.load(Ordering::SeqCst)
    }

    pub fn image_calls(&self) -> usize {
        self.image_calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().clone()
    }

    pub fn last_image(&self) -> Option<String> {
        self.last_image.lock().clone()
    }

    fn answer(&self) -> EngineResult<String> {
        if self.revoked {
            return Err(EngineError::Config("API key is not configured".into()));
        }
        self.reply
            .clone()
            .ok_or_else(|| EngineError::provider("mock", "simulated network failure"))
    }
}

#[async_trait]
impl GenerativeService for MockService {
    fn name(&self) -> &str {
        "mock"
    }

    fn is_configured(&self) -> bool {
        self.configured.load(Ordering::SeqCst)
    }

    fn reconfigure(&self, credential: Option<String>) {
        self.configured.store(credential.is_some(), Ordering::SeqCst);
    }

    async fn complete_text(&self, _system: &str, prompt: &str) -> EngineResult<String> {
        self.text_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock() = Some(prompt.to_string());
        self.answer()
    }

    async fn complete_image(&self, _system: &str, _prompt: &str, jpeg_base64: &str) -> EngineResult<String> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_image.lock() = Some(jpeg_base64.to_string());
        self.answer()
    }
}
