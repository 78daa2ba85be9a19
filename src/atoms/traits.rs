// ── Aarya Atoms: Trait Seams ───────────────────────────────────────────────
// The generative service is consumed through this trait so the fallback
// responder can be driven by the real Gemini client or by a test double.

use crate::atoms::error::EngineResult;
use async_trait::async_trait;

/// A text/vision completion backend.
///
/// Implementations perform exactly one request per call. Retry and timeout
/// policy belong to the implementation, never to callers.
#[async_trait]
pub trait GenerativeService: Send + Sync {
    /// Short provider name used in logs and errors.
    fn name(&self) -> &str;

    /// Whether a credential is currently available.
    fn is_configured(&self) -> bool;

    /// Replace (or clear, with `None`) the credential used for later calls.
    fn reconfigure(&self, credential: Option<String>);

    /// Plain text completion. Returns the raw model text, which may be empty.
    async fn complete_text(&self, system: &str, prompt: &str) -> EngineResult<String>;

    /// Image-grounded completion. `jpeg_base64` is standard base64 without a
    /// `data:` prefix.
    async fn complete_image(&self, system: &str, prompt: &str, jpeg_base64: &str) -> EngineResult<String>;
}
