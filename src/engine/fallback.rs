// Aarya Engine — Fallback Responder
//
// Wraps an injected GenerativeService with the assistant persona and turns
// its output into a TaggedReply. Owns the degraded-service messaging:
//   • no service / no credential → Ok([SAD] configure-me message), no call made;
//     a credential cleared mid-call (Config error) gets the same message
//   • service succeeded with empty text → Ok([NEUTRAL] can't-respond message)
//   • service failed → Err, for the orchestrator to handle
// Exactly one attempt per call.

use crate::atoms::constants::{
    ASSISTANT_NAME, EMPTY_REPLY, IMAGE_PROMPT, PERSONA_INSTRUCTION, UNCONFIGURED_REPLY,
};
use crate::atoms::error::{EngineError, EngineResult};
use crate::atoms::traits::GenerativeService;
use crate::atoms::types::{Profile, TaggedReply};
use base64::Engine as _;
use log::{info, warn};
use std::sync::Arc;

pub struct FallbackResponder {
    service: Option<Arc<dyn GenerativeService>>,
    profile: Profile,
}

impl FallbackResponder {
    pub fn new(service: Option<Arc<dyn GenerativeService>>, profile: Profile) -> Self {
        FallbackResponder { service, profile }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Whether a call would actually reach the service.
    pub fn is_configured(&self) -> bool {
        self.service.as_ref().is_some_and(|s| s.is_configured())
    }

    /// Swap the credential on the injected service. No-op without a service.
    pub fn reconfigure_credential(&self, credential: Option<String>) {
        match &self.service {
            Some(service) => service.reconfigure(credential),
            None => warn!("[fallback] reconfigure ignored: no generative service attached"),
        }
    }

    /// Persona instruction plus a locale line for the profile language.
    pub fn system_instruction(&self) -> String {
        let persona = format!("You are {}, {}", ASSISTANT_NAME, PERSONA_INSTRUCTION);
        let language = self.profile.language.trim();
        if language.is_empty() {
            return persona;
        }
        format!(
            "{} Reply in the language identified by the code \"{}\" \
             unless the user writes in a different language. Keep the emotion tag in English.",
            persona, language
        )
    }

    pub async fn respond_to_text(&self, prompt: &str) -> EngineResult<TaggedReply> {
        let Some(service) = self.ready_service() else {
            return Ok(TaggedReply::new(UNCONFIGURED_REPLY));
        };
        info!("[fallback] Asking {} ({} chars)", service.name(), prompt.chars().count());
        let result = service.complete_text(&self.system_instruction(), prompt).await;
        finish(result)
    }

    pub async fn respond_to_image(&self, jpeg: &[u8]) -> EngineResult<TaggedReply> {
        let Some(service) = self.ready_service() else {
            return Ok(TaggedReply::new(UNCONFIGURED_REPLY));
        };
        let encoded = base64::engine::general_purpose::STANDARD.encode(jpeg);
        info!("[fallback] Sending image to {} ({} bytes)", service.name(), jpeg.len());
        let result = service
            .complete_image(&self.system_instruction(), IMAGE_PROMPT, &encoded)
            .await;
        finish(result)
    }

    fn ready_service(&self) -> Option<&Arc<dyn GenerativeService>> {
        match &self.service {
            Some(s) if s.is_configured() => Some(s),
            _ => {
                warn!("[fallback] Generative service not configured; returning setup hint");
                None
            }
        }
    }
}

fn finish(result: EngineResult<String>) -> EngineResult<TaggedReply> {
    match result {
        Ok(text) => Ok(non_empty(text)),
        Err(EngineError::Config(msg)) => {
            warn!("[fallback] Service lost its credential: {}; returning setup hint", msg);
            Ok(TaggedReply::new(UNCONFIGURED_REPLY))
        }
        Err(e) => Err(e),
    }
}

fn non_empty(text: String) -> TaggedReply {
    if text.trim().is_empty() {
        warn!("[fallback] Service returned no text");
        TaggedReply::new(EMPTY_REPLY)
    } else {
        TaggedReply::new(text)
    }
}
