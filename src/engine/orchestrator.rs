// Aarya Engine — Resolution Orchestrator
//
// Sequences one utterance through the pipeline:
//
//   LocalLookup ──hit──────────────────────────────▶ Done (neutral, verbatim)
//        │ miss
//        ▼
//   CloudFallback ──ok──▶ tag parse ───────────────▶ Done
//        │ err
//        └──────────────▶ random apology (neutral) ─▶ Done
//
// Images skip LocalLookup. Every path ends in a ResolvedAnswer; nothing is
// retried and nothing here returns an error.

use crate::atoms::constants::DEFAULT_APOLOGIES;
use crate::atoms::types::{KnowledgeEntry, ResolvedAnswer};
use crate::engine::fallback::FallbackResponder;
use crate::engine::knowledge::{find_response, KnowledgeStore};
use crate::engine::tags;
use log::{error, info};
use rand::seq::IndexedRandom;

pub struct Orchestrator {
    responder: FallbackResponder,
}

impl Orchestrator {
    pub fn new(responder: FallbackResponder) -> Self {
        Orchestrator { responder }
    }

    pub fn responder(&self) -> &FallbackResponder {
        &self.responder
    }

    /// Resolve a text utterance against a knowledge snapshot.
    pub async fn resolve(&self, user_input: &str, entries: &[KnowledgeEntry]) -> ResolvedAnswer {
        if let Some(response) = find_response(user_input, entries) {
            info!("[orchestrator] Answered from local knowledge");
            return ResolvedAnswer::local(response);
        }

        info!("[orchestrator] No local match; falling back to generative service");
        match self.responder.respond_to_text(user_input).await {
            Ok(reply) => tags::parse(&reply),
            Err(e) => {
                error!("[orchestrator] Fallback failed: {}", e);
                apology()
            }
        }
    }

    /// Resolve against the current snapshot of a live store.
    pub async fn resolve_with_store(&self, user_input: &str, store: &KnowledgeStore) -> ResolvedAnswer {
        let snapshot = store.snapshot();
        self.resolve(user_input, &snapshot).await
    }

    /// Resolve a camera frame. No local entry can match an image.
    pub async fn resolve_image(&self, jpeg: &[u8]) -> ResolvedAnswer {
        match self.responder.respond_to_image(jpeg).await {
            Ok(reply) => tags::parse(&reply),
            Err(e) => {
                error!("[orchestrator] Image fallback failed: {}", e);
                apology()
            }
        }
    }
}

/// One of the fixed apologies, drawn uniformly at random.
fn apology() -> ResolvedAnswer {
    let text = DEFAULT_APOLOGIES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(DEFAULT_APOLOGIES[0]);
    ResolvedAnswer::degraded(text)
}
