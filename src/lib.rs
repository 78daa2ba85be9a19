// Aarya — Knowledge Resolution Pipeline
//
// Answers an utterance from a small curated knowledge base when a keyword
// matches, otherwise asks Gemini and decodes the emotion tag it prefixes.
//
// Layering: atoms (pure types, constants, errors, trait seams) ← engine.

pub mod atoms;
pub mod engine;

pub use atoms::error::{EngineError, EngineResult};
pub use atoms::traits::GenerativeService;
pub use atoms::types::{
    AnswerSource, ControlTag, Emotion, KnowledgeEntry, Profile, ResolvedAnswer, TaggedReply,
};
pub use engine::config::{AaryaConfig, GeminiConfig};
pub use engine::fallback::FallbackResponder;
pub use engine::knowledge::{KnowledgeSnapshot, KnowledgeStore};
pub use engine::orchestrator::Orchestrator;
pub use engine::providers::GeminiClient;

use std::sync::Arc;

/// Wire up an orchestrator from config: Gemini client, persona, profile.
pub fn orchestrator_from_config(config: &AaryaConfig) -> Orchestrator {
    let service: Arc<dyn GenerativeService> = engine::providers::from_config(&config.gemini);
    Orchestrator::new(FallbackResponder::new(Some(service), config.profile.clone()))
}

/// Build the knowledge store from the configured seed file, if any.
pub fn knowledge_store_from_config(config: &AaryaConfig) -> EngineResult<KnowledgeStore> {
    let entries = match &config.knowledge_path {
        Some(path) => engine::knowledge::load_knowledge_file(path)?,
        None => Vec::new(),
    };
    Ok(KnowledgeStore::new(entries))
}
