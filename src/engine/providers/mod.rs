// Aarya Engine — Generative Service Providers
// Concrete backends for the GenerativeService trait. Callers hold an
// `Arc<dyn GenerativeService>` and never name the concrete type.

pub mod google;

pub use google::GeminiClient;

use crate::atoms::traits::GenerativeService;
use crate::engine::config::GeminiConfig;
use std::sync::Arc;

/// Build the production generative service from config.
pub fn from_config(config: &GeminiConfig) -> Arc<dyn GenerativeService> {
    Arc::new(GeminiClient::new(config))
}
