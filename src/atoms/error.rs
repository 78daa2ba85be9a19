// ── Aarya Atoms: Error Types ───────────────────────────────────────────────
// Single canonical error enum for the engine, built with `thiserror`.
//
// Design rules:
//   • Variants are coarse-grained by domain (I/O, Config, Provider, Knowledge).
//   • Transport failures are reported as `Provider`, with the URL stripped.
//   • The `#[from]` attribute wires std/external error conversions automatically.
//   • No variant carries secret material (API keys) in its message.
//   • `resolve()` never returns these: the orchestrator turns every failure
//     into a displayable answer. Errors only surface from setup paths
//     (config loading, knowledge files) and from the fallback responder.

use thiserror::Error;

// ── Primary error enum ─────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum EngineError {
    /// Filesystem or OS-level I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization / deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML config or knowledge file could not be parsed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generative service HTTP or API-level failure (non-secret detail only).
    #[error("Provider error: {provider}: {message}")]
    Provider { provider: String, message: String },

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Knowledge base content is invalid (e.g. an entry without keywords).
    #[error("Knowledge error: {0}")]
    Knowledge(String),
}

// ── Convenience constructors ───────────────────────────────────────────────

impl EngineError {
    /// Create a provider error with name and message.
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider { provider: provider.into(), message: message.into() }
    }
}

// ── Convenience alias ──────────────────────────────────────────────────────

/// All fallible engine operations return this type.
pub type EngineResult<T> = Result<T, EngineError>;
