// Aarya Engine — Configuration
//
// `config.toml` lives under the platform config dir (`dirs::config_dir()/aarya`)
// unless an explicit path is given. Every field has a default, and a missing
// file simply yields the defaults. `GEMINI_API_KEY` in the environment wins
// over the file so keys can stay out of dotfiles.

use crate::atoms::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, GEMINI_API_KEY_ENV};
use crate::atoms::error::{EngineError, EngineResult};
use crate::atoms::types::Profile;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AaryaConfig {
    /// Optional TOML knowledge seed file. Relative paths resolve against the
    /// config file's directory.
    pub knowledge_path: Option<PathBuf>,
    pub gemini: GeminiConfig,
    pub profile: Profile,
}

#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

// Hand-written so the key never lands in logs.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl AaryaConfig {
    /// Parse config text. Does not consult the environment.
    pub fn from_toml(content: &str) -> EngineResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from `path`, or from the default location when `None`.
    /// A missing default file is not an error; a missing explicit file is.
    pub fn load(path: Option<&Path>) -> EngineResult<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match default_config_path() {
                Some(p) => (p, false),
                None => {
                    debug!("[config] No platform config dir; using defaults");
                    return Ok(Self::default().with_env_overrides());
                }
            },
        };

        let mut config = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let mut parsed = Self::from_toml(&content)?;
            parsed.resolve_relative_paths(&path);
            info!("[config] Loaded {}", path.display());
            parsed
        } else if explicit {
            return Err(EngineError::Config(format!("config file not found: {}", path.display())));
        } else {
            debug!("[config] {} not found; using defaults", path.display());
            Self::default()
        };

        config = config.with_env_overrides();
        Ok(config)
    }

    /// Apply `GEMINI_API_KEY` if set and non-empty.
    pub fn with_env_overrides(self) -> Self {
        let env_key = std::env::var(GEMINI_API_KEY_ENV).ok();
        self.with_api_key_override(env_key)
    }

    fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            debug!("[config] Using API key from {}", GEMINI_API_KEY_ENV);
            self.gemini.api_key = Some(key);
        }
        self
    }

    fn resolve_relative_paths(&mut self, config_path: &Path) {
        if let (Some(kp), Some(dir)) = (self.knowledge_path.as_mut(), config_path.parent()) {
            if kp.is_relative() {
                *kp = dir.join(&*kp);
            }
        }
    }
}

/// `<config dir>/aarya/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
