// ── Aarya Atoms: Pure Data Types ──────────────────────────────────────────────
// Plain struct/enum definitions shared by every engine module.
// Atoms layer rule: no I/O, no side effects, no imports from engine/.

use serde::{Deserialize, Serialize};

// ── Knowledge ──────────────────────────────────────────────────────────

/// One unit of curated Q&A. The pipeline only ever reads these; ids are
/// assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub topic: String,
    /// Free-form phrases, case- and punctuation-insensitive at match time.
    #[serde(default)]
    pub keywords: Vec<String>,
    pub response: String,
    /// Owned by external analytics. Never read or written by the matcher.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_count: Option<u64>,
}

impl KnowledgeEntry {
    pub fn new(topic: impl Into<String>, keywords: &[&str], response: impl Into<String>) -> Self {
        KnowledgeEntry {
            id: None,
            topic: topic.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            response: response.into(),
            match_count: None,
        }
    }
}

// ── Emotion ────────────────────────────────────────────────────────────

/// Emotional state signal consumed by the avatar/state display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    #[default]
    Neutral,
    Happy,
    Sad,
    Angry,
    Surprised,
    Thinking,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Neutral => "neutral",
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Surprised => "surprised",
            Emotion::Thinking => "thinking",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Control tags ───────────────────────────────────────────────────────

/// Closed set of leading control tags the generative service is asked to
/// emit. Written on the wire as `[NAME]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlTag {
    Neutral,
    Happy,
    Sad,
    Angry,
    Surprised,
    Thinking,
    Concerned,
}

impl ControlTag {
    pub const ALL: [ControlTag; 7] = [
        ControlTag::Neutral,
        ControlTag::Happy,
        ControlTag::Sad,
        ControlTag::Angry,
        ControlTag::Surprised,
        ControlTag::Thinking,
        ControlTag::Concerned,
    ];

    /// Bracketed wire literal, e.g. `[HAPPY]`.
    pub fn literal(&self) -> &'static str {
        match self {
            ControlTag::Neutral => "[NEUTRAL]",
            ControlTag::Happy => "[HAPPY]",
            ControlTag::Sad => "[SAD]",
            ControlTag::Angry => "[ANGRY]",
            ControlTag::Surprised => "[SURPRISED]",
            ControlTag::Thinking => "[THINKING]",
            ControlTag::Concerned => "[CONCERNED]",
        }
    }

    /// The avatar has no dedicated "concerned" state; it renders as sad.
    pub fn emotion(&self) -> Emotion {
        match self {
            ControlTag::Neutral => Emotion::Neutral,
            ControlTag::Happy => Emotion::Happy,
            ControlTag::Sad | ControlTag::Concerned => Emotion::Sad,
            ControlTag::Angry => Emotion::Angry,
            ControlTag::Surprised => Emotion::Surprised,
            ControlTag::Thinking => Emotion::Thinking,
        }
    }
}

/// Raw reply from the fallback responder, expected to begin with a control tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedReply(pub String);

impl TaggedReply {
    pub fn new(text: impl Into<String>) -> Self {
        TaggedReply(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ── Resolved answer ────────────────────────────────────────────────────

/// Which path produced an answer. Informational only.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnswerSource {
    #[default]
    Local,
    Generated,
    Degraded,
}

/// The pipeline's sole output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedAnswer {
    pub text: String,
    pub emotion: Emotion,
    #[serde(default)]
    pub source: AnswerSource,
}

impl ResolvedAnswer {
    pub fn local(text: impl Into<String>) -> Self {
        ResolvedAnswer { text: text.into(), emotion: Emotion::Neutral, source: AnswerSource::Local }
    }

    pub fn degraded(text: impl Into<String>) -> Self {
        ResolvedAnswer { text: text.into(), emotion: Emotion::Neutral, source: AnswerSource::Degraded }
    }
}

// ── Profile ────────────────────────────────────────────────────────────

/// User-facing profile. Only `language` affects generated prompts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Profile {
    pub display_name: String,
    pub theme_color: String,
    pub language: String,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            display_name: "Friend".into(),
            theme_color: "#7c3aed".into(),
            language: crate::atoms::constants::DEFAULT_LANGUAGE.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serde_uses_camel_case() {
        let mut e = KnowledgeEntry::new("Welcome", &["hello"], "Hi!");
        e.match_count = Some(3);
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"matchCount\":3"));
        assert!(!json.contains("\"id\""));
        let back: KnowledgeEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn test_concerned_renders_as_sad() {
        assert_eq!(ControlTag::Concerned.emotion(), Emotion::Sad);
        assert_eq!(ControlTag::Thinking.emotion(), Emotion::Thinking);
    }

    #[test]
    fn test_answer_serializes_lowercase() {
        let a = ResolvedAnswer::local("hi");
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"{"text":"hi","emotion":"neutral","source":"local"}"#);
    }
}
