// ── Aarya Atoms: Constants ─────────────────────────────────────────────────
// All named constants for the crate live here: score tiers, canned replies,
// persona text and service defaults.

// ── Keyword scoring tiers ──────────────────────────────────────────────────
// Within a tier, the keyword's length is added so that longer, more specific
// phrases outrank short generic ones.
pub const EXACT_MATCH_SCORE: u32 = 100;
pub const WORD_BOUNDARY_BASE: u32 = 20;
pub const SUBSTRING_BASE: u32 = 10;
pub const TOKEN_SET_BASE: u32 = 5;

// ── Canned replies ─────────────────────────────────────────────────────────
// Tag-prefixed so they flow through the same parser as generated replies.

/// Returned when no credential is configured for the generative service.
pub const UNCONFIGURED_REPLY: &str = "[SAD] I can't reach my cloud brain yet. \
Add a Gemini API key to your config file (or set GEMINI_API_KEY) and ask me again.";

/// Returned when the service answered successfully but with no usable text.
pub const EMPTY_REPLY: &str = "[NEUTRAL] I'm sorry, I couldn't come up with a response to that.";

/// Generic apologies for the orchestrator's last-resort path. One is drawn
/// uniformly at random per failed resolution.
pub const DEFAULT_APOLOGIES: [&str; 4] = [
    "I'm sorry, I don't know the answer to that yet.",
    "Hmm, I'm not sure about that one. Could you ask me something else?",
    "I don't have an answer for that right now. Try rephrasing your question?",
    "That's outside what I know at the moment. Sorry about that!",
];

// ── Persona ────────────────────────────────────────────────────────────────

pub const ASSISTANT_NAME: &str = "Aarya AI";

/// System instruction sent with every generative request, after
/// "You are {ASSISTANT_NAME}, ". The tag list must stay in sync with
/// `ControlTag::ALL`.
pub const PERSONA_INSTRUCTION: &str = "a friendly and helpful virtual assistant \
with an expressive animated avatar. Keep answers short, warm and conversational (two to four sentences). \
Begin EVERY reply with exactly one emotion tag chosen from: \
[NEUTRAL], [HAPPY], [SAD], [ANGRY], [SURPRISED], [THINKING], [CONCERNED]. \
Put the tag first, followed by a space and your answer. Never use more than one tag.";

/// Prompt used when the user shares a camera frame.
pub const IMAGE_PROMPT: &str =
    "Describe what you see in this image and respond to the user about it in a friendly way.";

// ── Generative service defaults ────────────────────────────────────────────

pub const GEMINI_PROVIDER_NAME: &str = "google";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const GEMINI_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const GEMINI_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Environment variable that overrides the configured API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

// ── Configuration paths ────────────────────────────────────────────────────
pub const CONFIG_DIR_NAME: &str = "aarya";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_LANGUAGE: &str = "en";
