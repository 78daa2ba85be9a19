// Aarya Engine — Response Tag Parsing
// Decodes the leading control tag of a generated reply into an emotion and
// strips it from the display text. Only a tag at the very start counts;
// tags later in the text are ordinary content.

use crate::atoms::constants::EMPTY_REPLY;
use crate::atoms::types::{AnswerSource, ControlTag, Emotion, ResolvedAnswer, TaggedReply};

impl ControlTag {
    /// Split a leading `[TAG]` off `text` (leading whitespace ignored).
    /// Case-sensitive: `[happy]` is not a tag.
    pub fn strip_leading(text: &str) -> Option<(ControlTag, &str)> {
        let trimmed = text.trim_start();
        ControlTag::ALL
            .iter()
            .find_map(|tag| trimmed.strip_prefix(tag.literal()).map(|rest| (*tag, rest)))
    }
}

/// Turn a tagged reply into a displayable answer. Never fails: a missing or
/// unknown tag yields `Emotion::Neutral` and the trimmed text. A reply with
/// nothing after its tag reads as `EMPTY_REPLY`.
pub fn parse(tagged: &TaggedReply) -> ResolvedAnswer {
    parse_str(tagged.as_str())
}

pub fn parse_str(raw: &str) -> ResolvedAnswer {
    let (emotion, text) = match ControlTag::strip_leading(raw) {
        Some((tag, rest)) => (tag.emotion(), rest.trim()),
        None => (Emotion::Neutral, raw.trim()),
    };
    if text.is_empty() && raw.trim() != EMPTY_REPLY {
        return parse_str(EMPTY_REPLY);
    }
    ResolvedAnswer { text: text.to_string(), emotion, source: AnswerSource::Generated }
}
