// Aarya Engine — Local Knowledge Matcher
// Scans a knowledge snapshot and picks the best entry for an utterance.
//
// Policy: strictly-higher score wins; on a tie the entry seen first in the
// snapshot keeps the lead. The result therefore depends on snapshot order,
// which `KnowledgeStore` keeps stable (sorted by topic).

use super::normalize::normalize;
use super::scorer::{score_detailed, KeywordMatch};
use crate::atoms::types::KnowledgeEntry;
use log::debug;

/// A scored entry, for diagnostics.
#[derive(Debug, Clone)]
pub struct RankedEntry<'a> {
    pub entry: &'a KnowledgeEntry,
    pub matched: KeywordMatch,
}

/// Best entry for `user_input`, or `None` if nothing scores above zero.
/// Pure: never mutates the entries (including `match_count`).
pub fn match_entry<'a>(user_input: &str, entries: &'a [KnowledgeEntry]) -> Option<&'a KnowledgeEntry> {
    let normalized = normalize(user_input);
    if normalized.is_empty() {
        return None;
    }

    let mut best: Option<(&KnowledgeEntry, u32)> = None;
    for entry in entries {
        let Some(m) = score_detailed(&normalized, &entry.keywords) else {
            continue;
        };
        if best.map_or(true, |(_, top)| m.score > top) {
            best = Some((entry, m.score));
        }
    }

    match best {
        Some((entry, s)) => {
            debug!("[knowledge] '{}' matched topic '{}' (score {})", normalized, entry.topic, s);
            Some(entry)
        }
        None => {
            debug!("[knowledge] '{}' matched nothing across {} entries", normalized, entries.len());
            None
        }
    }
}

/// Response text of the best entry, if any.
pub fn find_response<'a>(user_input: &str, entries: &'a [KnowledgeEntry]) -> Option<&'a str> {
    match_entry(user_input, entries).map(|e| e.response.as_str())
}

/// Every entry with a positive score, best first. Equal scores keep snapshot
/// order, so the head of this list is always what `match_entry` returns.
pub fn rank<'a>(user_input: &str, entries: &'a [KnowledgeEntry]) -> Vec<RankedEntry<'a>> {
    let normalized = normalize(user_input);
    if normalized.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<RankedEntry<'a>> = entries
        .iter()
        .filter_map(|entry| {
            score_detailed(&normalized, &entry.keywords).map(|matched| RankedEntry { entry, matched })
        })
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.matched.score.cmp(&a.matched.score));
    ranked
}
