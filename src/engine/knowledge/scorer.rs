// Aarya Engine — Keyword Scoring
//
// Scores one entry's keyword set against normalized input. Four tiers,
// evaluated per keyword in strict priority order (first that fires wins):
//
//   Exact        input == keyword                      → 100, ends the whole call
//   WordBoundary keyword bounded by word boundaries    → 20 + specificity
//   Substring    keyword anywhere in input             → 10 + specificity
//                (multi-word keywords only)
//   TokenSet     every keyword token among input's     → 5 + specificity
//                (multi-word keywords only)
//
// A single-word keyword therefore only matches whole words: "hi" matches
// "hi there" but never "hike".
//
// The entry's score is the best single keyword, never a sum.

use super::normalize::normalize;
use crate::atoms::constants::{
    EXACT_MATCH_SCORE, SUBSTRING_BASE, TOKEN_SET_BASE, WORD_BOUNDARY_BASE,
};
use std::collections::HashSet;

/// Which tier produced a keyword's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    TokenSet,
    Substring,
    WordBoundary,
    Exact,
}

impl MatchTier {
    pub fn label(&self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::WordBoundary => "word-boundary",
            MatchTier::Substring => "substring",
            MatchTier::TokenSet => "token-set",
        }
    }
}

/// Best-scoring keyword of an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch {
    pub score: u32,
    pub tier: MatchTier,
    /// The keyword after normalization.
    pub keyword: String,
}

/// Score `keywords` against already-normalized input.
pub fn score(normalized_input: &str, keywords: &[String]) -> u32 {
    score_detailed(normalized_input, keywords).map_or(0, |m| m.score)
}

/// Like [`score`], but reports the winning keyword and tier.
/// Returns `None` when nothing fires (score 0).
pub fn score_detailed(normalized_input: &str, keywords: &[String]) -> Option<KeywordMatch> {
    let mut best: Option<KeywordMatch> = None;
    let mut input_tokens: Option<HashSet<&str>> = None;

    for raw in keywords {
        let keyword = normalize(raw);
        if keyword.is_empty() {
            continue;
        }

        if normalized_input == keyword {
            return Some(KeywordMatch { score: EXACT_MATCH_SCORE, tier: MatchTier::Exact, keyword });
        }

        let specificity = specificity(&keyword);
        let multi_word = keyword.contains(' ');
        let hit = if contains_bounded(normalized_input, &keyword) {
            Some((MatchTier::WordBoundary, WORD_BOUNDARY_BASE + specificity))
        } else if multi_word && normalized_input.contains(keyword.as_str()) {
            Some((MatchTier::Substring, SUBSTRING_BASE + specificity))
        } else if multi_word {
            let tokens = input_tokens
                .get_or_insert_with(|| normalized_input.split(' ').collect());
            if keyword.split(' ').all(|t| tokens.contains(t)) {
                Some((MatchTier::TokenSet, TOKEN_SET_BASE + specificity))
            } else {
                None
            }
        } else {
            None
        };

        if let Some((tier, s)) = hit {
            if best.as_ref().map_or(true, |b| s > b.score) {
                best = Some(KeywordMatch { score: s, tier, keyword });
            }
        }
    }

    best
}

/// Number of non-space characters in a normalized keyword.
fn specificity(keyword: &str) -> u32 {
    keyword.chars().filter(|c| *c != ' ').count() as u32
}

/// Whether `needle` occurs in `haystack` with a word boundary on both sides.
/// Both sides are normalized, so a boundary is a space or either end.
/// Overlapping occurrences are considered ("a a" in "xa a a").
fn contains_bounded(haystack: &str, needle: &str) -> bool {
    let bytes = haystack.as_bytes();
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        let start = from + pos;
        let end = start + needle.len();
        let left_ok = start == 0 || bytes[start - 1] == b' ';
        let right_ok = end == bytes.len() || bytes[end] == b' ';
        if left_ok && right_ok {
            return true;
        }
        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
    }
    false
}
