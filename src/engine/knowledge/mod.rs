// Aarya Engine — Local Knowledge
// Normalization, keyword scoring, snapshot matching and the in-memory store.

pub mod matcher;
pub mod normalize;
pub mod scorer;
pub mod store;

pub use matcher::{find_response, match_entry, rank, RankedEntry};
pub use normalize::normalize;
pub use scorer::{score, score_detailed, KeywordMatch, MatchTier};
pub use store::{load_knowledge_file, parse_knowledge, KnowledgeSnapshot, KnowledgeStore, SubscriptionId};
