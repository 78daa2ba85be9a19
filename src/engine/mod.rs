// Aarya Engine — Knowledge resolution runtime
// Local keyword matching first, generative fallback second, with emotion
// tags decoded from generated replies.

pub mod config;
pub mod fallback;
pub mod knowledge;
pub mod orchestrator;
pub mod providers;
pub mod tags;

#[cfg(test)]
pub(crate) mod testing;
