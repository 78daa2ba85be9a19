// Aarya Engine — In-memory Knowledge Store
//
// Owns the live knowledge base and hands out immutable snapshots.
//   • Entries are kept sorted by topic (ascending, stable for equal topics),
//     which makes the matcher's first-wins tie-break reproducible.
//   • Subscribers are called with the fresh snapshot on every change and
//     once on subscription. Writes and their notifications are serialized,
//     so the last snapshot a subscriber sees is the store's current one.
//     Callbacks may read the store but must not write to it.
//   • `add` assigns a uuid v4 id; the pipeline itself never assigns ids.
//
// Durable persistence is the host's concern; this store can be seeded from
// a TOML file with `load_knowledge_file`.

use crate::atoms::error::{EngineError, EngineResult};
use crate::atoms::types::KnowledgeEntry;
use log::{info, warn};
use parking_lot::{Mutex, RwLock};
use serde::Deserialize;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Immutable view of the knowledge base at one point in time.
pub type KnowledgeSnapshot = Arc<[KnowledgeEntry]>;

type Subscriber = Arc<dyn Fn(&KnowledgeSnapshot) + Send + Sync>;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

pub struct KnowledgeStore {
    snapshot: RwLock<KnowledgeSnapshot>,
    subscribers: RwLock<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: AtomicU64,
    notify: Mutex<()>,
}

impl Default for KnowledgeStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl KnowledgeStore {
    pub fn new(entries: Vec<KnowledgeEntry>) -> Self {
        KnowledgeStore {
            snapshot: RwLock::new(sorted(entries)),
            subscribers: RwLock::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
            notify: Mutex::new(()),
        }
    }

    /// Current entries, ordered by topic.
    pub fn snapshot(&self) -> KnowledgeSnapshot {
        self.snapshot.read().clone()
    }

    pub fn len(&self) -> usize {
        self.snapshot.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Register a change callback. It is invoked immediately with the
    /// current snapshot, then after every write.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&KnowledgeSnapshot) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        let callback: Subscriber = Arc::new(callback);
        let _order = self.notify.lock();
        self.subscribers.write().push((id, callback.clone()));
        callback(&self.snapshot());
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subs = self.subscribers.write();
        let before = subs.len();
        subs.retain(|(sid, _)| *sid != id);
        subs.len() != before
    }

    /// Insert an entry and return its newly assigned id.
    pub fn add(&self, mut entry: KnowledgeEntry) -> EngineResult<String> {
        validate(&entry)?;
        let id = uuid::Uuid::new_v4().to_string();
        entry.id = Some(id.clone());
        info!("[knowledge] Added entry '{}' ({})", entry.topic, id);
        self.write_with(|entries| entries.push(entry));
        Ok(id)
    }

    /// Remove the entry with `id`. Returns whether anything was removed.
    pub fn delete(&self, id: &str) -> bool {
        let mut removed = false;
        self.write_with(|entries| {
            let before = entries.len();
            entries.retain(|e| e.id.as_deref() != Some(id));
            removed = entries.len() != before;
        });
        if removed {
            info!("[knowledge] Deleted entry {}", id);
        } else {
            warn!("[knowledge] Delete: no entry with id {}", id);
        }
        removed
    }

    /// Swap the whole knowledge base, e.g. after reloading a seed file.
    pub fn replace_all(&self, entries: Vec<KnowledgeEntry>) {
        info!("[knowledge] Replacing knowledge base ({} entries)", entries.len());
        self.write_with(|current| *current = entries);
    }

    fn write_with(&self, mutate: impl FnOnce(&mut Vec<KnowledgeEntry>)) {
        // Held until every subscriber has seen this write.
        let _order = self.notify.lock();
        let fresh = {
            let mut guard = self.snapshot.write();
            let mut entries: Vec<KnowledgeEntry> = guard.iter().cloned().collect();
            mutate(&mut entries);
            *guard = sorted(entries);
            guard.clone()
        };
        // Snapshot lock released so callbacks may read the store.
        let subs: Vec<Subscriber> = self.subscribers.read().iter().map(|(_, s)| s.clone()).collect();
        for sub in subs {
            sub(&fresh);
        }
    }
}

fn sorted(mut entries: Vec<KnowledgeEntry>) -> KnowledgeSnapshot {
    entries.sort_by(|a, b| a.topic.cmp(&b.topic));
    entries.into()
}

fn validate(entry: &KnowledgeEntry) -> EngineResult<()> {
    if entry.topic.trim().is_empty() {
        return Err(EngineError::Knowledge("entry topic must not be empty".into()));
    }
    if entry.response.trim().is_empty() {
        return Err(EngineError::Knowledge(format!("entry '{}' has an empty response", entry.topic)));
    }
    if entry.keywords.iter().all(|k| k.trim().is_empty()) {
        warn!("[knowledge] Entry '{}' has no keywords and can never match", entry.topic);
    }
    Ok(())
}

// ── Seed files ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct KnowledgeFile {
    #[serde(default)]
    entries: Vec<KnowledgeEntry>,
}

/// Parse a TOML knowledge file made of `[[entries]]` tables.
pub fn parse_knowledge(content: &str) -> EngineResult<Vec<KnowledgeEntry>> {
    let file: KnowledgeFile = toml::from_str(content)?;
    for entry in &file.entries {
        validate(entry)?;
    }
    Ok(file.entries)
}

/// Read and parse a knowledge seed file from disk.
pub fn load_knowledge_file(path: &Path) -> EngineResult<Vec<KnowledgeEntry>> {
    let content = std::fs::read_to_string(path)?;
    let entries = parse_knowledge(&content)?;
    info!("[knowledge] Loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}
