// End-to-end scenarios through the public API: knowledge store → orchestrator
// → (mock) generative service.

use aarya::atoms::constants::DEFAULT_APOLOGIES;
use aarya::engine::knowledge::{match_entry, normalize, parse_knowledge, score};
use aarya::{
    AnswerSource, EngineError, EngineResult, Emotion, FallbackResponder, GenerativeService,
    KnowledgeEntry, KnowledgeStore, Orchestrator, Profile,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct ScriptedService {
    reply: Option<&'static str>,
    calls: AtomicUsize,
}

impl ScriptedService {
    fn new(reply: Option<&'static str>) -> Arc<Self> {
        Arc::new(ScriptedService { reply, calls: AtomicUsize::new(0) })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerativeService for ScriptedService {
    fn name(&self) -> &str {
        "scripted"
    }

    fn is_configured(&self) -> bool {
        true
    }

    fn reconfigure(&self, _credential: Option<String>) {}

    async fn complete_text(&self, _system: &str, _prompt: &str) -> EngineResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .map(String::from)
            .ok_or_else(|| EngineError::provider("scripted", "connection reset"))
    }

    async fn complete_image(&self, _system: &str, _prompt: &str, _jpeg: &str) -> EngineResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .map(String::from)
            .ok_or_else(|| EngineError::provider("scripted", "connection reset"))
    }
}

fn orchestrator(service: &Arc<ScriptedService>) -> Orchestrator {
    let service = service.clone() as Arc<dyn GenerativeService>;
    Orchestrator::new(FallbackResponder::new(Some(service), Profile::default()))
}

fn welcome() -> Vec<KnowledgeEntry> {
    vec![KnowledgeEntry::new("Welcome", &["hello", "hi"], "Hello! I am Aarya AI.")]
}

const SEED: &str = r#"
[[entries]]
topic = "Pricing"
keywords = ["pricing", "price subscription", "how much"]
response = "Plans start at $5 a month."

[[entries]]
topic = "Hours"
keywords = ["opening hours", "when are you open"]
response = "We're open 9 to 5, Monday to Friday."

[[entries]]
topic = "Welcome"
keywords = ["hello", "hi"]
response = "Hello! I am Aarya AI."
"#;

#[tokio::test]
async fn welcome_scenario_answers_locally() {
    let svc = ScriptedService::new(Some("[HAPPY] should not be used"));
    let answer = orchestrator(&svc).resolve("Hi there!", &welcome()).await;
    assert_eq!(answer.text, "Hello! I am Aarya AI.");
    assert_eq!(answer.emotion, Emotion::Neutral);
    assert_eq!(svc.calls(), 0);
}

#[tokio::test]
async fn refund_policy_goes_to_fallback_exactly_once() {
    let kb = welcome();
    assert!(match_entry("what is your refund policy", &kb).is_none());

    let svc = ScriptedService::new(Some("[CONCERNED] Refunds are handled by support."));
    let answer = orchestrator(&svc).resolve("what is your refund policy", &kb).await;
    assert_eq!(svc.calls(), 1);
    assert_eq!(answer.text, "Refunds are handled by support.");
    assert_eq!(answer.emotion, Emotion::Sad);
    assert_eq!(answer.source, AnswerSource::Generated);
}

#[tokio::test]
async fn network_failure_yields_fixed_apology() {
    let svc = ScriptedService::new(None);
    let o = orchestrator(&svc);
    for _ in 0..10 {
        let answer = o.resolve("what is your refund policy", &welcome()).await;
        assert!(DEFAULT_APOLOGIES.contains(&answer.text.as_str()));
        assert_eq!(answer.emotion, Emotion::Neutral);
    }
    assert_eq!(svc.calls(), 10);
}

#[tokio::test]
async fn seeded_store_resolves_by_score() {
    let store = KnowledgeStore::new(parse_knowledge(SEED).unwrap());
    let topics: Vec<String> = store.snapshot().iter().map(|e| e.topic.clone()).collect();
    assert_eq!(topics, vec!["Hours", "Pricing", "Welcome"]);

    let svc = ScriptedService::new(Some("[THINKING] Let me check."));
    let o = orchestrator(&svc);

    let a = o.resolve_with_store("What is the subscription price?", &store).await;
    assert_eq!(a.text, "Plans start at $5 a month.");

    let a = o.resolve_with_store("what are your OPENING HOURS", &store).await;
    assert_eq!(a.text, "We're open 9 to 5, Monday to Friday.");

    let a = o.resolve_with_store("do you ship abroad", &store).await;
    assert_eq!(a.text, "Let me check.");
    assert_eq!(a.emotion, Emotion::Thinking);
    assert_eq!(svc.calls(), 1);
}

#[tokio::test]
async fn shared_orchestrator_across_tasks() {
    let svc = ScriptedService::new(Some("[HAPPY] hi from the cloud"));
    let o = Arc::new(orchestrator(&svc));
    let kb: Arc<[KnowledgeEntry]> = welcome().into();

    let mut handles = Vec::new();
    for q in ["hello", "tell me a joke", "hi", "what's new"] {
        let (o, kb) = (o.clone(), kb.clone());
        handles.push(tokio::spawn(async move { o.resolve(q, &kb).await }));
    }
    let mut local = 0;
    for h in handles {
        if h.await.unwrap().source == AnswerSource::Local {
            local += 1;
        }
    }
    assert_eq!(local, 2);
    assert_eq!(svc.calls(), 2);
}

#[test]
fn documented_scores_hold() {
    let k = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    assert_eq!(score("pricing", &k(&["pricing", "cost"])), 100);
    assert_eq!(score("hike up the hill", &k(&["hi"])), 0);
    assert_eq!(score("hi there", &k(&["hi"])), 22);
    assert_eq!(score(&normalize("What is the subscription price?"), &k(&["price subscription"])), 22);
}
