// Aarya CLI — command handlers

use aarya::atoms::constants::ASSISTANT_NAME;
use aarya::engine::knowledge::rank;
use aarya::{
    knowledge_store_from_config, orchestrator_from_config, AaryaConfig, EngineResult, ResolvedAnswer,
};
use log::info;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};

fn print_answer(answer: &ResolvedAnswer, json: bool) -> EngineResult<()> {
    if json {
        println!("{}", serde_json::to_string(answer)?);
    } else {
        println!("[{}] {}", answer.emotion, answer.text);
    }
    Ok(())
}

pub async fn ask(config: &AaryaConfig, text: &str, json: bool) -> EngineResult<()> {
    let store = knowledge_store_from_config(config)?;
    let orchestrator = orchestrator_from_config(config);
    let answer = orchestrator.resolve_with_store(text, &store).await;
    print_answer(&answer, json)
}

pub async fn image(config: &AaryaConfig, path: &Path, json: bool) -> EngineResult<()> {
    let bytes = tokio::fs::read(path).await?;
    info!("[cli] Read {} bytes from {}", bytes.len(), path.display());
    let orchestrator = orchestrator_from_config(config);
    let answer = orchestrator.resolve_image(&bytes).await;
    print_answer(&answer, json)
}

/// Line-oriented session. `/key <KEY>` swaps the Gemini credential,
/// `/quit` (or EOF) exits.
pub async fn chat(config: &AaryaConfig, json: bool) -> EngineResult<()> {
    let store = knowledge_store_from_config(config)?;
    let orchestrator = orchestrator_from_config(config);
    let name = &orchestrator.responder().profile().display_name;

    if !orchestrator.responder().is_configured() {
        eprintln!("(no Gemini API key configured: only local knowledge will answer; use /key <KEY>)");
    }
    eprintln!("Hi {name}! {ASSISTANT_NAME} here. Type a message, /key <KEY>, or /quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "/quit" || line == "/exit" {
            break;
        }
        if let Some(credential) = key_command(line) {
            let cleared = credential.is_none();
            orchestrator.responder().reconfigure_credential(credential);
            eprintln!("(credential {})", if cleared { "cleared" } else { "updated" });
            continue;
        }
        let answer = orchestrator.resolve_with_store(line, &store).await;
        print_answer(&answer, json)?;
    }
    Ok(())
}

/// `/key <KEY>` sets the credential, a bare `/key` clears it. Anything
/// else (including `/keyboard …`) is an ordinary utterance.
fn key_command(line: &str) -> Option<Option<String>> {
    if line == "/key" {
        return Some(None);
    }
    let key = line.strip_prefix("/key ")?.trim();
    Some((!key.is_empty()).then(|| key.to_string()))
}

pub fn explain(config: &AaryaConfig, text: &str) -> EngineResult<()> {
    let store = knowledge_store_from_config(config)?;
    let snapshot = store.snapshot();
    let ranked = rank(text, &snapshot);

    println!("normalized: {:?}", aarya::engine::knowledge::normalize(text));
    if ranked.is_empty() {
        println!("no local match across {} entries; the generative service would be asked", snapshot.len());
        return Ok(());
    }
    for (i, r) in ranked.iter().enumerate() {
        let marker = if i == 0 { "*" } else { " " };
        println!(
            "{marker} {:>3}  {:<13} {:<24} via {:?}",
            r.matched.score,
            r.matched.tier.label(),
            r.entry.topic,
            r.matched.keyword
        );
    }
    Ok(())
}

pub fn list_knowledge(config: &AaryaConfig, json: bool) -> EngineResult<()> {
    let store = knowledge_store_from_config(config)?;
    let snapshot = store.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&*snapshot)?);
        return Ok(());
    }
    if snapshot.is_empty() {
        println!("(knowledge base is empty)");
    }
    for entry in snapshot.iter() {
        println!("{}  [{}]", entry.topic, entry.keywords.join(", "));
        println!("    {}", entry.response);
    }
    Ok(())
}
