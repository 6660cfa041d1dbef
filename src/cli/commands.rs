use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use super::args::{Cli, Commands};
use crate::ai::{GeminiClient, Summarizer};
use crate::core::config::{AppConfig, StoreConfig};
use crate::features::{self, Persistence};
use crate::store::{self, MemoryStore, RecordStore, RestStore};
use crate::utils::word_count;
use crate::views;

/// Picks the REST store when a store URL is configured, otherwise a
/// process-local anonymous store.
pub fn build_store(config: &StoreConfig) -> Result<Box<dyn RecordStore>> {
    if config.url.is_some() {
        let store = RestStore::new(config).context("Failed to configure summary store")?;
        Ok(Box::new(store))
    } else {
        info!("No summary store configured; summaries will not be saved");
        Ok(Box::new(MemoryStore::anonymous()))
    }
}

/// Like [`build_store`], but a store that cannot be configured only costs
/// persistence: the summary is still generated.
pub fn build_store_or_anonymous(config: &StoreConfig) -> Box<dyn RecordStore> {
    build_store(config).unwrap_or_else(|e| {
        warn!("{:#}; summaries will not be saved", e);
        Box::new(MemoryStore::anonymous())
    })
}

pub async fn run(cli: Cli, config: AppConfig) -> Result<()> {
    match cli.command {
        Commands::Summarize { text, file } => {
            let store = build_store_or_anonymous(&config.store);
            let summarizer = GeminiClient::new(config.gemini);
            let note = read_note(&text, file.as_deref())?;
            handle_summarize(&summarizer, store.as_ref(), &note).await
        }
        Commands::List => {
            let store = build_store(&config.store)?;
            handle_list(store.as_ref()).await
        }
        Commands::Delete { id, yes } => {
            let store = build_store(&config.store)?;
            handle_delete(store.as_ref(), &id, yes).await
        }
    }
}

fn read_note(text: &[String], file: Option<&Path>) -> Result<String> {
    if let Some(path) = file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read note from {}", path.display()));
    }
    if !text.is_empty() {
        return Ok(text.join(" "));
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read note from stdin")?;
    Ok(buf)
}

pub async fn handle_summarize(
    summarizer: &dyn Summarizer,
    store: &dyn RecordStore,
    note: &str,
) -> Result<()> {
    eprintln!("Generating AI summary of {} words...", word_count(note));

    let session = store::resolve_session(store).await;
    let outcome = features::summarize_note(summarizer, store, &session, note).await?;

    println!("{}", outcome.summary.text);

    let message = views::persistence_message(&outcome.persistence);
    if matches!(outcome.persistence, Persistence::Failed(_)) {
        eprintln!("Warning: {message}");
    } else {
        eprintln!("{message}");
    }
    Ok(())
}

pub async fn handle_list(store: &dyn RecordStore) -> Result<()> {
    let session = store::resolve_session(store).await;
    let records = features::list_summaries(store, &session)
        .await
        .context("Failed to load summaries")?;
    print!("{}", views::render_records(&records));
    Ok(())
}

pub async fn handle_delete(store: &dyn RecordStore, id: &str, yes: bool) -> Result<()> {
    if !yes && !confirm(&format!("Are you sure? {}", views::DELETE_WARNING))? {
        bail!("Delete cancelled");
    }
    features::delete_summary(store, id)
        .await
        .context("Failed to delete summary")?;
    eprintln!("Summary deleted successfully");
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    eprint!("{prompt} [y/N] ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(
        line.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
