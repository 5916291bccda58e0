use anyhow::Result;
use http_server::{AppState, PREFERRED_PORT, find_unused_port, run};
use knowledge_base::{DEFAULT_INSIGHTS_PATH, INSIGHTS_PATH_ENV, KnowledgeBase};
use logging::{LogMode, init};
use resolver::DocumentCache;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let _guards = init(LogMode::Cli, true)?;

    let port = env::var("DEV_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(|| find_unused_port().unwrap_or(PREFERRED_PORT));

    let insights_path = env::var(INSIGHTS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_INSIGHTS_PATH));

    println!("Development server starting on port {port}");

    let knowledge_base = KnowledgeBase::load_or_empty(&insights_path);
    let state = AppState::new(knowledge_base, Arc::new(DocumentCache::new()));

    run(port, state).await
}
