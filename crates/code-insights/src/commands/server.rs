use anyhow::Result;
use http_server::{AppState, find_unused_port};
use knowledge_base::KnowledgeBase;
use resolver::DocumentCache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize)]
pub struct ServerInfo {
    pub port: u16,
}

pub struct ServerArgs {
    pub port: Option<u16>,
}

pub async fn run(knowledge_base: KnowledgeBase, args: ServerArgs) -> Result<()> {
    let port = match args.port {
        Some(port) => port,
        None => find_unused_port()?,
    };

    // The editor reads this line to learn where to connect.
    println!("{}", serde_json::to_string(&ServerInfo { port })?);

    let state = AppState::new(knowledge_base, Arc::new(DocumentCache::new()));
    http_server::run(port, state).await
}
