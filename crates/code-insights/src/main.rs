mod cli;
mod commands;

use crate::cli::{Commands, InsightsCli};
use crate::commands::{
    hover::HoverArgs, resolve::ResolveArgs, server::ServerArgs, show::ShowArgs,
};
use anyhow::Result;
use knowledge_base::KnowledgeBase;
use logging::LogMode;
use std::process;
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = InsightsCli::parse_args();

    let mode = match cli.command {
        Commands::Server { .. } => LogMode::Server,
        _ => LogMode::Cli,
    };
    let guards = logging::init(mode, cli.verbose)?;

    let found = match dispatch(cli).await {
        Ok(found) => found,
        Err(e) => {
            error!("{e:#}");
            false
        }
    };

    // Flush the non-blocking writers before exiting.
    drop(guards);
    if !found {
        process::exit(1);
    }
    Ok(())
}

/// Runs the selected command. `Ok(false)` means nothing was found.
async fn dispatch(cli: InsightsCli) -> Result<bool> {
    let found = match cli.command {
        Commands::Resolve { position, json } => commands::resolve::run(ResolveArgs {
            file: position.file,
            line: position.line,
            json,
        })?,
        Commands::Hover { position, word } => {
            let knowledge_base = KnowledgeBase::load_or_empty(&cli.data);
            commands::hover::run(
                &knowledge_base,
                HoverArgs {
                    file: position.file,
                    line: position.line,
                    word,
                },
            )?
        }
        Commands::Show { key, mode } => {
            let knowledge_base = KnowledgeBase::load(&cli.data)?;
            commands::show::run(&knowledge_base, ShowArgs { key, mode })?;
            true
        }
        Commands::Server { port } => {
            let knowledge_base = KnowledgeBase::load_or_empty(&cli.data);
            commands::server::run(knowledge_base, ServerArgs { port }).await?;
            true
        }
    };
    Ok(found)
}
