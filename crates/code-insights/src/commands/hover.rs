use crate::commands::read_document;
use anyhow::Result;
use knowledge_base::KnowledgeBase;
use resolver::resolve_function;
use std::path::PathBuf;

pub struct HoverArgs {
    pub file: PathBuf,
    pub line: usize,
    pub word: Option<String>,
}

/// Returns whether an insight was printed.
pub fn run(knowledge_base: &KnowledgeBase, args: HoverArgs) -> Result<bool> {
    let text = read_document(&args.file)?;
    let resolved = resolve_function(&text, args.line);

    match knowledge_base.hover_insight(resolved.as_ref(), args.word.as_deref()) {
        Some(hover) => {
            println!("{}", serde_json::to_string_pretty(&hover)?);
            Ok(true)
        }
        None => Ok(false),
    }
}
