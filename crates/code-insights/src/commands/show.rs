use anyhow::Result;
use knowledge_base::{DisplayMode, KnowledgeBase};

pub struct ShowArgs {
    pub key: String,
    pub mode: DisplayMode,
}

pub fn run(knowledge_base: &KnowledgeBase, args: ShowArgs) -> Result<()> {
    let update = knowledge_base.open_panel(&args.key, args.mode)?;
    println!("{}", serde_json::to_string_pretty(&update)?);
    Ok(())
}
