use crate::commands::read_document;
use anyhow::Result;
use resolver::resolve_function;
use serde_json::json;
use std::path::PathBuf;
use tracing::debug;

pub struct ResolveArgs {
    pub file: PathBuf,
    pub line: usize,
    pub json: bool,
}

/// Returns whether a key was resolved.
pub fn run(args: ResolveArgs) -> Result<bool> {
    let text = read_document(&args.file)?;
    let resolved = resolve_function(&text, args.line);

    if args.json {
        let key = resolved.as_ref().map(|r| r.key.as_str());
        println!("{}", json!({ "key": key }));
        return Ok(true);
    }

    match resolved {
        Some(function) => {
            println!("{}", function.key);
            Ok(true)
        }
        None => {
            debug!(
                "No known call on line {} of {}",
                args.line,
                args.file.display()
            );
            Ok(false)
        }
    }
}
