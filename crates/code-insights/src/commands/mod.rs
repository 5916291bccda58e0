pub mod hover;
pub mod resolve;
pub mod server;
pub mod show;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub(crate) fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
