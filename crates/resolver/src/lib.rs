//! Heuristic resolution of numeric-array library calls in source documents.
//!
//! Given the full text of a document and a zero-based line index, the
//! resolver produces a canonical dotted key such as `np.random.shuffle`, or
//! nothing. It is not a parser: every rule is a single-line regular expression
//! over raw text, and the whole document is rescanned for each resolution
//! unless a [`DocumentCache`] is used.

pub mod cache;
pub mod call;
pub mod imports;
pub mod variables;


pub use cache::DocumentCache;
pub use call::{CallPattern, resolve_line};
pub use imports::{AliasMap, DirectMap, ImportKind, ImportTable};
pub use variables::{NDARRAY, VariableTypes};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Namespace every resolved library key is rooted at, whatever alias the
/// source used.
pub const CANONICAL_ROOT: &str = "np";

/// A resolved call, keyed the way the knowledge base is keyed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedFunction {
    pub key: String,
}

impl ResolvedFunction {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Tables built from one document snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentTables {
    pub imports: ImportTable,
    pub variables: VariableTypes,
}

impl DocumentTables {
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tables = Self::default();
        for line in lines {
            tables.variables.record_line(line);
            tables.imports.record_line(line);
        }
        tables
    }

    pub fn from_text(text: &str) -> Self {
        Self::from_lines(split_lines(text))
    }
}

/// Splits on `\n` only, so line indices match the editor's and a trailing
/// `\r` stays on the line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}

/// Returns the line at `line_index`, or `None` when out of range or empty.
pub fn line_at(text: &str, line_index: usize) -> Option<&str> {
    split_lines(text)
        .nth(line_index)
        .filter(|line| !line.is_empty())
}

/// Resolve the call on line `line_index` of `text`.
pub fn resolve_function(text: &str, line_index: usize) -> Option<ResolvedFunction> {
    let tables = DocumentTables::from_text(text);
    resolve_with_tables(text, line_index, &tables)
}

/// Like [`resolve_function`], with tables built beforehand from the same text.
pub fn resolve_with_tables(
    text: &str,
    line_index: usize,
    tables: &DocumentTables,
) -> Option<ResolvedFunction> {
    let line = line_at(text, line_index)?;
    let resolved = resolve_line(line, tables);
    if let Some(ref function) = resolved {
        debug!(line = line_index, key = %function.key, "resolved function call");
    }
    resolved
}
