use crate::{DocumentTables, ResolvedFunction, resolve_with_tables};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// Per-document memo of [`DocumentTables`], keyed by document URI and
/// invalidated whenever the editor reports a different version.
///
/// Results are identical to [`crate::resolve_function`] for the same text;
/// callers must bump the version on every edit.
#[derive(Debug, Default)]
pub struct DocumentCache {
    documents: DashMap<String, (i32, Arc<DocumentTables>)>,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tables(&self, uri: &str, version: i32, text: &str) -> Arc<DocumentTables> {
        if let Some(entry) = self.documents.get(uri) {
            let (cached_version, tables) = entry.value();
            if *cached_version == version {
                return Arc::clone(tables);
            }
        }

        debug!(uri, version, "building document tables");
        let tables = Arc::new(DocumentTables::from_text(text));
        self.documents
            .insert(uri.to_string(), (version, Arc::clone(&tables)));
        tables
    }

    pub fn resolve(
        &self,
        uri: &str,
        version: i32,
        text: &str,
        line_index: usize,
    ) -> Option<ResolvedFunction> {
        let tables = self.tables(uri, version, text);
        resolve_with_tables(text, line_index, &tables)
    }

    pub fn invalidate(&self, uri: &str) -> bool {
        self.documents.remove(uri).is_some()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
