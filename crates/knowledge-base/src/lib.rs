//! The insight knowledge base: a JSON object mapping canonical function keys
//! (`np.random.shuffle`, `ndarray.reshape`, ...) to documentation entries.
//!
//! Entries are kept in file order. The hover word lookup returns the first
//! key in that order, so reordering the file changes which entry a bare word
//! resolves to.

pub mod errors;
pub mod insight;
pub mod panel;

pub use errors::{KnowledgeBaseError, Result};
pub use insight::{Attribute, Insight, UsageExample};
pub use panel::{DisplayMode, HoverAction, HoverInsight, PANEL_COMMAND, PanelRequest, PanelUpdate};

use indexmap::IndexMap;
use resolver::ResolvedFunction;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Location of the bundled knowledge base, relative to the working directory.
pub const DEFAULT_INSIGHTS_PATH: &str = "data/insights.numpy.json";

/// Environment variable overriding [`DEFAULT_INSIGHTS_PATH`].
pub const INSIGHTS_PATH_ENV: &str = "CODE_INSIGHTS_DATA";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: IndexMap<String, Insight>,
}

impl KnowledgeBase {
    pub fn new(entries: IndexMap<String, Insight>) -> Self {
        Self { entries }
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| KnowledgeBaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let knowledge_base =
            Self::from_json_str(&content).map_err(|source| KnowledgeBaseError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        info!(
            "Loaded {} insights from {}",
            knowledge_base.len(),
            path.display()
        );
        Ok(knowledge_base)
    }

    /// Load failures degrade to an empty knowledge base.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(knowledge_base) => knowledge_base,
            Err(e) => {
                warn!("{e}. Continuing without insights.");
                Self::default()
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Insight> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn lookup(&self, resolved: &ResolvedFunction) -> Option<(&str, &Insight)> {
        self.entries
            .get_key_value(resolved.key.as_str())
            .map(|(key, insight)| (key.as_str(), insight))
    }

    /// First entry whose key is `word` or ends with `.<word>`.
    pub fn find_by_word(&self, word: &str) -> Option<(&str, &Insight)> {
        if word.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(key, _)| {
                key.as_str() == word
                    || key
                        .strip_suffix(word)
                        .is_some_and(|prefix| prefix.ends_with('.'))
            })
            .map(|(key, insight)| (key.as_str(), insight))
    }

    /// Hover content for a position: the resolved key when it has an entry,
    /// otherwise the word under the cursor.
    pub fn hover_insight(
        &self,
        resolved: Option<&ResolvedFunction>,
        word: Option<&str>,
    ) -> Option<HoverInsight> {
        if let Some(resolved) = resolved {
            if let Some((key, insight)) = self.lookup(resolved) {
                return Some(HoverInsight::new(key, insight));
            }
            debug!(key = %resolved.key, "resolved key has no insight");
        }

        self.find_by_word(word?)
            .map(|(key, insight)| HoverInsight::new(key, insight))
    }

    pub fn open_panel(&self, key: &str, mode: DisplayMode) -> Result<PanelUpdate> {
        let entry = self
            .get(key)
            .cloned()
            .ok_or_else(|| KnowledgeBaseError::EntryNotFound {
                key: key.to_string(),
            })?;
        Ok(PanelUpdate {
            key: key.to_string(),
            entry,
            mode,
        })
    }
}
