//! Import table construction.
//!
//! A single pass over the document records two things:
//!
//! - module aliases from `import numpy as np` and `import numpy`
//! - directly bound names from `from numpy.random import shuffle`
//!
//! Only the simple single-line forms are recognized. Comma lists, wildcard
//! imports, parenthesized multi-line imports and `from X import Y as Z` are
//! skipped on purpose.

use regex::Regex;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Local import alias -> module name.
pub type AliasMap = FxHashMap<String, String>;

/// Locally bound imported name -> fully qualified dotted origin.
pub type DirectMap = FxHashMap<String, String>;

// Identifiers are ASCII word characters (`(?-u:\w)`); whitespace stays Unicode.
static IMPORT_AS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^import\s+((?-u:\w)+)\s+as\s+((?-u:\w)+)").unwrap());

static IMPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^import\s+((?-u:\w)+)").unwrap());

static FROM_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^from\s+((?-u:[\w.])+)\s+import\s+((?-u:\w)+)\s*$").unwrap()
});

/// Which import rule a line matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// `import <module> as <alias>`
    Aliased,
    /// `import <module>`
    Module,
    /// `from <path> import <name>`
    Direct,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportTable {
    pub aliases: AliasMap,
    pub direct: DirectMap,
}

impl ImportTable {
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = Self::default();
        for line in lines {
            table.record_line(line);
        }
        table
    }

    /// Apply the first matching import rule to `line`. Later lines overwrite
    /// earlier entries for the same name.
    pub fn record_line(&mut self, line: &str) -> Option<ImportKind> {
        if let Some(caps) = IMPORT_AS_RE.captures(line) {
            self.aliases.insert(caps[2].to_string(), caps[1].to_string());
            return Some(ImportKind::Aliased);
        }

        if let Some(caps) = IMPORT_RE.captures(line) {
            self.aliases.insert(caps[1].to_string(), caps[1].to_string());
            return Some(ImportKind::Module);
        }

        if let Some(caps) = FROM_IMPORT_RE.captures(line) {
            let name = &caps[2];
            self.direct
                .insert(name.to_string(), format!("{}.{}", &caps[1], name));
            return Some(ImportKind::Direct);
        }

        None
    }

    pub fn module_for_alias(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    pub fn direct_path(&self, name: &str) -> Option<&str> {
        self.direct.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty() && self.direct.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliased_import() {
        let table = ImportTable::from_lines(["import numpy as np"]);
        assert_eq!(table.module_for_alias("np"), Some("numpy"));
        assert!(table.direct.is_empty());
    }

    #[test]
    fn test_plain_import_is_self_alias() {
        let table = ImportTable::from_lines(["import numpy"]);
        assert_eq!(table.module_for_alias("numpy"), Some("numpy"));
    }

    #[test]
    fn test_dotted_plain_import_keeps_first_segment() {
        let table = ImportTable::from_lines(["import numpy.random"]);
        assert_eq!(table.module_for_alias("numpy"), Some("numpy"));
        assert_eq!(table.aliases.len(), 1);
    }

    #[test]
    fn test_from_import_single_name() {
        let table = ImportTable::from_lines(["from numpy.random import shuffle"]);
        assert_eq!(table.direct_path("shuffle"), Some("numpy.random.shuffle"));
        assert!(table.aliases.is_empty());
    }

    #[test]
    fn test_from_import_allows_trailing_whitespace() {
        let table = ImportTable::from_lines(["from numpy import arange   \r"]);
        assert_eq!(table.direct_path("arange"), Some("numpy.arange"));
    }

    #[test]
    fn test_unsupported_from_import_forms_are_ignored() {
        let table = ImportTable::from_lines([
            "from numpy.random import shuffle as shf",
            "from numpy import array, arange",
            "from numpy import *",
            "from numpy import (",
        ]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_indented_imports_are_ignored() {
        let table = ImportTable::from_lines(["    import numpy as np", "\tfrom numpy import array"]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_rule_reported_per_line() {
        let mut table = ImportTable::default();
        assert_eq!(
            table.record_line("import numpy as np"),
            Some(ImportKind::Aliased)
        );
        assert_eq!(table.record_line("import os"), Some(ImportKind::Module));
        assert_eq!(
            table.record_line("from numpy.random import rand"),
            Some(ImportKind::Direct)
        );
        assert_eq!(table.record_line("x = 1"), None);
    }

    #[test]
    fn test_non_ascii_names_are_not_identifiers() {
        let table = ImportTable::from_lines([
            "from numpy import arañge",
            "import numpy as ñp",
            "from nümpy.random import shuffle",
        ]);
        assert!(table.direct.is_empty());
        assert!(table.module_for_alias("ñp").is_none());
        // `import numpy as ñp` still satisfies the plain import rule.
        assert_eq!(table.module_for_alias("numpy"), Some("numpy"));
    }

    #[test]
    fn test_last_write_wins_for_alias() {
        let table = ImportTable::from_lines(["import numpy as np", "import pandas as np"]);
        assert_eq!(table.module_for_alias("np"), Some("pandas"));
    }
}
