//! Ordered call-expression matching for a single line.
//!
//! Three shapes are tried in a fixed order and the first shape found on the
//! line decides the outcome. A dotted call with an unknown alias is absence,
//! it does not fall through to the method or bare call shapes.

use crate::{CANONICAL_ROOT, DocumentTables, ResolvedFunction};
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

static DOTTED_CALL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"((?-u:\w)+)\.((?-u:\w)+)\.((?-u:\w)+)\s*\(").unwrap()
});

static METHOD_CALL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"((?-u:\w)+)\.((?-u:\w)+)\s*\(").unwrap());

static BARE_CALL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"((?-u:\w)+)\s*\(").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallPattern {
    /// `<alias>.<submodule>.<function>(`
    DottedCall,
    /// `<object>.<method>(`
    MethodCall,
    /// `<name>(`
    BareCall,
}

impl CallPattern {
    /// Matching order.
    pub const ORDER: [CallPattern; 3] = [
        CallPattern::DottedCall,
        CallPattern::MethodCall,
        CallPattern::BareCall,
    ];

    fn regex(self) -> &'static Regex {
        match self {
            CallPattern::DottedCall => &DOTTED_CALL_RE,
            CallPattern::MethodCall => &METHOD_CALL_RE,
            CallPattern::BareCall => &BARE_CALL_RE,
        }
    }

    /// Resolve `line` with this pattern alone.
    ///
    /// Returns `None` when the shape does not occur on the line and
    /// `Some(None)` when it does but the required table has no entry.
    pub fn apply(self, line: &str, tables: &DocumentTables) -> Option<Option<ResolvedFunction>> {
        let caps = self.regex().captures(line)?;

        let resolved = match self {
            CallPattern::DottedCall => tables.imports.module_for_alias(&caps[1]).map(|_| {
                ResolvedFunction::new(format!("{CANONICAL_ROOT}.{}.{}", &caps[2], &caps[3]))
            }),
            CallPattern::MethodCall => tables
                .variables
                .type_of(&caps[1])
                .map(|receiver| ResolvedFunction::new(format!("{receiver}.{}", &caps[2]))),
            CallPattern::BareCall => tables.imports.direct_path(&caps[1]).map(|path| {
                let path = path.strip_prefix("numpy.").unwrap_or(path);
                ResolvedFunction::new(format!("{CANONICAL_ROOT}.{path}"))
            }),
        };

        Some(resolved)
    }
}

/// Resolve the call on `line` against the document tables.
pub fn resolve_line(line: &str, tables: &DocumentTables) -> Option<ResolvedFunction> {
    for pattern in CallPattern::ORDER {
        if let Some(resolved) = pattern.apply(line, tables) {
            let key = resolved.as_ref().map(|r| r.key.as_str());
            trace!(?pattern, ?key, "call shape matched");
            return resolved;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables(lines: &[&str]) -> DocumentTables {
        DocumentTables::from_lines(lines.iter().copied())
    }

    #[test]
    fn test_dotted_call_normalizes_alias_to_root() {
        let t = tables(&["import numpy as xp"]);
        let resolved = resolve_line("xp.random.permutation(10)", &t).unwrap();
        assert_eq!(resolved.key, "np.random.permutation");
    }

    #[test]
    fn test_dotted_call_with_unknown_alias_does_not_fall_through() {
        // `arr` is a known ndarray and `shuffle` a known direct import, yet
        // the dotted shape wins and its alias lookup fails.
        let t = tables(&[
            "from numpy.random import shuffle",
            "arr = np.array([1, 2])",
        ]);
        assert_eq!(CallPattern::DottedCall.apply("arr.T.copy()", &t), Some(None));
        assert_eq!(resolve_line("arr.T.copy()", &t), None);
        assert_eq!(resolve_line("foo.bar.shuffle(arr)", &t), None);
    }

    #[test]
    fn test_method_call_shape_blocks_bare_call() {
        let t = tables(&["from numpy.random import shuffle"]);
        assert_eq!(resolve_line("rng.shuffle(x)", &t), None);
        assert_eq!(
            resolve_line("shuffle(x)", &t).map(|r| r.key),
            Some("np.random.shuffle".to_string())
        );
    }

    #[test]
    fn test_bare_call_strips_single_numpy_prefix() {
        let t = tables(&["from numpy import arange", "from scipy.linalg import solve"]);
        assert_eq!(
            resolve_line("x = arange(5)", &t).map(|r| r.key),
            Some("np.arange".to_string())
        );
        assert_eq!(
            resolve_line("y = solve(a, b)", &t).map(|r| r.key),
            Some("np.scipy.linalg.solve".to_string())
        );
    }

    #[test]
    fn test_leftmost_bare_call_decides() {
        let t = tables(&["from numpy.random import shuffle"]);
        // `print(` is the first bare call shape on the line.
        assert_eq!(resolve_line("print(shuffle(x))", &t), None);
    }

    #[test]
    fn test_non_ascii_call_names() {
        let t = tables(&["import numpy as np", "from numpy import arange"]);
        // The bare shape picks up the ASCII tail `ge(` of `arañge(`.
        assert_eq!(resolve_line("arañge(3)", &t), None);
        // The dotted shape captures `p` as the alias, which is unknown.
        assert_eq!(
            CallPattern::DottedCall.apply("x = ñp.random.shuffle(a)", &t),
            Some(None)
        );
    }

    #[test]
    fn test_no_call_shape() {
        let t = tables(&["import numpy as np"]);
        assert_eq!(resolve_line("x = np.pi", &t), None);
        assert_eq!(resolve_line("", &t), None);
        for pattern in CallPattern::ORDER {
            assert_eq!(pattern.apply("# just a comment", &t), None);
        }
    }
}
