//! Variable type inference for method-call resolution.
//!
//! Only two construction calls are recognized, `<name> = <x>.array(` and
//! `<name> = <x>.arange(`, and both bind the variable to [`NDARRAY`]. There is
//! no propagation and no control-flow sensitivity: a later matching assignment
//! overwrites the binding, a later non-matching assignment leaves it alone.

use regex::Regex;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Type tag for array values.
pub const NDARRAY: &str = "ndarray";

static ARRAY_ASSIGN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"((?-u:\w)+)\s*=\s*(?-u:\w)+\.array\s*\(").unwrap());

static ARANGE_ASSIGN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"((?-u:\w)+)\s*=\s*(?-u:\w)+\.arange\s*\(").unwrap());

/// Variable name -> inferred type tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableTypes {
    types: FxHashMap<String, &'static str>,
}

impl VariableTypes {
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut variables = Self::default();
        for line in lines {
            variables.record_line(line);
        }
        variables
    }

    /// Returns the variable bound by `line`, if any.
    pub fn record_line<'l>(&mut self, line: &'l str) -> Option<&'l str> {
        let caps = ARRAY_ASSIGN_RE
            .captures(line)
            .or_else(|| ARANGE_ASSIGN_RE.captures(line))?;
        let name = caps.get(1)?.as_str();
        self.types.insert(name.to_string(), NDARRAY);
        Some(name)
    }

    pub fn type_of(&self, variable: &str) -> Option<&'static str> {
        self.types.get(variable).copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
