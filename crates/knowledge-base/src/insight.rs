use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One documented function.
///
/// Only `description` is required. The panel fields default to empty so a
/// hover-only entry still loads.
#[derive(Serialize, Deserialize, TS, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub struct Insight {
    pub description: String,
    #[serde(default)]
    pub behavioral_notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub qualified_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub signature: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub usage: Vec<UsageExample>,
}

/// A documented parameter of the function.
#[derive(Serialize, Deserialize, TS, Debug, Clone, Default, PartialEq, Eq)]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub struct Attribute {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub testable: bool,
}

#[derive(Serialize, Deserialize, TS, Debug, Clone, Default, PartialEq, Eq)]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub struct UsageExample {
    pub title: String,
    pub code: String,
}
