//! Hover and side-panel payloads built from knowledge base entries.

use crate::insight::Insight;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};
use ts_rs::TS;

/// Command the editor binds the side panel to.
pub const PANEL_COMMAND: &str = "code-insights.open";

/// Side-panel tab.
#[derive(
    Serialize,
    Deserialize,
    TS,
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub enum DisplayMode {
    #[default]
    Learn,
    Test,
    Ai,
}

/// Arguments of the side-panel command.
#[derive(Serialize, Deserialize, TS, Debug, Clone, PartialEq, Eq)]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub struct PanelRequest {
    pub key: String,
    pub mode: DisplayMode,
}

impl PanelRequest {
    pub fn new(key: impl Into<String>, mode: DisplayMode) -> Self {
        Self {
            key: key.into(),
            mode,
        }
    }

    /// `command:` link the hover markdown uses to open the panel; the
    /// arguments are a percent-encoded JSON array `[key, mode]`.
    pub fn command_uri(&self) -> String {
        let args = serde_json::json!([self.key, self.mode]).to_string();
        format!("command:{PANEL_COMMAND}?{}", urlencoding::encode(&args))
    }
}

/// One "open in panel" link of the hover tooltip.
#[derive(Serialize, Deserialize, TS, Debug, Clone, PartialEq, Eq)]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub struct HoverAction {
    pub mode: DisplayMode,
    pub uri: String,
}

/// What the hover tooltip shows for a resolved call.
#[derive(Serialize, Deserialize, TS, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub struct HoverInsight {
    pub key: String,
    pub description: String,
    pub behavioral_notes: Vec<String>,
    pub actions: Vec<HoverAction>,
}

impl HoverInsight {
    pub fn new(key: &str, insight: &Insight) -> Self {
        let actions = DisplayMode::iter()
            .map(|mode| HoverAction {
                mode,
                uri: PanelRequest::new(key, mode).command_uri(),
            })
            .collect();

        Self {
            key: key.to_string(),
            description: insight.description.clone(),
            behavioral_notes: insight.behavioral_notes.clone(),
            actions,
        }
    }
}

/// Payload pushed to the side panel when it opens or switches entry.
#[derive(Serialize, Deserialize, TS, Debug, Clone, PartialEq, Eq)]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub struct PanelUpdate {
    pub key: String,
    pub entry: Insight,
    pub mode: DisplayMode,
}
