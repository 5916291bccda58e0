use crate::AppState;
use resolver::{ResolvedFunction, resolve_function};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Serialize, Deserialize, TS, Default, Debug, Clone, PartialEq)]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub struct StatusResponse {
    pub status: String,
}

/// Document snapshot sent by the editor.
///
/// `uri` and `version` are optional; with both present the server reuses
/// the tables it built for that document version.
#[derive(Serialize, Deserialize, TS, Default, Debug, Clone, PartialEq)]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub struct DocumentPosition {
    pub text: String,
    /// Zero-based line index.
    pub line: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub version: Option<i32>,
}

pub fn resolve_position(state: &AppState, position: &DocumentPosition) -> Option<ResolvedFunction> {
    match (&position.uri, position.version) {
        (Some(uri), Some(version)) => {
            state
                .documents
                .resolve(uri, version, &position.text, position.line)
        }
        _ => resolve_function(&position.text, position.line),
    }
}
