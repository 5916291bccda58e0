use crate::AppState;
use crate::contract::{EmptyRequest, EndpointConfigTypes};
use crate::define_endpoint;
use axum::extract::State;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

#[derive(Serialize, Deserialize, TS, Default, Debug, Clone, PartialEq)]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub struct CloseDocumentRequest {
    pub uri: String,
}

/// `closed` is false when the server held no tables for the document.
#[derive(Serialize, Deserialize, TS, Default, Debug, PartialEq)]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub struct CloseDocumentResponse {
    pub closed: bool,
}

#[derive(Serialize, TS, Default)]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub struct CloseDocumentResponses {
    #[serde(rename = "200")]
    pub ok: CloseDocumentResponse,
}

pub struct CloseDocumentEndpointConfig;

impl EndpointConfigTypes for CloseDocumentEndpointConfig {
    type PathRequest = EmptyRequest;
    type BodyRequest = CloseDocumentRequest;
    type QueryRequest = EmptyRequest;
    type Response = CloseDocumentResponses;
}

define_endpoint! {
    CloseDocumentEndpoint,
    CloseDocumentEndpointDef,
    Post,
    "/documents/close",
    ts_path_type = "\"/api/documents/close\"",
    config = CloseDocumentEndpointConfig
}

/// Drops the cached tables of a document the editor closed.
pub async fn close_document_handler(
    State(state): State<AppState>,
    Json(request): Json<CloseDocumentRequest>,
) -> Json<CloseDocumentResponse> {
    let closed = state.documents.invalidate(&request.uri);
    debug!(uri = %request.uri, closed, "document closed");
    Json(CloseDocumentResponse { closed })
}
