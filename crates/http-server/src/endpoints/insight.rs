use crate::AppState;
use crate::contract::{EmptyRequest, EndpointConfigTypes};
use crate::define_endpoint;
use crate::endpoints::shared::StatusResponse;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use knowledge_base::{DisplayMode, PanelUpdate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Serialize, Deserialize, TS, Default, Debug, Clone, PartialEq)]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub struct InsightPathRequest {
    pub key: String,
}

#[derive(Serialize, Deserialize, TS, Default, Debug, Clone, PartialEq)]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub struct InsightQueryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub mode: Option<DisplayMode>,
}

#[derive(Serialize, Deserialize, TS, Default, Debug)]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub struct InsightResponses {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<PanelUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_found: Option<StatusResponse>,
}

pub struct InsightEndpointConfig;

impl EndpointConfigTypes for InsightEndpointConfig {
    type PathRequest = InsightPathRequest;
    type BodyRequest = EmptyRequest;
    type QueryRequest = InsightQueryRequest;
    type Response = InsightResponses;
}

define_endpoint! {
    InsightEndpoint,
    InsightEndpointDef,
    Get,
    "/insights/{key}",
    ts_path_type = "`/api/insights/${string}`",
    config = InsightEndpointConfig
}

/// Returns the panel payload for a knowledge base key
pub async fn insight_handler(
    State(state): State<AppState>,
    Path(path): Path<InsightPathRequest>,
    Query(query): Query<InsightQueryRequest>,
) -> impl IntoResponse {
    let mode = query.mode.unwrap_or_default();

    match state.knowledge_base.open_panel(&path.key, mode) {
        Ok(update) => (
            StatusCode::OK,
            Json(InsightResponses {
                ok: Some(update),
                ..Default::default()
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::NOT_FOUND,
            Json(InsightResponses {
                not_found: Some(StatusResponse {
                    status: e.to_string(),
                }),
                ..Default::default()
            }),
        )
            .into_response(),
    }
}
