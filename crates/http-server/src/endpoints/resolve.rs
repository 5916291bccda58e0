use crate::AppState;
use crate::contract::{EmptyRequest, EndpointConfigTypes};
use crate::define_endpoint;
use crate::endpoints::shared::{DocumentPosition, resolve_position};
use axum::extract::State;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// `key` is `null` when no known call was found on the line.
#[derive(Serialize, Deserialize, TS, Default, Debug, PartialEq)]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub struct ResolveResponse {
    pub key: Option<String>,
}

#[derive(Serialize, TS, Default)]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub struct ResolveResponses {
    #[serde(rename = "200")]
    pub ok: ResolveResponse,
}

pub struct ResolveEndpointConfig;

impl EndpointConfigTypes for ResolveEndpointConfig {
    type PathRequest = EmptyRequest;
    type BodyRequest = DocumentPosition;
    type QueryRequest = EmptyRequest;
    type Response = ResolveResponses;
}

define_endpoint! {
    ResolveEndpoint,
    ResolveEndpointDef,
    Post,
    "/resolve",
    ts_path_type = "\"/api/resolve\"",
    config = ResolveEndpointConfig
}

pub async fn resolve_handler(
    State(state): State<AppState>,
    Json(position): Json<DocumentPosition>,
) -> Json<ResolveResponse> {
    let key = resolve_position(&state, &position).map(|resolved| resolved.key);
    Json(ResolveResponse { key })
}
