use crate::AppState;
use crate::contract::{EmptyRequest, EndpointConfigTypes};
use crate::define_endpoint;
use crate::endpoints::shared::{DocumentPosition, resolve_position};
use axum::extract::State;
use axum::response::Json;
use knowledge_base::HoverInsight;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Serialize, Deserialize, TS, Default, Debug, Clone, PartialEq)]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub struct HoverRequest {
    #[serde(flatten)]
    pub position: DocumentPosition,
    /// Word under the cursor, used when the line does not resolve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub word: Option<String>,
}

/// An empty object means no insight is available for the position.
#[derive(Serialize, Deserialize, TS, Default, Debug)]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub struct HoverResponses {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<HoverInsight>,
}

pub struct HoverEndpointConfig;

impl EndpointConfigTypes for HoverEndpointConfig {
    type PathRequest = EmptyRequest;
    type BodyRequest = HoverRequest;
    type QueryRequest = EmptyRequest;
    type Response = HoverResponses;
}

define_endpoint! {
    HoverEndpoint,
    HoverEndpointDef,
    Post,
    "/hover",
    ts_path_type = "\"/api/hover\"",
    config = HoverEndpointConfig
}

pub fn hover_insight(state: &AppState, request: &HoverRequest) -> Option<HoverInsight> {
    let resolved = resolve_position(state, &request.position);
    state
        .knowledge_base
        .hover_insight(resolved.as_ref(), request.word.as_deref())
}

pub async fn hover_handler(
    State(state): State<AppState>,
    Json(request): Json<HoverRequest>,
) -> Json<HoverResponses> {
    Json(HoverResponses {
        ok: hover_insight(&state, &request),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::EndpointContract;
    use crate::testing::sample_state;
    use axum::{Router, routing::post};
    use axum_test::TestServer;
    use knowledge_base::DisplayMode;
    use serde_json::json;

    fn server() -> TestServer {
        let app = Router::new()
            .route(HoverEndpoint::PATH, post(hover_handler))
            .with_state(sample_state());
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_hover_on_resolved_method_call() {
        let response = server()
            .post("/hover")
            .json(&json!({
                "text": "import numpy as np\narr = np.array([1, 2])\narr.reshape(2, 1)",
                "line": 2
            }))
            .await;

        response.assert_status_ok();
        let body: HoverResponses = response.json();
        let hover = body.ok.unwrap();
        assert_eq!(hover.key, "ndarray.reshape");
        assert_eq!(hover.actions.len(), 3);
        assert_eq!(hover.actions[1].mode, DisplayMode::Test);
        assert!(hover.actions[1].uri.ends_with("%22test%22%5D"));
    }

    #[tokio::test]
    async fn test_hover_falls_back_to_word() {
        let response = server()
            .post("/hover")
            .json(&json!({
                "text": "rng.shuffle(x)",
                "line": 0,
                "word": "shuffle"
            }))
            .await;

        let body: HoverResponses = response.json();
        assert_eq!(body.ok.unwrap().key, "np.random.shuffle");
    }

    #[tokio::test]
    async fn test_hover_without_insight_is_empty_object() {
        let response = server()
            .post("/hover")
            .json(&json!({ "text": "print(x)", "line": 0, "word": "print" }))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({}));
    }

    #[test]
    fn test_resolved_key_missing_from_knowledge_base_uses_word() {
        let state = sample_state();
        let request = HoverRequest {
            position: DocumentPosition {
                text: "import numpy as np\nnp.linalg.inv(m)".to_string(),
                line: 1,
                ..Default::default()
            },
            word: Some("permutation".to_string()),
        };
        let hover = hover_insight(&state, &request).unwrap();
        assert_eq!(hover.key, "np.random.permutation");
    }
}
