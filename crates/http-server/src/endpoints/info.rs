use crate::AppState;
use crate::contract::{EmptyRequest, EndpointConfigTypes};
use crate::define_endpoint;
use axum::extract::State;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Serialize, Deserialize, TS, Default, Debug)]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub struct ServerInfoResponse {
    pub port: u16,
    /// Number of knowledge base entries loaded.
    pub insights: usize,
}

#[derive(Serialize, TS, Default)]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub struct InfoResponses {
    #[serde(rename = "200")]
    pub ok: ServerInfoResponse,
}

pub struct InfoEndpointConfig;

impl EndpointConfigTypes for InfoEndpointConfig {
    type PathRequest = EmptyRequest;
    type BodyRequest = EmptyRequest;
    type QueryRequest = EmptyRequest;
    type Response = InfoResponses;
}

define_endpoint! {
    InfoEndpoint,
    InfoEndpointDef,
    Get,
    "/info",
    ts_path_type = "\"/api/info\"",
    config = InfoEndpointConfig
}

/// Returns the port and the size of the loaded knowledge base
pub async fn info_handler(port: u16, State(state): State<AppState>) -> Json<ServerInfoResponse> {
    Json(ServerInfoResponse {
        port,
        insights: state.knowledge_base.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{EndpointContract, HttpMethod};
    use crate::testing::sample_state;
    use axum::{Router, routing::get};
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_info_reports_port_and_entry_count() {
        let state = sample_state();
        let app = Router::new()
            .route(
                InfoEndpoint::PATH,
                get(move |s: State<AppState>| info_handler(4242, s)),
            )
            .with_state(state);
        let server = TestServer::new(app).unwrap();

        let response = server.get("/info").await;

        response.assert_status_ok();
        let body: ServerInfoResponse = response.json();
        assert_eq!(body.port, 4242);
        assert_eq!(body.insights, 3);
    }

    #[test]
    fn test_info_contract() {
        assert_eq!(InfoEndpoint::METHOD, HttpMethod::Get);
        assert_eq!(InfoEndpointDef::default().path, "/info");
    }
}
