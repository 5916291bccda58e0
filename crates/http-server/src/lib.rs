pub mod contract;
pub mod endpoints;

#[cfg(test)]
pub mod testing;

use crate::{
    contract::EndpointContract,
    endpoints::{
        documents::{CloseDocumentEndpoint, close_document_handler},
        hover::{HoverEndpoint, hover_handler},
        info::{InfoEndpoint, info_handler},
        insight::{InsightEndpoint, insight_handler},
        resolve::{ResolveEndpoint, resolve_handler},
    },
};

use anyhow::Result;
use axum::extract::State;
use axum::http::HeaderValue;
use axum::{
    Router,
    routing::{get, post},
};
use knowledge_base::KnowledgeBase;
use resolver::DocumentCache;
use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub knowledge_base: Arc<KnowledgeBase>,
    pub documents: Arc<DocumentCache>,
}

impl AppState {
    pub fn new(knowledge_base: KnowledgeBase, documents: Arc<DocumentCache>) -> Self {
        Self {
            knowledge_base: Arc::new(knowledge_base),
            documents,
        }
    }
}

pub fn router(port: u16, state: AppState) -> Router {
    let cors_layer = CorsLayer::new().allow_origin(tower_http::cors::AllowOrigin::predicate(
        |origin: &HeaderValue, _| {
            if let Ok(origin_str) = origin.to_str() {
                if let Ok(uri) = origin_str.parse::<http::Uri>() {
                    return uri.host() == Some("localhost");
                }
            }
            false
        },
    ));

    let api_router = Router::new()
        .route(
            InfoEndpoint::PATH,
            get(move |state: State<AppState>| info_handler(port, state)),
        )
        .route(ResolveEndpoint::PATH, post(resolve_handler))
        .route(HoverEndpoint::PATH, post(hover_handler))
        .route(InsightEndpoint::PATH, get(insight_handler))
        .route(CloseDocumentEndpoint::PATH, post(close_document_handler))
        .with_state(state);

    Router::new()
        .nest("/api", api_router)
        .layer(ServiceBuilder::new().layer(cors_layer))
}

pub async fn run(port: u16, state: AppState) -> Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let insights = state.knowledge_base.len();
    let app = router(port, state);

    tracing::info!("HTTP server listening on {} with {} insights", addr, insights);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    tracing::info!("HTTP server shut down gracefully");

    result.map_err(Into::into)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}

// 'c' -> 0x63, 'i' -> 0x69 => 0x6369 => 25449
pub const PREFERRED_PORT: u16 = 25449;

pub fn find_unused_port() -> Result<u16> {
    match TcpListener::bind(("127.0.0.1", PREFERRED_PORT)) {
        Ok(listener) => Ok(listener.local_addr()?.port()),
        Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
            tracing::info!(
                "Preferred port {} is busy, finding a random unused port",
                PREFERRED_PORT
            );
            let listener = TcpListener::bind("127.0.0.1:0")?;
            let port = listener.local_addr()?.port();
            Ok(port)
        }
        Err(e) => {
            tracing::error!("Error finding unused port: {e}");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::resolve::ResolveResponse;
    use crate::testing::sample_state;
    use axum_test::TestServer;
    use serde_json::json;
    use test_log::test;

    #[test(tokio::test)]
    async fn test_api_routes_are_nested() {
        let server = TestServer::new(router(9000, sample_state())).unwrap();

        server.get("/api/info").await.assert_status_ok();
        server
            .get("/api/insights/np.random.permutation")
            .await
            .assert_status_ok();

        let response = server
            .post("/api/resolve")
            .json(&json!({ "text": "import numpy\nnumpy.random.shuffle(a)", "line": 1 }))
            .await;
        let body: ResolveResponse = response.json();
        assert_eq!(body.key.as_deref(), Some("np.random.shuffle"));

        server
            .get("/info")
            .expect_failure()
            .await
            .assert_status_not_found();
    }

    #[test(tokio::test)]
    async fn test_document_tables_released_on_close() {
        let state = sample_state();
        let server = TestServer::new(router(9000, state.clone())).unwrap();

        server
            .post("/api/resolve")
            .json(&json!({
                "text": "import numpy as np\nnp.random.shuffle(a)",
                "line": 1,
                "uri": "file:///tmp/open.py",
                "version": 1
            }))
            .await
            .assert_status_ok();
        assert_eq!(state.documents.len(), 1);

        server
            .post("/api/documents/close")
            .json(&json!({ "uri": "file:///tmp/open.py" }))
            .await
            .assert_status_ok();
        assert_eq!(state.documents.len(), 0);
    }

    #[test(tokio::test)]
    async fn test_localhost_origin_is_allowed() {
        let server = TestServer::new(router(9000, sample_state())).unwrap();

        let response = server
            .get("/api/info")
            .add_header(
                http::header::ORIGIN,
                HeaderValue::from_static("http://localhost:5173"),
            )
            .await;

        assert_eq!(
            response.header("access-control-allow-origin"),
            "http://localhost:5173"
        );
    }

    #[test]
    fn test_find_unused_port() {
        let port = find_unused_port().unwrap();
        assert!(port > 0);
    }
}
