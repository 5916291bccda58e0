//! # HTTP Server Contract System
//!
//! Every endpoint is declared with [`define_endpoint!`], which ties an HTTP
//! method and path to its request and response types and generates a
//! TypeScript definition the editor extension imports.
//!
//! Request handling is split into path, body and query parameters; use
//! [`EmptyRequest`] for the parts an endpoint does not take.
//!
//! ```rust,ignore
//! use http_server::define_endpoint;
//! use http_server::contract::{EmptyRequest, EndpointConfigTypes};
//! use http_server::endpoints::shared::DocumentPosition;
//!
//! pub struct ResolveEndpointConfig;
//!
//! impl EndpointConfigTypes for ResolveEndpointConfig {
//!     type PathRequest = EmptyRequest;
//!     type BodyRequest = DocumentPosition;
//!     type QueryRequest = EmptyRequest;
//!     type Response = ResolveResponses;
//! }
//!
//! define_endpoint! {
//!     ResolveEndpoint,
//!     ResolveEndpointDef,
//!     Post,
//!     "/resolve",
//!     ts_path_type = "\"/api/resolve\"",
//!     config = ResolveEndpointConfig
//! }
//! ```
//!
//! which generates
//!
//! ```typescript
//! export type ResolveEndpointDef = {
//!   method: HttpMethod,
//!   path: "/api/resolve",
//!   path_request: EmptyRequest,
//!   body_request: DocumentPosition,
//!   query_request: EmptyRequest,
//!   responses: ResolveResponses
//! };
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Serialize, Deserialize, TS, Clone, Debug, PartialEq)]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub enum HttpMethod {
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "POST")]
    Post,
}

pub trait ApiRequest:
    Serialize + for<'de> Deserialize<'de> + TS + Default + Send + Sync + 'static
{
}
impl<T> ApiRequest for T where
    T: Serialize + for<'de> Deserialize<'de> + TS + Default + Send + Sync + 'static
{
}

#[derive(Serialize, Deserialize, TS, Default, Debug, Clone, PartialEq)]
#[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
pub struct EmptyRequest;

pub trait ApiResponse: Serialize + TS + Default + Send + Sync + 'static {}
impl<T> ApiResponse for T where T: Serialize + TS + Default + Send + Sync + 'static {}

pub trait EndpointContract {
    const METHOD: HttpMethod;
    const PATH: &'static str;

    type PathRequest: ApiRequest;
    type BodyRequest: ApiRequest;
    type QueryRequest: ApiRequest;
    type Response: ApiResponse;
}

/// Trait for endpoint configuration - implement this for your config struct
pub trait EndpointConfigTypes {
    type PathRequest: ApiRequest;
    type BodyRequest: ApiRequest;
    type QueryRequest: ApiRequest;
    type Response: ApiResponse;
}

#[macro_export]
macro_rules! define_endpoint {
    (
        $endpoint_name:ident,
        $def_name:ident,
        $method:ident,
        $path:literal,
        ts_path_type = $ts_path_type:literal,
        config = $config_type:ty
    ) => {
        pub struct $endpoint_name;

        impl $crate::contract::EndpointContract for $endpoint_name {
            const METHOD: $crate::contract::HttpMethod = $crate::contract::HttpMethod::$method;
            const PATH: &'static str = $path;
            type PathRequest = <$config_type as $crate::contract::EndpointConfigTypes>::PathRequest;
            type BodyRequest = <$config_type as $crate::contract::EndpointConfigTypes>::BodyRequest;
            type QueryRequest = <$config_type as $crate::contract::EndpointConfigTypes>::QueryRequest;
            type Response = <$config_type as $crate::contract::EndpointConfigTypes>::Response;
        }

        #[derive(serde::Serialize, ts_rs::TS)]
        #[ts(export, export_to = "../../../packages/code-insights/src/api.ts")]
        pub struct $def_name {
            pub method: $crate::contract::HttpMethod,
            #[ts(type = $ts_path_type)]
            pub path: String,
            pub path_request: <$config_type as $crate::contract::EndpointConfigTypes>::PathRequest,
            pub body_request: <$config_type as $crate::contract::EndpointConfigTypes>::BodyRequest,
            pub query_request: <$config_type as $crate::contract::EndpointConfigTypes>::QueryRequest,
            pub responses: <$config_type as $crate::contract::EndpointConfigTypes>::Response,
        }

        impl Default for $def_name {
            fn default() -> Self {
                Self {
                    method: $crate::contract::HttpMethod::$method,
                    path: $path.to_string(),
                    path_request: <<$config_type as $crate::contract::EndpointConfigTypes>::PathRequest>::default(),
                    body_request: <<$config_type as $crate::contract::EndpointConfigTypes>::BodyRequest>::default(),
                    query_request: <<$config_type as $crate::contract::EndpointConfigTypes>::QueryRequest>::default(),
                    responses: <<$config_type as $crate::contract::EndpointConfigTypes>::Response>::default(),
                }
            }
        }
    };
}
