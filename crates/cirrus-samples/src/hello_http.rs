//! HTTP-triggered sample: fixed greeting.

use async_trait::async_trait;
use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use cirrus_server::HttpFunction;
use tracing::info;

/// Body returned for every request.
pub const GREETING: &str = "Hello, Functions Framework.";

/// Responds 200 with a fixed text body.
pub struct HelloHttp;

#[async_trait]
impl HttpFunction for HelloHttp {
    async fn handle(&self, _request: Request) -> Response {
        info!("function received request");
        GREETING.into_response()
    }
}
