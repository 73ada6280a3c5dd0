//! The HTTP-triggered function variant.

use async_trait::async_trait;
use axum::extract::Request;
use axum::response::Response;

/// A function triggered by a plain HTTP request.
///
/// Unlike event functions, an HTTP function owns its response: it receives
/// the request and writes whatever status and body it wants. It completes
/// within the request lifetime, so it takes no cancellation token — the
/// connection closing is its cancellation.
#[async_trait]
pub trait HttpFunction: Send + Sync {
    /// Handle one request.
    async fn handle(&self, request: Request) -> Response;
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    struct TeapotFunction;

    #[async_trait]
    impl HttpFunction for TeapotFunction {
        async fn handle(&self, _request: Request) -> Response {
            (StatusCode::IM_A_TEAPOT, "short and stout").into_response()
        }
    }

    #[tokio::test]
    async fn function_owns_its_response() {
        let f = TeapotFunction;
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let resp = f.handle(req).await;
        assert_eq!(resp.status(), StatusCode::IM_A_TEAPOT);
    }
}
