//! `FunctionServer` — the axum app serving one function target.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::Router;
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use cirrus_core::FunctionError;
use cirrus_runtime::{CloudEventFunction, Invoker};
use metrics::counter;
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;

use crate::codec;
use crate::config::ServerConfig;
use crate::health;
use crate::http_function::HttpFunction;
use crate::metrics as server_metrics;
use crate::shutdown::ShutdownCoordinator;

/// The function a server process serves.
pub enum FunctionTarget {
    /// An event function behind the CloudEvents intake route.
    Event(Arc<dyn CloudEventFunction>),
    /// An HTTP function that owns every route.
    Http(Arc<dyn HttpFunction>),
}

/// Shared state accessible from axum handlers.
#[derive(Clone)]
struct AppState {
    invoker: Option<Arc<Invoker>>,
    http: Option<Arc<dyn HttpFunction>>,
    shutdown: Arc<ShutdownCoordinator>,
    start_time: Instant,
    target_name: String,
    metrics: Option<PrometheusHandle>,
}

/// The function server: one process, one target.
pub struct FunctionServer {
    config: ServerConfig,
    target_name: String,
    target: FunctionTarget,
    shutdown: Arc<ShutdownCoordinator>,
    start_time: Instant,
    metrics: Option<PrometheusHandle>,
}

impl FunctionServer {
    /// Create a server for the given target.
    pub fn new(config: ServerConfig, target_name: impl Into<String>, target: FunctionTarget) -> Self {
        Self {
            config,
            target_name: target_name.into(),
            target,
            shutdown: Arc::new(ShutdownCoordinator::new()),
            start_time: Instant::now(),
            metrics: None,
        }
    }

    /// Create a server for an event function.
    pub fn event(
        config: ServerConfig,
        target_name: impl Into<String>,
        function: Arc<dyn CloudEventFunction>,
    ) -> Self {
        Self::new(config, target_name, FunctionTarget::Event(function))
    }

    /// Create a server for an HTTP function.
    pub fn http(
        config: ServerConfig,
        target_name: impl Into<String>,
        function: Arc<dyn HttpFunction>,
    ) -> Self {
        Self::new(config, target_name, FunctionTarget::Http(function))
    }

    /// Attach an installed Prometheus recorder for the `/metrics` route.
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Build the axum router with all routes.
    pub fn router(&self) -> Router {
        let invocation_timeout = Duration::from_secs(self.config.invocation_timeout_secs);
        let (invoker, http) = match &self.target {
            FunctionTarget::Event(f) => (
                Some(Arc::new(
                    Invoker::new(f.clone()).with_timeout(invocation_timeout),
                )),
                None,
            ),
            FunctionTarget::Http(f) => (None, Some(f.clone())),
        };

        let state = AppState {
            invoker,
            http,
            shutdown: self.shutdown.clone(),
            start_time: self.start_time,
            target_name: self.target_name.clone(),
            metrics: self.metrics.clone(),
        };

        let router = Router::new()
            .route("/health", get(health_handler))
            .route("/metrics", get(metrics_handler));

        let router = match &self.target {
            FunctionTarget::Event(_) => router.route("/", post(receive_event)),
            FunctionTarget::Http(_) => router.fallback(serve_http),
        };

        router
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::max(self.config.max_body_bytes))
            .with_state(state)
    }

    /// Bind and start serving. Returns the bound address and the serve task.
    ///
    /// The task exits after shutdown is signalled and in-flight connections
    /// finish.
    pub async fn listen(&self) -> std::io::Result<(SocketAddr, JoinHandle<()>)> {
        let listener =
            tokio::net::TcpListener::bind((self.config.host.as_str(), self.config.port)).await?;
        let addr = listener.local_addr()?;

        let app = self.router();
        let token = self.shutdown.token();
        let handle = tokio::spawn(async move {
            let shutdown = async move { token.cancelled().await };
            if let Err(e) = axum::serve(listener, app)
                .with_graceful_shutdown(shutdown)
                .await
            {
                tracing::error!(error = %e, "server error");
            }
        });

        tracing::info!(%addr, function = %self.target_name, "function server listening");
        Ok((addr, handle))
    }

    /// Get the shutdown coordinator.
    pub fn shutdown(&self) -> &Arc<ShutdownCoordinator> {
        &self.shutdown
    }

    /// Get the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the target name this process serves.
    pub fn target_name(&self) -> &str {
        &self.target_name
    }
}

/// GET /health
async fn health_handler(State(state): State<AppState>) -> Response {
    let resp = health::health_check(state.start_time, &state.target_name);
    Json(resp).into_response()
}

/// GET /metrics
async fn metrics_handler(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => server_metrics::render(handle).into_response(),
        None => (StatusCode::NOT_FOUND, "metrics recorder not installed").into_response(),
    }
}

/// POST / — CloudEvents intake (both bindings).
async fn receive_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let event = match codec::decode_event(&headers, &body) {
        Ok(event) => event,
        Err(err) => {
            counter!("events_rejected_total", "reason" => err.reason().to_owned()).increment(1);
            tracing::warn!(error = %err, "rejected inbound event");
            return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
        }
    };

    let Some(invoker) = &state.invoker else {
        // Unreachable with the routes built in `router`, but the state
        // shape allows it.
        return (StatusCode::NOT_FOUND, "no event function deployed").into_response();
    };

    match invoker
        .invoke(event, state.shutdown.invocation_token())
        .await
    {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => error_response(&err),
    }
}

/// Fallback — every method and path reaches the HTTP function.
async fn serve_http(State(state): State<AppState>, request: Request) -> Response {
    match &state.http {
        Some(function) => function.handle(request).await,
        None => (StatusCode::NOT_FOUND, "no HTTP function deployed").into_response(),
    }
}

/// Map an invocation failure to an HTTP status.
///
/// The status is the host's redelivery hint: 400 means the event is bad and
/// redelivery cannot help; 500 means this invocation failed and the platform
/// may redeliver; 503 means the process is going away.
fn error_response(err: &FunctionError) -> Response {
    let status = match err {
        FunctionError::PayloadShape(_) => StatusCode::BAD_REQUEST,
        FunctionError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
        FunctionError::Timeout(_) | FunctionError::Handler(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, err.to_string()).into_response()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
