//! Host binary — serves one sample function target.

#![deny(unsafe_code)]

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cirrus_samples::{hello_http, sample_registry};
use cirrus_server::{FunctionServer, ServerConfig};

/// The one target that is not an event function.
const HTTP_TARGET: &str = "hello-http";

/// Cirrus sample function host.
#[derive(Parser, Debug)]
#[command(name = "cirrus-samples", about = "Serve one Cirrus sample function")]
struct Cli {
    /// Function target to serve.
    #[arg(long, default_value = HTTP_TARGET)]
    target: String,

    /// Host to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind (0 for auto-assign).
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Log level when `RUST_LOG` is unset.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Path to a JSON config file (defaults apply if absent).
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    cirrus_core::logging::init_subscriber(&args.log_level);
    let metrics_handle = cirrus_server::metrics::install_recorder();

    let base = match &args.config {
        Some(path) => ServerConfig::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    let config = ServerConfig {
        host: args.host,
        port: args.port,
        ..base
    };

    let server = if args.target == HTTP_TARGET {
        FunctionServer::http(config, HTTP_TARGET, Arc::new(hello_http::HelloHttp))
    } else {
        let registry = sample_registry();
        let Some(function) = registry.get(&args.target) else {
            bail!(
                "unknown target {:?} (available: {HTTP_TARGET}, {})",
                args.target,
                registry.targets().join(", ")
            );
        };
        FunctionServer::event(config, args.target.as_str(), function)
    }
    .with_metrics(metrics_handle);

    let (addr, handle) = server.listen().await.context("Failed to bind server")?;
    tracing::info!(function = server.target_name(), "serving on http://{addr}");

    // Wait for shutdown signal
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for ctrl-c")?;

    tracing::info!("Shutting down...");
    let drain = std::time::Duration::from_secs(server.config().drain_timeout_secs);
    server.shutdown().signal();
    if tokio::time::timeout(drain, handle).await.is_err() {
        tracing::warn!("drain timed out after {drain:?}");
    }
    tracing::info!("Shutdown complete");
    Ok(())
}
