//! Serve command implementation
//!
//! Loads the requested snake, binds all interfaces on the requested port and
//! serves the Battlesnake routes until Ctrl+C or SIGTERM.

use anyhow::{Context, Result};
use snake_adapters::{HttpServer, ServerConfig};
use snake_runtime::load_snake;
use tokio::signal;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is not set. The HTTP stack only reports
/// errors.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=error,hyper=error";

/// Arguments for the serve command
pub struct ServeArgs {
    /// Registered snake name or a path naming one
    pub snake: String,
    /// Port to listen on
    pub port: u16,
}

/// Execute the serve command
pub async fn execute_serve_command(args: ServeArgs) -> Result<()> {
    init_tracing();

    // Resolve the snake before touching the network
    let handlers = load_snake(&args.snake)
        .with_context(|| format!("Failed to load snake '{}'", args.snake))?;

    let server = HttpServer::new(ServerConfig::new(args.port), handlers);
    server
        .run_until(wait_for_shutdown())
        .await
        .with_context(|| format!("Failed to serve on port {}", args.port))?;

    info!("Shutdown complete");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A subscriber may already be installed (tests)
    if let Err(err) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        debug!("Keeping existing tracing subscriber: {}", err);
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn wait_for_shutdown() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
