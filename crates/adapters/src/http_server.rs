//! HTTP server that exposes a snake to the engine.
//!
//! [`HttpServer`] owns its configuration and handler set explicitly, so tests
//! can build as many servers as they like (for example on port 0) without any
//! process-wide state.

use std::future::Future;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::Router;
use snake_runtime::HandlerSet;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::ServerError;
use crate::router::build_router;

/// All interfaces; the engine reaches the snake from outside the host.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Port used when none is given.
pub const DEFAULT_PORT: u16 = 8000;

/// Configuration for the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind
    pub host: IpAddr,
    /// Port to bind; 0 picks an ephemeral port
    pub port: u16,
}

impl ServerConfig {
    /// Bind all interfaces on `port`.
    pub fn new(port: u16) -> Self {
        Self {
            host: DEFAULT_HOST,
            port,
        }
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PORT)
    }
}

/// HTTP server wired to one snake.
pub struct HttpServer {
    config: ServerConfig,
    handlers: HandlerSet,
}

impl HttpServer {
    /// Creates a new [`HttpServer`] for `handlers` with the given configuration.
    pub fn new(config: ServerConfig, handlers: HandlerSet) -> Self {
        Self { config, handlers }
    }

    /// Access the configuration associated with this server.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Router serving this server's snake, usable without a socket.
    pub fn router(&self) -> Router {
        build_router(self.handlers.clone())
    }

    /// Bind the configured address.
    pub async fn bind(&self) -> Result<TcpListener, ServerError> {
        let addr = self.config.socket_addr();
        TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve_with_shutdown<F>(
        &self,
        listener: TcpListener,
        shutdown: F,
    ) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }

    /// Bind, print the startup banner and serve until terminated.
    pub async fn run(&self) -> Result<(), ServerError> {
        self.run_until(std::future::pending()).await
    }

    /// Bind, print the startup banner and serve until `shutdown` resolves.
    pub async fn run_until<F>(&self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = self.bind().await?;
        let addr = listener.local_addr()?;

        println!("\nRunning Battlesnake at http://{}:{}", addr.ip(), addr.port());
        info!("Listening on {}", addr);

        self.serve_with_shutdown(listener, shutdown).await?;
        info!("Server on {} stopped", addr);
        Ok(())
    }
}

/// Serve `handlers` on all interfaces at `port` until the process exits.
pub async fn run_server(handlers: HandlerSet, port: u16) -> Result<(), ServerError> {
    HttpServer::new(ServerConfig::new(port), handlers).run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_runtime::load_snake;

    #[test]
    fn test_default_config_binds_all_interfaces() {
        let config = ServerConfig::default();
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn test_config_with_host() {
        let config = ServerConfig::new(9001).with_host(IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9001");
    }

    #[tokio::test]
    async fn test_bind_reports_address_in_use() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let config = ServerConfig::new(port).with_host(IpAddr::V4(Ipv4Addr::LOCALHOST));
        let server = HttpServer::new(config, load_snake("starter").unwrap());

        match server.bind().await {
            Err(ServerError::Bind { addr, .. }) => assert_eq!(addr.port(), port),
            other => panic!("expected bind error, got {:?}", other.map(|_| ())),
        }
    }
}
