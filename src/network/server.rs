//! HTTP Game Server
//!
//! Accept loop and per-connection tasks. Each accepted socket gets its
//! own task serving HTTP/1.1; the router is shared behind an `Arc`.

use std::net::SocketAddr;
use std::sync::Arc;

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::network::router::ApiRouter;
use crate::store::scores::HighScoreStore;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5000".parse().unwrap(),
        }
    }
}

/// Game server errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind or accept on the configured address.
    #[error("Failed to bind: {0}")]
    BindFailed(#[from] std::io::Error),
}

/// The HTTP game server.
pub struct GameServer {
    /// Server configuration.
    config: ServerConfig,
    /// Shared request router.
    router: Arc<ApiRouter>,
}

impl GameServer {
    /// Create a server dispatching to the given store.
    pub fn new(config: ServerConfig, store: Arc<HighScoreStore>) -> Self {
        Self {
            config,
            router: Arc::new(ApiRouter::new(store)),
        }
    }

    /// Run the accept loop. Does not return under normal operation.
    pub async fn run(self) -> Result<(), ServerError> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        info!("Listening on http://{}", listener.local_addr()?);

        loop {
            let (stream, peer) = listener.accept().await?;
            let io = TokioIo::new(stream);
            let router = self.router.clone();

            tokio::task::spawn(async move {
                let service = service_fn(move |req| {
                    let router = router.clone();
                    async move { Self::serve(router, req).await }
                });

                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    error!("Error serving connection from {}: {}", peer, err);
                }
            });
        }
    }

    /// Collect the request body and hand the request to the router.
    async fn serve(
        router: Arc<ApiRouter>,
        req: Request<Incoming>,
    ) -> Result<Response<Full<Bytes>>, hyper::Error> {
        let (parts, body) = req.into_parts();
        let body = body.collect().await?.to_bytes();
        Ok(router.handle(&parts.method, parts.uri.path(), &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    async fn start_test_server() -> (tempfile::TempDir, SocketAddr) {
        let dir = tempfile::TempDir::new().unwrap();
        let store = Arc::new(HighScoreStore::new(dir.path().join("high_scores.json")));
        let server = GameServer::new(ServerConfig::default(), store);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = server.router.clone();

        tokio::spawn(async move {
            loop {
                let (stream, _) = listener.accept().await.unwrap();
                let io = TokioIo::new(stream);
                let router = router.clone();

                tokio::spawn(async move {
                    let service = service_fn(move |req| {
                        let router = router.clone();
                        async move { GameServer::serve(router, req).await }
                    });
                    let _ = http1::Builder::new().serve_connection(io, service).await;
                });
            }
        });

        (dir, addr)
    }

    async fn request(addr: SocketAddr, raw: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(raw.as_bytes()).await.unwrap();
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).await.unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[tokio::test]
    async fn test_game_state_over_tcp() {
        let (_dir, addr) = start_test_server().await;
        let response = request(
            addr,
            "GET /api/game-state HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await;

        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.contains("application/json"));
        assert!(response.contains("\"tank\""));
    }

    #[tokio::test]
    async fn test_save_score_over_tcp() {
        let (_dir, addr) = start_test_server().await;
        let body = r#"{"name": "Alice", "score": 100}"#;
        let response = request(
            addr,
            &format!(
                "POST /api/save-score HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            ),
        )
        .await;

        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.contains("\"success\":true"));
        assert!(response.contains("\"Alice\""));
    }

    #[tokio::test]
    async fn test_index_over_tcp() {
        let (_dir, addr) = start_test_server().await;
        let response = request(
            addr,
            "GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await;

        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.contains("text/html"));
    }
}
