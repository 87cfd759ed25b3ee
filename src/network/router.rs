//! API Router
//!
//! Explicit method + path dispatch. The router owns a handle to the
//! high-score store and is shared across connections; every handler is
//! synchronous and, except for `save-score`, side-effect free.

use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::CONTENT_TYPE;
use hyper::{Method, Response, StatusCode};
use serde::Serialize;
use tracing::{debug, error};

use crate::game::config::GameConfig;
use crate::network::protocol::{ErrorResponse, SaveScoreFailure, SaveScoreRequest, SaveScoreResponse};
use crate::store::scores::HighScoreStore;

/// The game's HTML entry document, embedded at build time.
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Routes requests to the page, config, and score handlers.
pub struct ApiRouter {
    /// Shared leaderboard store.
    store: Arc<HighScoreStore>,
}

impl ApiRouter {
    /// Create a router over the given store.
    pub fn new(store: Arc<HighScoreStore>) -> Self {
        Self { store }
    }

    /// Dispatch one request. `body` is the fully collected request body;
    /// only `save-score` looks at it.
    pub fn handle(&self, method: &Method, path: &str, body: &[u8]) -> Response<Full<Bytes>> {
        debug!(%method, path, "dispatching request");
        match (method.as_str(), path) {
            ("GET", "/") => html_response(INDEX_HTML),
            ("GET", "/api/high-scores") => self.high_scores(),
            ("POST", "/api/save-score") => self.save_score(body),
            ("GET", "/api/game-state") => {
                json_response(StatusCode::OK, &GameConfig::initial())
            }
            (_, "/" | "/api/high-scores" | "/api/save-score" | "/api/game-state") => json_response(
                StatusCode::METHOD_NOT_ALLOWED,
                &ErrorResponse {
                    error: "method not allowed".to_string(),
                },
            ),
            _ => json_response(
                StatusCode::NOT_FOUND,
                &ErrorResponse {
                    error: "not found".to_string(),
                },
            ),
        }
    }

    /// `GET /api/high-scores`
    fn high_scores(&self) -> Response<Full<Bytes>> {
        match self.store.load() {
            Ok(scores) => json_response(StatusCode::OK, &scores),
            Err(e) => {
                error!("failed to load high scores: {e}");
                json_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &ErrorResponse {
                        error: e.to_string(),
                    },
                )
            }
        }
    }

    /// `POST /api/save-score`
    fn save_score(&self, body: &[u8]) -> Response<Full<Bytes>> {
        let req = SaveScoreRequest::parse(body);
        match self.store.submit(req.name(), req.score()) {
            Ok(scores) => json_response(
                StatusCode::OK,
                &SaveScoreResponse {
                    success: true,
                    scores,
                },
            ),
            Err(e) => {
                error!("failed to save score: {e}");
                json_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &SaveScoreFailure {
                        success: false,
                        error: e.to_string(),
                    },
                )
            }
        }
    }
}

/// Serialize a payload as a JSON response.
fn json_response<T: Serialize>(status: StatusCode, payload: &T) -> Response<Full<Bytes>> {
    let body = serde_json::to_string(payload).expect("response types serialize");
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from(body)))
        .expect("static response parts are valid")
}

/// Wrap a static HTML document in a 200 response.
fn html_response(html: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Full::new(Bytes::from(html)))
        .expect("static response parts are valid")
}
