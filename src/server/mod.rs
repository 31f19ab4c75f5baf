//! Axum HTTP server for the quiz API.
//!
//! Routes: prediction, the question catalog, and health. Stateless: every
//! request is classified independently, so handlers need no shared state
//! and no coordination.

pub mod handlers;
pub mod types;

use std::net::SocketAddr;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::header,
    routing::{get, post},
};
use tokio::sync::oneshot;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::error::ServerError;
use crate::server::handlers::{health_handler, predict_handler, questions_handler};

/// Handle for a running server.
pub struct ServerHandle {
    /// Address the listener actually bound (useful when binding port 0).
    pub addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
}

impl ServerHandle {
    /// Signal the server to stop accepting connections and drain.
    pub fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
    }
}

/// Start the HTTP server.
///
/// Binds immediately and serves on a background task; returns once the
/// listener is up.
pub async fn start_server(addr: SocketAddr) -> Result<ServerHandle, ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let bound_addr = listener.local_addr().map_err(ServerError::LocalAddr)?;

    let app = router(bound_addr);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                tracing::info!("Quiz API shutting down");
            })
            .await
        {
            tracing::error!("Quiz API server error: {}", e);
        }
    });

    tracing::info!("Quiz API listening on {}", bound_addr);
    Ok(ServerHandle {
        addr: bound_addr,
        shutdown_tx,
    })
}

fn router(addr: SocketAddr) -> Router {
    // CORS: the quiz front end is served locally; only local origins may
    // call the API from a browser.
    let cors = CorsLayer::new()
        .allow_origin([
            format!("http://{}:{}", addr.ip(), addr.port())
                .parse()
                .expect("valid origin"),
            format!("http://localhost:{}", addr.port())
                .parse()
                .expect("valid origin"),
        ])
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE]));

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/questions", get(questions_handler))
        .route("/api/predict", post(predict_handler))
        .layer(DefaultBodyLimit::max(64 * 1024)) // 64 KB max request body
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            header::HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            header::HeaderValue::from_static("DENY"),
        ))
}
