//! Axum server setup and router construction.

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use axum::routing::{get, post};
use pwstream::shared::SharedWindow;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::{self, AppState};

/// Build the full axum router.
///
/// The router serves the REST API at `/api/*` and, when `static_dir` is set,
/// falls back to static files for everything else.
pub fn build_router(window: SharedWindow, static_dir: Option<PathBuf>) -> Router {
    let app_state = AppState { window };

    // CORS layer for development (frontend dev server on a different port).
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/api/window", get(api::get_window))
        .route("/api/more", post(api::post_more))
        .route("/api/reset", post(api::post_reset))
        .route("/api/lookup", post(api::post_lookup))
        .route("/api/encode/{index}", get(api::get_encode))
        .with_state(app_state)
        .layer(cors);

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
}

/// Bind the listener, spawn the server, and return the bound address.
pub async fn start_server(router: Router, bind_addr: SocketAddr) -> io::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!(error = %e, "web server stopped");
        }
    });

    tracing::info!(%addr, "web server listening");
    Ok(addr)
}
