//! HTTP API over the `pwstream` password stream.
//!
//! `pwstream-web` exposes a [`SharedWindow`] through a small axum REST API so
//! a browser can render the same infinite list the TUI does: fetch the
//! window, ask for more when the user nears the bottom, jump, and look
//! passwords up.
//!
//! # Quick start
//!
//! ```ignore
//! use pwstream::prelude::*;
//! use pwstream_web::{WebConfig, spawn_web};
//!
//! let config = WebConfig::default();
//! let state = new_shared(Codec::new(), config.window.clone());
//! let addr = spawn_web(state, config).await?;
//! println!("API: http://{addr}/api/window");
//! ```
//!
//! # Routes
//!
//! | Route | Body | Response |
//! |-------|------|----------|
//! | `GET /api/window` | | [`WindowSnapshot`] |
//! | `POST /api/more` | | [`WindowSnapshot`] after one batch |
//! | `POST /api/reset` | `{"start": "1000"}` | [`WindowSnapshot`], or 400 |
//! | `POST /api/lookup` | `{"password": "..."}` | `{"index", "formatted"}`, or 404 |
//! | `GET /api/encode/{index}` | | `{"index", "password", "exact"}`, or 400 |
//!
//! Errors carry `{"error": "..."}`.

mod api;
mod server;
pub mod snapshot;

pub use snapshot::WindowSnapshot;

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use pwstream::WindowConfig;
use pwstream::shared::SharedWindow;

/// Configuration for the web server.
#[derive(Clone, Debug)]
pub struct WebConfig {
    /// Address to bind to. Default: `127.0.0.1:3001`.
    pub bind_addr: SocketAddr,
    /// Directory of static frontend files served for non-API paths.
    ///
    /// If `None`, only the API is served.
    pub static_dir: Option<PathBuf>,
    /// Window sizing for the state the binary creates.
    pub window: WindowConfig,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3001)),
            static_dir: None,
            window: WindowConfig::default(),
        }
    }
}

impl WebConfig {
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }
}

/// Spawn the web server on a Tokio task and return the bound address.
///
/// The server runs until the Tokio runtime shuts down.
pub async fn spawn_web(window: SharedWindow, config: WebConfig) -> io::Result<SocketAddr> {
    let router = server::build_router(window, config.static_dir);
    server::start_server(router, config.bind_addr).await
}
