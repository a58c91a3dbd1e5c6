//! Serve the password stream over HTTP.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p pwstream-web
//! cargo run -p pwstream-web -- --port 8080 --static-dir web/dist
//! cargo run -p pwstream-web -- --start 1000000 --log-level pwstream=debug
//! ```
//!
//! ```bash
//! curl http://127.0.0.1:3001/api/window
//! curl -X POST http://127.0.0.1:3001/api/more
//! curl -X POST -H 'content-type: application/json' \
//!      -d '{"password":"aaaaaaab"}' http://127.0.0.1:3001/api/lookup
//! ```

use std::path::PathBuf;

use clap::Parser;
use pwstream::prelude::*;
use pwstream_web::{WebConfig, spawn_web};

/// HTTP API over the deterministic password stream.
#[derive(Parser)]
#[command(about = "HTTP API over the deterministic password stream")]
struct Args {
    /// Port for the web server.
    #[arg(long, default_value_t = 3001)]
    port: u16,

    /// Directory of static frontend files.
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Index of the first entry in the initial window.
    #[arg(long, default_value = "1")]
    start: String,

    /// Tracing filter directive. Falls back to RUST_LOG, then `info`.
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let args = Args::parse();
    pwstream::log::init_stderr(args.log_level.as_deref(), "info");

    let mut config = WebConfig::default().with_bind_addr(([127, 0, 0, 1], args.port).into());
    if let Some(dir) = args.static_dir {
        config = config.with_static_dir(dir);
    }

    let state = new_shared(Codec::new(), config.window.clone());
    if args.start.trim() != "1" {
        jump(&state, &args.start).map_err(|e| format!("--start: {e}"))?;
    }

    let addr = spawn_web(state, config)
        .await
        .map_err(|e| format!("bind failed: {e}"))?;
    println!("API: http://{addr}/api/window");

    tokio::signal::ctrl_c().await.map_err(|e| e.to_string())?;
    Ok(())
}
