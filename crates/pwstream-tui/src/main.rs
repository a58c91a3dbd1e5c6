//! Infinite-scroll terminal view over the password stream.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p pwstream-tui
//! cargo run -p pwstream-tui -- --start 1000000
//! cargo run -p pwstream-tui -- --proximity-rows 10 --log-level debug
//! ```
//!
//! Keys: `j`/`k` or arrows scroll, `/` finds a password, `g` jumps to an
//! index, `t` returns to the top, `,` toggles the log pane, `q` quits.

use clap::Parser;
use pwstream::log::CaptureLayer;
use pwstream::prelude::*;
use pwstream_tui::{DEFAULT_PROXIMITY_ROWS, TuiConfig, run_tui};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Scroll through the deterministic password stream.
#[derive(Parser)]
#[command(about = "Infinite-scroll view over the deterministic password stream")]
struct Args {
    /// Index of the first row.
    #[arg(long, default_value = "1")]
    start: String,

    /// Rows from the end of the list that trigger loading another batch.
    #[arg(long, default_value_t = DEFAULT_PROXIMITY_ROWS)]
    proximity_rows: usize,

    /// Most verbose level shown in the log pane.
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    // Capture logs into the TUI's own pane; stderr would corrupt the screen.
    let (layer, log_buffer) = CaptureLayer::new();
    tracing_subscriber::registry()
        .with(layer.with_filter(args.log_level))
        .init();

    let state = new_shared(Codec::new(), WindowConfig::default());
    if args.start.trim() != "1" {
        jump(&state, &args.start).map_err(|e| format!("--start: {e}"))?;
    }

    let config = TuiConfig::default()
        .with_proximity_rows(args.proximity_rows)
        .with_log_buffer(log_buffer);
    run_tui(state, &config).map_err(|e| e.to_string())
}
