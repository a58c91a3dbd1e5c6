//! Translate between indices and passwords from the command line.
//!
//! # Examples
//!
//! ```sh
//! # Password at index 1
//! pwstream encode 1
//!
//! # Index of a password (surrounding whitespace is ignored by `find`)
//! pwstream decode 'aaaaaaab'
//! pwstream find '  Zx9!aB#q  '
//!
//! # Stream 100 passwords starting at 1,000,000, as JSON
//! pwstream --json range --start 1000000 --count 100
//!
//! # How many indices round-trip exactly
//! pwstream capacity
//! ```

use std::process;

use clap::{Parser, Subcommand};
use pwstream::format::group_thousands;
use pwstream::prelude::*;
use serde_json::json;

/// Deterministic password stream: index <-> password translation.
#[derive(Parser)]
#[command(name = "pwstream")]
struct Cli {
    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Tracing filter directive (e.g. `pwstream=debug`). Falls back to RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the password at a 1-based index
    Encode {
        /// Decimal index, any size
        index: String,
    },
    /// Print the index of a password (exact, no trimming)
    Decode { password: String },
    /// Print the index of a password, ignoring surrounding whitespace
    Find { password: String },
    /// Stream consecutive passwords the way a scrolling reader sees them
    Range {
        /// First index to print
        #[arg(long, default_value = "1")]
        start: String,

        /// Number of passwords to print
        #[arg(long, default_value_t = pwstream::INITIAL_SEED)]
        count: usize,
    },
    /// Print the size of the exact round-trip range
    Capacity,
}

fn main() {
    let cli = Cli::parse();
    pwstream::log::init_stderr(cli.log_level.as_deref(), "warn");

    if let Err(e) = run(cli.command, cli.json) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(command: Command, as_json: bool) -> Result<(), String> {
    let codec = Codec::new();
    match command {
        Command::Encode { index } => {
            let index = parse_positive_integer(&index).map_err(|e| e.to_string())?;
            let password = codec.encode(&index);
            if as_json {
                print_json(&json!({
                    "index": index,
                    "password": password,
                    "exact": codec.is_exact(&index),
                }))?;
            } else {
                println!("{password}");
            }
        }
        Command::Decode { password } => {
            let index = codec.decode(&password).map_err(|e| e.to_string())?;
            print_index(&password, &index, as_json)?;
        }
        Command::Find { password } => {
            let index = find_index(&codec, &password).map_err(|e| e.to_string())?;
            print_index(password.trim(), &index, as_json)?;
        }
        Command::Range { start, count } => {
            let entries = scroll(codec, &start, count)?;
            if as_json {
                print_json(&serde_json::to_value(&entries).map_err(|e| e.to_string())?)?;
            } else {
                for entry in &entries {
                    println!("{}\t{}", entry.index, entry.password);
                }
            }
        }
        Command::Capacity => {
            let capacity = codec.capacity();
            if as_json {
                print_json(&json!({
                    "capacity": capacity.to_string(),
                    "formatted": group_thousands(capacity),
                }))?;
            } else {
                println!("{}", group_thousands(capacity));
            }
        }
    }
    Ok(())
}

/// Jump to `start`, then keep signalling proximity until `count` entries
/// have been collected. Only the fresh tail of each batch is taken, so the
/// window's eviction never drops anything we still need.
fn scroll(codec: Codec, start: &str, count: usize) -> Result<Vec<Entry>, String> {
    let mut manager = WindowManager::new(codec, WindowConfig::default());
    manager.jump_to(start).map_err(|e| e.to_string())?;

    let mut out = Vec::with_capacity(count);
    let mut fresh = manager.len();
    while out.len() < count {
        if fresh == 0 {
            break;
        }
        let skip = manager.len() - fresh;
        let needed = count - out.len();
        out.extend(manager.entries().skip(skip).take(needed).cloned());
        fresh = manager.config().batch;
        if out.len() < count {
            manager.on_proximity_signal();
        }
    }
    Ok(out)
}

fn print_index(password: &str, index: &GlobalIndex, as_json: bool) -> Result<(), String> {
    if as_json {
        print_json(&json!({
            "password": password,
            "index": index,
            "formatted": group_thousands(index.value()),
        }))
    } else {
        println!("{}", group_thousands(index.value()));
        Ok(())
    }
}

fn print_json(value: &serde_json::Value) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{text}");
    Ok(())
}
