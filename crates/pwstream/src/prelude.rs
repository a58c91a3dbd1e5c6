//! Convenience re-exports for common `pwstream` types.
//!
//! ```ignore
//! use pwstream::prelude::*;
//! ```
//!
//! Log capture types and the formatting helpers are left out; import those
//! from their modules directly.

// ── Core types ──────────────────────────────────────────────────────
pub use crate::codec::Codec;
pub use crate::config::WindowConfig;
pub use crate::index::GlobalIndex;
pub use crate::window::{Entry, WindowManager};

// ── Lookup ──────────────────────────────────────────────────────────
pub use crate::lookup::{find_index, parse_positive_integer};

// ── Shared handle ───────────────────────────────────────────────────
pub use crate::shared::{SharedWindow, jump, lookup, new_shared, signal_proximity, with_window};

// ── Errors ──────────────────────────────────────────────────────────
pub use crate::error::{FormatError, InputError};
