//! Deterministic, index-addressable password stream.
//!
//! `pwstream` lays out every string of 8 to 20 symbols over a fixed 88-symbol
//! alphabet as one infinite, ordered sequence. Each string has a 1-based
//! [`GlobalIndex`]; the [`Codec`] translates in both directions, and the
//! [`WindowManager`] materializes a bounded, forward-scrolling slice of the
//! sequence for frontends to render.
//!
//! The strings look like passwords but are not secret: anyone with the same
//! index gets the same string.
//!
//! # Getting started
//!
//! ```
//! use pwstream::prelude::*;
//!
//! let codec = Codec::new();
//! let index: GlobalIndex = "1".parse().unwrap();
//! assert_eq!(codec.encode(&index), "aaaaaaaa");
//! assert_eq!(codec.decode("aaaaaaab").unwrap().to_string(), "2");
//!
//! // The startup window: indices 1..=36.
//! let mut window = WindowManager::seeded(Codec::new(), WindowConfig::default());
//! assert_eq!(window.len(), 36);
//!
//! // Scrolling near the end appends another batch of 24.
//! window.on_proximity_signal();
//! assert_eq!(window.len(), 60);
//!
//! // Jump anywhere.
//! window.jump_to("1000").unwrap();
//! assert_eq!(window.first_index().unwrap().to_string(), "1000");
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`codec`] | [`Codec`]: index ↔ password bijection, alphabet, block layout |
//! | [`window`] | [`WindowManager`]: cursor, bounded window, batch append, reset |
//! | [`lookup`] | Trimmed password lookup and decimal input parsing |
//! | [`shared`] | [`SharedWindow`](shared::SharedWindow) handle for multi-threaded frontends |
//! | [`index`] | [`GlobalIndex`], the non-zero big-integer index type |
//! | [`config`] | [`WindowConfig`] and the shipped window constants |
//! | [`format`] | Thousands-grouped index labels |
//! | [`log`] | Subscriber setup and the log capture layer for full-screen UIs |
//! | [`error`] | [`FormatError`], [`InputError`], [`AlphabetError`] |

pub mod codec;
pub mod config;
pub mod error;
pub mod format;
pub mod index;
pub mod log;
pub mod lookup;
pub mod prelude;
pub mod shared;
pub mod window;

pub use codec::{ALPHABET, Codec, MAX_LEN, MIN_LEN};
pub use config::{BATCH, INITIAL_SEED, MAX_ITEMS, WindowConfig};
pub use error::{AlphabetError, FormatError, InputError};
pub use index::GlobalIndex;
pub use window::{Entry, WindowManager};

// Re-export the big-integer crate so callers can name `BigUint`/`BigInt`.
pub use num_bigint;
