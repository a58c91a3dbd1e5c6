//! Mutex-guarded handle to a [`WindowManager`] for multi-threaded frontends.
//!
//! ```text
//! TUI input thread ──┐
//! HTTP handlers ─────┼──▶ Arc<Mutex<WindowManager>>
//! log/render loop ───┘
//! ```
//!
//! Each helper takes the lock for exactly one manager operation, so signals
//! arriving in quick succession are applied one after another and the cursor
//! and window-size rules hold across threads. A poisoned lock is recovered:
//! every manager operation leaves the state consistent before returning.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::codec::Codec;
use crate::config::WindowConfig;
use crate::error::{FormatError, InputError};
use crate::index::GlobalIndex;
use crate::lookup::find_index;
use crate::window::WindowManager;

/// Shared window handle.
pub type SharedWindow = Arc<Mutex<WindowManager>>;

/// A seeded manager behind a shared handle.
pub fn new_shared(codec: Codec, config: WindowConfig) -> SharedWindow {
    Arc::new(Mutex::new(WindowManager::seeded(codec, config)))
}

fn lock(state: &SharedWindow) -> MutexGuard<'_, WindowManager> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

/// Read from the manager under the lock.
pub fn with_window<R>(state: &SharedWindow, f: impl FnOnce(&WindowManager) -> R) -> R {
    let guard = lock(state);
    f(&guard)
}

/// Near-end-of-content signal. Returns the number of evicted entries.
pub fn signal_proximity(state: &SharedWindow) -> usize {
    lock(state).on_proximity_signal()
}

/// Jump to user-typed decimal text.
pub fn jump(state: &SharedWindow, text: &str) -> Result<(), InputError> {
    lock(state).jump_to(text)
}

/// Look up a user-typed password with the manager's codec.
pub fn lookup(state: &SharedWindow, candidate: &str) -> Result<GlobalIndex, FormatError> {
    find_index(lock(state).codec(), candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn concurrent_signals_stay_consecutive() {
        let state = new_shared(Codec::new(), WindowConfig::new().with_max_items(10_000));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = state.clone();
                thread::spawn(move || {
                    for _ in 0..10 {
                        signal_proximity(&state);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let total = 36 + 8 * 10 * 24;
        with_window(&state, |m| {
            assert_eq!(m.len(), total);
            for (i, entry) in m.entries().enumerate() {
                assert_eq!(entry.index.to_string(), (i + 1).to_string());
            }
        });
    }

    #[test]
    fn concurrent_signals_respect_cap() {
        let state = new_shared(Codec::new(), WindowConfig::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let state = state.clone();
                thread::spawn(move || {
                    for _ in 0..5 {
                        signal_proximity(&state);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        with_window(&state, |m| {
            assert_eq!(m.len(), 140);
            assert_eq!(m.last_index().unwrap().to_string(), (36 + 20 * 24).to_string());
        });
    }

    #[test]
    fn jump_and_lookup() {
        let state = new_shared(Codec::new(), WindowConfig::default());
        jump(&state, "1000").unwrap();
        let first = with_window(&state, |m| m.get(0).cloned().unwrap());
        assert_eq!(first.index.to_string(), "1000");

        let found = lookup(&state, &format!(" {} ", first.password)).unwrap();
        assert_eq!(found, first.index);

        assert!(jump(&state, "-5").is_err());
        assert!(lookup(&state, "abc").is_err());
        with_window(&state, |m| assert_eq!(m.first_index(), Some(&first.index)));
    }
}
