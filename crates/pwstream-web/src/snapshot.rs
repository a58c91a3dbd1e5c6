//! Serializable projection of a [`WindowManager`] for REST transport.
//!
//! Big integers travel as decimal strings; JSON numbers cannot hold them.

use pwstream::format::group_thousands;
use pwstream::{Entry, WindowManager};
use serde::Serialize;

/// The window as the browser sees it.
#[derive(Debug, Serialize)]
pub struct WindowSnapshot {
    /// Highest index emitted so far.
    pub cursor: String,
    /// Size of the exact round-trip range.
    pub capacity: String,
    /// `capacity` with thousands separators.
    pub capacity_formatted: String,
    pub max_items: usize,
    pub entries: Vec<Entry>,
}

impl WindowSnapshot {
    /// Build a snapshot. Call while holding the window lock.
    pub fn from_manager(manager: &WindowManager) -> Self {
        let capacity = manager.codec().capacity();
        Self {
            cursor: manager.cursor().to_string(),
            capacity: capacity.to_string(),
            capacity_formatted: group_thousands(capacity),
            max_items: manager.config().max_items,
            entries: manager.entries().cloned().collect(),
        }
    }
}
