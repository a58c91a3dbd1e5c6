//! Window sizing knobs.

/// Most entries the window may hold once an operation completes.
pub const MAX_ITEMS: usize = 140;
/// Entries generated per proximity signal and after a reset.
pub const BATCH: usize = 24;
/// Entries generated when a seeded window is created.
pub const INITIAL_SEED: usize = 36;

/// Configuration for a [`WindowManager`](crate::window::WindowManager).
///
/// The defaults are the values every frontend ships with; other sizes are
/// mostly useful in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    /// Window capacity. Default: [`MAX_ITEMS`].
    pub max_items: usize,
    /// Default: [`BATCH`].
    pub batch: usize,
    /// Default: [`INITIAL_SEED`].
    pub initial_seed: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            max_items: MAX_ITEMS,
            batch: BATCH,
            initial_seed: INITIAL_SEED,
        }
    }
}

impl WindowConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window capacity (at least 1).
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items.max(1);
        self
    }

    /// Set the batch size used by proximity signals and resets.
    pub fn with_batch(mut self, batch: usize) -> Self {
        self.batch = batch;
        self
    }

    /// Set the number of entries generated at startup.
    pub fn with_initial_seed(mut self, initial_seed: usize) -> Self {
        self.initial_seed = initial_seed;
        self
    }
}
