//! Bounded, forward-scrolling window over the password stream.
//!
//! The manager owns a cursor (the highest index generated so far) and an
//! ordered window of materialized entries. Appends always continue from the
//! cursor; once the window grows past `max_items` the oldest entries are
//! dropped from the head, so memory stays bounded no matter how far a reader
//! scrolls. A reset jumps the cursor to an arbitrary start.
//!
//! The manager is a plain single-owner value and is not reentrant. Frontends
//! that signal from several threads share it through
//! [`SharedWindow`](crate::shared::SharedWindow), which serializes every call.

use std::collections::VecDeque;
use std::collections::vec_deque;

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::codec::Codec;
use crate::config::WindowConfig;
use crate::error::InputError;
use crate::index::GlobalIndex;
use crate::lookup::parse_positive_integer;

/// One materialized password and its position in the stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub index: GlobalIndex,
    pub password: String,
}

/// Cursor plus bounded window of generated entries.
#[derive(Debug, Clone)]
pub struct WindowManager {
    codec: Codec,
    config: WindowConfig,
    cursor: BigUint,
    window: VecDeque<Entry>,
}

impl WindowManager {
    /// Empty window, cursor at 0.
    pub fn new(codec: Codec, config: WindowConfig) -> Self {
        let capacity = config.max_items;
        Self {
            codec,
            config,
            cursor: BigUint::zero(),
            window: VecDeque::with_capacity(capacity),
        }
    }

    /// Startup state: a new manager with `initial_seed` entries appended.
    pub fn seeded(codec: Codec, config: WindowConfig) -> Self {
        let seed = config.initial_seed;
        let mut manager = Self::new(codec, config);
        manager.append_batch(seed);
        manager
    }

    /// Generate `count` entries after the cursor, then evict from the head
    /// until the window fits. Returns how many entries were evicted.
    pub fn append_batch(&mut self, count: usize) -> usize {
        for _ in 0..count {
            self.cursor += 1u32;
            let index = GlobalIndex::from_nonzero(self.cursor.clone());
            let password = self.codec.encode(&index);
            self.window.push_back(Entry { index, password });
        }

        let evicted = self.window.len().saturating_sub(self.config.max_items);
        if evicted > 0 {
            self.window.drain(..evicted);
        }

        debug!(
            count,
            evicted,
            cursor = %self.cursor,
            len = self.window.len(),
            "appended batch"
        );
        evicted
    }

    /// Append one configured batch. Every call is independent: rapid
    /// repeated signals each generate a full batch, nothing is coalesced.
    pub fn on_proximity_signal(&mut self) -> usize {
        self.append_batch(self.config.batch)
    }

    /// Restart the stream at `new_start`.
    ///
    /// Clears the window, moves the cursor to `new_start - 1`, and appends
    /// one batch. Fails without touching any state if `new_start <= 0`.
    pub fn reset(&mut self, new_start: &BigInt) -> Result<(), InputError> {
        let start = GlobalIndex::try_from(new_start)?;
        self.restart(start);
        Ok(())
    }

    /// Parse user-typed decimal text and [`reset`](Self::reset) to it.
    pub fn jump_to(&mut self, text: &str) -> Result<(), InputError> {
        match parse_positive_integer(text) {
            Ok(start) => {
                self.restart(start);
                Ok(())
            }
            Err(e) => {
                debug!(error = %e, "jump rejected");
                Err(e)
            }
        }
    }

    fn restart(&mut self, start: GlobalIndex) {
        info!(start = %start, "window reset");
        self.window.clear();
        self.cursor = start.into_inner() - 1u32;
        self.append_batch(self.config.batch);
    }

    /// Highest index generated so far (0 before the first append).
    pub fn cursor(&self) -> &BigUint {
        &self.cursor
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Entries in ascending index order.
    pub fn entries(&self) -> vec_deque::Iter<'_, Entry> {
        self.window.iter()
    }

    /// Entry at `position` within the window (0 = oldest).
    pub fn get(&self, position: usize) -> Option<&Entry> {
        self.window.get(position)
    }

    pub fn first_index(&self) -> Option<&GlobalIndex> {
        self.window.front().map(|e| &e.index)
    }

    pub fn last_index(&self) -> Option<&GlobalIndex> {
        self.window.back().map(|e| &e.index)
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(Codec::new(), WindowConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(manager: &WindowManager) -> Vec<u64> {
        manager
            .entries()
            .map(|e| e.index.to_string().parse().unwrap())
            .collect()
    }

    fn consecutive(from: u64, to: u64) -> Vec<u64> {
        (from..=to).collect()
    }

    #[test]
    fn fresh_manager_is_empty() {
        let manager = WindowManager::default();
        assert!(manager.is_empty());
        assert!(manager.cursor().is_zero());
        assert!(manager.first_index().is_none());
    }

    #[test]
    fn seed_then_one_batch() {
        let mut manager = WindowManager::seeded(Codec::new(), WindowConfig::default());
        assert_eq!(manager.len(), 36);
        assert_eq!(indices(&manager), consecutive(1, 36));
        assert_eq!(manager.get(0).unwrap().password, "aaaaaaaa");

        let evicted = manager.append_batch(24);
        assert_eq!(evicted, 0);
        assert_eq!(manager.len(), 60);
        assert_eq!(indices(&manager), consecutive(1, 60));
        assert_eq!(manager.cursor(), &BigUint::from(60u32));
    }

    #[test]
    fn entries_carry_their_encoding() {
        let manager = WindowManager::seeded(Codec::new(), WindowConfig::default());
        let codec = Codec::new();
        for entry in manager.entries() {
            assert_eq!(entry.password, codec.encode(&entry.index));
        }
    }

    #[test]
    fn window_caps_at_max_items() {
        let mut manager = WindowManager::seeded(Codec::new(), WindowConfig::default());
        // 36 + 5 * 24 = 156 generated.
        let mut evicted = 0;
        for _ in 0..5 {
            evicted += manager.on_proximity_signal();
        }
        assert_eq!(evicted, 16);
        assert_eq!(manager.len(), 140);
        assert_eq!(indices(&manager), consecutive(17, 156));
        assert_eq!(manager.first_index().unwrap().to_string(), "17");
        assert_eq!(manager.last_index().unwrap().to_string(), "156");
    }

    #[test]
    fn single_oversized_batch_keeps_newest() {
        let config = WindowConfig::new().with_max_items(10);
        let mut manager = WindowManager::new(Codec::new(), config);
        let evicted = manager.append_batch(25);
        assert_eq!(evicted, 15);
        assert_eq!(indices(&manager), consecutive(16, 25));
    }

    #[test]
    fn zero_count_is_a_no_op() {
        let mut manager = WindowManager::seeded(Codec::new(), WindowConfig::default());
        assert_eq!(manager.append_batch(0), 0);
        assert_eq!(manager.len(), 36);
        assert_eq!(manager.cursor(), &BigUint::from(36u32));
    }

    #[test]
    fn rapid_signals_each_append_a_batch() {
        let config = WindowConfig::new().with_max_items(1000);
        let mut manager = WindowManager::seeded(Codec::new(), config);
        for _ in 0..3 {
            manager.on_proximity_signal();
        }
        assert_eq!(indices(&manager), consecutive(1, 36 + 3 * 24));
    }

    #[test]
    fn reset_repopulates_from_start() {
        let mut manager = WindowManager::seeded(Codec::new(), WindowConfig::default());
        manager.reset(&BigInt::from(1000)).unwrap();
        assert_eq!(indices(&manager), consecutive(1000, 1023));
        assert_eq!(manager.cursor(), &BigUint::from(1023u32));
    }

    #[test]
    fn reset_to_one_restarts_stream() {
        let mut manager = WindowManager::seeded(Codec::new(), WindowConfig::default());
        manager.append_batch(200);
        manager.reset(&BigInt::from(1)).unwrap();
        assert_eq!(indices(&manager), consecutive(1, 24));
    }

    #[test]
    fn invalid_reset_leaves_state_alone() {
        let mut manager = WindowManager::seeded(Codec::new(), WindowConfig::default());
        manager.on_proximity_signal();
        let before = indices(&manager);
        let cursor = manager.cursor().clone();

        for bad in [0, -5] {
            assert_eq!(
                manager.reset(&BigInt::from(bad)),
                Err(InputError::NotPositive)
            );
        }
        assert_eq!(indices(&manager), before);
        assert_eq!(manager.cursor(), &cursor);
    }

    #[test]
    fn jump_to_parses_text() {
        let mut manager = WindowManager::seeded(Codec::new(), WindowConfig::default());
        manager.jump_to(" 500 ").unwrap();
        assert_eq!(indices(&manager), consecutive(500, 523));

        let before = indices(&manager);
        assert!(manager.jump_to("12a").is_err());
        assert_eq!(manager.jump_to("0"), Err(InputError::NotPositive));
        assert_eq!(indices(&manager), before);
    }

    #[test]
    fn reset_past_capacity_still_generates() {
        let mut manager = WindowManager::seeded(Codec::new(), WindowConfig::default());
        let start = BigInt::from(manager.codec().capacity().clone()) * 10;
        manager.reset(&start).unwrap();
        assert_eq!(manager.len(), 24);
        assert!(manager.entries().all(|e| e.password.len() == 20));
    }
}
