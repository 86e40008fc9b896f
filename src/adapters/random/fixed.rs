//! Scripted random source for deterministic tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::ports::RandomSource;

/// Replays scripted draws and pick indices in order.
///
/// Exhausted queues fall back to `0.0` / index `0`, so short scripts stay
/// valid when later calls do not matter for the assertion. Indices are taken
/// modulo the pool length to stay in bounds.
pub struct FixedRandomSource {
    draws: Mutex<VecDeque<f64>>,
    picks: Mutex<VecDeque<usize>>,
}

impl FixedRandomSource {
    pub fn new(draws: Vec<f64>, picks: Vec<usize>) -> Self {
        Self {
            draws: Mutex::new(draws.into()),
            picks: Mutex::new(picks.into()),
        }
    }
}

impl RandomSource for FixedRandomSource {
    fn next_f64(&self) -> f64 {
        self.draws.lock().unwrap().pop_front().unwrap_or(0.0)
    }

    fn pick_index(&self, len: usize) -> usize {
        self.picks
            .lock()
            .unwrap()
            .pop_front()
            .map(|i| i % len)
            .unwrap_or(0)
    }
}
