//! Production random source backed by the thread-local RNG.

use rand::Rng;

use crate::ports::RandomSource;

/// Uniform draws from `rand::thread_rng`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl ThreadRngSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRngSource {
    fn next_f64(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }

    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_in_unit_interval() {
        let source = ThreadRngSource::new();
        for _ in 0..100 {
            let draw = source.next_f64();
            assert!((0.0..1.0).contains(&draw));
        }
    }

    #[test]
    fn pick_index_stays_in_bounds() {
        let source = ThreadRngSource::new();
        for _ in 0..100 {
            assert!(source.pick_index(3) < 3);
        }
    }
}
