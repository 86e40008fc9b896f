//! Random source port.
//!
//! Reply selection and the offer trigger are probabilistic by design. Keeping
//! the draws behind a trait lets tests pin deterministic branches while
//! production uses a uniform generator.

/// Uniform randomness capability.
pub trait RandomSource: Send + Sync {
    /// Uniform draw in `[0, 1)`.
    fn next_f64(&self) -> f64;

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn pick_index(&self, len: usize) -> usize;
}
