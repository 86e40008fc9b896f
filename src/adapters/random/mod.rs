//! Random source adapters.

mod fixed;
mod thread_rng;

pub use fixed::FixedRandomSource;
pub use thread_rng::ThreadRngSource;
