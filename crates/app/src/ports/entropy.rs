//! Entropy port: the randomness the simulation draws from.

/// Source of uniformly distributed floats.
///
/// Injected so tests can replay exact sequences.
pub trait Entropy: Send + Sync {
    /// Draw a value from `[low, high)`.
    fn uniform(&self, low: f64, high: f64) -> f64;
}
