use rand::Rng;

/// Source of indices for pool selection. Injectable so tests can pin which
/// tip and example get chosen; production uses the thread-local RNG.
pub trait RandomSource: Send + Sync {
    /// Return an index in `0..upper`. `upper` must be non-zero.
    fn pick_index(&self, upper: usize) -> usize;
}

/// Default source backed by `rand::thread_rng`.
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn pick_index(&self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }
}
