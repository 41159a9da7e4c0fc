use rand::Rng;

/// A source of random integers for filling candidate squares.
///
/// Implementations must return exactly `count` values per call, each drawn
/// independently. `count = 0` yields an empty `Vec`; there is no failure
/// mode. Substituting a scripted implementation makes the builder fully
/// deterministic, which is how the end-to-end tests pin down candidates.
pub trait Randomizer {
    /// Produces `count` integers.
    fn generate(&mut self, count: usize) -> Vec<u32>;
}

/// The standard [`Randomizer`]: independent uniform draws from an inclusive
/// range, `[1, 6]` by default (a six-sided die).
#[derive(Debug)]
pub struct DieRandomizer<R> {
    rng: R,
    lo: u32,
    hi: u32,
}

impl<R: Rng> DieRandomizer<R> {
    /// Creates a randomizer drawing from `[1, 6]`.
    pub fn new(rng: R) -> Self {
        Self::with_range(rng, 1, 6)
    }

    /// Creates a randomizer drawing from `[lo, hi]` inclusive.
    ///
    /// A narrower range raises the odds that a random candidate is magic;
    /// see the crate docs for what that buys at each size.
    ///
    /// # Panics
    /// Panics if `lo > hi`.
    pub fn with_range(rng: R, lo: u32, hi: u32) -> Self {
        assert!(lo <= hi, "range must satisfy lo <= hi");
        Self { rng, lo, hi }
    }
}

impl<R: Rng> Randomizer for DieRandomizer<R> {
    fn generate(&mut self, count: usize) -> Vec<u32> {
        (0..count)
            .map(|_| self.rng.random_range(self.lo..=self.hi))
            .collect()
    }
}
