use crate::partition::{LinePartitioner, Partitioner};
use crate::random::{DieRandomizer, Randomizer};
use crate::square::Square;
use crate::verify::{SumValidator, Validator};
use rand::Rng;
use tracing::{debug, trace};

/// Builds magic squares by rejection sampling: draw a candidate of random
/// values, keep it if every line shares one sum, otherwise discard it and
/// draw again.
///
/// The builder owns its three collaborators. [`SquareBuilder::new`] wires
/// the standard ones over a caller-supplied rng;
/// [`SquareBuilder::with_components`] accepts substitutes, e.g. a scripted
/// [`Randomizer`] that makes the accepted candidate fully deterministic.
///
/// There is no attempt cap: [`build`](Self::build) loops until a candidate
/// passes, which is practical only for very small sizes (see the crate
/// docs for per-size expectations). [`build_capped`](Self::build_capped)
/// is the opt-in bound for callers that need one.
///
/// # Example
/// ```
/// use magic_sampler::{DieRandomizer, LinePartitioner, SquareBuilder, SumValidator};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let rng = ChaCha20Rng::seed_from_u64(7);
/// let mut builder = SquareBuilder::with_components(
///     DieRandomizer::with_range(rng, 1, 3),
///     LinePartitioner,
///     SumValidator,
/// );
/// let square = builder.build(3);
/// let constant = square.magic_constant();
/// assert!(square.rows().all(|row| row.iter().sum::<u32>() == constant));
/// ```
pub struct SquareBuilder<G, P = LinePartitioner, V = SumValidator> {
    randomizer: G,
    partitioner: P,
    validator: V,
}

impl<R: Rng> SquareBuilder<DieRandomizer<R>> {
    /// Creates a builder with the standard components: die rolls in
    /// `[1, 6]`, row/column/diagonal partitioning, and exact sum equality.
    pub fn new(rng: R) -> Self {
        Self::with_components(DieRandomizer::new(rng), LinePartitioner, SumValidator)
    }
}

impl<G: Randomizer, P: Partitioner, V: Validator> SquareBuilder<G, P, V> {
    /// Creates a builder from explicit components.
    pub fn with_components(randomizer: G, partitioner: P, validator: V) -> Self {
        Self {
            randomizer,
            partitioner,
            validator,
        }
    }

    /// Builds a magic square with `size` rows and columns, retrying until
    /// a candidate passes verification.
    ///
    /// Does not return for sizes where the randomizer cannot produce a
    /// magic square in realistic time (4 and up under the default range).
    ///
    /// # Panics
    /// Panics if `size == 0`.
    pub fn build(&mut self, size: usize) -> Square {
        assert!(size >= 1, "size must be at least 1");
        let mut attempts: u64 = 0;
        loop {
            attempts += 1;
            if let Some(square) = self.attempt(size) {
                debug!(size, attempts, "magic square found");
                return square;
            }
            trace!(size, attempt = attempts, "candidate rejected");
        }
    }

    /// Like [`build`](Self::build), but gives up and returns `None` after
    /// `max_attempts` rejected candidates. The explicit opt-in for callers
    /// that cannot tolerate the open-ended retry loop.
    ///
    /// # Panics
    /// Panics if `size == 0`.
    pub fn build_capped(&mut self, size: usize, max_attempts: u64) -> Option<Square> {
        assert!(size >= 1, "size must be at least 1");
        for attempt in 1..=max_attempts {
            if let Some(square) = self.attempt(size) {
                debug!(size, attempts = attempt, "magic square found");
                return Some(square);
            }
            trace!(size, attempt, "candidate rejected");
        }
        debug!(size, max_attempts, "attempt cap reached");
        None
    }

    /// Returns an endless iterator of independently built magic squares.
    ///
    /// # Panics
    /// Panics if `size == 0` (on the first `next` call).
    pub fn squares(&mut self, size: usize) -> impl Iterator<Item = Square> + '_ {
        std::iter::from_fn(move || Some(self.build(size)))
    }

    /// Draws one candidate and returns it if it is magic.
    fn attempt(&mut self, size: usize) -> Option<Square> {
        let rows: Vec<Vec<u32>> = (0..size).map(|_| self.randomizer.generate(size)).collect();
        let candidate = Square::from_rows(rows);
        let lines = self.partitioner.split(&candidate);
        if self.validator.verify(&lines) {
            Some(candidate)
        } else {
            None
        }
    }
}

/// Builds a magic square with the standard components over the supplied
/// rng. One-shot convenience for callers that do not need component
/// injection.
///
/// # Panics
/// Panics if `size == 0`.
pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Square {
    SquareBuilder::new(rng).build(size)
}
