#![doc = include_str!("../README.md")]

mod builder;
mod partition;
mod random;
mod square;
mod verify;

pub use builder::{SquareBuilder, generate};
pub use partition::{Line, LinePartitioner, Partitioner};
pub use random::{DieRandomizer, Randomizer};
pub use square::Square;
pub use verify::{SumValidator, Validator};
