//! Generate a magic square with specified size and seed.
//!
//! Usage: cargo run --release --example generate -- <size> [seed]
//!
//! Example:
//!   cargo run --release --example generate -- 3 42

use magic_sampler::SquareBuilder;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    let size: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
        eprintln!("Usage: {} <size> [seed]", args[0]);
        std::process::exit(1);
    });

    let seed: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0);

    if size > 3 {
        eprintln!("warning: sizes above 3 are unlikely to ever finish; Ctrl-C to give up");
    }

    let rng = ChaCha20Rng::seed_from_u64(seed);
    let mut builder = SquareBuilder::new(rng);
    let square = builder.build(size);

    for row in square.rows() {
        for value in row {
            print!("{} ", value);
        }
        println!();
    }
    println!("magic constant: {}", square.magic_constant());
}
