//! Measure how many candidates rejection sampling burns per magic square.
//!
//! Drives the three components directly instead of going through
//! `SquareBuilder`, so the attempt count is observable, and reports
//! statistics over a batch of seeds.
//!
//! Usage: cargo run --release --example attempts -- [size] [samples] [lo] [hi]
//!
//! Defaults: size 3, 20 samples, range [1, 3]. The default die range
//! [1, 6] at size 3 needs hundreds of thousands of attempts per square:
//!   cargo run --release --example attempts -- 3 5 1 6

use magic_sampler::{
    DieRandomizer, LinePartitioner, Partitioner, Randomizer, Square, SumValidator, Validator,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::env;
use std::time::Instant;

fn main() {
    let args: Vec<String> = env::args().collect();

    let size: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);
    let samples: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(20);
    let lo: u32 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(1);
    let hi: u32 = args.get(4).and_then(|s| s.parse().ok()).unwrap_or(3);

    println!("=== Rejection sampling attempt counts ===");
    println!("size = {}, range = [{}, {}], samples = {}", size, lo, hi, samples);
    println!();

    let partitioner = LinePartitioner;
    let validator = SumValidator;

    let mut total: u64 = 0;
    let mut worst: u64 = 0;
    let start = Instant::now();

    for seed in 0..samples {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        let mut randomizer = DieRandomizer::with_range(rng, lo, hi);

        let mut attempts: u64 = 0;
        loop {
            attempts += 1;
            let rows: Vec<Vec<u32>> = (0..size).map(|_| randomizer.generate(size)).collect();
            let candidate = Square::from_rows(rows);
            if validator.verify(&partitioner.split(&candidate)) {
                break;
            }
        }

        total += attempts;
        worst = worst.max(attempts);
        println!("seed {:>3}: {} attempts", seed, attempts);
    }

    println!();
    println!("mean attempts: {:.1}", total as f64 / samples as f64);
    println!("worst: {}", worst);
    println!("elapsed: {:.2?}", start.elapsed());
}
