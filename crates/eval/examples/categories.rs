// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Samples random seven cards hands and tallies the hand categories.
//
// ```bash
// $ cargo r --release --example categories -- --samples 1000000
// ```
use clap::Parser;
use rand::prelude::*;
use std::time::Instant;

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The number of hands to sample.
    #[clap(long, short, default_value_t = 1_000_000)]
    samples: usize,
}

fn main() {
    let cli = Cli::parse();

    let deck = Deck::default();
    let mut rng = SmallRng::from_os_rng();
    let mut counts = [0usize; 9];

    let now = Instant::now();
    deck.sample(cli.samples, 7, &mut rng, |cards| {
        // The sample comes out in deck order, the evaluator wants the
        // hand sorted ascending by rank.
        let mut hand = cards.to_vec();
        hand.sort();

        let best = BestHand::eval(&hand).expect("seven play cards");
        counts[best.rank() as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    println!("Sampled {} hands in {elapsed:.3}s", cli.samples);
    println!("Hands/sec: {:.0}\n", cli.samples as f64 / elapsed);

    println!("{:<16} {:>9} {:>9}", "Category", "Count", "Freq");
    for rank in HandRank::ranks() {
        let count = counts[rank as usize];
        let freq = count as f64 / cli.samples as f64;
        println!("{:<16} {count:>9} {freq:>9.6}", rank.label());
    }
}
