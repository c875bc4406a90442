// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Deals a board and three players, renders the cards, and shows each
// player's best hand.
//
// ```bash
// $ cargo r --example showdown
// ```
use anyhow::Result;

use showdown_cards::render;
use showdown_eval::*;

fn main() -> Result<()> {
    let mut deck = Deck::new_and_shuffled(&mut rand::rng());

    let players = (0..3)
        .map(|_| [deck.deal(), deck.deal()])
        .collect::<Vec<_>>();
    let board = (0..5).map(|_| deck.deal()).collect::<Vec<_>>();

    println!("Board:");
    println!("{}", render::cards(&board));

    for (player, cards) in players.iter().enumerate() {
        let mut hand = board.clone();
        hand.extend_from_slice(cards);
        hand.sort();

        let best = BestHand::eval(&hand)?;

        println!("\nPlayer {}:", player + 1);
        println!("{}", render::cards(cards));
        println!("{best}");
    }

    Ok(())
}
