// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(ah > kd);
//! ```
//!
//! and a [Deck] type for shuffling, sampling, and iterating cards in the deck.
//!
//! To deal cards from a shuffled deck:
//!
//! ```
//! # use showdown_cards::{Card, Deck, Rank, Suit};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let card = deck.deal();
//! assert_eq!(deck.count(), 51);
//! ```
//!
//! to draw cards without replacement, splitting the deck into the chosen
//! cards and the cards left:
//!
//! ```
//! # use showdown_cards::{Card, Deck, Rank, Suit};
//! let deck = Deck::default();
//! let (chosen, left) = deck.draw(7, &mut rand::rng()).unwrap();
//! assert_eq!(chosen.len(), 7);
//! assert_eq!(left.len(), 45);
//! ```
//!
//! or to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use showdown_cards::{Card, Deck, Rank, Suit};
//! // Iterate through all 5 cards hands (2.6M hands).
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! The [render] module draws cards as text frames for terminal output.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};

pub mod render;
