// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Evaluates a seven cards hand (e.g. two hole cards plus the board) and
//! returns its category together with the five cards that make the best
//! hand and their display tokens:
//!
//! ```
//! # use showdown_eval::*;
//! let hand = [
//!     Card::new(Rank::Deuce, Suit::Hearts),
//!     Card::new(Rank::Trey, Suit::Diamonds),
//!     Card::new(Rank::Four, Suit::Clubs),
//!     Card::new(Rank::Seven, Suit::Spades),
//!     Card::new(Rank::Seven, Suit::Hearts),
//!     Card::new(Rank::Seven, Suit::Diamonds),
//!     Card::new(Rank::Seven, Suit::Clubs),
//! ];
//!
//! let best = BestHand::eval(&hand).unwrap();
//! assert_eq!(best.rank(), HandRank::FourOfAKind);
//! assert_eq!(best.five_codes(), ["C4", "S7", "H7", "D7", "C7"]);
//! ```
//!
//! The seven cards must be sorted ascending by rank, see [BestHand::eval].
//!
//! Evaluation is a pure function over the input cards: no shared state, no
//! I/O, so independent hands can be evaluated from any number of threads
//! without coordination.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod encode;
pub mod eval;

pub use encode::EncodedCard;
pub use eval::{BestHand, HandRank, RANK_PROBS};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit};
