// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Compact card encoding and display tokens.
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::{Card, Suit};

/// Figure display characters indexed by figure.
const FIGURE_CODES: [char; 13] = [
    '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
];

/// Suit display characters indexed by suit.
const SUIT_CODES: [char; 4] = ['S', 'H', 'D', 'C'];

/// A card encoded as a figure and suit index pair.
///
/// The figure maps the rank to `0` (deuce) through `12` (ace), the suit
/// maps the four play suits to `0..=3` in spades, hearts, diamonds, clubs
/// order. Jokers have no encoding and fail at this boundary.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncodedCard {
    figure: u8,
    suit: u8,
}

impl EncodedCard {
    /// Encodes a card, failing for a joker suit.
    pub fn encode(card: Card) -> Result<EncodedCard> {
        let suit = match card.suit() {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
            suit => bail!("no encoding for suit {suit}"),
        };

        Ok(EncodedCard {
            figure: card.rank() as u8,
            suit,
        })
    }

    /// The figure index, `0` for a deuce up to `12` for an ace.
    pub fn figure(&self) -> u8 {
        self.figure
    }

    /// The suit index `0..=3`.
    pub fn suit(&self) -> u8 {
        self.suit
    }

    /// The two character display token, suit letter then figure, e.g. `SA`.
    pub fn code(&self) -> String {
        format!(
            "{}{}",
            SUIT_CODES[self.suit as usize], FIGURE_CODES[self.figure as usize]
        )
    }
}

impl fmt::Display for EncodedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl fmt::Debug for EncodedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedCard({})", self.code())
    }
}

/// Encodes a sequence of cards preserving their order.
pub fn encode_all(cards: &[Card]) -> Result<Vec<EncodedCard>> {
    cards.iter().copied().map(EncodedCard::encode).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::Rank;

    #[test]
    fn encode_play_cards() {
        let c = EncodedCard::encode(Card::new(Rank::Deuce, Suit::Spades)).unwrap();
        assert_eq!((c.figure(), c.suit()), (0, 0));
        assert_eq!(c.code(), "S2");

        let c = EncodedCard::encode(Card::new(Rank::Ten, Suit::Hearts)).unwrap();
        assert_eq!((c.figure(), c.suit()), (8, 1));
        assert_eq!(c.code(), "HT");

        let c = EncodedCard::encode(Card::new(Rank::King, Suit::Diamonds)).unwrap();
        assert_eq!((c.figure(), c.suit()), (11, 2));
        assert_eq!(c.code(), "DK");

        let c = EncodedCard::encode(Card::new(Rank::Ace, Suit::Clubs)).unwrap();
        assert_eq!((c.figure(), c.suit()), (12, 3));
        assert_eq!(c.code(), "CA");
    }

    #[test]
    fn encode_rejects_jokers() {
        assert!(EncodedCard::encode(Card::new(Rank::Ace, Suit::BlackJoker)).is_err());
        assert!(EncodedCard::encode(Card::new(Rank::Ace, Suit::RedJoker)).is_err());
    }

    #[test]
    fn encode_all_preserves_order() {
        let cards = [
            Card::new(Rank::Five, Suit::Hearts),
            Card::new(Rank::Deuce, Suit::Clubs),
            Card::new(Rank::Ace, Suit::Spades),
        ];

        let encoded = encode_all(&cards).unwrap();
        let codes = encoded.iter().map(|c| c.code()).collect::<Vec<_>>();
        assert_eq!(codes, ["H5", "C2", "SA"]);
    }
}
