// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Text rendering for cards.
//!
//! Draws cards as 9-line unicode frames joined side by side for terminal
//! output:
//!
//! ```text
//! ┌─────────┐   ┌─────────┐
//! │A        │   │10       │
//! │         │   │         │
//! │         │   │         │
//! │    ♠    │   │    ♥    │
//! │         │   │         │
//! │         │   │         │
//! │        A│   │       10│
//! └─────────┘   └─────────┘
//! ```
use crate::{Card, Rank, Suit};

/// Number of text lines in a card frame.
const FRAME_LINES: usize = 9;

/// Renders cards as frames joined side by side.
///
/// Jokers have no face art and render as the card back.
pub fn cards(cards: &[Card]) -> String {
    frames(cards.iter().map(|c| Some(*c)))
}

/// Renders `count` face-down cards.
pub fn hidden(count: usize) -> String {
    frames(std::iter::repeat_n(None, count))
}

fn frames<I>(cards: I) -> String
where
    I: Iterator<Item = Option<Card>>,
{
    let mut lines = vec![Vec::new(); FRAME_LINES];

    for card in cards {
        match card.and_then(face) {
            Some((rank, suit)) => {
                let pad = if rank.len() == 2 { "" } else { " " };
                lines[0].push("┌─────────┐".to_string());
                lines[1].push(format!("│{rank}{pad}       │"));
                lines[2].push("│         │".to_string());
                lines[3].push("│         │".to_string());
                lines[4].push(format!("│    {suit}    │"));
                lines[5].push("│         │".to_string());
                lines[6].push("│         │".to_string());
                lines[7].push(format!("│       {pad}{rank}│"));
                lines[8].push("└─────────┘".to_string());
            }
            None => {
                lines[0].push("┌─────────┐".to_string());
                for line in lines.iter_mut().take(FRAME_LINES - 1).skip(1) {
                    line.push("│░░░░░░░░░│".to_string());
                }
                lines[8].push("└─────────┘".to_string());
            }
        }
    }

    lines
        .iter()
        .map(|line| line.join("   "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The rank label and suit symbol of a card, `None` for jokers.
fn face(card: Card) -> Option<(String, char)> {
    let suit = match card.suit() {
        Suit::Spades => '♠',
        Suit::Hearts => '♥',
        Suit::Diamonds => '♦',
        Suit::Clubs => '♣',
        Suit::BlackJoker | Suit::RedJoker => return None,
    };

    let rank = match card.rank() {
        Rank::Ten => "10".to_string(),
        rank => rank.to_string(),
    };

    Some((rank, suit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_single_card() {
        let frame = cards(&[Card::new(Rank::Ace, Suit::Spades)]);
        let lines = frame.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), FRAME_LINES);
        assert_eq!(lines[0], "┌─────────┐");
        assert_eq!(lines[1], "│A        │");
        assert_eq!(lines[4], "│    ♠    │");
        assert_eq!(lines[7], "│        A│");
        assert_eq!(lines[8], "└─────────┘");
    }

    #[test]
    fn render_ten_uses_two_chars() {
        let frame = cards(&[Card::new(Rank::Ten, Suit::Hearts)]);
        let lines = frame.lines().collect::<Vec<_>>();

        assert_eq!(lines[1], "│10       │");
        assert_eq!(lines[4], "│    ♥    │");
        assert_eq!(lines[7], "│       10│");
    }

    #[test]
    fn render_row_of_cards() {
        let frame = cards(&[
            Card::new(Rank::Queen, Suit::Diamonds),
            Card::new(Rank::Deuce, Suit::Clubs),
        ]);
        let lines = frame.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), FRAME_LINES);
        assert_eq!(lines[1], "│Q        │   │2        │");
        assert_eq!(lines[4], "│    ♦    │   │    ♣    │");
    }

    #[test]
    fn render_hidden_and_jokers() {
        let back = hidden(1);
        let lines = back.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), FRAME_LINES);
        assert_eq!(lines[1], "│░░░░░░░░░│");
        assert_eq!(lines[7], "│░░░░░░░░░│");

        // A joker has no face art.
        let joker = cards(&[Card::new(Rank::Ace, Suit::RedJoker)]);
        assert_eq!(joker, back);
    }
}
