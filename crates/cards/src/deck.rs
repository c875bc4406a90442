// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use anyhow::{Result, bail};
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Poker card.
///
/// A card pairs one of the 13 ranks with a suit. Ordering compares the
/// rank first, so sorting a hand gives the ascending-rank order the
/// evaluator expects:
///
/// ```
/// # use showdown_cards::{Card, Rank, Suit};
/// let mut hand = [
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Deuce, Suit::Hearts),
///     Card::new(Rank::King, Suit::Diamonds),
/// ];
/// hand.sort();
/// assert_eq!(hand[0].rank(), Rank::Deuce);
/// assert_eq!(hand[2].rank(), Rank::Ace);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and a suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// The suit-then-rank index token of a card, e.g. `SA`, `H5`.
    ///
    /// Display layers use this as a stable key; the rank-then-suit form is
    /// this card's `Display` output.
    pub fn index(&self) -> String {
        format!("{}{}", self.suit, self.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
///
/// The four play suits have a fixed index order (spades, hearts, diamonds,
/// clubs). The two joker values complete the card entity for games that
/// use them; a standard deck never contains them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit.
    Spades = 0,
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
    /// The black joker.
    BlackJoker,
    /// The red joker.
    RedJoker,
}

impl Suit {
    /// Returns the four play suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs].into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Spades => "S",
            Suit::Hearts => "H",
            Suit::Diamonds => "D",
            Suit::Clubs => "C",
            Suit::BlackJoker => "BJ",
            Suit::RedJoker => "RJ",
        };

        write!(f, "{suit}")
    }
}

/// A cards Deck
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Card {
        self.cards.pop().unwrap()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Draws `num` cards uniformly without replacement.
    ///
    /// Returns the chosen cards and the cards left in the deck; the deck
    /// itself is not modified. Fails when `num` is zero or exceeds the
    /// cards available.
    pub fn draw<R: Rng>(&self, num: usize, rng: &mut R) -> Result<(Vec<Card>, Vec<Card>)> {
        if num == 0 {
            bail!("cannot draw zero cards");
        }

        if num > self.cards.len() {
            bail!("cannot draw {num} cards, {} available", self.cards.len());
        }

        let mut chosen = self.cards.clone();
        chosen.shuffle(rng);
        let left = chosen.split_off(num);
        Ok((chosen, left))
    }

    /// Calls the `f` closure with `count` random k-cards hands.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn sample<R, F>(&self, count: usize, k: usize, rng: &mut R, mut f: F)
    where
        R: Rng,
        F: FnMut(&[Card]),
    {
        assert!(2 <= k && k <= 7, "2 <= k <= 7");

        let mut h = vec![Card::new(Rank::Ace, Suit::Hearts); k];
        for _ in 0..count {
            for (pos, c) in self.cards.choose_multiple(rng, k).enumerate() {
                h[pos] = *c;
            }

            f(&h);
        }
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!(2 <= k && k <= 7, "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let n = self.cards.len();
        let mut h = vec![Card::new(Rank::Ace, Suit::Hearts); 7];

        for c1 in 0..n {
            h[0] = self.cards[c1];

            for c2 in (c1 + 1)..n {
                h[1] = self.cards[c2];

                if k == 2 {
                    f(&h[0..k]);
                    continue;
                }

                for c3 in (c2 + 1)..n {
                    h[2] = self.cards[c3];

                    if k == 3 {
                        f(&h[0..k]);
                        continue;
                    }

                    for c4 in (c3 + 1)..n {
                        h[3] = self.cards[c4];

                        if k == 4 {
                            f(&h[0..k]);
                            continue;
                        }

                        for c5 in (c4 + 1)..n {
                            h[4] = self.cards[c5];

                            if k == 5 {
                                f(&h[0..k]);
                                continue;
                            }

                            for c6 in (c5 + 1)..n {
                                h[5] = self.cards[c6];

                                if k == 6 {
                                    f(&h[0..k]);
                                    continue;
                                }

                                for c7 in (c6 + 1)..n {
                                    h[6] = self.cards[c7];
                                    f(&h[0..k]);
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_uniqueness() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while !deck.is_empty() {
            let card = deck.deal();
            assert!(Suit::suits().any(|s| s == card.suit()));
            cards.insert(card);
        }

        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");
        assert_eq!(c.index(), "DK");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");
        assert_eq!(c.index(), "S5");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");
        assert_eq!(c.index(), "CJ");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");
        assert_eq!(c.index(), "HT");

        let c = Card::new(Rank::Ace, Suit::BlackJoker);
        assert_eq!(c.to_string(), "ABJ");
        assert_eq!(c.index(), "BJA");
    }

    #[test]
    fn card_ordering() {
        let mut hand = vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Deuce, Suit::Hearts),
            Card::new(Rank::Deuce, Suit::Spades),
            Card::new(Rank::King, Suit::Clubs),
        ];
        hand.sort();

        let ranks = hand.iter().map(|c| c.rank()).collect::<Vec<_>>();
        assert_eq!(ranks, [Rank::Deuce, Rank::Deuce, Rank::King, Rank::Ace]);
        assert_eq!(hand[0].suit(), Suit::Spades);
        assert_eq!(hand[1].suit(), Suit::Hearts);
    }

    #[test]
    fn deck_draw() {
        let deck = Deck::default();
        let mut rng = rand::rng();

        let (chosen, left) = deck.draw(7, &mut rng).unwrap();
        assert_eq!(chosen.len(), 7);
        assert_eq!(left.len(), Deck::SIZE - 7);

        // The two halves partition the deck.
        let mut cards = HashSet::default();
        cards.extend(chosen.iter().copied());
        cards.extend(left.iter().copied());
        assert_eq!(cards.len(), Deck::SIZE);

        // The deck itself is untouched.
        assert_eq!(deck.count(), Deck::SIZE);

        let (chosen, left) = deck.draw(Deck::SIZE, &mut rng).unwrap();
        assert_eq!(chosen.len(), Deck::SIZE);
        assert!(left.is_empty());
    }

    #[test]
    fn deck_draw_invalid_args() {
        let deck = Deck::default();
        let mut rng = rand::rng();

        assert!(deck.draw(0, &mut rng).is_err());
        assert!(deck.draw(Deck::SIZE + 1, &mut rng).is_err());
    }

    #[test]
    fn deck_sample() {
        let deck = Deck::default();
        let mut rng = rand::rng();

        let mut counter = 0;
        deck.sample(10, 7, &mut rng, |hand| {
            assert_eq!(hand.len(), 7);

            let cards = hand.iter().collect::<HashSet<_>>();
            assert_eq!(cards.len(), 7);

            counter += 1;
        });

        assert_eq!(counter, 10);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));

        let mut count = 0;
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            count += 1;
        });
        assert_eq!(count, 1_225);
    }
}
