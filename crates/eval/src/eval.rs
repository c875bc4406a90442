// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Seven cards best-hand evaluation.
//!
//! The evaluator partitions the encoded cards into per figure and per suit
//! groups, detects flushes from the suit groups and straights by scanning
//! 14 virtual figure slots (slot 0 duplicates the aces so a wheel counts),
//! refines a straight plus a flush into a straight flush, and then picks
//! the category with an ordered first-match-wins decision before
//! extracting the five cards that make the hand.
//!
//! The whole pass is a pure function of the input cards and allocates only
//! small per-call buffers, hands can be evaluated from any number of
//! threads without coordination.
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::encode::{self, EncodedCard};
use showdown_cards::Card;

/// Number of cards in an evaluated hand.
pub const HAND_SIZE: usize = 7;

/// Empirical probability mass of drawing each hand category, indexed by
/// [HandRank]. Exposed as static data for equity estimates; the evaluator
/// neither computes nor validates these numbers.
pub const RANK_PROBS: [f64; 9] = [
    0.501177, // high card
    0.422569, // one pair
    0.047539, // two pair
    0.021128, // three of a kind
    0.003925, // straight
    0.001965, // flush
    0.001441, // full house
    0.000240, // four of a kind
    0.000015, // straight flush
];

/// A hand category, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No pair, the five highest cards.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Five consecutive figures, aces low or high.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
}

impl HandRank {
    /// Returns all categories, weakest first.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The category label.
    pub fn label(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        }
    }

    /// The probability mass of drawing this category.
    pub fn probability(&self) -> f64 {
        RANK_PROBS[*self as usize]
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The result of evaluating a seven cards hand: the category, the five
/// cards that make the best hand with their display tokens, and the seven
/// input cards with theirs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestHand {
    rank: HandRank,
    five: Vec<EncodedCard>,
    five_codes: Vec<String>,
    seven: Vec<EncodedCard>,
    seven_codes: Vec<String>,
}

impl BestHand {
    /// Evaluates a seven cards hand.
    ///
    /// The hand must hold exactly seven play cards sorted ascending by
    /// rank. Kicker selection takes the last cards of the sequence left
    /// after removing the matched groups, so an unsorted hand silently
    /// yields wrong kickers rather than an error; a wrong card count or a
    /// joker fails fast.
    pub fn eval(hand: &[Card]) -> Result<BestHand> {
        if hand.len() != HAND_SIZE {
            bail!("expected {HAND_SIZE} cards, got {}", hand.len());
        }

        let cards = encode::encode_all(hand)?;
        let buckets = bucketize(&cards);

        let flush = find_flush(&buckets);
        let flush_suit = flush.as_ref().map(|(suit, _)| *suit);
        let run = scan_run(&buckets, flush_suit);
        let is_straight = run.len() > 4;

        let straight_flush = match flush_suit {
            Some(suit) if is_straight => refine_straight_flush(&run, suit),
            _ => None,
        };

        let pairs = buckets.figures.iter().filter(|g| g.len() == 2).count();
        let trips = buckets.figures.iter().filter(|g| g.len() == 3).count();

        let (rank, five) = if let Some(five) = straight_flush {
            (HandRank::StraightFlush, five)
        } else if let Some(quad) = buckets.figures.iter().find(|g| g.len() == 4) {
            let left = without(&cards, quad);
            let mut five = last_n(&left, 1);
            five.extend_from_slice(quad);
            (HandRank::FourOfAKind, five)
        } else if (trips > 0 && pairs > 0) || trips > 1 {
            // Pairs then triples in ascending figure order, the strongest
            // grouping ends up at the top end.
            let grouped = buckets
                .figures
                .iter()
                .filter(|g| g.len() == 2)
                .chain(buckets.figures.iter().filter(|g| g.len() == 3))
                .flatten()
                .copied()
                .collect::<Vec<_>>();
            (HandRank::FullHouse, last_n(&grouped, 5))
        } else if let Some((_, members)) = flush {
            (HandRank::Flush, last_n(&members, 5))
        } else if is_straight {
            let cards = run.iter().map(|(_, c)| *c).collect::<Vec<_>>();
            (HandRank::Straight, last_n(&cards, 5))
        } else if let Some(three) = buckets.figures.iter().find(|g| g.len() == 3) {
            let left = without(&cards, three);
            let mut five = last_n(&left, 2);
            five.extend_from_slice(three);
            (HandRank::ThreeOfAKind, five)
        } else if pairs > 1 {
            // With three pairs only the top two count, a card of the
            // lowest pair can come back as the kicker.
            let grouped = buckets
                .figures
                .iter()
                .filter(|g| g.len() == 2)
                .flatten()
                .copied()
                .collect::<Vec<_>>();
            let top = last_n(&grouped, 4);
            let left = without(&cards, &top);
            let mut five = last_n(&left, 1);
            five.extend_from_slice(&top);
            (HandRank::TwoPair, five)
        } else if let Some(pair) = buckets.figures.iter().find(|g| g.len() == 2) {
            let left = without(&cards, pair);
            let mut five = last_n(&left, 3);
            five.extend_from_slice(pair);
            (HandRank::OnePair, five)
        } else {
            (HandRank::HighCard, last_n(&cards, 5))
        };

        let five_codes = five.iter().map(|c| c.code()).collect();
        let seven_codes = cards.iter().map(|c| c.code()).collect();

        Ok(BestHand {
            rank,
            five,
            five_codes,
            seven: cards,
            seven_codes,
        })
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The five cards that make the best hand.
    pub fn five(&self) -> &[EncodedCard] {
        &self.five
    }

    /// Display tokens for the best five cards.
    pub fn five_codes(&self) -> &[String] {
        &self.five_codes
    }

    /// The seven input cards in input order.
    pub fn seven(&self) -> &[EncodedCard] {
        &self.seven
    }

    /// Display tokens for the seven input cards.
    pub fn seven_codes(&self) -> &[String] {
        &self.seven_codes
    }
}

impl fmt::Display for BestHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.rank, self.five_codes.join(" "))
    }
}

/// Per figure and per suit groups, first seen order preserved.
struct Buckets {
    figures: [Vec<EncodedCard>; 13],
    suits: [Vec<EncodedCard>; 4],
}

fn bucketize(cards: &[EncodedCard]) -> Buckets {
    let mut buckets = Buckets {
        figures: std::array::from_fn(|_| Vec::new()),
        suits: std::array::from_fn(|_| Vec::new()),
    };

    for card in cards {
        buckets.figures[card.figure() as usize].push(*card);
        buckets.suits[card.suit() as usize].push(*card);
    }

    buckets
}

/// The flush group: the single suit holding five or more cards, if any.
fn find_flush(buckets: &Buckets) -> Option<(u8, Vec<EncodedCard>)> {
    buckets
        .suits
        .iter()
        .enumerate()
        .find(|(_, group)| group.len() > 4)
        .map(|(suit, group)| (suit as u8, group.clone()))
}

/// Scans the 14 virtual figure slots and returns the accumulated run of
/// consecutive-slot representatives, tagged with their slot.
///
/// Slot 0 duplicates the aces so a wheel can start the scan; slots 1-13
/// are the figures in ascending order. On a gap a run of five or more is
/// kept, a shorter one restarts at the current slot (a dead low run must
/// not mask a later run that reuses the ace at the top).
fn scan_run(buckets: &Buckets, flush_suit: Option<u8>) -> Vec<(usize, EncodedCard)> {
    let mut run: Vec<(usize, EncodedCard)> = Vec::new();
    let mut pix: isize = -2;

    for slot in 0..14 {
        let group = match slot {
            0 => &buckets.figures[12],
            _ => &buckets.figures[slot - 1],
        };

        if group.is_empty() {
            continue;
        }

        // When several suits share this figure prefer the flush suit, only
        // those cards can turn the run into a straight flush.
        let card = flush_suit
            .filter(|_| group.len() > 1)
            .and_then(|suit| group.iter().find(|c| c.suit() == suit))
            .copied()
            .unwrap_or(group[0]);

        if pix + 1 == slot as isize {
            run.push((slot, card));
        } else if run.len() > 4 {
            // A qualifying straight is already in hand.
            break;
        } else {
            run = vec![(slot, card)];
        }

        pix = slot as isize;
    }

    run
}

/// Straight flush refinement.
///
/// Filters the straight candidate to the flush suit and checks that the
/// survivors are still slot-consecutive (a wheel run is whole at the low
/// end). With no gap the highest five win. A single gap is tolerated only
/// when exactly six cards survive and the gap sits next to either edge,
/// keeping the five contiguous cards away from it; any other gap pattern
/// disqualifies the straight flush.
fn refine_straight_flush(run: &[(usize, EncodedCard)], suit: u8) -> Option<Vec<EncodedCard>> {
    let filtered = run
        .iter()
        .filter(|(_, c)| c.suit() == suit)
        .copied()
        .collect::<Vec<_>>();

    if filtered.len() < 5 {
        return None;
    }

    let splits = (1..filtered.len())
        .filter(|&i| filtered[i - 1].0 + 1 != filtered[i].0)
        .collect::<Vec<_>>();

    let cards = match splits.as_slice() {
        [] => &filtered[..],
        [1] if filtered.len() == 6 => &filtered[1..6],
        [5] if filtered.len() == 6 => &filtered[0..5],
        _ => return None,
    };

    let cards = cards.iter().map(|(_, c)| *c).collect::<Vec<_>>();
    Some(last_n(&cards, 5))
}

/// The last `n` cards, the highest under the ascending precondition.
fn last_n(cards: &[EncodedCard], n: usize) -> Vec<EncodedCard> {
    cards[cards.len().saturating_sub(n)..].to_vec()
}

/// The hand with the matched cards filtered out, order preserved.
fn without(cards: &[EncodedCard], matched: &[EncodedCard]) -> Vec<EncodedCard> {
    cards
        .iter()
        .filter(|c| !matched.contains(c))
        .copied()
        .collect()
}
