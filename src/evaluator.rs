//! Hand evaluation for the show.
//!
//! Every function here is pure: it reads the cards it is given and returns
//! fresh values. Fifteens, pairs and runs are scanned over the whole scoring
//! set (hand plus starter); flush and nobs look at the hand and the starter
//! separately.

use alloc::vec::Vec;

use itertools::Itertools;

use crate::card::Card;
use crate::options::{FlushRule, ScoringRules};
use crate::score::ScoreBreakdown;

/// Shortest sequence that scores as a run.
pub const MIN_RUN: usize = 3;

/// Smallest hand that can score a flush.
pub const MIN_FLUSH: usize = 4;

/// Largest scoring set (hand plus starter) the evaluator is meant for.
///
/// A show scores four cards and a starter. Six leaves room for a five-card
/// hand with a starter. The number of combinations doubles with every extra
/// card, and each category is held in a `u8`.
pub const MAX_SCORING_CARDS: usize = 6;

const FIFTEEN: u16 = 15;

fn points(count: usize, per: usize) -> u8 {
    u8::try_from(count * per).unwrap_or(u8::MAX)
}

/// Returns every combination of two or more cards whose values total 15.
///
/// Combinations are taken by position, so two cards of the same rank each
/// take part in their own fifteens.
#[must_use]
pub fn fifteens(cards: &[Card]) -> Vec<Vec<Card>> {
    (2..=cards.len())
        .flat_map(|k| cards.iter().copied().combinations(k))
        .filter(|combo| combo.iter().map(|card| u16::from(card.value())).sum::<u16>() == FIFTEEN)
        .collect()
}

/// Returns every pair of cards with equal rank.
///
/// Three of a kind yields three pairs, four of a kind six.
#[must_use]
pub fn pairs(cards: &[Card]) -> Vec<[Card; 2]> {
    cards
        .iter()
        .copied()
        .tuple_combinations()
        .filter(|(a, b)| a.rank == b.rank)
        .map(|(a, b)| [a, b])
        .collect()
}

/// Returns every run of the longest length present, each sorted by rank.
///
/// A run is a set of card positions whose ranks, once duplicates are removed,
/// still number as many as the positions and are consecutive. A repeated rank
/// therefore never extends a run; instead each copy forms its own run with
/// the other cards, and every such instance is returned (and scored)
/// separately. `3 3 4 5` holds two runs of three, not one run of four.
///
/// Only the longest length is reported: if any run of four exists, runs of
/// three are ignored. Aces are low.
#[must_use]
pub fn runs(cards: &[Card]) -> Vec<Vec<Card>> {
    for len in (MIN_RUN..=cards.len()).rev() {
        let found: Vec<Vec<Card>> = cards
            .iter()
            .copied()
            .combinations(len)
            .filter_map(|mut run| {
                run.sort_unstable();
                is_consecutive(&run).then_some(run)
            })
            .collect();

        if !found.is_empty() {
            return found;
        }
    }
    Vec::new()
}

fn is_consecutive(sorted: &[Card]) -> bool {
    sorted
        .windows(2)
        .all(|pair| pair[1].rank.checked_sub(pair[0].rank) == Some(1))
}

/// Returns whether the hand holds at least four cards, all of one suit.
///
/// The starter is not part of `hand`.
#[must_use]
pub fn is_flush(hand: &[Card]) -> bool {
    hand.len() >= MIN_FLUSH && hand.iter().all(|card| card.suit == hand[0].suit)
}

/// Returns whether the hand holds the jack of the starter's suit.
///
/// Always `false` without a starter. The starter itself never counts.
#[must_use]
pub fn has_nobs(hand: &[Card], starter: Option<Card>) -> bool {
    starter.is_some_and(|starter| {
        hand.iter()
            .any(|&card| card.is_jack() && card.suit == starter.suit && card != starter)
    })
}

fn flush_points(hand: &[Card], starter: Option<Card>, rule: FlushRule, crib: bool) -> u8 {
    if !is_flush(hand) {
        return 0;
    }
    let starter_matches = starter.is_some_and(|starter| starter.suit == hand[0].suit);

    match rule {
        FlushRule::Flat => 4,
        FlushRule::Standard if starter_matches => 5,
        FlushRule::Standard if crib => 0,
        FlushRule::Standard => 4,
    }
}

fn score(hand: &[Card], starter: Option<Card>, rules: &ScoringRules, crib: bool) -> ScoreBreakdown {
    let mut cards = Vec::with_capacity(hand.len() + 1);
    cards.extend_from_slice(hand);
    cards.extend(starter);
    debug_assert!(
        cards.len() <= MAX_SCORING_CARDS,
        "scoring set of {} cards exceeds {MAX_SCORING_CARDS}",
        cards.len()
    );

    ScoreBreakdown {
        fifteens: points(fifteens(&cards).len(), 2),
        pairs: points(pairs(&cards).len(), 2),
        runs: points(runs(&cards).iter().map(Vec::len).sum(), 1),
        flush: flush_points(hand, starter, rules.flush, crib),
        nobs: u8::from(rules.nobs && has_nobs(hand, starter)),
    }
}

/// Scores a hand with the default rules.
///
/// `hand` is normally four cards (a kept hand or the crib) and `starter` the
/// cut card. Hand and starter together may hold at most
/// [`MAX_SCORING_CARDS`]; larger sets trip a debug assertion.
///
/// ```
/// use cribbage::{evaluate, parse_cards};
///
/// let hand = parse_cards("5H 5C 5D JS").unwrap();
/// let starter = "5S".parse().ok();
/// assert_eq!(evaluate(&hand, starter).total(), 29);
/// ```
#[must_use]
pub fn evaluate(hand: &[Card], starter: Option<Card>) -> ScoreBreakdown {
    evaluate_with(hand, starter, &ScoringRules::default())
}

/// Scores a player's hand with explicit rules.
#[must_use]
pub fn evaluate_with(hand: &[Card], starter: Option<Card>, rules: &ScoringRules) -> ScoreBreakdown {
    score(hand, starter, rules, false)
}

/// Scores the crib.
///
/// Identical to [`evaluate_with`] except under [`FlushRule::Standard`],
/// where the crib only scores a flush when the starter matches too.
#[must_use]
pub fn evaluate_crib(crib: &[Card], starter: Option<Card>, rules: &ScoringRules) -> ScoreBreakdown {
    score(crib, starter, rules, true)
}
