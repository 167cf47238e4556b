//! Choosing which two cards to lay away to the crib.

use alloc::vec::Vec;

use itertools::Itertools;
use log::{debug, trace};

use crate::card::Card;
use crate::error::DiscardError;
use crate::evaluator::evaluate_with;
use crate::options::ScoringRules;
use crate::score::ScoreBreakdown;

/// Number of cards a hand holds before discarding.
pub const DEALT_HAND_SIZE: usize = 6;

/// Number of cards kept after discarding.
pub const KEPT_HAND_SIZE: usize = 4;

/// One way of splitting a dealt hand into a discard and a kept hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discard {
    /// The two cards laid away to the crib.
    pub discard: [Card; 2],
    /// The four cards kept, in their original order.
    pub kept: [Card; 4],
    /// Score of the kept cards without a starter.
    pub score: ScoreBreakdown,
}

/// Returns all 15 discards of a six-card hand under the default rules.
///
/// # Errors
///
/// Returns [`DiscardError::InvalidHandSize`] unless the hand has exactly six
/// cards.
pub fn discard_candidates(hand: &[Card]) -> Result<Vec<Discard>, DiscardError> {
    discard_candidates_with(hand, &ScoringRules::default())
}

/// Returns all 15 discards of a six-card hand, scored under `rules`.
///
/// Candidates come in lexicographic order of the discarded positions:
/// `(0, 1), (0, 2), ..., (4, 5)`.
///
/// # Errors
///
/// Returns [`DiscardError::InvalidHandSize`] unless the hand has exactly six
/// cards.
pub fn discard_candidates_with(
    hand: &[Card],
    rules: &ScoringRules,
) -> Result<Vec<Discard>, DiscardError> {
    if hand.len() != DEALT_HAND_SIZE {
        return Err(DiscardError::InvalidHandSize {
            expected: DEALT_HAND_SIZE,
            actual: hand.len(),
        });
    }

    let mut candidates = Vec::with_capacity(15);
    for (i, j) in (0..DEALT_HAND_SIZE).tuple_combinations() {
        let mut kept = [hand[0]; KEPT_HAND_SIZE];
        let rest = hand
            .iter()
            .enumerate()
            .filter(|&(k, _)| k != i && k != j)
            .map(|(_, &card)| card);
        for (slot, card) in kept.iter_mut().zip(rest) {
            *slot = card;
        }

        // The starter is unknown at discard time.
        let score = evaluate_with(&kept, None, rules);
        candidates.push(Discard {
            discard: [hand[i], hand[j]],
            kept,
            score,
        });
    }
    Ok(candidates)
}

/// Chooses the discard that leaves the highest scoring hand, default rules.
///
/// ```
/// use cribbage::{choose_discard, parse_cards};
///
/// let hand = parse_cards("5H 5C 5D 5S KH 2C").unwrap();
/// let choice = choose_discard(&hand).unwrap();
/// assert_eq!(choice.score.total(), 20);
/// ```
///
/// # Errors
///
/// Returns [`DiscardError::InvalidHandSize`] unless the hand has exactly six
/// cards.
pub fn choose_discard(hand: &[Card]) -> Result<Discard, DiscardError> {
    choose_discard_with(hand, &ScoringRules::default())
}

/// Chooses the discard that leaves the highest scoring hand under `rules`.
///
/// Ties go to the first candidate in [`discard_candidates_with`] order, so
/// the choice depends only on the hand and its ordering.
///
/// # Errors
///
/// Returns [`DiscardError::InvalidHandSize`] unless the hand has exactly six
/// cards.
pub fn choose_discard_with(hand: &[Card], rules: &ScoringRules) -> Result<Discard, DiscardError> {
    let mut best: Option<Discard> = None;

    for candidate in discard_candidates_with(hand, rules)? {
        trace!(
            "discard {} {} keeps {}",
            candidate.discard[0],
            candidate.discard[1],
            candidate.score
        );
        if best.is_none_or(|best| candidate.score.total() > best.score.total()) {
            best = Some(candidate);
        }
    }

    let best = best.ok_or(DiscardError::InvalidHandSize {
        expected: DEALT_HAND_SIZE,
        actual: hand.len(),
    })?;
    debug!(
        "chose discard {} {} for {} points",
        best.discard[0],
        best.discard[1],
        best.score.total()
    );
    Ok(best)
}
