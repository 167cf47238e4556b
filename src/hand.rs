//! Hand and crib containers.

use core::fmt;

use alloc::vec::Vec;

use crate::card::Card;
use crate::evaluator::{evaluate_crib, evaluate_with};
use crate::options::ScoringRules;
use crate::score::ScoreBreakdown;

/// An ordered collection of cards held by a player or laid away as the crib.
///
/// Scoring ignores the order; it is kept so discards and displays are
/// reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the first copy of `card`, returning whether it was present.
    pub fn remove(&mut self, card: Card) -> bool {
        if let Some(index) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Empties the hand, returning its cards.
    pub fn take_cards(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Scores the hand as a player's hand.
    #[must_use]
    pub fn score(&self, starter: Option<Card>, rules: &ScoringRules) -> ScoreBreakdown {
        evaluate_with(&self.cards, starter, rules)
    }

    /// Scores the hand as the crib.
    #[must_use]
    pub fn score_as_crib(&self, starter: Option<Card>, rules: &ScoringRules) -> ScoreBreakdown {
        evaluate_crib(&self.cards, starter, rules)
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
