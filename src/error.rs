//! Error types for scoring and game operations.

use thiserror::Error;

/// Errors that can occur when parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input was empty.
    #[error("empty card text")]
    Empty,
    /// The rank part is not one of `A 2..10 T J Q K`.
    #[error("invalid card rank")]
    InvalidRank,
    /// The suit part is not one of `H D C S` or a suit symbol.
    #[error("invalid card suit")]
    InvalidSuit,
}

/// Errors that can occur while discarding to the crib.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscardError {
    /// The hand does not hold the number of cards the discard needs.
    #[error("invalid hand size: expected {expected} cards, got {actual}")]
    InvalidHandSize {
        /// Required number of cards.
        expected: usize,
        /// Number of cards supplied.
        actual: usize,
    },
    /// Invalid game state for discarding.
    #[error("invalid game state for discarding")]
    InvalidState,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur when cutting for the starter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CutError {
    /// Invalid game state for cutting.
    #[error("invalid game state for cutting")]
    InvalidState,
    /// Not enough cards left to cut.
    #[error("not enough cards left to cut")]
    NotEnoughCards,
}

/// Errors that can occur during the show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowError {
    /// Invalid game state for the show.
    #[error("invalid game state for the show")]
    InvalidState,
}

/// Errors that can occur while playing a whole round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// Discarding failed.
    #[error(transparent)]
    Discard(#[from] DiscardError),
    /// Cutting failed.
    #[error(transparent)]
    Cut(#[from] CutError),
    /// The show failed.
    #[error(transparent)]
    Show(#[from] ShowError),
}
