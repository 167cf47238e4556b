//! A cribbage scoring and discard engine with optional `no_std` support.
//!
//! The core is a set of pure functions: [`evaluate`] scores a hand (with an
//! optional starter) into a [`ScoreBreakdown`], and [`choose_discard`] searches
//! all fifteen ways of laying away two cards from a six-card hand. A [`Game`]
//! type drives whole rounds on top of them.
//!
//! # Example
//!
//! ```
//! use cribbage::{choose_discard, evaluate, parse_cards};
//!
//! let dealt = parse_cards("5H 5C JS 6D 4C KH").unwrap();
//! let choice = choose_discard(&dealt).unwrap();
//! let starter = "5S".parse().ok();
//! let score = evaluate(&choice.kept, starter);
//! assert!(score.total() >= choice.score.total());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod discard;
pub mod error;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod score;

// Re-export main types
pub use card::{ACE, Card, DECK_SIZE, JACK, KING, QUEEN, Suit, parse_cards, standard_deck};
pub use discard::{
    DEALT_HAND_SIZE, Discard, KEPT_HAND_SIZE, choose_discard, choose_discard_with,
    discard_candidates, discard_candidates_with,
};
pub use error::{CutError, DealError, DiscardError, ParseCardError, RoundError, ShowError};
pub use evaluator::{
    evaluate, evaluate_crib, evaluate_with, fifteens, has_nobs, is_flush, pairs, runs,
};
pub use game::{Game, GameState, Player};
pub use hand::Hand;
pub use options::{FlushRule, GameOptions, ScoringRules};
pub use result::{PlayerShow, RoundResult};
pub use score::{Category, ScoreBreakdown};
