//! Round result types for the show.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::Player;
use crate::score::ScoreBreakdown;

/// One counted hand of the show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerShow {
    /// The player the points belong to.
    pub player: Player,
    /// The counted cards, starter excluded.
    pub cards: Vec<Card>,
    /// Points scored, by category.
    pub score: ScoreBreakdown,
    /// Whether the points were added to the player's total. Counts made after
    /// the game was already won are not credited.
    pub credited: bool,
}

/// Result of the show at the end of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u32,
    /// The dealer of the round.
    pub dealer: Player,
    /// The starter card.
    pub starter: Card,
    /// The non-dealer's hand, counted first.
    pub pone: PlayerShow,
    /// The dealer's hand.
    pub dealer_hand: PlayerShow,
    /// The crib, counted for the dealer.
    pub crib: PlayerShow,
    /// Game scores after the show, indexed by [`Player::index`].
    pub scores: [u16; 2],
    /// The winner, if the show ended the game.
    pub winner: Option<Player>,
}
