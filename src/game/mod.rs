//! Game engine and state management.

use alloc::vec::Vec;
use log::{debug, info};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, standard_deck};
use crate::error::RoundError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::RoundResult;

mod deal;
mod show;
pub mod state;

pub use state::{GameState, Player};

/// A two-player cribbage game that deals, discards, cuts and counts rounds
/// until a player reaches the winning score.
///
/// The game owns the deck, both hands, the crib and the running score. Each
/// phase of a round is a separate call ([`deal`](Self::deal),
/// [`discard`](Self::discard), [`cut`](Self::cut), [`show`](Self::show)) that
/// checks the current [`GameState`]; [`play_round`](Self::play_round) runs
/// them in order.
///
/// ```
/// use cribbage::{Game, GameOptions};
///
/// let mut game = Game::new(GameOptions::default(), 42);
/// let result = game.play_round().unwrap();
/// assert_eq!(result.round, 1);
/// ```
pub struct Game {
    /// Cards in the deck. The last card is the top of the deck.
    pub deck: Vec<Card>,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Dealer of the current round.
    dealer: Player,
    /// Game scores, indexed by [`Player::index`].
    scores: [u16; 2],
    /// Player hands, indexed by [`Player::index`].
    hands: [Hand; 2],
    /// The crib of the current round.
    crib: Hand,
    /// The starter of the current round, once cut.
    starter: Option<Card>,
    /// Number of rounds dealt so far.
    round: u32,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// Player One deals the first round.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = standard_deck();
        deck.shuffle(&mut rng);

        Self {
            deck,
            options,
            state: GameState::Deal,
            dealer: Player::One,
            scores: [0; 2],
            hands: [Hand::new(), Hand::new()],
            crib: Hand::new(),
            starter: None,
            round: 0,
            rng,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the dealer of the current round.
    #[must_use]
    pub const fn dealer(&self) -> Player {
        self.dealer
    }

    /// Returns the non-dealer of the current round.
    #[must_use]
    pub const fn pone(&self) -> Player {
        self.dealer.other()
    }

    /// Returns the game score of a player.
    #[must_use]
    pub const fn score(&self, player: Player) -> u16 {
        self.scores[player.index()]
    }

    /// Returns both game scores, indexed by [`Player::index`].
    #[must_use]
    pub const fn scores(&self) -> [u16; 2] {
        self.scores
    }

    /// Returns a player's hand.
    #[must_use]
    pub const fn hand(&self, player: Player) -> &Hand {
        &self.hands[player.index()]
    }

    /// Returns the crib.
    #[must_use]
    pub const fn crib(&self) -> &Hand {
        &self.crib
    }

    /// Returns the starter, once cut.
    #[must_use]
    pub const fn starter(&self) -> Option<Card> {
        self.starter
    }

    /// Returns the number of rounds dealt so far.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the winner, if the game is over.
    #[must_use]
    pub const fn winner(&self) -> Option<Player> {
        match self.state {
            GameState::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Adds points to a player's score, ending the game when the winning
    /// score is reached.
    ///
    /// Returns `false` without crediting anything once the game is over.
    fn credit(&mut self, player: Player, points: u16) -> bool {
        if self.winner().is_some() {
            return false;
        }

        let score = &mut self.scores[player.index()];
        *score = score.saturating_add(points);
        if *score >= self.options.winning_score {
            info!("{player:?} wins with {} points", *score);
            self.state = GameState::GameOver { winner: player };
        }
        true
    }

    /// Returns hands and crib to the deck, reshuffles, and passes the deal.
    ///
    /// The starter never left the deck. After a won game the cards are still
    /// collected but the state stays [`GameState::GameOver`].
    pub fn clear_round(&mut self) {
        for hand in &mut self.hands {
            self.deck.extend(hand.take_cards());
        }
        self.deck.extend(self.crib.take_cards());
        self.starter = None;
        self.deck.shuffle(&mut self.rng);

        if self.winner().is_none() {
            self.dealer = self.dealer.other();
            self.state = GameState::Deal;
        }
    }

    /// Plays a full round: deal, discard, cut and show.
    ///
    /// The round is cleared afterwards unless it ended the game, so the next
    /// call deals a fresh round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a deal (including after
    /// the game is over) or the deck runs out.
    pub fn play_round(&mut self) -> Result<RoundResult, RoundError> {
        self.deal()?;
        let discards = self.discard()?;
        debug!(
            "laid away {} {} and {} {}",
            discards[0].discard[0],
            discards[0].discard[1],
            discards[1].discard[0],
            discards[1].discard[1]
        );
        self.cut()?;
        let result = self.show()?;

        if result.winner.is_none() {
            self.clear_round();
        }
        Ok(result)
    }

    /// Plays rounds until a player reaches the winning score.
    ///
    /// Returns the winner immediately if the game is already over.
    ///
    /// # Errors
    ///
    /// Returns an error if a round cannot be played.
    pub fn play(&mut self) -> Result<Player, RoundError> {
        loop {
            if let Some(winner) = self.winner() {
                return Ok(winner);
            }
            self.play_round()?;
        }
    }
}
