use alloc::vec::Vec;
use log::debug;
use rand::Rng;

use crate::card::Card;
use crate::error::{CutError, ShowError};
use crate::result::{PlayerShow, RoundResult};
use crate::score::ScoreBreakdown;

use super::{Game, GameState, Player};

/// Cards that must stay above and below the cut.
const CUT_MARGIN: usize = 4;

impl Game {
    /// Cuts the deck and turns up the starter.
    ///
    /// A card between the fifth from the top and the fifth from the bottom is
    /// moved to the top of the deck and becomes the starter. It stays in the
    /// deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for the cut or fewer than
    /// nine cards remain.
    pub fn cut(&mut self) -> Result<Card, CutError> {
        if self.state != GameState::Cut {
            return Err(CutError::InvalidState);
        }

        let len = self.deck.len();
        if len < 2 * CUT_MARGIN + 1 {
            return Err(CutError::NotEnoughCards);
        }

        let depth = self.rng.random_range(CUT_MARGIN..len - CUT_MARGIN);
        let starter = self.deck.remove(len - 1 - depth);
        self.deck.push(starter);

        debug!("starter is {starter}");
        self.starter = Some(starter);
        self.state = GameState::Show;
        Ok(starter)
    }

    /// Counts the non-dealer's hand, the dealer's hand and the crib, in that
    /// order, and adds the points to the game score.
    ///
    /// The game ends as soon as a count takes a player to the winning score;
    /// later counts are still reported but not credited.
    ///
    /// # Errors
    ///
    /// Returns an error if the starter has not been cut.
    pub fn show(&mut self) -> Result<RoundResult, ShowError> {
        if self.state != GameState::Show {
            return Err(ShowError::InvalidState);
        }
        let Some(starter) = self.starter else {
            return Err(ShowError::InvalidState);
        };

        let rules = self.options.scoring;
        let dealer = self.dealer;
        let pone = self.pone();
        let pone_score = self.hands[pone.index()].score(Some(starter), &rules);
        let dealer_score = self.hands[dealer.index()].score(Some(starter), &rules);
        let crib_score = self.crib.score_as_crib(Some(starter), &rules);

        self.state = GameState::RoundOver;
        let pone_show = self.count(pone, self.hands[pone.index()].cards().to_vec(), pone_score);
        let dealer_show = self.count(
            dealer,
            self.hands[dealer.index()].cards().to_vec(),
            dealer_score,
        );
        let crib_show = self.count(dealer, self.crib.cards().to_vec(), crib_score);

        debug!(
            "show: {pone:?} {}, {dealer:?} {} + crib {}",
            pone_score, dealer_score, crib_score
        );

        Ok(RoundResult {
            round: self.round,
            dealer,
            starter,
            pone: pone_show,
            dealer_hand: dealer_show,
            crib: crib_show,
            scores: self.scores,
            winner: self.winner(),
        })
    }

    fn count(&mut self, player: Player, cards: Vec<Card>, score: ScoreBreakdown) -> PlayerShow {
        let credited = self.credit(player, score.total());
        PlayerShow {
            player,
            cards,
            score,
            credited,
        }
    }
}
