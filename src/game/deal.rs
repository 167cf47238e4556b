use log::debug;

use crate::discard::{DEALT_HAND_SIZE, Discard, choose_discard_with};
use crate::error::{DealError, DiscardError};

use super::{Game, GameState};

impl Game {
    /// Deals six cards to each player, one at a time, non-dealer first.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a deal or the deck
    /// holds fewer than twelve cards.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Deal {
            return Err(DealError::InvalidState);
        }
        if self.deck.len() < 2 * DEALT_HAND_SIZE {
            return Err(DealError::NotEnoughCards);
        }

        self.round += 1;
        let order = [self.pone(), self.dealer];
        for _ in 0..DEALT_HAND_SIZE {
            for player in order {
                if let Some(card) = self.deck.pop() {
                    self.hands[player.index()].add_card(card);
                }
            }
        }

        debug!(
            "round {}: {:?} deals, {:?} holds {}, {:?} holds {}",
            self.round,
            self.dealer,
            order[0],
            self.hands[order[0].index()],
            order[1],
            self.hands[order[1].index()]
        );
        self.state = GameState::Discard;
        Ok(())
    }

    /// Lays away two cards from each hand to the crib.
    ///
    /// Each player keeps the four cards that score best on their own, as
    /// chosen by [`choose_discard_with`] under the game's scoring rules.
    /// Returns the non-dealer's discard first.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the discard state.
    pub fn discard(&mut self) -> Result<[Discard; 2], DiscardError> {
        if self.state != GameState::Discard {
            return Err(DiscardError::InvalidState);
        }

        let rules = self.options.scoring;
        let pone = self.pone();
        let choices = [
            choose_discard_with(self.hands[pone.index()].cards(), &rules)?,
            choose_discard_with(self.hands[self.dealer.index()].cards(), &rules)?,
        ];

        for (player, choice) in [pone, self.dealer].into_iter().zip(&choices) {
            let hand = &mut self.hands[player.index()];
            for card in choice.discard {
                let removed = hand.remove(card);
                debug_assert!(removed, "discarded {card} is not in the hand");
            }
            self.crib.extend(choice.discard);
        }

        self.state = GameState::Cut;
        Ok(choices)
    }
}
