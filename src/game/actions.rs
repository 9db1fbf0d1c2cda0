use crate::card::Card;
use crate::error::ActionError;
use crate::result::{Outcome, RoundResult};

use super::{DealerStep, Game, Phase, Table};

impl Table {
    const fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if !matches!(self.round.phase, Phase::PlayerTurn) {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw();
        self.round.player.add_card(card);
        log::debug!("player hits {card}, total {}", self.round.player.value());

        // A bust ends the round on the spot; the dealer never plays.
        if self.round.player.is_bust() {
            self.round.dealer.reveal_hole();
            self.finish_round(Outcome::Lose);
        }

        Ok(card)
    }

    pub(super) fn begin_stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.round.dealer.reveal_hole();
        self.round.phase = Phase::DealerTurn;
        log::debug!(
            "player stands on {}, dealer reveals {}",
            self.round.player.value(),
            self.round.dealer.value()
        );
        Ok(())
    }
}

impl Game {
    /// Player action: Hit (draw a card).
    ///
    /// If the new card takes the player over 21 the round is settled at once
    /// as a loss and the dealer's hole card is turned over.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hit(&self) -> Result<Card, ActionError> {
        self.table.lock().hit()
    }

    /// Player action: Stand, then play out the dealer's hand and settle.
    ///
    /// Equivalent to [`Game::begin_stand`] followed by driving
    /// [`Game::dealer_step`] to completion, but done under a single lock.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&self) -> Result<RoundResult, ActionError> {
        let mut table = self.table.lock();
        table.begin_stand()?;
        loop {
            if let DealerStep::Settled(result) = table.dealer_step()? {
                return Ok(result);
            }
        }
    }

    /// Player action: Stand, without playing the dealer's hand yet.
    ///
    /// Reveals the hole card and hands the turn to the dealer. Drive the rest
    /// of the round with [`Game::dealer_step`] or [`Game::dealer_steps`]. Until
    /// the dealer turn is settled, every other command is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn begin_stand(&self) -> Result<(), ActionError> {
        self.table.lock().begin_stand()
    }
}
