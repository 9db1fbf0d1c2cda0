//! Dealer drawing rule, stepped dealer turns and settlement.

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::BLACKJACK;
use crate::result::{Outcome, RoundResult};

use super::{Game, Phase, Table};

/// Total at which the dealer stops drawing, soft or hard.
pub const DEALER_STANDS_ON: u32 = 17;

/// Returns whether a dealer holding `total` must take another card.
#[must_use]
pub const fn dealer_must_draw(total: u32) -> bool {
    total < DEALER_STANDS_ON
}

/// Decides a round the player did not bust.
///
/// The player wins when the dealer busts or finishes lower, loses when the
/// dealer finishes higher, and pushes on equal totals.
#[must_use]
pub const fn settle(player_value: u32, dealer_value: u32) -> Outcome {
    if dealer_value > BLACKJACK || player_value > dealer_value {
        Outcome::Win
    } else if player_value < dealer_value {
        Outcome::Lose
    } else {
        Outcome::Push
    }
}

/// One step of the dealer's turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DealerStep {
    /// The dealer drew a card, face up.
    Draw(Card),
    /// The dealer stood and the round was settled.
    Settled(RoundResult),
}

impl Table {
    pub(super) fn dealer_step(&mut self) -> Result<DealerStep, ActionError> {
        if self.round.phase != Phase::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        if dealer_must_draw(self.round.dealer.value()) {
            let card = self.draw();
            self.round.dealer.add_card(card);
            self.round.dealer_draws += 1;
            log::debug!("dealer draws {card}, total {}", self.round.dealer.value());
            return Ok(DealerStep::Draw(card));
        }

        let outcome = settle(self.round.player.value(), self.round.dealer.value());
        Ok(DealerStep::Settled(self.finish_round(outcome)))
    }
}

impl Game {
    /// Advances the dealer's turn by one step.
    ///
    /// Each call either draws one card for the dealer or, once the dealer has
    /// reached 17, settles the round. A front end can pause between calls to
    /// animate the draws.
    ///
    /// # Errors
    ///
    /// Returns an error unless the dealer's turn is in progress.
    pub fn dealer_step(&self) -> Result<DealerStep, ActionError> {
        self.table.lock().dealer_step()
    }

    /// Returns an iterator over the remaining steps of the dealer's turn.
    ///
    /// The final item is always [`DealerStep::Settled`]. Yields nothing when
    /// the dealer is not playing.
    #[must_use]
    pub const fn dealer_steps(&self) -> DealerSteps<'_> {
        DealerSteps {
            game: self,
            done: false,
        }
    }
}

/// Iterator over the dealer's turn, created by [`Game::dealer_steps`].
pub struct DealerSteps<'a> {
    game: &'a Game,
    done: bool,
}

impl Iterator for DealerSteps<'_> {
    type Item = DealerStep;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.game.dealer_step() {
            Ok(step) => {
                self.done = matches!(step, DealerStep::Settled(_));
                Some(step)
            }
            Err(_) => {
                self.done = true;
                None
            }
        }
    }
}
