//! Round engine and table state.

use alloc::boxed::Box;

use crate::advisory::AdvisoryRequest;
use crate::card::Card;
use crate::card_source::{CardSource, InfiniteShoe};
use crate::error::{BetError, LedgerError};
use crate::hand::{DealerHand, Hand};
use crate::ledger::ChipLedger;
use crate::options::TableOptions;
use crate::result::{Outcome, RoundResult};
use crate::sync::Mutex;

mod actions;
mod bet;
pub mod dealer;
pub mod state;

pub use dealer::{DEALER_STANDS_ON, DealerStep, DealerSteps, dealer_must_draw, settle};
pub use state::{Phase, TableSnapshot};

/// The unit of play: one bet, one player hand, one dealer hand.
#[derive(Debug, Clone, Default)]
struct Round {
    stake: usize,
    player: Hand,
    dealer: DealerHand,
    phase: Phase,
    outcome: Option<Outcome>,
    dealer_draws: usize,
}

/// All mutable table state, guarded by a single lock in [`Game`].
struct Table {
    round: Round,
    ledger: ChipLedger,
    wager: usize,
    last_result: Option<RoundResult>,
    source: Box<dyn CardSource + Send>,
}

impl Table {
    fn draw(&mut self) -> Card {
        self.source.draw()
    }

    /// Pays out `outcome` and closes the round.
    ///
    /// Only reachable from a player bust or the end of the dealer turn, both of
    /// which leave the round in `Settled`, so a round is never paid twice.
    fn finish_round(&mut self, outcome: Outcome) -> RoundResult {
        debug_assert!(self.round.phase.in_round());

        let stake = self.round.stake;
        let payout = outcome.payout(stake);
        self.ledger.credit(payout);

        self.round.stake = 0;
        self.round.outcome = Some(outcome);
        self.round.phase = Phase::Settled;

        let result = RoundResult {
            outcome,
            stake,
            payout,
            player_value: self.round.player.value(),
            dealer_value: self.round.dealer.value(),
            player_bust: self.round.player.is_bust(),
            dealer_bust: self.round.dealer.is_bust(),
            dealer_draws: self.round.dealer_draws,
        };

        log::info!(
            "round settled: {:?} (player {} vs dealer {}), stake {stake}, payout {payout}, balance {}",
            outcome,
            result.player_value,
            result.dealer_value,
            self.ledger.balance()
        );

        self.last_result = Some(result.clone());
        result
    }

    fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            player_hand: self.round.player.cards().to_vec(),
            dealer_hand: self.round.dealer.cards().to_vec(),
            dealer_visibility: self.round.dealer.visibility().to_vec(),
            player_total: self.round.player.value(),
            dealer_visible_total: self.round.dealer.visible_value(),
            phase: self.round.phase,
            outcome: self.round.outcome,
            stake: self.round.stake,
            balance: self.ledger.balance(),
            wager: self.wager,
        }
    }
}

/// A single-player blackjack table.
///
/// The game owns the card source, the chip ledger and the current round. Every
/// command takes the same lock, so commands issued from several threads are
/// applied one at a time and never interleave.
///
/// Commands that are not valid in the current phase return an error and leave
/// the table untouched.
///
/// # Example
///
/// ```
/// use bjcore::{Game, Phase, TableOptions};
///
/// let game = Game::new(TableOptions::default(), 42);
/// game.place_bet(10).unwrap();
/// assert_eq!(game.phase(), Phase::PlayerTurn);
///
/// let result = game.stand().unwrap();
/// assert_eq!(game.phase(), Phase::Settled);
/// assert_eq!(game.balance(), 90 + result.payout);
/// ```
pub struct Game {
    /// Table options.
    pub options: TableOptions,
    table: Mutex<Table>,
}

impl Game {
    /// Creates a new table whose unlimited shoe is seeded with `seed`.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self::with_source(options, InfiniteShoe::new(seed))
    }

    /// Creates a new table that draws from `source`.
    #[must_use]
    pub fn with_source(options: TableOptions, source: impl CardSource + Send + 'static) -> Self {
        let table = Table {
            round: Round::default(),
            ledger: ChipLedger::new(options.starting_balance),
            wager: 0,
            last_result: None,
            source: Box::new(source),
        };

        Self {
            options,
            table: Mutex::new(table),
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.table.lock().round.phase
    }

    /// Returns the chip balance.
    pub fn balance(&self) -> usize {
        self.table.lock().ledger.balance()
    }

    /// Returns the chips at stake in the current round.
    pub fn stake(&self) -> usize {
        self.table.lock().round.stake
    }

    /// Returns the pending wager.
    pub fn wager(&self) -> usize {
        self.table.lock().wager
    }

    /// Returns the outcome of the round, once settled.
    pub fn outcome(&self) -> Option<Outcome> {
        self.table.lock().round.outcome
    }

    /// Returns the settlement of the most recent round.
    ///
    /// Cleared when the next bet is placed.
    pub fn last_result(&self) -> Option<RoundResult> {
        self.table.lock().last_result.clone()
    }

    /// Returns a clone of the player's hand.
    pub fn player_hand(&self) -> Hand {
        self.table.lock().round.player.clone()
    }

    /// Returns a clone of the dealer's hand.
    pub fn dealer_hand(&self) -> DealerHand {
        self.table.lock().round.dealer.clone()
    }

    /// Returns the best total of the player's hand.
    pub fn player_total(&self) -> u32 {
        self.table.lock().round.player.value()
    }

    /// Returns the total of the dealer's face-up cards.
    pub fn dealer_visible_total(&self) -> u32 {
        self.table.lock().round.dealer.visible_value()
    }

    /// Returns a read-only copy of everything on the table.
    pub fn snapshot(&self) -> TableSnapshot {
        self.table.lock().snapshot()
    }

    /// Opens betting on a fresh table.
    ///
    /// Placing a bet also opens betting implicitly, so calling this is optional.
    ///
    /// # Errors
    ///
    /// Returns an error unless the table is idle or already betting.
    pub fn start_betting(&self) -> Result<(), BetError> {
        let mut table = self.table.lock();
        let phase = table.round.phase;
        match phase {
            Phase::Idle => {
                table.round.phase = Phase::Betting;
                drop(table);
                log::debug!("betting opened");
                Ok(())
            }
            Phase::Betting => Ok(()),
            _ => Err(BetError::InvalidState),
        }
    }

    /// Adds `amount` chips to the balance.
    ///
    /// Top-ups are accepted in any phase and never touch the current round.
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` is zero.
    pub fn top_up(&self, amount: usize) -> Result<usize, LedgerError> {
        let mut table = self.table.lock();
        table.ledger.top_up(amount)?;
        let balance = table.ledger.balance();
        drop(table);
        log::debug!("topped up {amount} chips, balance {balance}");
        Ok(balance)
    }

    /// Builds the advisory query for the current player turn.
    ///
    /// Only the player's total and the dealer's up card are included. Returns
    /// `None` outside of the player's turn.
    pub fn advisory_request(&self) -> Option<AdvisoryRequest> {
        let table = self.table.lock();
        if table.round.phase != Phase::PlayerTurn {
            return None;
        }
        let up_card = table.round.dealer.up_card()?;
        Some(AdvisoryRequest::new(
            table.round.player.value(),
            up_card.value(),
        ))
    }
}
