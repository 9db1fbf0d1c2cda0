use crate::error::{BetError, WagerError};
use crate::hand::Hand;

use super::{Game, Phase, Round, Table};

impl Table {
    fn open_wager(&mut self) -> Result<(), WagerError> {
        if !self.round.phase.accepts_bets() {
            return Err(WagerError::InvalidState);
        }
        if self.round.phase == Phase::Idle {
            self.round.phase = Phase::Betting;
        }
        Ok(())
    }

    fn place_bet(&mut self, stake: usize) -> Result<(), BetError> {
        if stake == 0 {
            return Err(BetError::ZeroBet);
        }

        if !self.round.phase.accepts_bets() {
            return Err(BetError::InvalidState);
        }

        self.ledger.deduct(stake)?;

        let mut player = Hand::new();
        player.add_card(self.draw());
        player.add_card(self.draw());

        let up = self.draw();
        let hole = self.draw();

        let mut round = Round {
            stake,
            player,
            phase: Phase::PlayerTurn,
            ..Round::default()
        };
        round.dealer.deal(up, hole);

        log::debug!(
            "bet {stake} placed: player holds {}, dealer shows {up}",
            round.player.value()
        );

        self.round = round;
        self.last_result = None;
        Ok(())
    }
}

impl Game {
    /// Places a bet and deals a new round.
    ///
    /// Deducts `stake` from the balance, deals two cards to the player and two
    /// to the dealer (the second face down) and starts the player's turn.
    /// Any previous, settled round is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the stake is zero, exceeds the balance, or a round
    /// is still in progress. Nothing changes in that case.
    pub fn place_bet(&self, stake: usize) -> Result<(), BetError> {
        self.table.lock().place_bet(stake)
    }

    /// Places the pending wager as the bet for a new round.
    ///
    /// The wager is reset to zero once the bet is accepted.
    ///
    /// # Errors
    ///
    /// Same as [`Game::place_bet`]; the wager is kept when the bet is rejected.
    pub fn place_wager(&self) -> Result<usize, BetError> {
        let mut table = self.table.lock();
        let stake = table.wager;
        table.place_bet(stake)?;
        table.wager = 0;
        Ok(stake)
    }

    /// Adds `amount` chips to the pending wager and returns the new wager.
    ///
    /// # Errors
    ///
    /// Returns an error while a round is in progress.
    pub fn raise_wager(&self, amount: usize) -> Result<usize, WagerError> {
        let mut table = self.table.lock();
        table.open_wager()?;
        table.wager = table.wager.saturating_add(amount);
        Ok(table.wager)
    }

    /// Removes up to `amount` chips from the pending wager and returns the new
    /// wager. The wager never drops below zero.
    ///
    /// # Errors
    ///
    /// Returns an error while a round is in progress.
    pub fn lower_wager(&self, amount: usize) -> Result<usize, WagerError> {
        let mut table = self.table.lock();
        table.open_wager()?;
        table.wager = table.wager.saturating_sub(amount);
        Ok(table.wager)
    }
}
