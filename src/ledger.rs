//! The player's chip balance.

use crate::error::LedgerError;

/// Top-up amounts offered by the chip balance menu.
pub const TOP_UP_PRESETS: [usize; 3] = [5, 10, 50];

/// Tracks the player's chip balance.
///
/// The balance never goes negative: [`ChipLedger::deduct`] refuses amounts the
/// balance cannot cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipLedger {
    balance: usize,
}

impl ChipLedger {
    /// Creates a ledger holding `balance` chips.
    #[must_use]
    pub const fn new(balance: usize) -> Self {
        Self { balance }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Removes `amount` chips for a bet.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientFunds`] if `amount` exceeds the
    /// balance. The balance is unchanged in that case.
    pub const fn deduct(&mut self, amount: usize) -> Result<(), LedgerError> {
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds);
        }
        self.balance -= amount;
        Ok(())
    }

    /// Pays `amount` chips back to the player.
    pub const fn credit(&mut self, amount: usize) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Adds chips outside of a round.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::ZeroAmount`] if `amount` is zero.
    pub const fn top_up(&mut self, amount: usize) -> Result<(), LedgerError> {
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        self.credit(amount);
        Ok(())
    }
}

impl Default for ChipLedger {
    fn default() -> Self {
        Self::new(crate::options::DEFAULT_STARTING_BALANCE)
    }
}
