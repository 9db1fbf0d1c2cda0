//! Error types for table operations.
//!
//! An `Err` returned by a game command always means the command was a no-op:
//! nothing about the round, the ledger or the wager changed.

use thiserror::Error;

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// A round is in progress.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// The bet exceeds the balance.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during player and dealer actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
}

/// Errors that can occur when adjusting the pending wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WagerError {
    /// The wager cannot change while a round is in progress.
    #[error("invalid game state for changing the wager")]
    InvalidState,
}

/// Errors raised by the chip ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The balance cannot cover the amount.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// A top-up must add at least one chip.
    #[error("amount is zero")]
    ZeroAmount,
}

impl From<LedgerError> for BetError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientFunds => Self::InsufficientFunds,
            LedgerError::ZeroAmount => Self::ZeroBet,
        }
    }
}
