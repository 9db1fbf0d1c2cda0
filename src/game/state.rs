//! Round phases and read-only table snapshots.

use alloc::vec::Vec;

use serde::Serialize;

use crate::card::Card;
use crate::result::Outcome;

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Phase {
    /// No round has been played yet.
    #[default]
    Idle,
    /// Accepting a bet for the next round.
    Betting,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer reveals the hole card and draws.
    DealerTurn,
    /// Round has been settled against the balance.
    Settled,
}

impl Phase {
    /// Returns whether a round is currently being played.
    #[must_use]
    pub const fn in_round(self) -> bool {
        matches!(self, Self::PlayerTurn | Self::DealerTurn)
    }

    /// Returns whether a bet may be placed or the wager changed.
    #[must_use]
    pub const fn accepts_bets(self) -> bool {
        !self.in_round()
    }
}

/// Everything a front end needs to draw the table after a command.
///
/// `dealer_hand` holds every dealer card including the hole card; use
/// `dealer_visibility` to decide which ones to show face up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSnapshot {
    /// Player cards in deal order.
    pub player_hand: Vec<Card>,
    /// Dealer cards in deal order.
    pub dealer_hand: Vec<Card>,
    /// Face-up flag for each dealer card.
    pub dealer_visibility: Vec<bool>,
    /// Best total of the player hand.
    pub player_total: u32,
    /// Total of the face-up dealer cards.
    pub dealer_visible_total: u32,
    /// Current phase.
    pub phase: Phase,
    /// Outcome once the round is settled.
    pub outcome: Option<Outcome>,
    /// Chips at stake in the current round.
    pub stake: usize,
    /// Chip balance.
    pub balance: usize,
    /// Pending wager for the next bet.
    pub wager: usize,
}
