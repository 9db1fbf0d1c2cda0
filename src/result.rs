//! Round results and advisory suggestions.

use core::fmt;

use serde::{Deserialize, Serialize};

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Player beat the dealer or the dealer busted.
    Win,
    /// Player busted or finished below the dealer.
    Lose,
    /// Equal totals; the stake is returned.
    Push,
}

impl Outcome {
    /// Chips paid back to the player for a round staked at `stake`.
    ///
    /// The stake was already taken from the balance when the bet was placed,
    /// so a win pays the stake back plus equal winnings.
    #[must_use]
    pub const fn payout(self, stake: usize) -> usize {
        match self {
            Self::Win => stake.saturating_mul(2),
            Self::Lose => 0,
            Self::Push => stake,
        }
    }
}

/// Settlement details of a finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    /// Outcome for the player.
    pub outcome: Outcome,
    /// Chips staked on the round.
    pub stake: usize,
    /// Chips credited back to the balance.
    pub payout: usize,
    /// Final player total.
    pub player_value: u32,
    /// Final dealer total.
    pub dealer_value: u32,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Cards the dealer drew after revealing the hole card.
    pub dealer_draws: usize,
}

impl RoundResult {
    /// Net chip change for the round, counting the stake taken at bet time.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "chip amounts fit in isize")]
    pub const fn net(&self) -> isize {
        self.payout as isize - self.stake as isize
    }
}

/// A suggested next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl Recommendation {
    /// Parses the literal wire spelling, ignoring surrounding whitespace.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "Hit" => Some(Self::Hit),
            "Stand" => Some(Self::Stand),
            _ => None,
        }
    }

    /// Returns the wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hit => "Hit",
            Self::Stand => "Stand",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
