//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round at a time against an
//! automated dealer: betting, hitting, standing, the dealer's forced draws and
//! settlement against a chip balance. Cards come from an unlimited shoe.
//!
//! With the `std` feature, [`advisory::AdvisoryClient`] asks an external
//! service whether the player should hit or stand.
//!
//! # Example
//!
//! ```no_run
//! use bjcore::{Game, TableOptions};
//!
//! let game = Game::new(TableOptions::default(), 42);
//! game.place_bet(10).unwrap();
//! game.hit().unwrap();
//! let _ = game.snapshot();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod advisory;
pub mod card;
pub mod card_source;
pub mod error;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, Rank, Suit};
pub use card_source::{CardSource, InfiniteShoe, ScriptedSource};
pub use error::{ActionError, BetError, LedgerError, WagerError};
pub use game::{DealerStep, Game, Phase, TableSnapshot};
pub use hand::{DealerHand, Hand, revealed_total, total};
pub use ledger::ChipLedger;
pub use options::{AdvisoryOptions, TableOptions};
pub use result::{Outcome, Recommendation, RoundResult};
