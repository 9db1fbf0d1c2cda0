//! Hit-or-stand hints from an external advisory service.
//!
//! The service sees only the player's best total and the value of the dealer's
//! up card. Its answer is a display hint; nothing here touches a [`Game`].
//!
//! [`Game`]: crate::Game

use alloc::format;
use alloc::string::String;

use serde::{Deserialize, Serialize};

#[cfg(feature = "std")]
mod client;

#[cfg(feature = "std")]
pub use client::{
    AdvisoryClient, AdvisoryError, AdvisoryTransport, FALLBACK, TransportError, parse_response,
};

/// Query sent to the advisory service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryRequest {
    /// Best total of the player's hand.
    pub player_total: u32,
    /// Value of the dealer's face-up card (an ace is 11).
    pub dealer_card: u8,
}

impl AdvisoryRequest {
    /// Creates a request.
    #[must_use]
    pub const fn new(player_total: u32, dealer_card: u8) -> Self {
        Self {
            player_total,
            dealer_card,
        }
    }

    /// Renders the request as URL query parameters.
    ///
    /// ```
    /// use bjcore::advisory::AdvisoryRequest;
    ///
    /// let request = AdvisoryRequest::new(15, 10);
    /// assert_eq!(request.query_string(), "playerTotal=15&dealerCard=10");
    /// ```
    #[must_use]
    pub fn query_string(&self) -> String {
        format!(
            "playerTotal={}&dealerCard={}",
            self.player_total, self.dealer_card
        )
    }
}

/// Body returned by the advisory service.
///
/// `recommendation` is `"Hit"` or `"Stand"`; it may also be null or missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryResponse {
    /// The suggested move, as sent on the wire.
    #[serde(default)]
    pub recommendation: Option<String>,
}
