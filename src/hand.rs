//! Hand evaluation plus player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use serde::Serialize;

use crate::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u32 = 21;

/// Difference between an ace counted high and counted low.
const ACE_DROP: u32 = 10;

fn evaluate_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> (u32, bool) {
    let mut value: u32 = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(u32::from(card.value()));
    }

    while value > BLACKJACK && aces > 0 {
        value -= ACE_DROP;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Calculates the best total of `cards`.
///
/// Every ace starts at 11 and is dropped to 1, one at a time, only while the
/// total is over 21. An empty slice totals 0.
///
/// ```
/// use bjcore::{Card, Rank, Suit, hand::total};
///
/// let cards = [
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Six, Suit::Hearts),
///     Card::new(Rank::Nine, Suit::Clubs),
/// ];
/// assert_eq!(total(&cards), 16);
/// ```
#[must_use]
pub fn total(cards: &[Card]) -> u32 {
    evaluate_cards(cards).0
}

/// Calculates the total of the cards whose `visibility` entry is `true`.
///
/// Cards without a matching visibility entry are treated as hidden.
#[must_use]
pub fn revealed_total(cards: &[Card], visibility: &[bool]) -> u32 {
    let visible = cards
        .iter()
        .zip(visibility)
        .filter_map(|(card, shown)| shown.then_some(card));
    evaluate_cards(visible).0
}

/// Returns whether the best total of `cards` still counts an ace as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Returns whether `cards` total more than 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    total(cards) > BLACKJACK
}

/// The player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u32 {
        total(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The dealer's hand and which of its cards are face up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DealerHand {
    cards: Vec<Card>,
    visibility: Vec<bool>,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            visibility: Vec::new(),
        }
    }

    /// Deals the opening pair: the up card face up, the hole card face down.
    pub fn deal(&mut self, up: Card, hole: Card) {
        self.cards.clear();
        self.cards.extend([up, hole]);
        self.visibility.clear();
        self.visibility.extend([true, false]);
    }

    /// Adds a face-up card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.visibility.push(true);
    }

    /// Returns all cards in the hand, including face-down ones.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visibility mask, one entry per card.
    #[must_use]
    pub fn visibility(&self) -> &[bool] {
        &self.visibility
    }

    /// Returns the up card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether every card is face up.
    #[must_use]
    pub fn is_hole_revealed(&self) -> bool {
        self.visibility.iter().all(|shown| *shown)
    }

    /// Turns every card face up.
    pub fn reveal_hole(&mut self) {
        self.visibility.iter_mut().for_each(|shown| *shown = true);
    }

    /// Calculates the value of the face-up cards only.
    #[must_use]
    pub fn visible_value(&self) -> u32 {
        revealed_total(&self.cards, &self.visibility)
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u32 {
        total(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
