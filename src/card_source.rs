//! Sources of freshly drawn cards.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, RANK_COUNT, Rank, Suit};

/// Something the table can draw cards from.
pub trait CardSource {
    /// Draws the next card.
    fn draw(&mut self) -> Card;
}

/// An unlimited shoe.
///
/// Every draw samples a rank uniformly from the thirteen ranks and a suit
/// uniformly from the four suits, with replacement. There is no deck to run
/// out of and nothing to reshuffle.
#[derive(Debug, Clone)]
pub struct InfiniteShoe {
    rng: ChaCha8Rng,
}

impl InfiniteShoe {
    /// Creates a shoe whose draws are reproducible from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl CardSource for InfiniteShoe {
    fn draw(&mut self) -> Card {
        let rank = Rank::ALL[self.rng.random_range(0..RANK_COUNT)];
        let suit = Suit::ALL[self.rng.random_range(0..Suit::ALL.len())];
        Card::new(rank, suit)
    }
}

/// Replays a fixed sequence of cards in order.
///
/// Once the script is exhausted it starts again from the first card. An empty
/// script deals the two of spades forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    cards: Vec<Card>,
    next: usize,
}

impl ScriptedSource {
    /// Creates a source that deals `cards` in the given order.
    #[must_use]
    pub fn new(cards: impl Into<Vec<Card>>) -> Self {
        Self {
            cards: cards.into(),
            next: 0,
        }
    }

    /// Returns how many cards have been dealt so far.
    #[must_use]
    pub const fn dealt(&self) -> usize {
        self.next
    }
}

impl CardSource for ScriptedSource {
    fn draw(&mut self) -> Card {
        if self.cards.is_empty() {
            self.next += 1;
            return Card::new(Rank::Two, Suit::Spades);
        }

        let card = self.cards[self.next % self.cards.len()];
        self.next += 1;
        card
    }
}

impl<F> CardSource for F
where
    F: FnMut() -> Card,
{
    fn draw(&mut self) -> Card {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinite_shoe_is_reproducible() {
        let mut a = InfiniteShoe::new(9);
        let mut b = InfiniteShoe::new(9);
        for _ in 0..64 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn infinite_shoe_reaches_every_rank() {
        let mut shoe = InfiniteShoe::new(3);
        let mut seen = [false; RANK_COUNT];
        for _ in 0..2_000 {
            let card = shoe.draw();
            let index = Rank::ALL
                .iter()
                .position(|rank| *rank == card.rank)
                .unwrap_or(0);
            seen[index] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn scripted_source_cycles() {
        let ace = Card::new(Rank::Ace, Suit::Hearts);
        let nine = Card::new(Rank::Nine, Suit::Clubs);
        let mut source = ScriptedSource::new([ace, nine]);
        assert_eq!(source.draw(), ace);
        assert_eq!(source.draw(), nine);
        assert_eq!(source.draw(), ace);
        assert_eq!(source.dealt(), 3);
    }
}
