use crate::cards::{Card, Deck};
use rand::rngs::SmallRng;
use std::collections::VecDeque;

/// Source of cards for a table.
pub trait Shoe: std::fmt::Debug {
    /// Next card, or `None` once the shoe is empty.
    fn draw(&mut self) -> Option<Card>;
    /// Restore a full shoe before a new round.
    fn refill(&mut self);
}

/// A single 52-card deck dealt in random order.
#[derive(Debug)]
pub struct Shuffled {
    deck: Deck,
    rng: SmallRng,
}

impl Shuffled {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            deck: Deck::new(),
            rng,
        }
    }
}

impl Shoe for Shuffled {
    fn draw(&mut self) -> Option<Card> {
        self.deck.draw(&mut self.rng)
    }
    fn refill(&mut self) {
        self.deck = Deck::new();
    }
}

/// Cards dealt in exactly the given order. Refilling is a no-op so a
/// stacked sequence can span several rounds.
#[derive(Debug, Default)]
pub struct Stacked(VecDeque<Card>);

impl From<Vec<Card>> for Stacked {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards.into())
    }
}

impl Shoe for Stacked {
    fn draw(&mut self) -> Option<Card> {
        self.0.pop_front()
    }
    fn refill(&mut self) {}
}
