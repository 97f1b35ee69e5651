use super::card::Card;
use rand::Rng;

/// The undealt cards of a standard 52-card deck.
///
/// Remaining cards are a 64-bit mask, one bit per [`Card`]. Drawing
/// removes a uniformly random remaining card, which deals the same
/// sequence distribution as shuffling once and popping from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(u64);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub fn new() -> Self {
        Self(Self::mask())
    }
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    /// remove a specific card from the deck
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    /// remove a random card from the deck
    pub fn draw<R>(&mut self, rng: &mut R) -> Option<Card>
    where
        R: Rng + ?Sized,
    {
        if self.is_empty() {
            return None;
        }
        let i = rng.random_range(0..self.len());
        let mut deck = self.0;
        for _ in 0..i {
            deck &= deck - 1;
        }
        let card = Card::from(deck.trailing_zeros() as u8);
        self.remove(card);
        Some(card)
    }

    const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// cards still in the deck, lowest first
impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        (0..52u8)
            .map(Card::from)
            .filter(|c| deck.contains(c))
            .collect()
    }
}
