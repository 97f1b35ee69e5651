use super::rank::Rank;
use super::suit::Suit;
use crate::Points;

/// A playing card encoded as a single byte.
///
/// The 52 cards map onto `0..52` as `rank * 4 + suit`, so cards sort
/// first by rank, then by suit within each rank.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    pub fn value(&self) -> Points {
        self.rank().value()
    }
    pub fn is_ace(&self) -> bool {
        self.rank().is_ace()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// 10♠
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!(n < 52, "Invalid card u8: {}", n);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        let card = Card::from((Rank::Queen, Suit::Heart));
        assert_eq!(card.rank(), Rank::Queen);
        assert_eq!(card.suit(), Suit::Heart);
    }

    #[test]
    fn ten_of_spades() {
        let card = Card::from((Rank::Ten, Suit::Spade));
        assert_eq!(u8::from(card), 35);
        assert_eq!(card.to_string(), "10♠");
    }

    #[test]
    fn sorted_by_rank_first() {
        let low = Card::from((Rank::Two, Suit::Spade));
        let high = Card::from((Rank::Three, Suit::Club));
        assert!(low < high);
    }
}
