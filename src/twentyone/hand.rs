use crate::cards::Card;
use crate::{ACE_DEMOTION, BUST_LIMIT, Points};

/// Cards held by one seat, in the order they were dealt.
///
/// The second card is the dealer's hole card; while `hidden` is set it is
/// face down and the total is not public.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    hidden: bool,
}

impl Hand {
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of card values, with each ace dropping from 11 to 1 for as
    /// long as the hand would otherwise bust.
    pub fn total(&self) -> Points {
        let sum = self.cards.iter().map(Card::value).sum::<Points>();
        let aces = self.cards.iter().filter(|c| c.is_ace()).count();
        (0..aces).fold(sum, |total, _| match total > BUST_LIMIT {
            true => total - ACE_DEMOTION,
            false => total,
        })
    }
    pub fn is_bust(&self) -> bool {
        self.total() > BUST_LIMIT
    }
    /// Total as shown at the table: unknown while the hole card is down.
    pub fn visible_total(&self) -> Option<Points> {
        match self.is_hidden() {
            true => None,
            false => Some(self.total()),
        }
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }
    pub fn reveal(&mut self) {
        self.hidden = false;
    }
    pub fn is_hidden(&self) -> bool {
        self.hidden && self.cards.len() > 1
    }
    /// Whether the card at `index` is shown face down.
    pub fn is_face_down(&self, index: usize) -> bool {
        self.is_hidden() && index == 1
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards,
            hidden: false,
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self
            .cards
            .iter()
            .enumerate()
            .map(|(i, c)| match self.is_face_down(i) {
                true => String::from("??"),
                false => c.to_string(),
            })
            .collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    pub(crate) fn hand(ranks: &[Rank]) -> Hand {
        Hand::from(
            ranks
                .iter()
                .map(|r| Card::from((*r, Suit::Spade)))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(Hand::empty().total(), 0);
        assert!(!Hand::empty().is_bust());
    }

    #[test]
    fn faces_count_ten() {
        assert_eq!(hand(&[Rank::King, Rank::Queen]).total(), 20);
        assert_eq!(hand(&[Rank::Jack, Rank::Nine, Rank::Two]).total(), 21);
    }

    #[test]
    fn ace_high_when_safe() {
        assert_eq!(hand(&[Rank::Ace, Rank::King]).total(), 21);
        assert_eq!(hand(&[Rank::Ace, Rank::Six]).total(), 17);
    }

    #[test]
    fn ace_low_when_needed() {
        assert_eq!(hand(&[Rank::Ace, Rank::Six, Rank::Nine]).total(), 16);
        assert_eq!(hand(&[Rank::Ace, Rank::Ace]).total(), 12);
        assert_eq!(hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]).total(), 14);
        assert_eq!(hand(&[Rank::Ace, Rank::Ace, Rank::Nine]).total(), 21);
    }

    #[test]
    fn bust_over_twenty_one() {
        assert!(hand(&[Rank::King, Rank::Queen, Rank::Two]).is_bust());
        assert!(!hand(&[Rank::King, Rank::Ace, Rank::Queen]).is_bust());
    }

    #[test]
    fn hole_card_hides_total() {
        let mut h = hand(&[Rank::Ten, Rank::Seven]);
        h.hide();
        assert_eq!(h.visible_total(), None);
        assert!(h.is_face_down(1));
        assert!(!h.is_face_down(0));
        assert_eq!(h.to_string(), "10♠ ??");
        h.reveal();
        assert_eq!(h.visible_total(), Some(17));
        assert_eq!(h.to_string(), "10♠ 7♠");
    }

    #[test]
    fn single_card_never_hidden() {
        let mut h = hand(&[Rank::Ten]);
        h.hide();
        assert!(!h.is_hidden());
        assert!(!h.is_face_down(0));
        assert_eq!(h.to_string(), "10♠");
    }
}
