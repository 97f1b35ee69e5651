use super::outcome::{Outcome, Side};
use super::seat::Seat;
use super::shoe::Shoe;
use crate::cards::Card;
use crate::{DEALER_STAYS, OPENING_CARDS, Score};

/// Match state: both seats, the shoe, the round counter and the number
/// of round wins that takes the match.
#[derive(Debug)]
pub struct Table {
    player: Seat,
    dealer: Seat,
    shoe: Box<dyn Shoe>,
    round: usize,
    target: Score,
}

impl Table {
    pub fn new(player: Seat, dealer: Seat, shoe: Box<dyn Shoe>, target: Score) -> Self {
        Self {
            player,
            dealer,
            shoe,
            round: 1,
            target,
        }
    }

    pub fn player(&self) -> &Seat {
        &self.player
    }
    pub fn dealer(&self) -> &Seat {
        &self.dealer
    }
    pub fn seat(&self, side: Side) -> &Seat {
        match side {
            Side::Player => &self.player,
            Side::Dealer => &self.dealer,
        }
    }
    fn seat_mut(&mut self, side: Side) -> &mut Seat {
        match side {
            Side::Player => &mut self.player,
            Side::Dealer => &mut self.dealer,
        }
    }
    pub fn round(&self) -> usize {
        self.round
    }
    pub fn target(&self) -> Score {
        self.target
    }

    /// Opening deal: alternate player then dealer until each holds two
    /// cards, then turn the dealer's hole card face down.
    pub fn deal(&mut self) -> anyhow::Result<()> {
        for _ in 0..OPENING_CARDS {
            self.hit(Side::Player)?;
            self.hit(Side::Dealer)?;
        }
        self.dealer.hand_mut().hide();
        log::debug!(
            "round {} dealt  {} [{}]  {} [{}]",
            self.round,
            self.player,
            self.player.hand(),
            self.dealer,
            self.dealer.hand()
        );
        Ok(())
    }

    /// One card from the shoe to `side`.
    pub fn hit(&mut self, side: Side) -> anyhow::Result<Card> {
        let card = self
            .shoe
            .draw()
            .ok_or_else(|| anyhow::anyhow!("deck exhausted"))?;
        self.seat_mut(side).hand_mut().add(card);
        Ok(card)
    }

    pub fn reveal(&mut self) {
        self.dealer.hand_mut().reveal();
    }
    pub fn dealer_should_hit(&self) -> bool {
        self.dealer.hand().total() < DEALER_STAYS
    }
    pub fn is_bust(&self, side: Side) -> bool {
        self.seat(side).hand().is_bust()
    }

    /// Judge the round and award the winner a point. The hole card is
    /// left as it is: it stays down when the player busted.
    pub fn settle(&mut self) -> Outcome {
        let outcome = Outcome::judge(self.player.hand().total(), self.dealer.hand().total());
        if let Some(side) = outcome.winner() {
            self.seat_mut(side).increment();
        }
        log::info!(
            "round {} {:?}  {} {}  {} {}",
            self.round,
            outcome,
            self.player,
            self.player.hand().total(),
            self.dealer,
            self.dealer.hand().total()
        );
        outcome
    }

    /// Fresh shoe and empty hands for the next round.
    pub fn next_round(&mut self) {
        self.round += 1;
        self.shoe.refill();
        self.player.fold();
        self.dealer.fold();
    }

    /// The side that has reached the target, if any.
    pub fn champion(&self) -> Option<Side> {
        match (self.player.score() >= self.target, self.dealer.score() >= self.target) {
            (true, _) => Some(Side::Player),
            (_, true) => Some(Side::Dealer),
            _ => None,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::twentyone::shoe::{Shuffled, Stacked};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    pub(crate) fn card(rank: Rank) -> Card {
        Card::from((rank, Suit::Club))
    }

    pub(crate) fn stacked(cards: &[Rank], target: Score) -> Table {
        let cards = cards.iter().map(|r| card(*r)).collect::<Vec<_>>();
        Table::new(
            Seat::new("Ada"),
            Seat::new("Hal"),
            Box::new(Stacked::from(cards)),
            target,
        )
    }

    #[test]
    fn deal_alternates_and_hides_hole_card() {
        let mut table = stacked(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five], 1);
        table.deal().unwrap();
        assert_eq!(table.player().hand().cards(), &[card(Rank::Two), card(Rank::Four)]);
        assert_eq!(table.dealer().hand().cards(), &[card(Rank::Three), card(Rank::Five)]);
        assert!(table.dealer().hand().is_hidden());
        assert!(!table.player().hand().is_hidden());
    }

    #[test]
    fn empty_shoe_is_an_error() {
        let mut table = stacked(&[Rank::Two], 1);
        assert!(table.hit(Side::Player).is_ok());
        assert!(table.hit(Side::Player).is_err());
    }

    #[test]
    fn dealer_hits_below_seventeen() {
        let mut table = stacked(&[Rank::Two, Rank::Ten, Rank::Three, Rank::Six], 1);
        table.deal().unwrap();
        assert!(table.dealer_should_hit());
        let mut table = stacked(&[Rank::Two, Rank::Ten, Rank::Three, Rank::Seven], 1);
        table.deal().unwrap();
        assert!(!table.dealer_should_hit());
    }

    #[test]
    fn settle_awards_winner() {
        let mut table = stacked(&[Rank::King, Rank::Ten, Rank::Queen, Rank::Seven], 2);
        table.deal().unwrap();
        assert_eq!(table.settle(), Outcome::PlayerWins);
        assert_eq!(table.player().score(), 1);
        assert_eq!(table.dealer().score(), 0);
        assert_eq!(table.champion(), None);
    }

    #[test]
    fn settle_judges_a_hidden_hand() {
        // P: 10 6 K | D: 10 9 (hole card down)
        let mut table = stacked(&[Rank::Ten, Rank::Ten, Rank::Six, Rank::Nine, Rank::King], 1);
        table.deal().unwrap();
        table.hit(Side::Player).unwrap();
        assert_eq!(table.settle(), Outcome::PlayerBust);
        assert!(table.dealer().hand().is_hidden());
        assert_eq!(table.dealer().score(), 1);
    }

    #[test]
    fn push_awards_nobody() {
        let mut table = stacked(&[Rank::King, Rank::Ten, Rank::Nine, Rank::Nine], 1);
        table.deal().unwrap();
        assert_eq!(table.settle(), Outcome::Push);
        assert_eq!(table.player().score() + table.dealer().score(), 0);
    }

    #[test]
    fn next_round_resets_hands() {
        let mut table = Table::new(
            Seat::new("Ada"),
            Seat::new("Hal"),
            Box::new(Shuffled::new(SmallRng::seed_from_u64(3))),
            1,
        );
        table.deal().unwrap();
        table.next_round();
        assert_eq!(table.round(), 2);
        assert!(table.player().hand().is_empty());
        assert!(table.dealer().hand().is_empty());
        for _ in 0..52 {
            table.hit(Side::Player).unwrap();
        }
    }

    #[test]
    fn champion_at_target() {
        let mut table = stacked(&[Rank::Two, Rank::Ten, Rank::Three, Rank::Nine], 1);
        table.deal().unwrap();
        assert_eq!(table.settle(), Outcome::DealerWins);
        assert_eq!(table.champion(), Some(Side::Dealer));
    }
}
