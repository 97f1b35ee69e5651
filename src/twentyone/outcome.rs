use crate::Points;

/// The two seats at a Twenty-One table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Dealer,
}

impl Side {
    pub fn other(&self) -> Self {
        match self {
            Side::Player => Side::Dealer,
            Side::Dealer => Side::Player,
        }
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerBust,
    DealerBust,
    PlayerWins,
    DealerWins,
    Push,
}

impl Outcome {
    /// Judge a round from both totals. A player bust ends the round
    /// before the dealer plays, so it takes precedence.
    pub fn judge(player: Points, dealer: Points) -> Self {
        match (player > crate::BUST_LIMIT, dealer > crate::BUST_LIMIT) {
            (true, _) => Outcome::PlayerBust,
            (_, true) => Outcome::DealerBust,
            _ => match player.cmp(&dealer) {
                std::cmp::Ordering::Greater => Outcome::PlayerWins,
                std::cmp::Ordering::Less => Outcome::DealerWins,
                std::cmp::Ordering::Equal => Outcome::Push,
            },
        }
    }
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::PlayerBust | Outcome::DealerWins => Some(Side::Dealer),
            Outcome::DealerBust | Outcome::PlayerWins => Some(Side::Player),
            Outcome::Push => None,
        }
    }
    pub fn loser(&self) -> Option<Side> {
        self.winner().map(|s| s.other())
    }
    pub fn is_bust(&self) -> bool {
        matches!(self, Outcome::PlayerBust | Outcome::DealerBust)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_bust_beats_everything() {
        assert_eq!(Outcome::judge(22, 25), Outcome::PlayerBust);
        assert_eq!(Outcome::judge(22, 18), Outcome::PlayerBust);
    }

    #[test]
    fn dealer_bust() {
        assert_eq!(Outcome::judge(12, 22), Outcome::DealerBust);
        assert_eq!(Outcome::DealerBust.winner(), Some(Side::Player));
    }

    #[test]
    fn higher_total_wins() {
        assert_eq!(Outcome::judge(20, 18), Outcome::PlayerWins);
        assert_eq!(Outcome::judge(17, 19), Outcome::DealerWins);
        assert_eq!(Outcome::DealerWins.loser(), Some(Side::Player));
    }

    #[test]
    fn equal_totals_push() {
        let push = Outcome::judge(19, 19);
        assert_eq!(push, Outcome::Push);
        assert_eq!(push.winner(), None);
        assert_eq!(push.loser(), None);
    }
}
