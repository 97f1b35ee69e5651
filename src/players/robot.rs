use crate::DEALER_STAYS;
use crate::rps::{self, Throw, Variant};
use crate::tictactoe::{self, Board, Marker};
use crate::twentyone::{self, Decision, Table};
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// A computer opponent with a name from a roster and its own RNG.
#[derive(Debug, Clone)]
pub struct Robot {
    name: String,
    rng: SmallRng,
}

impl Robot {
    pub fn new(roster: &[&str], mut rng: SmallRng) -> Self {
        let name = roster.choose(&mut rng).copied().unwrap_or("Robot");
        Self {
            name: name.to_string(),
            rng,
        }
    }
    /// A robot whose name differs from `rival`'s, when the roster allows it.
    pub fn rival(roster: &[&str], rival: &str, rng: SmallRng) -> Self {
        let others = roster
            .iter()
            .copied()
            .filter(|name| *name != rival)
            .collect::<Vec<&str>>();
        match others.is_empty() {
            true => Self::new(roster, rng),
            false => Self::new(&others, rng),
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Plays the house rule from the player's seat.
impl twentyone::Player for Robot {
    fn decide(&mut self, table: &Table) -> anyhow::Result<Decision> {
        Ok(match table.player().hand().total() < DEALER_STAYS {
            true => Decision::Hit,
            false => Decision::Stay,
        })
    }
}

impl tictactoe::Player for Robot {
    fn name(&self) -> &str {
        &self.name
    }
    fn square(&mut self, board: &Board, _: Marker) -> anyhow::Result<usize> {
        board
            .unmarked()
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("no open square"))
    }
}

impl rps::Player for Robot {
    fn name(&self) -> &str {
        &self.name
    }
    fn throw(&mut self, variant: Variant) -> anyhow::Result<Throw> {
        variant
            .throws()
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("{} has no throws", variant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::twentyone::Player;
    use crate::twentyone::table::tests::stacked;
    use crate::{ROBOT_NAMES, TTT_ROBOT_NAMES};
    use rand::SeedableRng;

    fn robot(seed: u64) -> Robot {
        Robot::new(&TTT_ROBOT_NAMES, SmallRng::seed_from_u64(seed))
    }

    #[test]
    fn name_comes_from_roster() {
        for seed in 0..16 {
            let robot = Robot::new(&ROBOT_NAMES, SmallRng::seed_from_u64(seed));
            assert!(ROBOT_NAMES.contains(&robot.name()));
        }
        assert_eq!(robot(3).name(), robot(3).name());
    }

    #[test]
    fn rival_never_shares_a_name() {
        for seed in 0..32 {
            let robot = Robot::rival(&ROBOT_NAMES, "Hal", SmallRng::seed_from_u64(seed));
            assert_ne!(robot.name(), "Hal");
            assert!(ROBOT_NAMES.contains(&robot.name()));
        }
        let lonely = Robot::rival(&["Hal"], "Hal", SmallRng::seed_from_u64(0));
        assert_eq!(lonely.name(), "Hal");
    }

    #[test]
    fn hits_below_seventeen() {
        let mut table = stacked(&[Rank::Ten, Rank::Two, Rank::Six, Rank::Three], 1);
        table.deal().unwrap();
        assert_eq!(robot(0).decide(&table).unwrap(), Decision::Hit);
        let mut table = stacked(&[Rank::Ten, Rank::Two, Rank::Seven, Rank::Three], 1);
        table.deal().unwrap();
        assert_eq!(robot(0).decide(&table).unwrap(), Decision::Stay);
    }

    #[test]
    fn squares_are_always_open() {
        let board = crate::tictactoe::board::tests::board(&[1, 5, 9], &[2, 3]);
        let mut robot = robot(5);
        for _ in 0..50 {
            let key = tictactoe::Player::square(&mut robot, &board, Marker::X).unwrap();
            assert!(board.unmarked().contains(&key));
        }
    }

    #[test]
    fn full_board_has_no_square() {
        let board = crate::tictactoe::board::tests::board(&[1, 3, 4, 8, 9], &[2, 5, 6, 7]);
        assert!(tictactoe::Player::square(&mut robot(1), &board, Marker::O).is_err());
    }

    #[test]
    fn throws_stay_in_variant() {
        let mut robot = robot(9);
        for _ in 0..50 {
            let throw = rps::Player::throw(&mut robot, Variant::Classic).unwrap();
            assert!(Variant::Classic.allows(throw));
        }
        let thrown = (0..200)
            .map(|_| rps::Player::throw(&mut robot, Variant::Expanded).unwrap())
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(thrown.len(), 5);
    }
}
