/// A hand shape. Classic games use the first three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Throw {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl Throw {
    pub fn all() -> [Self; 5] {
        [
            Throw::Rock,
            Throw::Paper,
            Throw::Scissors,
            Throw::Lizard,
            Throw::Spock,
        ]
    }

    pub fn beats(&self, other: &Self) -> bool {
        self.verb(other).is_some()
    }

    /// How `self` defeats `other`, if it does.
    pub fn verb(&self, other: &Self) -> Option<&'static str> {
        match (self, other) {
            (Throw::Rock, Throw::Scissors) => Some("crushes"),
            (Throw::Rock, Throw::Lizard) => Some("crushes"),
            (Throw::Paper, Throw::Rock) => Some("covers"),
            (Throw::Paper, Throw::Spock) => Some("disproves"),
            (Throw::Scissors, Throw::Paper) => Some("cuts"),
            (Throw::Scissors, Throw::Lizard) => Some("decapitates"),
            (Throw::Lizard, Throw::Spock) => Some("poisons"),
            (Throw::Lizard, Throw::Paper) => Some("eats"),
            (Throw::Spock, Throw::Scissors) => Some("smashes"),
            (Throw::Spock, Throw::Rock) => Some("vaporizes"),
            _ => None,
        }
    }
}

/// str isomorphism, case-insensitive
impl TryFrom<&str> for Throw {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Throw::Rock),
            "paper" => Ok(Throw::Paper),
            "scissors" => Ok(Throw::Scissors),
            "lizard" => Ok(Throw::Lizard),
            "spock" => Ok(Throw::Spock),
            _ => Err(String::from("Sorry, invalid choice.")),
        }
    }
}

impl std::fmt::Display for Throw {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Throw::Rock => "rock",
            Throw::Paper => "paper",
            Throw::Scissors => "scissors",
            Throw::Lizard => "lizard",
            Throw::Spock => "spock",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_throw_beats_exactly_two() {
        for a in Throw::all() {
            let wins = Throw::all().iter().filter(|b| a.beats(b)).count();
            assert_eq!(wins, 2, "{} should beat two throws", a);
        }
    }

    #[test]
    fn beats_is_antisymmetric() {
        for a in Throw::all() {
            assert!(!a.beats(&a));
            for b in Throw::all() {
                assert!(!(a.beats(&b) && b.beats(&a)));
            }
        }
    }

    #[test]
    fn classic_triangle() {
        assert!(Throw::Rock.beats(&Throw::Scissors));
        assert!(Throw::Scissors.beats(&Throw::Paper));
        assert!(Throw::Paper.beats(&Throw::Rock));
        assert_eq!(Throw::Spock.verb(&Throw::Rock), Some("vaporizes"));
        assert_eq!(Throw::Rock.verb(&Throw::Paper), None);
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!(Throw::try_from("Spock"), Ok(Throw::Spock));
        assert_eq!(Throw::try_from(" ROCK "), Ok(Throw::Rock));
        assert!(Throw::try_from("stone").is_err());
    }
}
