use super::variant::Variant;
use crate::{DEFAULT_HUMAN_NAME, DEFAULT_RPS_TARGET, Score};

/// Who sits in a seat, as answered at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Human,
    Computer,
}

/// str isomorphism, case-insensitive
impl TryFrom<&str> for Kind {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "h" | "human" => Ok(Kind::Human),
            "c" | "computer" => Ok(Kind::Computer),
            _ => Err(String::from("Invalid response. Please enter h or c.")),
        }
    }
}

/// A configured seat. Humans keep their name between games; computers
/// draw a fresh one each time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entrant {
    Human(String),
    Computer,
}

/// Everything chosen before a duel starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub variant: Variant,
    pub seats: [Entrant; 2],
    pub target: Score,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            seats: [
                Entrant::Human(String::from(DEFAULT_HUMAN_NAME)),
                Entrant::Computer,
            ],
            target: DEFAULT_RPS_TARGET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_accepts_short_and_long() {
        assert_eq!(Kind::try_from("h"), Ok(Kind::Human));
        assert_eq!(Kind::try_from("Human"), Ok(Kind::Human));
        assert_eq!(Kind::try_from(" c "), Ok(Kind::Computer));
        assert_eq!(Kind::try_from("COMPUTER"), Ok(Kind::Computer));
        assert!(Kind::try_from("robot").is_err());
        assert!(Kind::try_from("").is_err());
    }

    #[test]
    fn default_is_player_against_computer_to_ten() {
        let settings = Settings::default();
        assert_eq!(settings.seats[0], Entrant::Human(String::from("Player")));
        assert_eq!(settings.seats[1], Entrant::Computer);
        assert_eq!(settings.target, 10);
        assert_eq!(settings.variant, Variant::Classic);
    }
}
