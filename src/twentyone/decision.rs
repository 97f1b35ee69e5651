use colored::Colorize;

/// What the player does on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Hit,
    Stay,
}

impl Decision {
    pub fn all() -> [Self; 2] {
        [Decision::Hit, Decision::Stay]
    }
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Hit => "Hit",
            Decision::Stay => "Stay",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Decision::Hit => write!(f, "{}", "HIT".yellow()),
            Decision::Stay => write!(f, "{}", "STAY".cyan()),
        }
    }
}
