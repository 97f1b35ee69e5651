use super::throw::Throw;

/// Which throws are in play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    #[default]
    Classic,
    Expanded,
}

impl Variant {
    pub fn throws(&self) -> &'static [Throw] {
        const ALL: [Throw; 5] = [
            Throw::Rock,
            Throw::Paper,
            Throw::Scissors,
            Throw::Lizard,
            Throw::Spock,
        ];
        match self {
            Variant::Classic => &ALL[..3],
            Variant::Expanded => &ALL[..],
        }
    }
    pub fn allows(&self, throw: Throw) -> bool {
        self.throws().contains(&throw)
    }
    pub fn title(&self) -> &'static str {
        match self {
            Variant::Classic => "Rock, Paper, Scissors",
            Variant::Expanded => "Rock, Paper, Scissors, Lizard, Spock",
        }
    }
    /// Parse a throw that must also be legal in this variant.
    pub fn parse(&self, s: &str) -> Result<Throw, String> {
        Throw::try_from(s).and_then(|throw| match self.allows(throw) {
            true => Ok(throw),
            false => Err(String::from("Sorry, invalid choice.")),
        })
    }
}

impl From<bool> for Variant {
    fn from(expanded: bool) -> Self {
        match expanded {
            true => Variant::Expanded,
            false => Variant::Classic,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.title())
    }
}
