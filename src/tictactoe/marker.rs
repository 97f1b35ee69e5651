#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    #[default]
    X,
    O,
}

impl Marker {
    pub fn all() -> [Self; 2] {
        [Marker::X, Marker::O]
    }
    pub fn other(&self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// str isomorphism, case-insensitive
impl TryFrom<&str> for Marker {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "X" => Ok(Marker::X),
            "O" => Ok(Marker::O),
            _ => Err(String::from("Sorry, that's not a valid choice.")),
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Marker::X => "X",
            Marker::O => "O",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_case() {
        assert_eq!(Marker::try_from("x"), Ok(Marker::X));
        assert_eq!(Marker::try_from(" O "), Ok(Marker::O));
        assert!(Marker::try_from("0").is_err());
    }

    #[test]
    fn other_flips() {
        assert_eq!(Marker::X.other(), Marker::O);
        assert_eq!(Marker::O.other().other(), Marker::O);
    }
}
