use super::hand::Hand;
use crate::Score;

/// A named participant: their current hand and the rounds they have won.
#[derive(Debug, Clone)]
pub struct Seat {
    name: String,
    hand: Hand,
    score: Score,
}

impl Seat {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::empty(),
            score: 0,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn increment(&mut self) {
        self.score += 1;
    }
    pub fn fold(&mut self) {
        self.hand = Hand::empty();
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
