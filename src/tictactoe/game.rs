use super::Player;
use super::board::Board;
use super::marker::Marker;
use crate::Score;
use crate::console::Screen;

/// One board, played to a win or a full grid.
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    turn: Marker,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn turn(&self) -> Marker {
        self.turn
    }

    /// Mark `key` for whoever's turn it is and pass the turn.
    pub fn apply(&mut self, key: usize) -> Result<(), String> {
        self.board.mark(key, self.turn)?;
        self.turn = self.turn.other();
        Ok(())
    }

    /// Alternate moves until the board is decided. `x` and `o` play
    /// their respective markers. The board is redrawn under `caption`
    /// before each human move. Returns the winning marker, or `None`
    /// for a tie.
    pub fn play(
        &mut self,
        x: &mut dyn Player,
        o: &mut dyn Player,
        screen: &Screen,
        caption: &str,
    ) -> anyhow::Result<Option<Marker>> {
        while !self.board.is_over() {
            let player: &mut dyn Player = match self.turn {
                Marker::X => &mut *x,
                Marker::O => &mut *o,
            };
            if player.is_human() {
                screen.clear();
                screen.say(caption);
                screen.blank();
                screen.print(&self.board);
            }
            let key = player.square(&self.board, self.turn)?;
            log::debug!("{} ({}) takes {}", player.name(), self.turn, key);
            self.apply(key).map_err(anyhow::Error::msg)?;
        }
        Ok(self.board.winner())
    }
}

/// Results across a sitting, from the human's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: Score,
    pub losses: Score,
    pub ties: Score,
}

impl Tally {
    pub fn record(&mut self, winner: Option<Marker>, human: Marker) {
        match winner {
            Some(m) if m == human => self.wins += 1,
            Some(_) => self.losses += 1,
            None => self.ties += 1,
        }
    }
    pub fn games(&self) -> Score {
        self.wins + self.losses + self.ties
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Wins: {}  Losses: {}  Ties: {}",
            self.wins, self.losses, self.ties
        )
    }
}
