//! Tic-tac-toe against the computer. X moves first.
pub mod board;
pub use board::*;

pub mod game;
pub use game::*;

pub mod marker;
pub use marker::*;

pub mod session;
pub use session::*;

pub trait Player {
    fn name(&self) -> &str;
    /// The key of an unmarked square to place `marker` on.
    fn square(&mut self, board: &Board, marker: Marker) -> anyhow::Result<usize>;
    /// Humans get the board redrawn before they move.
    fn is_human(&self) -> bool {
        false
    }
}
