//! Twenty-One: a blackjack-style match between a player and a dealer.
//!
//! Each round deals two cards apiece with the dealer's second card face
//! down. The player hits or stays; the dealer then reveals and hits
//! below 17. Busting loses, otherwise the higher total wins and equal
//! totals push. The first seat to the target number of round wins takes
//! the match.
pub mod decision;
pub use decision::*;

pub mod game;
pub use game::*;

pub mod hand;
pub use hand::*;

pub mod outcome;
pub use outcome::*;

pub mod render;

pub mod seat;
pub use seat::*;

pub mod session;
pub use session::*;

pub mod shoe;
pub use shoe::*;

pub mod table;
pub use table::*;

/// Anything that can play the player's seat.
pub trait Player {
    /// Hit or stay, given everything visible at the table.
    fn decide(&mut self, table: &Table) -> anyhow::Result<Decision>;
}
