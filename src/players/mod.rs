//! The two kinds of seat every game accepts: a person at the terminal
//! and a computer opponent.
pub mod human;
pub use human::*;

pub mod robot;
pub use robot::*;
