//! Rock, paper, scissors, with an expanded variant that adds lizard and
//! Spock. Either seat may be a human or the computer.
pub mod game;
pub use game::*;

pub mod session;
pub use session::*;

pub mod settings;
pub use settings::*;

pub mod throw;
pub use throw::*;

pub mod variant;
pub use variant::*;

pub trait Player {
    fn name(&self) -> &str;
    /// A throw legal in `variant`.
    fn throw(&mut self, variant: Variant) -> anyhow::Result<Throw>;
}
