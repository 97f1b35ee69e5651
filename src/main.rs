//! Parlor Binary
//!
//! Pick a game by subcommand. Pace, screen clearing and the RNG seed are
//! shared by every game.
//!
//! Options: --pace, --no-clear, --seed

use clap::Parser;
use clap::Subcommand;
use parlor::Config;

#[derive(Parser)]
#[command(author, version, about = "Terminal parlor games", long_about = None)]
struct Args {
    /// Pause between screens, e.g. "500ms" or "2s" (falls back to PARLOR_PACE)
    #[arg(long, global = true)]
    pace: Option<String>,
    /// Never wipe the terminal between frames
    #[arg(long, global = true)]
    no_clear: bool,
    /// Seed for reproducible deals and computer choices
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[command(subcommand)]
    game: Game,
}

#[derive(Subcommand)]
enum Game {
    #[command(about = "Twenty-One against a computer dealer", alias = "21")]
    TwentyOne {
        /// Let a robot take the player's seat
        #[arg(long)]
        autoplay: bool,
    },
    #[command(about = "Tic-tac-toe against the computer", alias = "ttt")]
    TicTacToe,
    #[command(
        about = "Rock, paper, scissors (optionally lizard, Spock)",
        alias = "rpsls"
    )]
    Rps,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    parlor::log()?;
    let config = Config::resolve(args.pace.as_deref(), !args.no_clear, args.seed)
        .map_err(anyhow::Error::msg)?;
    log::info!("starting with {:?}", config);
    match args.game {
        Game::TwentyOne { autoplay } => parlor::twentyone::Session::new(config, autoplay).run(),
        Game::TicTacToe => parlor::tictactoe::Session::new(config).run(),
        Game::Rps => parlor::rps::Session::new(config).run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn global_flags_follow_the_game() {
        let args = Args::try_parse_from(["parlor", "ttt", "--seed", "3", "--no-clear"]).unwrap();
        assert!(matches!(args.game, Game::TicTacToe));
        assert_eq!(args.seed, Some(3));
        assert!(args.no_clear);
        let args = Args::try_parse_from(["parlor", "--pace", "0s", "21", "--autoplay"]).unwrap();
        assert!(matches!(args.game, Game::TwentyOne { autoplay: true }));
        assert_eq!(args.pace.as_deref(), Some("0s"));
    }

    #[test]
    fn help_is_handled_by_the_parser() {
        let err = Args::try_parse_from(["parlor", "--help"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
