//! Terminal parlor games.
//!
//! Three small games share a card model, a console layer and a pair of
//! player implementations:
//!
//! - [`twentyone`]: a blackjack-style match against a dealer
//! - [`tictactoe`]: noughts and crosses against the computer
//! - [`rps`]: rock, paper, scissors, optionally with lizard and Spock

pub mod cards;
pub mod config;
pub mod console;
pub mod players;
pub mod rps;
pub mod tictactoe;
pub mod twentyone;

pub use config::Config;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Card values and hand totals in Twenty-One.
pub type Points = u16;
/// Games or rounds won in a match.
pub type Score = usize;

// ============================================================================
// TWENTY-ONE
// ============================================================================
/// Any total above this is a bust.
pub const BUST_LIMIT: Points = 21;
/// Dealer keeps hitting while below this total.
pub const DEALER_STAYS: Points = 17;
/// Value an ace sheds when it would otherwise bust the hand.
pub const ACE_DEMOTION: Points = 10;
/// Cards dealt to each seat at the start of a round.
pub const OPENING_CARDS: usize = 2;
/// Bounds for the number of round wins that take the match.
pub const MIN_TARGET: Score = 1;
pub const MAX_TARGET: Score = 10;

// ============================================================================
// ROCK, PAPER, SCISSORS
// ============================================================================
/// Wins needed under the default settings.
pub const DEFAULT_RPS_TARGET: Score = 10;
/// Name given to the human seat under the default settings.
pub const DEFAULT_HUMAN_NAME: &str = "Player";

// ============================================================================
// ROBOT ROSTERS
// ============================================================================
/// Dealer and computer names for card and hand games.
pub const ROBOT_NAMES: [&str; 5] = ["R2D2", "Hal", "Chappie", "Sonny", "Number 5"];
/// Computer names for tic-tac-toe.
pub const TTT_ROBOT_NAMES: [&str; 6] = ["HAL", "J.A.R.V.I.S", "Ultron", "Cortana", "Braniac", "Bender"];

// ============================================================================
// PRESENTATION
// ============================================================================
/// Default pause between screens.
pub const DEFAULT_PACE: std::time::Duration = std::time::Duration::from_secs(2);
/// Short pauses last this percentage of the pace.
pub const SHORT_PAUSE: u32 = 65;
/// Environment variable consulted when no pace flag is given.
pub const PACE_VAR: &str = "PARLOR_PACE";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` and writes DEBUG to file; the terminal only gets WARN
/// and above so it stays free for the game.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Parse a pace like "500ms", "2s" or "0s" into a Duration.
/// A bare number is read as seconds.
pub fn parse_pace(s: &str) -> Result<std::time::Duration, String> {
    let s = s.trim();
    let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let (num, unit) = s.split_at(split);
    let value = num
        .parse::<u64>()
        .map_err(|_| format!("invalid pace: {:?}", s))?;
    match unit {
        "ms" => Ok(std::time::Duration::from_millis(value)),
        "s" | "" => Ok(std::time::Duration::from_secs(value)),
        "m" => value
            .checked_mul(60)
            .map(std::time::Duration::from_secs)
            .ok_or_else(|| format!("pace too long: {:?}", s)),
        _ => Err(format!("invalid pace unit: {:?}", unit)),
    }
}
