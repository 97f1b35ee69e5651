use crate::Config;
use dialoguer::console::Term;
use std::fmt::Display;
use std::time::Duration;

/// Where a game draws its frames.
///
/// A quiet screen swallows output and never sleeps, which lets the game
/// drivers run inside tests.
#[derive(Debug, Clone)]
pub struct Screen {
    pace: Duration,
    clear: bool,
    quiet: bool,
}

impl Screen {
    pub fn new(config: &Config) -> Self {
        Self {
            pace: config.pace,
            clear: config.clear,
            quiet: false,
        }
    }
    pub fn quiet() -> Self {
        Self {
            pace: Duration::ZERO,
            clear: false,
            quiet: true,
        }
    }

    pub fn print(&self, text: impl Display) {
        if !self.quiet {
            println!("{}", text);
        }
    }
    /// Game narration, marked with the `>>` prompt.
    pub fn say(&self, text: impl Display) {
        self.print(Self::line(text));
    }
    pub fn line(text: impl Display) -> String {
        format!(">> {}", text)
    }
    pub fn blank(&self) {
        self.print("");
    }
    pub fn clear(&self) {
        if self.clear && !self.quiet {
            if let Err(e) = Term::stdout().clear_screen() {
                log::warn!("clear screen failed: {}", e);
            }
        }
    }
    pub fn pause(&self) {
        self.sleep(self.pace);
    }
    pub fn short_pause(&self) {
        self.sleep(self.short());
    }
    /// Length of a short pause.
    pub fn short(&self) -> Duration {
        match self.pace.checked_mul(crate::SHORT_PAUSE) {
            Some(scaled) => scaled / 100,
            None => self.pace / 100 * crate::SHORT_PAUSE,
        }
    }

    fn sleep(&self, duration: Duration) {
        if !self.quiet && !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}
