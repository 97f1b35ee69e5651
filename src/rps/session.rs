use super::Player;
use super::game::Duel;
use super::settings::{Entrant, Kind, Settings};
use super::variant::Variant;
use crate::console::{self, Screen};
use crate::players::{Human, Robot};
use crate::{Config, ROBOT_NAMES};

const ASK_EXPANDED: &str =
    "Would you like to play the expanded game: Rock, Paper, Scissors, Lizard, Spock?";
const ASK_DEFAULTS: &str = "Would you like to play with the default settings?";
const ASK_CHANGE: &str = "Would you like to change the previous settings?";
const ASK_NAME: &str = "What's your name?";
const ASK_TARGET: &str = "How many wins would you like to play to?";
const ASK_PLAY_AGAIN: &str = "Would you like to play again?";

/// Interactive rock, paper, scissors. Settings chosen for the first
/// game carry over until the players ask to change them.
pub struct Session {
    config: Config,
    screen: Screen,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let screen = Screen::new(&config);
        Self { config, screen }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let mut previous: Option<Settings> = None;
        let mut variant;
        let mut games = 0u64;
        loop {
            self.screen.clear();
            variant = Variant::from(console::ask_yes_no(ASK_EXPANDED)?);
            self.screen.say(format!("Welcome to {}!", variant));
            let mut settings = match previous.take() {
                None => self.defaults()?,
                Some(settings) => match console::ask_yes_no(ASK_CHANGE)? {
                    true => self.defaults()?,
                    false => settings,
                },
            };
            settings.variant = variant;
            log::info!("game {} settings {:?}", games, settings);
            let mut duel = Duel::new(self.seat(&settings, games), variant, settings.target);
            duel.play(&self.screen)?;
            previous = Some(settings);
            games += 1;
            if !console::ask_yes_no(ASK_PLAY_AGAIN)? {
                break;
            }
        }
        self.screen.say(format!("Thanks for playing {}. Good bye!", variant));
        Ok(())
    }

    fn defaults(&self) -> anyhow::Result<Settings> {
        match console::ask_yes_no(ASK_DEFAULTS)? {
            true => Ok(Settings::default()),
            false => self.custom(),
        }
    }

    /// Ask each seat's kind (and a human's name), then the target.
    fn custom(&self) -> anyhow::Result<Settings> {
        let mut seats = [Entrant::Computer, Entrant::Computer];
        for (i, seat) in seats.iter_mut().enumerate() {
            let prompt = format!("Is player {} a human or a computer? (h/c)", i + 1);
            *seat = match console::ask_parsed(&prompt, |s| Kind::try_from(s))? {
                Kind::Human => Entrant::Human(console::ask_name(ASK_NAME)?),
                Kind::Computer => Entrant::Computer,
            };
        }
        let target = console::ask_positive(ASK_TARGET)?;
        Ok(Settings {
            variant: Variant::default(),
            seats,
            target,
        })
    }

    /// Players for one game. Computers get a fresh name and RNG stream.
    fn seat(&self, settings: &Settings, games: u64) -> [Box<dyn Player>; 2] {
        let entrant = |i: usize| -> Box<dyn Player> {
            match &settings.seats[i] {
                Entrant::Human(name) => Box::new(Human::new(name.as_str())),
                Entrant::Computer => Box::new(Robot::new(
                    &ROBOT_NAMES,
                    self.config.rng(2 * games + i as u64),
                )),
            }
        };
        [entrant(0), entrant(1)]
    }
}
