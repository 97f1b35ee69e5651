use super::game::{Game, Tally};
use super::marker::Marker;
use crate::console::{self, Screen};
use crate::players::{Human, Robot};
use crate::{Config, TTT_ROBOT_NAMES};
use colored::Colorize;

const WELCOME: &str = "Welcome to Tic Tac Toe!";
const GOODBYE: &str = "Thanks for playing Tic Tac Toe! Goodbye!";
const ASK_NAME: &str = "What's your name?";
const ASK_PLAY_AGAIN: &str = "Would you like to play again?";
const PLAY_AGAIN: &str = "Let's play again!";

/// Interactive tic-tac-toe: pick a marker, then play boards against
/// the computer until the human stops.
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
        self.screen.clear();
        self.screen.say(WELCOME);
        self.screen.blank();
        let mut human = Human::ask(ASK_NAME)?;
        let mut robot = Robot::new(&TTT_ROBOT_NAMES, self.config.rng(0));
        let marker = Self::choose(&human)?;
        let caption = format!("You're {}. {} is {}.", marker, robot.name(), marker.other());
        let mut tally = Tally::default();
        loop {
            let mut game = Game::new();
            let winner = match marker {
                Marker::X => game.play(&mut human, &mut robot, &self.screen, &caption)?,
                Marker::O => game.play(&mut robot, &mut human, &self.screen, &caption)?,
            };
            tally.record(winner, marker);
            log::info!("board {} won by {:?}  {}", tally.games(), winner, tally);
            self.screen.clear();
            self.screen.say(&caption);
            self.screen.blank();
            self.screen.print(game.board());
            self.screen.say(Self::verdict(winner, marker));
            self.screen.say(&tally);
            if !console::ask_yes_no(ASK_PLAY_AGAIN)? {
                break;
            }
            self.screen.clear();
            self.screen.say(PLAY_AGAIN);
            self.screen.blank();
        }
        self.screen.say(GOODBYE);
        Ok(())
    }

    /// Human picks a marker; the computer gets the other one.
    fn choose(human: &Human) -> anyhow::Result<Marker> {
        let markers = Marker::all();
        console::ask_parsed(
            &format!("{}, choose {}", human.name(), console::list_or(&markers)),
            |s| Marker::try_from(s),
        )
    }

    pub fn verdict(winner: Option<Marker>, human: Marker) -> String {
        match winner {
            Some(m) if m == human => "You won!".green().to_string(),
            Some(_) => "Computer won!".red().to_string(),
            None => String::from("It's a tie!"),
        }
    }
}
