use super::Player;
use super::game::Game;
use super::render;
use super::seat::Seat;
use super::shoe::Shuffled;
use super::table::Table;
use crate::console::{self, Screen, banner};
use crate::players::{Human, Robot};
use crate::{Config, MAX_TARGET, MIN_TARGET, ROBOT_NAMES};
use const_format::formatcp;

const ASK_NAME: &str = "What's your name?";
const ASK_TARGET: &str = formatcp!(
    "How many round wins take the match? ({}-{})",
    MIN_TARGET,
    MAX_TARGET
);
const ASK_RULES: &str = "Would you like to read the rules?";
const ASK_RULES_AGAIN: &str = "Would you like to read the rules again?";
const ASK_PLAY_AGAIN: &str = "Would you like to play again?";
const READY: &str = "Press Enter when you're ready to start";
const START: &str = "Let's get started!";
const GOODBYE: &str = "Thanks for playing Twenty-One. Goodbye!";

/// Interactive Twenty-One at the terminal: setup questions, one match
/// per loop, and an offer to play again.
/// With `autoplay` a robot takes the player's seat and the rules and
/// ready prompts are skipped.
pub struct Session {
    config: Config,
    screen: Screen,
    autoplay: bool,
}

impl Session {
    pub fn new(config: Config, autoplay: bool) -> Self {
        let screen = Screen::new(&config);
        Self {
            config,
            screen,
            autoplay,
        }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        self.welcome();
        let mut matches = 0u64;
        loop {
            let (mut table, mut player) = self.setup(matches)?;
            let champion = Game::new(&mut table, &self.screen).play(player.as_mut())?;
            log::info!("match {} won by {}", matches, table.seat(champion));
            matches += 1;
            if !console::ask_yes_no(ASK_PLAY_AGAIN)? {
                break;
            }
        }
        self.screen.say(GOODBYE);
        Ok(())
    }

    fn welcome(&self) {
        self.screen.clear();
        self.screen.print(banner::title(
            render::WELCOME_WIDTH,
            &format!("WELCOME TO {}!", render::GAME_TITLE),
        ));
        self.screen.blank();
        self.screen.pause();
    }

    /// Names, target, optional rules, then wait for the player.
    fn setup(&self, matches: u64) -> anyhow::Result<(Table, Box<dyn Player>)> {
        self.screen.clear();
        let stream = 3 * matches;
        let shoe = Shuffled::new(self.config.rng(stream));
        let dealer = Robot::new(&ROBOT_NAMES, self.config.rng(stream + 1));
        let (name, player): (String, Box<dyn Player>) = match self.autoplay {
            true => {
                let robot = Robot::rival(&ROBOT_NAMES, dealer.name(), self.config.rng(stream + 2));
                (robot.name().to_string(), Box::new(robot) as Box<dyn Player>)
            }
            false => {
                let human = Human::ask(ASK_NAME)?;
                (human.name().to_string(), Box::new(human) as Box<dyn Player>)
            }
        };
        let target = console::ask_number(ASK_TARGET, MIN_TARGET..=MAX_TARGET)?;
        if !self.autoplay {
            self.screen.clear();
            if console::ask_yes_no(ASK_RULES)? {
                self.rules()?;
            }
            self.screen.say(START);
            console::wait_for_enter(READY)?;
        }
        log::info!("{} vs dealer {} to {}", name, dealer.name(), target);
        let table = Table::new(Seat::new(name), Seat::new(dealer.name()), Box::new(shoe), target);
        Ok((table, player))
    }

    fn rules(&self) -> anyhow::Result<()> {
        loop {
            self.screen.clear();
            self.screen.print(render::RULES_OBJECTIVE);
            console::wait_for_enter(READY)?;
            self.screen.clear();
            self.screen.print(render::RULES_GAMEPLAY);
            if !console::ask_yes_no(ASK_RULES_AGAIN)? {
                return Ok(());
            }
        }
    }
}
