use crate::console;
use crate::rps::{self, Throw, Variant};
use crate::tictactoe::{self, Board, Marker};
use crate::twentyone::{self, Decision, Table};

/// A person at the terminal. Every decision is a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Human {
    name: String,
}

impl Human {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
    /// Ask for a non-empty name.
    pub fn ask(prompt: &str) -> anyhow::Result<Self> {
        Ok(Self::new(console::ask_name(prompt)?))
    }
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parse a square key that is still open.
    pub fn open_square(answer: &str, open: &[usize]) -> Result<usize, String> {
        answer
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|key| open.contains(key))
            .ok_or_else(|| String::from("Sorry, that's not a valid choice."))
    }
}

impl twentyone::Player for Human {
    fn decide(&mut self, table: &Table) -> anyhow::Result<Decision> {
        let hand = table.player().hand();
        let choices = Decision::all();
        let labels = choices.iter().map(Decision::label).collect::<Vec<&str>>();
        let selection = console::ask_choice(
            &format!("YOU HOLD {} ({})", hand, hand.total()),
            labels.as_slice(),
        )?;
        Ok(choices[selection])
    }
}

impl tictactoe::Player for Human {
    fn name(&self) -> &str {
        &self.name
    }
    fn square(&mut self, board: &Board, marker: Marker) -> anyhow::Result<usize> {
        let open = board.unmarked();
        console::ask_parsed(
            &format!(
                "{}, place your {} on {}",
                self.name,
                marker,
                console::list_or(&open)
            ),
            |s| Self::open_square(s, &open),
        )
    }
    fn is_human(&self) -> bool {
        true
    }
}

impl rps::Player for Human {
    fn name(&self) -> &str {
        &self.name
    }
    fn throw(&mut self, variant: Variant) -> anyhow::Result<Throw> {
        console::ask_parsed(
            &format!(
                "{}, please choose {}",
                self.name,
                console::list_or(variant.throws())
            ),
            |s| variant.parse(s),
        )
    }
}
