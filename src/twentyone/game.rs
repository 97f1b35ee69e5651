use super::Player;
use super::decision::Decision;
use super::outcome::{Outcome, Side};
use super::render;
use super::table::Table;
use crate::console::{Screen, pluralize};

/// Drives rounds on a table, drawing each step to a screen.
/// Wraps the table the way a dealer wraps a game.
#[derive(Debug)]
pub struct Game<'t> {
    table: &'t mut Table,
    screen: &'t Screen,
}

impl<'t> Game<'t> {
    pub fn new(table: &'t mut Table, screen: &'t Screen) -> Self {
        Self { table, screen }
    }
    pub fn table(&self) -> &Table {
        self.table
    }

    /// Play rounds until one side reaches the target; returns that side.
    pub fn play(&mut self, player: &mut dyn Player) -> anyhow::Result<Side> {
        loop {
            self.round(player)?;
            if let Some(champion) = self.table.champion() {
                self.finale(champion);
                return Ok(champion);
            }
            self.table.next_round();
        }
    }

    /// Deal, player turn, dealer turn unless the player busted, settle.
    pub fn round(&mut self, player: &mut dyn Player) -> anyhow::Result<Outcome> {
        self.table.deal()?;
        self.player_turn(player)?;
        if !self.table.is_bust(Side::Player) {
            self.dealer_turn()?;
        }
        let outcome = self.table.settle();
        self.announce(outcome);
        Ok(outcome)
    }

    fn player_turn(&mut self, player: &mut dyn Player) -> anyhow::Result<()> {
        let name = self.table.player().name().to_string();
        self.draw(None);
        self.screen.say(format!("{}, it's your turn.", name));
        loop {
            let decision = player.decide(self.table)?;
            log::debug!("{} {:?} on {}", name, decision, self.table.player().hand().total());
            match decision {
                Decision::Stay => break,
                Decision::Hit => {
                    self.table.hit(Side::Player)?;
                    self.draw(Some(&format!("{} hit!", name)));
                    if self.table.is_bust(Side::Player) {
                        return Ok(());
                    }
                }
            }
        }
        self.draw(Some(&format!("{} stays!", name)));
        Ok(())
    }

    fn dealer_turn(&mut self) -> anyhow::Result<()> {
        let name = self.table.dealer().name().to_string();
        self.table.reveal();
        self.draw(None);
        self.screen
            .say(format!("It's Dealer {}'s turn. Revealing hole card...", name));
        self.screen.pause();
        while self.table.dealer_should_hit() {
            self.table.hit(Side::Dealer)?;
            self.draw(Some(&format!("{} hit!", name)));
            if self.table.is_bust(Side::Dealer) {
                return Ok(());
            }
        }
        self.draw(Some(&format!("{} stays!", name)));
        Ok(())
    }

    fn announce(&self, outcome: Outcome) {
        self.draw(None);
        self.screen.say(self.verdict(outcome));
        self.screen.pause();
    }

    /// Round result in words.
    pub fn verdict(&self, outcome: Outcome) -> String {
        match (outcome.winner(), outcome.loser()) {
            (Some(w), Some(l)) if outcome.is_bust() => format!(
                "{} bust. {} wins!",
                self.table.seat(l),
                self.table.seat(w)
            ),
            (Some(w), Some(l)) => {
                let (w, l) = (self.table.seat(w), self.table.seat(l));
                format!(
                    "{}'s score of {} beats {}'s score of {}. {} wins!",
                    w,
                    w.hand().total(),
                    l,
                    l.hand().total(),
                    w
                )
            }
            _ => String::from("It's a push!"),
        }
    }

    fn finale(&self, champion: Side) {
        let message = self.farewell(champion);
        log::info!("{}", message);
        self.draw(Some(&message));
    }

    /// Closing line naming the match winner.
    pub fn farewell(&self, champion: Side) -> String {
        let target = self.table.target();
        let rounds = self.table.round();
        format!(
            "{} won {} {} after {} {} and is the final winner of Twenty-One!",
            self.table.seat(champion),
            target,
            pluralize("game", target),
            rounds,
            pluralize("round", rounds)
        )
    }

    /// Clear, draw the table, and optionally narrate one line.
    fn draw(&self, message: Option<&str>) {
        self.screen.clear();
        self.screen.print(render::frame(self.table));
        if let Some(message) = message {
            self.screen.say(message);
            self.screen.short_pause();
        }
    }
}
