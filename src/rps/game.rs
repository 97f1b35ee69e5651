use super::Player;
use super::throw::Throw;
use super::variant::Variant;
use crate::Score;
use crate::console::Screen;

/// Player 1 and Player 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    P1,
    P2,
}

impl Turn {
    pub fn all() -> [Self; 2] {
        [Turn::P1, Turn::P2]
    }
    pub fn index(&self) -> usize {
        match self {
            Turn::P1 => 0,
            Turn::P2 => 1,
        }
    }
    pub fn other(&self) -> Self {
        match self {
            Turn::P1 => Turn::P2,
            Turn::P2 => Turn::P1,
        }
    }
}

/// Both throws of a round and who took it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub throws: [Throw; 2],
    pub winner: Option<Turn>,
}

impl Round {
    pub fn judge(p1: Throw, p2: Throw) -> Self {
        let winner = match (p1.beats(&p2), p2.beats(&p1)) {
            (true, _) => Some(Turn::P1),
            (_, true) => Some(Turn::P2),
            _ => None,
        };
        Self {
            throws: [p1, p2],
            winner,
        }
    }
    pub fn throw(&self, turn: Turn) -> Throw {
        self.throws[turn.index()]
    }
}

/// Two players throwing until one reaches the target.
pub struct Duel {
    players: [Box<dyn Player>; 2],
    scores: [Score; 2],
    variant: Variant,
    target: Score,
    rounds: usize,
}

impl Duel {
    /// A target of zero is raised to one so that someone has to win.
    pub fn new(players: [Box<dyn Player>; 2], variant: Variant, target: Score) -> Self {
        Self {
            players,
            scores: [0; 2],
            variant,
            target: target.max(1),
            rounds: 0,
        }
    }
    pub fn name(&self, turn: Turn) -> &str {
        self.players[turn.index()].name()
    }
    pub fn score(&self, turn: Turn) -> Score {
        self.scores[turn.index()]
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    pub fn target(&self) -> Score {
        self.target
    }
    /// The first player to reach the target.
    pub fn champion(&self) -> Option<Turn> {
        Turn::all()
            .into_iter()
            .find(|turn| self.score(*turn) >= self.target)
    }

    /// Both players throw, the throws are announced and the winner of
    /// the round scores a point.
    pub fn round(&mut self, screen: &Screen) -> anyhow::Result<Round> {
        let mut throws = [Throw::Rock; 2];
        for turn in Turn::all() {
            let throw = self.players[turn.index()].throw(self.variant)?;
            if !self.variant.allows(throw) {
                anyhow::bail!("{} is not part of {}", throw, self.variant);
            }
            screen.say(format!("{} chose {}.", self.name(turn), throw));
            throws[turn.index()] = throw;
        }
        let round = Round::judge(throws[0], throws[1]);
        self.rounds += 1;
        match round.winner {
            Some(turn) => {
                self.scores[turn.index()] += 1;
                let (a, b) = (round.throw(turn), round.throw(turn.other()));
                let verb = a.verb(&b).unwrap_or("beats");
                screen.say(format!("{} {} {}.", a, verb, b));
                screen.say(format!("{} won!", self.name(turn)));
            }
            None => screen.say("It's a tie!"),
        }
        log::debug!(
            "round {}: {} vs {} -> {:?}",
            self.rounds,
            throws[0],
            throws[1],
            round.winner
        );
        screen.say(self.scoreline());
        screen.blank();
        screen.short_pause();
        Ok(round)
    }

    /// Rounds until somebody reaches the target.
    pub fn play(&mut self, screen: &Screen) -> anyhow::Result<Turn> {
        screen.say(format!("First to {} wins!", self.target));
        screen.blank();
        loop {
            if let Some(champion) = self.champion() {
                log::info!(
                    "{} takes {} after {} rounds",
                    self.name(champion),
                    self.variant,
                    self.rounds
                );
                screen.say(format!(
                    "{} reached {} and wins the match!",
                    self.name(champion),
                    self.target
                ));
                return Ok(champion);
            }
            self.round(screen)?;
        }
    }

    fn scoreline(&self) -> String {
        format!(
            "{} {} - {} {}",
            self.name(Turn::P1),
            self.score(Turn::P1),
            self.score(Turn::P2),
            self.name(Turn::P2)
        )
    }
}
