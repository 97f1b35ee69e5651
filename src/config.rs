use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Duration;

/// Runtime settings shared by every game.
#[derive(Debug, Clone)]
pub struct Config {
    /// Length of a full pause between screens.
    pub pace: Duration,
    /// Whether screens are wiped between frames.
    pub clear: bool,
    /// Fixed RNG seed for reproducible deals and robot choices.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pace: crate::DEFAULT_PACE,
            clear: true,
            seed: None,
        }
    }
}

impl Config {
    /// Resolve the pace from an explicit flag, falling back to the
    /// environment and then the default.
    pub fn resolve(pace: Option<&str>, clear: bool, seed: Option<u64>) -> Result<Self, String> {
        let env = std::env::var(crate::PACE_VAR).ok();
        Self::resolve_from(pace, env, clear, seed)
    }

    /// `resolve` with the environment value passed in.
    pub fn resolve_from(
        flag: Option<&str>,
        env: Option<String>,
        clear: bool,
        seed: Option<u64>,
    ) -> Result<Self, String> {
        let pace = match (flag, env) {
            (Some(flag), _) => crate::parse_pace(flag)?,
            (None, Some(var)) => crate::parse_pace(&var)?,
            (None, None) => crate::DEFAULT_PACE,
        };
        Ok(Self { pace, clear, seed })
    }

    /// A fresh RNG. Seeded runs derive a distinct stream per `stream`
    /// so the deck and each robot do not mirror one another.
    pub fn rng(&self, stream: u64) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(stream)),
            None => SmallRng::from_os_rng(),
        }
    }
}
