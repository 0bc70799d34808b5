use anyhow::Context;
use party_draft::TeamColor;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventConfig {
    #[serde(default = "TeamColor::all")]
    pub colors: Vec<TeamColor>,
    // Fixed seed for reproducible drafts, e.g. when rehearsing an event. Unseeded by default.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for EventConfig {
    fn default() -> Self { EventConfig { colors: TeamColor::all(), seed: None } }
}

impl EventConfig {
    pub fn load(filename: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(filename)
            .with_context(|| format!("Failed to read config file '{filename}'."))?;
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file '{filename}'."))
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

pub fn parse_colors(list: &str) -> anyhow::Result<Vec<TeamColor>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<TeamColor>().with_context(|| format!("Unknown team color '{s}'.")))
        .collect()
}
