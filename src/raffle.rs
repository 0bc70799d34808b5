use std::collections::HashSet;

use itertools::Itertools;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::player::PlayerId;


// No-repeat draw: every entrant wins at most once until the raffle is reset.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Raffle {
    entrants: Vec<PlayerId>,
    drawn: Vec<PlayerId>,
}

impl Raffle {
    // Duplicate entries are collapsed: a player holds a single ticket.
    pub fn new(entrants: impl IntoIterator<Item = PlayerId>) -> Self {
        Raffle {
            entrants: entrants.into_iter().unique().collect(),
            drawn: Vec::new(),
        }
    }

    pub fn entrants(&self) -> &[PlayerId] { &self.entrants }
    pub fn drawn(&self) -> &[PlayerId] { &self.drawn }

    pub fn remaining(&self) -> Vec<&PlayerId> {
        let drawn: HashSet<_> = self.drawn.iter().collect();
        self.entrants.iter().filter(|id| !drawn.contains(id)).collect()
    }

    pub fn draw(&mut self, rng: &mut impl Rng) -> Option<PlayerId> {
        let winner = (*self.remaining().choose(rng)?).clone();
        log::debug!("Raffle draw #{}: {winner}", self.drawn.len() + 1);
        self.drawn.push(winner.clone());
        Some(winner)
    }

    pub fn reset(&mut self) { self.drawn.clear(); }
}
