// Test utilities that cannot be moved to the "tests" folder, because stress_test uses them.

use std::collections::HashMap;

use itertools::Itertools;
use rand::{Rng, SeedableRng};
use strum::IntoEnumIterator;

use crate::gender_targets::{compute_gender_targets, count_by_gender};
use crate::matchup::Matchup;
use crate::player::{Gender, Player, PlayerId};
use crate::team::{Team, TeamColor};


// In theory random tests verify statistical properties that should always hold, but let's fix
// the seed to avoid sporadic failures.
pub fn deterministic_rng() -> rand::rngs::StdRng { rand::rngs::StdRng::from_seed([0; 32]) }

const NAMES: [&str; 12] = [
    "Alice", "Bob", "Charlie", "Dave", "Erin", "Frank", "Grace", "Heidi", "Ivan", "Judy", "Mallory",
    "Zoe",
];

pub fn random_roster(rng: &mut impl Rng, num_players: usize) -> Vec<Player> {
    let genders = Gender::iter().collect_vec();
    (0..num_players)
        .map(|idx| {
            // Mostly male and female, like a real party.
            let gender = if rng.random_bool(0.1) {
                Gender::NonBinary
            } else {
                genders[rng.random_range(0..2)]
            };
            let name = format!("{} {idx}", NAMES[rng.random_range(0..NAMES.len())]);
            let mut player = Player::new(format!("p{idx}"), name, gender);
            player.no_gender_restriction = rng.random_bool(0.15);
            player.is_helper = rng.random_bool(0.2);
            player
        })
        .collect()
}

pub fn random_colors(rng: &mut impl Rng) -> Vec<TeamColor> {
    let num_colors = rng.random_range(1..=TeamColor::iter().len());
    TeamColor::iter().take(num_colors).collect()
}

pub fn check_gender_targets(roster: &[Player], colors: &[TeamColor]) -> Result<(), String> {
    let targets = compute_gender_targets(roster, colors);
    let totals = count_by_gender(roster);
    for gender in Gender::iter() {
        let per_team = colors.iter().map(|c| targets[c][gender]).collect_vec();
        if per_team.iter().sum::<usize>() != totals[gender] {
            return Err(format!("{gender:?} targets {per_team:?} don't add up to {}", totals[gender]));
        }
        if let itertools::MinMaxResult::MinMax(min, max) = per_team.iter().minmax() {
            if max - min > 1 {
                return Err(format!("{gender:?} targets {per_team:?} are unfair"));
            }
        }
    }
    Ok(())
}

pub fn check_allocation(roster: &[Player], teams: &[Team]) -> Result<(), String> {
    let mut seen: HashMap<&PlayerId, TeamColor> = HashMap::new();
    for team in teams {
        for p in &team.members {
            if let Some(other) = seen.insert(&p.id, team.color) {
                return Err(format!("Player {} is on {other} and {}", p.id, team.color));
            }
        }
    }
    if let Some(missing) = roster.iter().find(|p| !seen.contains_key(&p.id)) {
        return Err(format!("Player {} was not assigned", missing.id));
    }
    if seen.len() != roster.len() {
        return Err(format!("Teams have {} players, roster has {}", seen.len(), roster.len()));
    }
    Ok(())
}

// Checks the structural properties of a generated playing order; the placement of individual
// players is randomized and left to dedicated tests.
pub fn check_matchups(
    teams: &[Team], colors: &[TeamColor], matchups: &[Matchup],
) -> Result<(), String> {
    if matchups.is_empty() {
        return Err("No rounds".to_owned());
    }
    let mut appearances: HashMap<&PlayerId, usize> = HashMap::new();
    for (idx, m) in matchups.iter().enumerate() {
        if m.id != idx + 1 {
            return Err(format!("Round #{idx} has id {}", m.id));
        }
        let round_colors = m.players.iter().map(|s| s.color).collect_vec();
        if round_colors != colors {
            return Err(format!("Round {} has colors {round_colors:?}", m.id));
        }
        if m.is_empty() && matchups.len() > 1 {
            return Err(format!("Round {} is empty", m.id));
        }
        for slot in &m.players {
            let Some(p) = &slot.player else { continue };
            let on_team = teams.iter().any(|t| t.color == slot.color && t.member(&p.id).is_some());
            if !on_team {
                return Err(format!("Round {}: {} doesn't play for {}", m.id, p.id, slot.color));
            }
            *appearances.entry(&p.id).or_default() += 1;
        }
    }
    for team in teams.iter().filter(|t| colors.contains(&t.color)) {
        for p in &team.members {
            match appearances.get(&p.id) {
                Some(1) => {}
                Some(n) => return Err(format!("{} plays {n} times", p.id)),
                None => return Err(format!("{} never plays", p.id)),
            }
        }
    }
    Ok(())
}
