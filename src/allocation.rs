// Drafting a flat roster into colored teams.
//
// Teams are drafted one at a time in color order. Each draft tops the team up to its per-gender
// targets with random picks, then evens out team sizes with flexible players. The last pending
// team takes whatever is left, so every roster player ends up on exactly one team (unless there
// are no teams at all).

use std::collections::VecDeque;

use enum_map::enum_map;
use itertools::Itertools;
use rand::prelude::*;
use strum::IntoEnumIterator;

use crate::gender_targets::{compute_gender_targets, count_by_gender, gender_based_size};
use crate::player::{Gender, Player};
use crate::team::{Team, TeamColor, empty_teams, find_team, find_team_mut};


#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DraftStep {
    pub color: TeamColor,
    pub batch: Vec<Player>,
    // The team was the last pending one and received the rest of the pool without balancing.
    pub took_remainder: bool,
}

fn shuffled_indices(
    pool: &[Player], used: &[bool], filter: impl Fn(&Player) -> bool, rng: &mut impl Rng,
) -> Vec<usize> {
    let mut indices = pool
        .iter()
        .enumerate()
        .filter(|&(idx, p)| !used[idx] && filter(p))
        .map(|(idx, _)| idx)
        .collect_vec();
    indices.shuffle(rng);
    indices
}

fn pick_batch_indices(
    pool: &[Player], color: TeamColor, teams: &[Team], rng: &mut impl Rng,
) -> Vec<usize> {
    // Targets are derived from the whole roster, assigned or not, so they don't drift while
    // the draft progresses.
    let roster =
        pool.iter().chain(teams.iter().flat_map(|t| t.members.iter())).cloned().collect_vec();
    let colors = teams.iter().map(|t| t.color).collect_vec();
    let targets = compute_gender_targets(&roster, &colors);
    let target = targets.get(&color).copied().unwrap_or(enum_map! { _ => 0 });
    let assigned = find_team(teams, color)
        .map(|t| count_by_gender(&t.members))
        .unwrap_or(enum_map! { _ => 0 });

    let mut used = vec![false; pool.len()];
    let mut batch = Vec::new();
    for gender in Gender::iter() {
        let needed = target[gender].saturating_sub(assigned[gender]);
        if needed == 0 {
            continue;
        }
        let candidates =
            shuffled_indices(pool, &used, |p| !p.is_flexible() && p.gender == gender, rng);
        if candidates.len() < needed {
            log::warn!(
                "Team {color} needs {needed} {gender:?} player(s), only {} available",
                candidates.len()
            );
        }
        for idx in candidates.into_iter().take(needed) {
            used[idx] = true;
            batch.push(idx);
        }
    }

    let max_size = targets.values().map(gender_based_size).max().unwrap_or(0);
    let shortage = max_size.saturating_sub(gender_based_size(&target));
    if shortage > 0 {
        let flexible = shuffled_indices(pool, &used, Player::is_flexible, rng);
        for idx in flexible.into_iter().take(shortage) {
            used[idx] = true;
            batch.push(idx);
        }
    }
    batch
}

// Picks the players the team of the given color should receive next. `teams` is the current
// snapshot of every team (including the one being drafted); `pool` holds unassigned players.
//
// Gender slots that cannot be filled are left empty rather than backfilled with other genders.
pub fn pick_batch(
    pool: &[Player], color: TeamColor, teams: &[Team], rng: &mut impl Rng,
) -> Vec<Player> {
    pick_batch_indices(pool, color, teams, rng)
        .into_iter()
        .map(|idx| pool[idx].clone())
        .collect()
}

#[derive(Clone, Debug)]
pub struct TeamDraft {
    teams: Vec<Team>,
    pool: Vec<Player>,
    pending: VecDeque<TeamColor>,
}

impl TeamDraft {
    pub fn new(players: Vec<Player>, colors: &[TeamColor]) -> Self {
        let colors = colors.iter().copied().unique().collect_vec();
        TeamDraft {
            teams: empty_teams(&colors),
            pool: players,
            pending: colors.into_iter().collect(),
        }
    }

    // Continues a draft that was interrupted. Teams that already have members are done.
    pub fn resume(teams: Vec<Team>, pool: Vec<Player>) -> Self {
        let pending = teams.iter().filter(|t| t.is_empty()).map(|t| t.color).unique().collect();
        TeamDraft { teams, pool, pending }
    }

    pub fn teams(&self) -> &[Team] { &self.teams }
    pub fn pool(&self) -> &[Player] { &self.pool }
    pub fn into_teams(self) -> Vec<Team> { self.teams }

    pub fn next_color(&self) -> Option<TeamColor> {
        if self.is_finished() { None } else { self.pending.front().copied() }
    }

    pub fn is_finished(&self) -> bool { self.pending.is_empty() || self.pool.is_empty() }

    pub fn draft_next_team(&mut self, rng: &mut impl Rng) -> Option<DraftStep> {
        if self.is_finished() {
            return None;
        }
        let color = self.pending.pop_front()?;
        let took_remainder = self.pending.is_empty();
        let batch = if took_remainder {
            std::mem::take(&mut self.pool)
        } else {
            let mut indices = pick_batch_indices(&self.pool, color, &self.teams, rng);
            // Remove from the back so that the remaining indices stay valid.
            indices.sort_unstable_by(|a, b| b.cmp(a));
            let mut batch = indices.into_iter().map(|idx| self.pool.remove(idx)).collect_vec();
            batch.reverse();
            batch
        };
        log::debug!(
            "Drafted {} player(s) into {color}{}; {} left in pool",
            batch.len(),
            if took_remainder { " (remainder)" } else { "" },
            self.pool.len()
        );
        // `pending` only ever holds colors of existing teams.
        if let Some(team) = find_team_mut(&mut self.teams, color) {
            team.members.extend(batch.iter().cloned());
        }
        Some(DraftStep { color, batch, took_remainder })
    }
}

pub fn allocate_teams(players: &[Player], colors: &[TeamColor], rng: &mut impl Rng) -> Vec<Team> {
    let mut draft = TeamDraft::new(players.to_vec(), colors);
    while draft.draft_next_team(rng).is_some() {}
    if !draft.pool().is_empty() {
        log::warn!("No teams to draft into; {} player(s) left unassigned", draft.pool().len());
    }
    draft.into_teams()
}
