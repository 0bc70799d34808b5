// Playing order generation.
//
// Every round holds at most one player per team, and all players in a round share a gender.
// Rounds alternate between the male and the female rows, then drain the non-binary rows. Flexible
// players fill gaps in the rows of their own gender; those left over get extra rounds at the end.

use enum_map::{EnumMap, enum_map};
use itertools::Itertools;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::helper_placement::{arrange_all, first_gender};
use crate::player::{Gender, Player};
use crate::team::{Team, TeamColor};
use crate::team_pools::{build_pools, find_anchor};


#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MatchupSlot {
    pub color: TeamColor,
    pub player: Option<Player>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Matchup {
    pub id: usize,
    pub players: Vec<MatchupSlot>,
}

impl Matchup {
    pub fn empty(id: usize, colors: &[TeamColor]) -> Self {
        Matchup {
            id,
            players: colors.iter().map(|&color| MatchupSlot { color, player: None }).collect(),
        }
    }

    pub fn is_empty(&self) -> bool { self.players.iter().all(|slot| slot.player.is_none()) }

    pub fn player(&self, color: TeamColor) -> Option<&Player> {
        self.players.iter().find(|slot| slot.color == color)?.player.as_ref()
    }
}

pub fn renumber(matchups: &mut [Matchup]) {
    for (idx, m) in matchups.iter_mut().enumerate() {
        m.id = idx + 1;
    }
}

// Flexible players of one team, consumed front to back. A player can be taken out of order when
// an earlier one doesn't match the requested gender.
#[derive(Clone, Debug)]
pub struct FlexQueue {
    players: Vec<Option<Player>>,
}

impl FlexQueue {
    pub fn new(players: Vec<Player>) -> Self {
        FlexQueue { players: players.into_iter().map(Some).collect() }
    }

    pub fn take_matching(&mut self, gender: Gender) -> Option<Player> {
        self.players.iter_mut().find(|p| matches!(p, Some(p) if p.gender == gender))?.take()
    }

    pub fn take_any(&mut self) -> Option<Player> { self.players.iter_mut().find_map(Option::take) }

    pub fn is_exhausted(&self) -> bool { self.players.iter().all(Option::is_none) }
}

#[derive(Clone, Debug)]
struct TeamLineup {
    color: TeamColor,
    rows: EnumMap<Gender, Vec<Player>>,
    flex: FlexQueue,
}

struct RowEmitter {
    lineups: Vec<TeamLineup>,
    row_counts: EnumMap<Gender, usize>,
    next_row: EnumMap<Gender, usize>,
    rounds: Vec<Vec<MatchupSlot>>,
}

impl RowEmitter {
    fn new(lineups: Vec<TeamLineup>) -> Self {
        let mut row_counts = enum_map! { _ => 0 };
        for lineup in &lineups {
            for (gender, rows) in &lineup.rows {
                row_counts[gender] = row_counts[gender].max(rows.len());
            }
        }
        RowEmitter {
            lineups,
            row_counts,
            next_row: enum_map! { _ => 0 },
            rounds: Vec::new(),
        }
    }

    fn has_rows(&self, gender: Gender) -> bool { self.next_row[gender] < self.row_counts[gender] }

    fn push_round(&mut self, slots: Vec<MatchupSlot>) {
        if slots.iter().any(|slot| slot.player.is_some()) {
            self.rounds.push(slots);
        }
    }

    fn emit_row(&mut self, gender: Gender) {
        let row = self.next_row[gender];
        self.next_row[gender] += 1;
        let slots = self
            .lineups
            .iter_mut()
            .map(|lineup| MatchupSlot {
                color: lineup.color,
                player: match lineup.rows[gender].get(row) {
                    Some(p) => Some(p.clone()),
                    None => lineup.flex.take_matching(gender),
                },
            })
            .collect_vec();
        self.push_round(slots);
    }

    fn emit_leftover_flexible(&mut self) {
        while self.lineups.iter().any(|lineup| !lineup.flex.is_exhausted()) {
            let slots = self
                .lineups
                .iter_mut()
                .map(|lineup| MatchupSlot { color: lineup.color, player: lineup.flex.take_any() })
                .collect_vec();
            self.push_round(slots);
        }
    }

    fn run(mut self, first_gender: Gender, force_non_binary_first: bool) -> Vec<Vec<MatchupSlot>> {
        if force_non_binary_first && self.has_rows(Gender::NonBinary) {
            self.emit_row(Gender::NonBinary);
        }
        let mut prefer_male = first_gender != Gender::Female;
        loop {
            let (preferred, other) = if prefer_male {
                (Gender::Male, Gender::Female)
            } else {
                (Gender::Female, Gender::Male)
            };
            let gender = if self.has_rows(preferred) {
                preferred
            } else if self.has_rows(other) {
                other
            } else {
                break;
            };
            self.emit_row(gender);
            prefer_male = !prefer_male;
        }
        while self.has_rows(Gender::NonBinary) {
            self.emit_row(Gender::NonBinary);
        }
        self.emit_leftover_flexible();
        self.rounds
    }
}

// Generates the playing order for `teams`. `colors` is the fixed slot order of every round; a
// color without a team simply never gets a player. Never fails: with nobody to place the result
// is a single round with every slot empty.
pub fn generate_matchups(teams: &[Team], colors: &[TeamColor], rng: &mut impl Rng) -> Vec<Matchup> {
    let colors = colors.iter().copied().unique().collect_vec();
    let anchor = find_anchor(teams, &colors);
    if let Some(anchor) = &anchor {
        log::debug!("Anchor: {} ({}, {:?})", anchor.player.id, anchor.color, anchor.gender());
    }
    let pools = build_pools(teams, &colors, anchor.as_ref());
    let arranged = arrange_all(&pools, anchor.as_ref(), rng);
    let lineups = pools
        .into_iter()
        .zip_eq(arranged)
        .map(|(pools, rows)| {
            let mut flexible = pools.flexible;
            flexible.shuffle(rng);
            TeamLineup { color: pools.color, rows, flex: FlexQueue::new(flexible) }
        })
        .collect_vec();

    let first = first_gender(anchor.as_ref());
    let rounds = RowEmitter::new(lineups).run(first, first == Gender::NonBinary);
    let mut matchups = if rounds.is_empty() {
        log::warn!("No players to schedule; emitting a single empty round");
        vec![Matchup::empty(1, &colors)]
    } else {
        rounds.into_iter().map(|players| Matchup { id: 0, players }).collect_vec()
    };
    renumber(&mut matchups);
    log::debug!("Generated {} round(s)", matchups.len());
    matchups
}
