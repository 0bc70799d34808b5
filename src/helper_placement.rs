// Orders each team's gender-specific players into rows.
//
// Helpers are spread out rather than left to the shuffle: one may open Round 1, others are pinned
// to an "early" or a "late" row of their gender. All the start-gender / other-gender differences
// live in `GenderPlan`; `arrange_gender` applies a plan without branching on which gender it is.

use std::cmp::Ordering;

use enum_map::{EnumMap, enum_map};
use itertools::Itertools;
use rand::prelude::*;
use strum::IntoEnumIterator;

use crate::player::{Gender, Player, PlayerId};
use crate::team::TeamColor;
use crate::team_pools::{Anchor, TeamPools};


pub const EARLY_ROW: usize = 0;
pub const LATE_ROW: usize = 2;

// Row indices within one gender's sequence of rows (not overall round numbers).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SlotPolicy {
    pub early: Option<usize>,
    pub late: Option<usize>,
}

impl SlotPolicy {
    pub const NONE: Self = SlotPolicy { early: None, late: None };

    // Fits the nominal rows to a team that has `len` players of the gender. The late row is
    // clamped to the last row, and dropped if it then hits the early row or Round 1.
    pub fn resolve(self, len: usize, opens_round_one: bool) -> SlotPolicy {
        if len == 0 {
            return SlotPolicy::NONE;
        }
        let early = self.early.filter(|&idx| idx < len);
        let late = self
            .late
            .map(|idx| idx.min(len - 1))
            .filter(|&idx| Some(idx) != early && !(opens_round_one && idx == 0));
        SlotPolicy { early, late }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GenderPlan {
    // Row 0 of this gender is Round 1.
    pub opens_round_one: bool,
    // This is the anchor's gender: one helper joins the anchor in Round 1, the rest of the
    // helpers go late.
    pub round_one_helper: bool,
    pub slots: SlotPolicy,
}

pub fn first_gender(anchor: Option<&Anchor>) -> Gender {
    anchor.map_or(Gender::Male, Anchor::gender)
}

pub fn gender_plans(anchor: Option<&Anchor>) -> EnumMap<Gender, GenderPlan> {
    let game1_gender = first_gender(anchor);
    let start_gender = anchor.map(Anchor::gender);
    enum_map! {
        gender => {
            let opens_round_one = gender == game1_gender;
            let slots = match gender {
                Gender::NonBinary => SlotPolicy::NONE,
                _ if start_gender == Some(gender) => SlotPolicy { early: None, late: Some(LATE_ROW) },
                _ => SlotPolicy { early: Some(EARLY_ROW), late: Some(LATE_ROW) },
            };
            GenderPlan {
                opens_round_one,
                round_one_helper: start_gender == Some(gender) && gender != Gender::NonBinary,
                slots,
            }
        }
    }
}

fn first_letter(name: &str) -> Option<char> { name.chars().flat_map(char::to_lowercase).next() }

// `Greater` means `a` takes precedence: later first letter, then later name, both compared
// case-insensitively. Names differing only in case fall back to the raw comparison.
pub fn helper_precedence(a: &Player, b: &Player) -> Ordering {
    first_letter(&a.name)
        .cmp(&first_letter(&b.name))
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

// Picks the helper who joins the anchor's gender row in Round 1. The anchor's own team is skipped:
// the anchor is pinned to that team's Round 1 slot, so a helper from it would collide with the
// anchor and be pushed out of Round 1. Ties keep the first helper in color order.
pub fn pick_round_one_helper(pools: &[TeamPools], anchor: &Anchor) -> Option<(TeamColor, PlayerId)> {
    pools
        .iter()
        .filter(|team| team.color != anchor.color)
        .flat_map(|team| {
            team.by_gender[anchor.gender()]
                .iter()
                .filter(|p| p.is_placed_as_helper())
                .map(move |p| (team.color, p))
        })
        .reduce(|best, candidate| {
            if helper_precedence(candidate.1, best.1) == Ordering::Greater { candidate } else { best }
        })
        .map(|(color, p)| (color, p.id.clone()))
}

#[derive(Clone, Debug, Default)]
struct Placement {
    round_one: Option<Player>,
    early: Option<Player>,
    late: Option<Player>,
    helpers: Vec<Player>,
    regulars: Vec<Player>,
    slots: SlotPolicy,
}

impl Placement {
    fn len(&self) -> usize {
        [&self.round_one, &self.early, &self.late].iter().filter(|p| p.is_some()).count()
            + self.helpers.len()
            + self.regulars.len()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Bucket {
    Early,
    Late,
}

// Moves random helpers into the bucket, at most one per team, until `quota` helpers are placed
// or no team with a free slot has a helper left.
fn fill_bucket(placements: &mut [Placement], bucket: Bucket, quota: usize, rng: &mut impl Rng) {
    for _ in 0..quota {
        let candidates = placements
            .iter()
            .enumerate()
            .filter(|(_, pl)| {
                let (slot, taken) = match bucket {
                    Bucket::Early => (pl.slots.early, &pl.early),
                    Bucket::Late => (pl.slots.late, &pl.late),
                };
                slot.is_some() && taken.is_none()
            })
            .flat_map(|(team_idx, pl)| (0..pl.helpers.len()).map(move |h| (team_idx, h)))
            .collect_vec();
        let Some(&(team_idx, helper_idx)) = candidates.choose(rng) else {
            break;
        };
        let pl = &mut placements[team_idx];
        let helper = pl.helpers.remove(helper_idx);
        log::debug!("Helper {} placed {bucket:?}", helper.id);
        match bucket {
            Bucket::Early => pl.early = Some(helper),
            Bucket::Late => pl.late = Some(helper),
        }
    }
}

fn order_placement(pl: Placement, helpers_last: bool, rng: &mut impl Rng) -> Vec<Player> {
    let len = pl.len();
    let mut rest = pl.regulars;
    if helpers_last {
        rest.shuffle(rng);
        let mut helpers = pl.helpers;
        helpers.shuffle(rng);
        rest.extend(helpers);
    } else {
        rest.extend(pl.helpers);
        rest.shuffle(rng);
    }

    let mut rows: Vec<Option<Player>> = vec![None; len];
    let mut displaced = Vec::new();
    for (idx, player) in [(Some(0), pl.round_one), (pl.slots.early, pl.early), (pl.slots.late, pl.late)] {
        let Some(player) = player else { continue };
        match idx.and_then(|idx| rows.get_mut(idx)) {
            Some(row) if row.is_none() => *row = Some(player),
            _ => displaced.push(player),
        }
    }
    // Pinned rows never overlap after `SlotPolicy::resolve`; anything displaced anyway goes first.
    let mut rest = displaced.into_iter().chain(rest);
    rows.into_iter().filter_map(|row| row.or_else(|| rest.next())).collect()
}

// Produces the ordered row list of `gender` for every team, in `pools` order.
pub fn arrange_gender(
    pools: &[TeamPools], gender: Gender, plan: GenderPlan, round_one_pick: Option<&(TeamColor, PlayerId)>,
    rng: &mut impl Rng,
) -> Vec<Vec<Player>> {
    let mut placements = pools
        .iter()
        .map(|team| {
            let mut pl = Placement {
                slots: plan.slots.resolve(team.gender_len(gender), plan.opens_round_one),
                ..Placement::default()
            };
            pl.round_one = team.anchor.clone().filter(|a| a.gender == gender);
            for p in &team.by_gender[gender] {
                let is_round_one_pick = plan.round_one_helper
                    && round_one_pick.is_some_and(|(color, id)| *color == team.color && *id == p.id);
                if is_round_one_pick && pl.round_one.is_none() {
                    pl.round_one = Some(p.clone());
                } else if p.is_placed_as_helper() && gender != Gender::NonBinary {
                    pl.helpers.push(p.clone());
                } else {
                    pl.regulars.push(p.clone());
                }
            }
            pl
        })
        .collect_vec();

    if plan.round_one_helper {
        fill_bucket(&mut placements, Bucket::Late, usize::MAX, rng);
    } else {
        let num_helpers = placements.iter().map(|pl| pl.helpers.len()).sum::<usize>();
        fill_bucket(&mut placements, Bucket::Late, num_helpers / 2, rng);
        fill_bucket(&mut placements, Bucket::Early, usize::MAX, rng);
    }

    // Leftover start-gender helpers go after the regulars: late in the event rather than in
    // Round 3, next to the Round 1 helper.
    let helpers_last = plan.round_one_helper && round_one_pick.is_some();
    placements.into_iter().map(|pl| order_placement(pl, helpers_last, rng)).collect()
}

pub fn arrange_all(
    pools: &[TeamPools], anchor: Option<&Anchor>, rng: &mut impl Rng,
) -> Vec<EnumMap<Gender, Vec<Player>>> {
    let plans = gender_plans(anchor);
    let round_one_pick = anchor.and_then(|a| {
        if plans[a.gender()].round_one_helper { pick_round_one_helper(pools, a) } else { None }
    });
    if let Some((color, id)) = &round_one_pick {
        log::debug!("Round 1 helper: {id} ({color})");
    }
    let mut lineups = vec![enum_map! { _ => Vec::new() }; pools.len()];
    for gender in Gender::iter() {
        let rows = arrange_gender(pools, gender, plans[gender], round_one_pick.as_ref(), rng);
        for (lineup, rows) in lineups.iter_mut().zip_eq(rows) {
            lineup[gender] = rows;
        }
    }
    lineups
}
