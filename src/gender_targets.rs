use std::collections::HashMap;

use enum_map::{EnumMap, enum_map};
use strum::IntoEnumIterator;

use crate::player::{Gender, Player};
use crate::team::TeamColor;


pub type GenderCounts = EnumMap<Gender, usize>;

pub fn count_by_gender<'a>(players: impl IntoIterator<Item = &'a Player>) -> GenderCounts {
    let mut counts = enum_map! { _ => 0 };
    for p in players {
        if !p.is_flexible() {
            counts[p.gender] += 1;
        }
    }
    counts
}

pub fn gender_based_size(counts: &GenderCounts) -> usize { counts.values().sum() }

// For each gender separately, splits its gender-specific players as evenly as possible. The first
// `total % num_teams` teams in `colors` order get one extra slot. Flexible players don't count.
pub fn compute_gender_targets(
    players: &[Player], colors: &[TeamColor],
) -> HashMap<TeamColor, GenderCounts> {
    let mut targets: HashMap<TeamColor, GenderCounts> =
        colors.iter().map(|&color| (color, enum_map! { _ => 0 })).collect();
    if colors.is_empty() {
        return targets;
    }
    let totals = count_by_gender(players);
    let num_teams = colors.len();
    for gender in Gender::iter() {
        let base = totals[gender] / num_teams;
        let remainder = totals[gender] % num_teams;
        for (idx, color) in colors.iter().enumerate() {
            let extra = if idx < remainder { 1 } else { 0 };
            // Duplicate colors share a single entry; the last one wins.
            if let Some(counts) = targets.get_mut(color) {
                counts[gender] = base + extra;
            }
        }
    }
    targets
}


#[cfg(test)]
mod tests {
    use super::*;

    fn roster(males: usize, females: usize, non_binary: usize, flexible: usize) -> Vec<Player> {
        let mut players = Vec::new();
        let mut add = |gender, n, flexible| {
            for _ in 0..n {
                let idx = players.len();
                let p = Player::new(format!("p{idx}"), format!("Player {idx}"), gender);
                players.push(if flexible { p.flexible() } else { p });
            }
        };
        add(Gender::Male, males, false);
        add(Gender::Female, females, false);
        add(Gender::NonBinary, non_binary, false);
        add(Gender::Male, flexible, true);
        players
    }

    #[test]
    fn remainder_goes_to_first_teams() {
        use TeamColor::*;
        let colors = [Red, Blue, Green];
        let targets = compute_gender_targets(&roster(4, 2, 1, 0), &colors);
        assert_eq!(targets[&Red][Gender::Male], 2);
        assert_eq!(targets[&Blue][Gender::Male], 1);
        assert_eq!(targets[&Green][Gender::Male], 1);
        assert_eq!(targets[&Red][Gender::Female], 1);
        assert_eq!(targets[&Blue][Gender::Female], 1);
        assert_eq!(targets[&Green][Gender::Female], 0);
        assert_eq!(targets[&Red][Gender::NonBinary], 1);
        assert_eq!(targets[&Blue][Gender::NonBinary], 0);
    }

    #[test]
    fn flexible_players_are_not_counted() {
        use TeamColor::*;
        let targets = compute_gender_targets(&roster(0, 0, 0, 5), &[Red, Blue]);
        for color in [Red, Blue] {
            assert_eq!(gender_based_size(&targets[&color]), 0);
        }
    }

    #[test]
    fn conservation_and_fairness() {
        let colors = TeamColor::all();
        for (m, f, nb) in [(0, 0, 0), (1, 0, 0), (7, 3, 2), (12, 12, 1), (25, 31, 5)] {
            let players = roster(m, f, nb, 2);
            let totals = count_by_gender(&players);
            let targets = compute_gender_targets(&players, &colors);
            assert_eq!(targets.len(), colors.len());
            for gender in Gender::iter() {
                let per_team = colors.iter().map(|c| targets[c][gender]).collect::<Vec<_>>();
                assert_eq!(per_team.iter().sum::<usize>(), totals[gender]);
                let max = per_team.iter().max().unwrap();
                let min = per_team.iter().min().unwrap();
                assert!(max - min <= 1, "{gender:?}: {per_team:?}");
            }
        }
    }

    #[test]
    fn no_teams() {
        assert!(compute_gender_targets(&roster(3, 3, 0, 0), &[]).is_empty());
    }
}
