use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::player::{Player, PlayerId};


// Declaration order is the canonical color order: allocation drafts teams in it and every
// matchup lists its slots in it.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
pub enum TeamColor {
    Red,
    Blue,
    Green,
    Yellow,
    Pink,
    Purple,
}

impl TeamColor {
    pub fn all() -> Vec<TeamColor> { TeamColor::iter().collect() }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Team {
    pub color: TeamColor,
    #[serde(default)]
    pub members: Vec<Player>,
    #[serde(default)]
    pub score: u32,
}

impl Team {
    pub fn new(color: TeamColor) -> Self { Team { color, members: Vec::new(), score: 0 } }

    pub fn with_members(color: TeamColor, members: Vec<Player>) -> Self {
        Team { color, members, score: 0 }
    }

    pub fn is_empty(&self) -> bool { self.members.is_empty() }

    pub fn member(&self, id: &PlayerId) -> Option<&Player> {
        self.members.iter().find(|p| p.id == *id)
    }

    pub fn member_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.members.iter_mut().find(|p| p.id == *id)
    }
}

pub fn empty_teams(colors: &[TeamColor]) -> Vec<Team> {
    colors.iter().map(|&color| Team::new(color)).collect()
}

pub fn find_team(teams: &[Team], color: TeamColor) -> Option<&Team> {
    teams.iter().find(|t| t.color == color)
}

pub fn find_team_mut(teams: &mut [Team], color: TeamColor) -> Option<&mut Team> {
    teams.iter_mut().find(|t| t.color == color)
}

fn locate_player(teams: &[Team], id: &PlayerId) -> Option<(usize, usize)> {
    teams.iter().enumerate().find_map(|(team_idx, team)| {
        team.members.iter().position(|p| p.id == *id).map(|member_idx| (team_idx, member_idx))
    })
}

// Exchanges two players, each taking the other's place in the member list. Team scores are left
// alone: points stay with the team that earned them.
//
// Returns false if either player is not on any team.
pub fn swap_players(teams: &mut [Team], a: &PlayerId, b: &PlayerId) -> bool {
    let (Some((team_a, idx_a)), Some((team_b, idx_b))) =
        (locate_player(teams, a), locate_player(teams, b))
    else {
        return false;
    };
    if team_a == team_b {
        teams[team_a].members.swap(idx_a, idx_b);
    } else {
        let player_a = teams[team_a].members[idx_a].clone();
        let player_b = std::mem::replace(&mut teams[team_b].members[idx_b], player_a);
        teams[team_a].members[idx_a] = player_b;
    }
    log::debug!("Swapped players {a} and {b}");
    true
}
