use enum_map::{EnumMap, enum_map};

use crate::player::{Gender, Player};
use crate::team::{Team, TeamColor, find_team};


// The first flexible player found when scanning teams in color order. It is treated as a regular
// player of its own gender and opens Round 1 for its team.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Anchor {
    pub color: TeamColor,
    pub player: Player,
}

impl Anchor {
    pub fn gender(&self) -> Gender { self.player.gender }
}

// Members of one team split the way the matchup engine consumes them. The anchor, if it belongs
// to this team, is kept apart from `by_gender` but counts toward its gender's row total.
#[derive(Clone, Debug)]
pub struct TeamPools {
    pub color: TeamColor,
    pub by_gender: EnumMap<Gender, Vec<Player>>,
    pub flexible: Vec<Player>,
    pub anchor: Option<Player>,
}

impl TeamPools {
    pub fn gender_len(&self, gender: Gender) -> usize {
        let anchored = self.anchor.as_ref().is_some_and(|a| a.gender == gender);
        self.by_gender[gender].len() + usize::from(anchored)
    }
}

pub fn find_anchor(teams: &[Team], colors: &[TeamColor]) -> Option<Anchor> {
    colors.iter().find_map(|&color| {
        let team = find_team(teams, color)?;
        let player = team.members.iter().find(|p| p.is_flexible())?;
        Some(Anchor { color, player: player.clone() })
    })
}

// A color without a team gets empty pools.
pub fn build_pools(teams: &[Team], colors: &[TeamColor], anchor: Option<&Anchor>) -> Vec<TeamPools> {
    colors
        .iter()
        .map(|&color| {
            let mut pools = TeamPools {
                color,
                by_gender: enum_map! { _ => Vec::new() },
                flexible: Vec::new(),
                anchor: None,
            };
            let members = find_team(teams, color).map_or(&[][..], |t| t.members.as_slice());
            for p in members {
                let is_anchor = anchor.is_some_and(|a| a.color == color && a.player.id == p.id);
                if is_anchor {
                    pools.anchor = Some(p.clone());
                } else if p.is_flexible() {
                    pools.flexible.push(p.clone());
                } else {
                    pools.by_gender[p.gender].push(p.clone());
                }
            }
            pools
        })
        .collect()
}
