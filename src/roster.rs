use std::collections::HashSet;

use crate::player::Player;
use crate::team::TeamColor;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RosterError {
    NoTeams,
    DuplicatePlayerId,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RosterWarning {
    FewerPlayersThanTeams,
    AllFlexible,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RosterStatus {
    pub error: Option<RosterError>,
    pub warnings: Vec<RosterWarning>,
}

impl RosterStatus {
    fn from_error(error: RosterError) -> Self { RosterStatus { error: Some(error), warnings: vec![] } }

    pub fn is_ok(&self) -> bool { self.error.is_none() }
}

// Checks the invariants the engines rely on but never verify themselves. Meant for the shell,
// before handing a roster to `allocate_teams`.
pub fn verify_roster(players: &[Player], colors: &[TeamColor]) -> RosterStatus {
    if colors.is_empty() {
        return RosterStatus::from_error(RosterError::NoTeams);
    }
    let mut ids = HashSet::new();
    if !players.iter().all(|p| ids.insert(&p.id)) {
        return RosterStatus::from_error(RosterError::DuplicatePlayerId);
    }

    let mut warnings = vec![];
    let num_colors = colors.iter().collect::<HashSet<_>>().len();
    if players.len() < num_colors {
        warnings.push(RosterWarning::FewerPlayersThanTeams);
    }
    if !players.is_empty() && players.iter().all(Player::is_flexible) {
        warnings.push(RosterWarning::AllFlexible);
    }
    RosterStatus { error: None, warnings }
}
