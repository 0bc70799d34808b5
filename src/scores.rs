use crate::player::PlayerId;
use crate::team::{Team, TeamColor, find_team_mut};


fn apply_delta(score: u32, delta: i64) -> u32 {
    i64::from(score).saturating_add(delta).clamp(0, i64::from(u32::MAX)) as u32
}

// Scores never go below zero. Returns the delta actually applied, or `None` if there is no team
// of that color.
pub fn update_team_score(teams: &mut [Team], color: TeamColor, delta: i64) -> Option<i64> {
    let team = find_team_mut(teams, color)?;
    let old = team.score;
    team.score = apply_delta(old, delta);
    Some(i64::from(team.score) - i64::from(old))
}

// The team score moves by the delta the player actually received, so a clamped player update
// does not take away more from the team than the player had.
pub fn update_player_score(
    teams: &mut [Team], color: TeamColor, player_id: &PlayerId, delta: i64,
) -> Option<i64> {
    let team = find_team_mut(teams, color)?;
    let player = team.member_mut(player_id)?;
    let old = player.score;
    player.score = apply_delta(old, delta);
    let applied = i64::from(player.score) - i64::from(old);
    team.score = apply_delta(team.score, applied);
    Some(applied)
}
