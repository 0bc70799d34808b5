// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use party_draft::{Gender, Matchup, Player, Team, TeamColor};


#[allow(dead_code)]
pub fn male(id: &str) -> Player { Player::new(id, id.to_uppercase(), Gender::Male) }

#[allow(dead_code)]
pub fn female(id: &str) -> Player { Player::new(id, id.to_uppercase(), Gender::Female) }

#[allow(dead_code)]
pub fn non_binary(id: &str) -> Player { Player::new(id, id.to_uppercase(), Gender::NonBinary) }

#[allow(dead_code)]
pub fn team(color: TeamColor, members: Vec<Player>) -> Team { Team::with_members(color, members) }

#[allow(dead_code)]
pub fn ids(players: &[Player]) -> Vec<&str> { players.iter().map(|p| p.id.as_str()).collect() }

// Player ids of a round, in slot order; `None` for empty slots.
#[allow(dead_code)]
pub fn round_ids(m: &Matchup) -> Vec<Option<&str>> {
    m.players.iter().map(|s| s.player.as_ref().map(|p| p.id.as_str())).collect()
}

#[allow(dead_code)]
pub fn all_round_ids(matchups: &[Matchup]) -> Vec<Vec<Option<&str>>> {
    matchups.iter().map(round_ids).collect()
}

// The gender a round is played in. Panics on an empty or mixed round.
#[allow(dead_code)]
pub fn round_gender(m: &Matchup) -> Gender {
    let mut genders = m.players.iter().filter_map(|s| s.player.as_ref()).map(|p| p.gender);
    let first = genders.next().expect("empty round");
    assert!(genders.all(|g| g == first), "mixed round: {m:?}");
    first
}
