// JSON documents exchanged with the shell. A teams export is either a bare `Team[]` or the full
// `{teams, matchups}` event; rosters are a bare `Player[]`.

use serde::{Deserialize, Serialize};

use crate::matchup::Matchup;
use crate::player::Player;
use crate::team::{Team, TeamColor};


#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct EventSnapshot {
    pub teams: Vec<Team>,
    #[serde(default)]
    pub matchups: Vec<Matchup>,
}

impl EventSnapshot {
    // Team colors in the order the teams are listed.
    pub fn colors(&self) -> Vec<TeamColor> { self.teams.iter().map(|t| t.color).collect() }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TeamsDocument {
    Teams(Vec<Team>),
    Event(EventSnapshot),
}

pub fn parse_teams_document(text: &str) -> serde_json::Result<EventSnapshot> {
    Ok(match serde_json::from_str(text)? {
        TeamsDocument::Teams(teams) => EventSnapshot { teams, matchups: Vec::new() },
        TeamsDocument::Event(event) => event,
    })
}

pub fn parse_roster(text: &str) -> serde_json::Result<Vec<Player>> { serde_json::from_str(text) }
