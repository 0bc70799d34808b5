// Legend for various fix-this comments:
//   * "TODO" - bug or missing crucial feature.
//   * "Improvement potential" - missing nice-to-have feature or an opportunity
//       to make code better or faster.

#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod allocation;
pub mod gender_targets;
pub mod helper_placement;
pub mod matchup;
pub mod matchup_edit;
pub mod player;
pub mod raffle;
pub mod roster;
pub mod scores;
pub mod snapshot;
pub mod team;
pub mod team_pools;
pub mod test_util;

pub use allocation::{DraftStep, TeamDraft, allocate_teams, pick_batch};
pub use gender_targets::{GenderCounts, compute_gender_targets};
pub use matchup::{Matchup, MatchupSlot, generate_matchups};
pub use player::{Gender, Player, PlayerId};
pub use raffle::Raffle;
pub use roster::{RosterError, RosterStatus, RosterWarning, verify_roster};
pub use scores::{update_player_score, update_team_score};
pub use snapshot::{EventSnapshot, parse_roster, parse_teams_document};
pub use team::{Team, TeamColor, swap_players};
