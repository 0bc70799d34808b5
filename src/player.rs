use std::fmt;

use derive_new::new;
use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;


#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Enum, EnumIter, Serialize, Deserialize,
)]
pub enum Gender {
    Male,
    Female,
    NonBinary,
}

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self { PlayerId(id.to_owned()) }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self { PlayerId(id) }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

// A flexible player (`no_gender_restriction`) never enters the gender pools: it only fills gaps
// in the row of its own gender, or gets an extra round at the very end.
//
// Flexible status wins over `is_helper`: a player with both flags is never placed as a helper.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[new(into)]
    pub id: PlayerId,
    #[new(into)]
    pub name: String,
    pub gender: Gender,
    #[new(default)]
    #[serde(default)]
    pub score: u32,
    #[new(default)]
    #[serde(default)]
    pub no_gender_restriction: bool,
    #[new(default)]
    #[serde(default)]
    pub is_helper: bool,
}

impl Player {
    pub fn flexible(mut self) -> Self {
        self.no_gender_restriction = true;
        self
    }

    pub fn helper(mut self) -> Self {
        self.is_helper = true;
        self
    }

    pub fn is_flexible(&self) -> bool { self.no_gender_restriction }

    // Helper placement only applies to gender-specific players.
    pub fn is_placed_as_helper(&self) -> bool { self.is_helper && !self.no_gender_restriction }
}
