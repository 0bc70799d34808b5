use anyhow::Context;
use itertools::Itertools;
use party_draft::allocation::TeamDraft;
use party_draft::{
    EventSnapshot, Player, TeamColor, generate_matchups, parse_roster, parse_teams_document,
};
use rand::Rng;
use serde::Serialize;

use crate::event_config::EventConfig;


pub fn read_roster(filename: &str) -> anyhow::Result<Vec<Player>> {
    let contents = std::fs::read_to_string(filename)
        .with_context(|| format!("Failed to read roster '{filename}'."))?;
    parse_roster(&contents).with_context(|| format!("Failed to parse roster '{filename}'."))
}

fn read_teams(filename: &str) -> anyhow::Result<EventSnapshot> {
    let contents = std::fs::read_to_string(filename)
        .with_context(|| format!("Failed to read teams '{filename}'."))?;
    parse_teams_document(&contents).with_context(|| format!("Failed to parse teams '{filename}'."))
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn draft_teams(roster: Vec<Player>, colors: &[TeamColor], rng: &mut impl Rng) -> EventSnapshot {
    let mut draft = TeamDraft::new(roster, colors);
    while let Some(step) = draft.draft_next_team(rng) {
        log::info!(
            "{}: {}",
            step.color,
            step.batch.iter().map(|p| &p.name).join(", ")
        );
    }
    if !draft.pool().is_empty() {
        log::warn!("{} player(s) were not assigned to any team", draft.pool().len());
    }
    EventSnapshot { teams: draft.into_teams(), matchups: Vec::new() }
}

pub fn run_draft(roster_file: &str, config: &EventConfig) -> anyhow::Result<()> {
    let event = draft_teams(read_roster(roster_file)?, &config.colors, &mut config.rng());
    print_json(&event.teams)
}

pub fn run_matchups(teams_file: &str, config: &EventConfig) -> anyhow::Result<()> {
    let mut event = read_teams(teams_file)?;
    if !event.matchups.is_empty() {
        log::info!("Replacing {} existing round(s)", event.matchups.len());
    }
    // The teams file defines the slot order; the configured colors are only used for a file
    // without teams.
    let colors = if event.teams.is_empty() { config.colors.clone() } else { event.colors() };
    event.matchups = generate_matchups(&event.teams, &colors, &mut config.rng());
    log::info!("Generated {} round(s)", event.matchups.len());
    print_json(&event)
}

pub fn run_event(roster_file: &str, config: &EventConfig) -> anyhow::Result<()> {
    let mut rng = config.rng();
    let mut event = draft_teams(read_roster(roster_file)?, &config.colors, &mut rng);
    event.matchups = generate_matchups(&event.teams, &config.colors, &mut rng);
    log::info!("Generated {} round(s)", event.matchups.len());
    print_json(&event)
}
