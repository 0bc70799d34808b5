// Hand edits of a generated playing order. Every edit that changes the set or the order of rounds
// renumbers them, so ids stay `1..=len`.

use crate::matchup::{Matchup, renumber};
use crate::team::TeamColor;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub round: usize,
    pub color: TeamColor,
}

impl Cell {
    pub fn new(round: usize, color: TeamColor) -> Self { Cell { round, color } }
}

pub fn move_round(matchups: &mut Vec<Matchup>, from: usize, to: usize) -> bool {
    if from >= matchups.len() || to >= matchups.len() {
        return false;
    }
    let round = matchups.remove(from);
    matchups.insert(to, round);
    renumber(matchups);
    true
}

pub fn remove_round(matchups: &mut Vec<Matchup>, index: usize) -> Option<Matchup> {
    if index >= matchups.len() {
        return None;
    }
    let removed = matchups.remove(index);
    renumber(matchups);
    Some(removed)
}

// `index` may be equal to `len` to append.
pub fn insert_empty_round(matchups: &mut Vec<Matchup>, index: usize, colors: &[TeamColor]) -> bool {
    if index > matchups.len() {
        return false;
    }
    matchups.insert(index, Matchup::empty(0, colors));
    renumber(matchups);
    true
}

fn slot_index(matchups: &[Matchup], cell: Cell) -> Option<usize> {
    matchups.get(cell.round)?.players.iter().position(|slot| slot.color == cell.color)
}

// Exchanges the players of two cells. Either of them may be empty.
pub fn swap_cells(matchups: &mut [Matchup], a: Cell, b: Cell) -> bool {
    let (Some(slot_a), Some(slot_b)) = (slot_index(matchups, a), slot_index(matchups, b)) else {
        return false;
    };
    if a.round == b.round {
        let players = &mut matchups[a.round].players;
        let tmp = players[slot_a].player.take();
        players[slot_a].player = players[slot_b].player.take();
        players[slot_b].player = tmp;
    } else {
        let player_a = matchups[a.round].players[slot_a].player.take();
        let player_b = std::mem::replace(&mut matchups[b.round].players[slot_b].player, player_a);
        matchups[a.round].players[slot_a].player = player_b;
    }
    true
}
