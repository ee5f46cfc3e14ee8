//! Elimination and win detection
//!
//! Evaluated once the board has settled after a turn. A player who has moved
//! and has no atoms left is out. Players who have not moved yet are always
//! alive, so the first few turns cannot knock anyone out.

use super::state::GameState;

/// Result of one evaluation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Atoms on the board per player
    pub totals: Vec<u32>,
    /// Players that went from alive to eliminated in this pass
    pub eliminated: Vec<usize>,
    pub winner: Option<usize>,
}

/// Recompute `alive` for every player and look for a winner.
///
/// A winner needs at least two players to have moved and exactly one left alive.
pub fn evaluate(state: &mut GameState) -> Evaluation {
    let totals = state.board.orb_totals(state.num_players());
    let mut eliminated = Vec::new();

    for (player, &total) in state.players.iter_mut().zip(&totals) {
        let alive = !player.has_played || total > 0;
        if player.alive && !alive {
            eliminated.push(player.index);
        }
        player.alive = alive;
    }

    let winner = if state.played_count() >= 2 {
        let mut alive = state.players.iter().filter(|p| p.alive);
        match (alive.next(), alive.next()) {
            (Some(survivor), None) => Some(survivor.index),
            _ => None,
        }
    } else {
        None
    };

    Evaluation {
        totals,
        eliminated,
        winner,
    }
}

/// The winner of a cascade that is still in flight but can no longer change
/// the outcome: every atom on the board and in the air belongs to one player
/// and everyone else has already moved.
///
/// On a board holding more atoms than its total capacity a cascade never
/// settles, so the tick loop uses this to end it.
pub fn decided_winner(state: &GameState) -> Option<usize> {
    let mut owners = state
        .board
        .iter()
        .filter_map(|(_, cell)| cell.owner)
        .chain(state.particles.particles().iter().map(|p| p.owner));
    let first = owners.next()?;
    if !owners.all(|o| o == first) {
        return None;
    }
    let others_moved = state
        .players
        .iter()
        .all(|p| p.index == first || p.has_played);
    (others_moved && state.played_count() >= 2).then_some(first)
}
