//! Fixed-rate simulation tick
//!
//! Turn controller: accepts a placement while awaiting input, then keeps the
//! session in `Resolving` until every atom has landed before the evaluator
//! runs and the turn passes on.

use super::explosion::explode;
use super::rules;
use super::state::{GameEvent, GamePhase, GameState};
use crate::error::MoveError;

/// Input for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Cell the current player clicked, already mapped from pixels
    pub place: Option<(usize, usize)>,
}

impl TickInput {
    pub fn place(row: usize, col: usize) -> Self {
        Self {
            place: Some((row, col)),
        }
    }
}

/// Advance the session by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.time_ticks += 1;

    if let Some((row, col)) = input.place {
        if let Err(e) = submit_move(state, row, col) {
            log::debug!("Ignoring click on ({row}, {col}): {e}");
        }
    }

    if state.phase == GamePhase::Resolving {
        step_resolving(state);
    }
}

/// Place an atom for the current player.
///
/// On success the session enters `Resolving`, even when nothing exploded, so
/// the turn always passes through the same settle-then-evaluate path.
pub fn submit_move(state: &mut GameState, row: usize, col: usize) -> Result<(), MoveError> {
    if state.winner.is_some() || state.phase == GamePhase::GameOver {
        return Err(MoveError::GameOver);
    }
    if state.phase != GamePhase::AwaitingInput {
        return Err(MoveError::NotAcceptingInput);
    }

    let player = state.current_player;
    state.board.place(row, col, player)?;
    state.players[player].has_played = true;
    state.events.push(GameEvent::Placed { player, row, col });
    log::debug!("{} placed on ({row}, {col})", state.players[player].name());

    if state.board.is_overflowed(row, col) {
        explode(
            &mut state.board,
            &mut state.particles,
            &state.layout,
            row,
            col,
        );
        state.events.push(GameEvent::Exploded { row, col });
    }

    state.phase = GamePhase::Resolving;
    Ok(())
}

/// Move atoms in flight; once the board is quiet, finish the turn
fn step_resolving(state: &mut GameState) {
    let update = state.particles.update(&mut state.board, &state.layout);
    state.events.extend(
        update
            .explosions
            .iter()
            .map(|&(row, col)| GameEvent::Exploded { row, col }),
    );

    if !state.particles.is_empty() {
        if let Some(winner) = rules::decided_winner(state) {
            log::debug!(
                "Cascade decided for {}, dropping {} atoms in flight",
                state.players[winner].name(),
                state.particles.len()
            );
            state.particles.clear();
            for player in &mut state.players {
                if player.index != winner && player.alive {
                    player.alive = false;
                    state.events.push(GameEvent::Eliminated {
                        player: player.index,
                    });
                }
            }
            declare_winner(state, winner);
        }
        return;
    }
    if update.exploded() {
        return;
    }
    resolve_turn(state);
}

/// Evaluate the settled board, then either end the game or pass the turn
pub fn resolve_turn(state: &mut GameState) {
    let eval = rules::evaluate(state);
    for &player in &eval.eliminated {
        log::info!("{} eliminated", state.players[player].name());
        state.events.push(GameEvent::Eliminated { player });
    }

    if let Some(player) = eval.winner {
        declare_winner(state, player);
        return;
    }

    advance_player(state);
    state.phase = GamePhase::AwaitingInput;
}

fn declare_winner(state: &mut GameState, player: usize) {
    log::info!(
        "{} wins after {} ticks",
        state.players[player].name(),
        state.time_ticks
    );
    state.winner = Some(player);
    state.phase = GamePhase::GameOver;
    state.events.push(GameEvent::Won { player });
}

/// Hand the turn to the next alive player (wrapping). Keeps the current
/// player if nobody else is alive.
fn advance_player(state: &mut GameState) {
    let n = state.num_players();
    let next = (1..n)
        .map(|step| (state.current_player + step) % n)
        .find(|&idx| state.players[idx].alive);
    if let Some(player) = next {
        state.current_player = player;
        state.events.push(GameEvent::TurnPassed { player });
    }
}
