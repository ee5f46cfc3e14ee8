//! Game session state
//!
//! Everything a front end needs to draw a frame lives here: the board, the
//! atoms in flight, the player roster and whose turn it is.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::layout::Layout;
use super::particle::ParticleSystem;
use crate::consts::{MAX_PLAYERS, MIN_PLAYERS};
use crate::error::{ConfigError, Result};
use crate::settings::Settings;
use crate::theme::{Color, PLAYER_COLORS, PLAYER_NAMES};

/// Current phase of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the current player to place an atom
    AwaitingInput,
    /// Atoms in flight; input is ignored until the board settles
    Resolving,
    /// A winner has been declared
    GameOver,
}

/// A seat at the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub index: usize,
    pub color: Color,
    pub alive: bool,
    pub has_played: bool,
}

impl Player {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            color: PLAYER_COLORS[index % PLAYER_COLORS.len()],
            alive: true,
            has_played: false,
        }
    }

    /// Display name ("RED", "GREEN", ...)
    pub fn name(&self) -> &'static str {
        PLAYER_NAMES[self.index % PLAYER_NAMES.len()]
    }
}

/// Notable things that happened during a tick (sound/animation hooks)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An atom was placed by a player
    Placed {
        player: usize,
        row: usize,
        col: usize,
    },
    /// A cell exploded
    Exploded { row: usize, col: usize },
    /// A player lost their last atom
    Eliminated { player: usize },
    /// The turn moved to another player
    TurnPassed { player: usize },
    /// The game was won
    Won { player: usize },
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub particles: ParticleSystem,
    pub players: Vec<Player>,
    pub current_player: usize,
    pub winner: Option<usize>,
    pub phase: GamePhase,
    pub layout: Layout,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events since the front end last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Start a session from validated settings
    pub fn new(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let mut state = Self {
            board: Board::new(settings.rows, settings.cols),
            particles: ParticleSystem::new(settings.particle_speed),
            players: Vec::new(),
            current_player: 0,
            winner: None,
            phase: GamePhase::AwaitingInput,
            layout: Layout::new(settings.cell_size),
            time_ticks: 0,
            events: Vec::new(),
        };
        state.reset(settings.num_players)?;
        Ok(state)
    }

    /// Start over with `num_players` players on the same board size.
    /// Discards every atom on the board and in flight.
    pub fn reset(&mut self, num_players: usize) -> Result<()> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(ConfigError::PlayerCount(num_players));
        }
        self.board = Board::new(self.board.rows(), self.board.cols());
        self.particles.clear();
        self.players = (0..num_players).map(Player::new).collect();
        self.current_player = 0;
        self.winner = None;
        self.phase = GamePhase::AwaitingInput;
        self.time_ticks = 0;
        self.events.clear();
        log::info!(
            "New game: {} players on a {}x{} board",
            num_players,
            self.board.rows(),
            self.board.cols()
        );
        Ok(())
    }

    #[inline]
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Number of players that have placed at least one atom
    pub fn played_count(&self) -> usize {
        self.players.iter().filter(|p| p.has_played).count()
    }

    /// Whether the session accepts a placement right now
    pub fn accepts_input(&self) -> bool {
        self.phase == GamePhase::AwaitingInput && self.winner.is_none()
    }

    /// Take the queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
