//! Chain Reaction - a cascading-explosion board game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (board, particles, explosions, turns)
//! - `app`: Menu / session flow around the simulation
//! - `settings`: Data-driven configuration (player count, board size, theme)
//! - `theme`: Player palette and background themes
//! - `ui`: Text renderer used by the terminal front end

pub mod app;
pub mod error;
pub mod settings;
pub mod sim;
pub mod theme;
pub mod ui;

pub use app::{App, Screen};
pub use error::{ConfigError, MoveError};
pub use settings::Settings;
pub use theme::{Color, Theme};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (one tick per rendered frame)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Default board dimensions
    pub const DEFAULT_ROWS: usize = 10;
    pub const DEFAULT_COLS: usize = 6;
    /// Smallest board that still has distinct corners and edges
    pub const MIN_BOARD_DIM: usize = 2;

    /// Pixel size of one board cell
    pub const CELL_SIZE: f32 = 100.0;

    /// Distance a particle travels per tick (pixels)
    pub const PARTICLE_SPEED: f32 = 15.0;

    /// Player count limits
    pub const MIN_PLAYERS: usize = 2;
    pub const MAX_PLAYERS: usize = 8;
}
