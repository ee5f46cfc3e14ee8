//! Game settings
//!
//! Persisted as JSON next to the binary (or wherever the front end chooses).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, Result};
use crate::theme::Theme;

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of players (2-8)
    pub num_players: usize,

    // === Board ===
    pub rows: usize,
    pub cols: usize,
    /// Pixel size of one cell
    pub cell_size: f32,
    /// Pixels an atom travels per tick
    pub particle_speed: f32,

    // === Presentation ===
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            num_players: MIN_PLAYERS,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cell_size: CELL_SIZE,
            particle_speed: PARTICLE_SPEED,
            theme: Theme::Dark,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "chain_reaction_settings.json";

    /// Check every field is usable for a session
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.num_players) {
            return Err(ConfigError::PlayerCount(self.num_players));
        }
        if self.rows < MIN_BOARD_DIM || self.cols < MIN_BOARD_DIM {
            return Err(ConfigError::BoardSize {
                rows: self.rows,
                cols: self.cols,
            });
        }
        for (name, value) in [
            ("cell_size", self.cell_size),
            ("particle_speed", self.particle_speed),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        Ok(())
    }

    /// Player count one lower, stopping at the minimum
    pub fn fewer_players(&mut self) {
        self.num_players = self.num_players.saturating_sub(1).max(MIN_PLAYERS);
    }

    /// Player count one higher, stopping at the maximum
    pub fn more_players(&mut self) {
        self.num_players = (self.num_players + 1).min(MAX_PLAYERS);
    }

    /// Read and validate settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from `path`, falling back to defaults if missing or invalid
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_players = Settings {
            num_players: 9,
            ..Settings::default()
        };
        assert!(matches!(
            bad_players.validate(),
            Err(ConfigError::PlayerCount(9))
        ));

        let tiny = Settings {
            rows: 1,
            ..Settings::default()
        };
        assert!(matches!(
            tiny.validate(),
            Err(ConfigError::BoardSize { rows: 1, cols: 6 })
        ));

        let frozen = Settings {
            particle_speed: 0.0,
            ..Settings::default()
        };
        assert!(matches!(
            frozen.validate(),
            Err(ConfigError::NonPositive {
                name: "particle_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_player_count_clamps() {
        let mut settings = Settings::default();
        settings.fewer_players();
        assert_eq!(settings.num_players, 2);
        for _ in 0..10 {
            settings.more_players();
        }
        assert_eq!(settings.num_players, 8);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"num_players": 4, "theme": "Light"}"#).unwrap();
        assert_eq!(settings.num_players, 4);
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.rows, DEFAULT_ROWS);
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!(
            "chain_reaction_settings_test_{}.json",
            std::process::id()
        ));
        let settings = Settings {
            num_players: 5,
            rows: 8,
            cols: 8,
            ..Settings::default()
        };
        settings.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load("/nonexistent/chain_reaction/settings.json");
        assert_eq!(settings, Settings::default());
    }
}
