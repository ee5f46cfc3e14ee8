//! Menu and session flow
//!
//! The front end forwards clicks and ticks here. The menu picks the player
//! count and theme; starting creates a fresh `GameState`; a click after the
//! game is won returns to the menu.

use glam::Vec2;

use crate::error::Result;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Which screen is showing
#[derive(Debug, Clone)]
pub enum Screen {
    Menu,
    Playing(Box<GameState>),
}

/// Menu buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    FewerPlayers,
    MorePlayers,
    ToggleTheme,
    Start,
}

/// Top-level application state owned by the frame loop
#[derive(Debug, Clone)]
pub struct App {
    pub settings: Settings,
    pub screen: Screen,
    /// Input collected since the last tick (one-shot)
    input: TickInput,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            screen: Screen::Menu,
            input: TickInput::default(),
        }
    }

    /// The running session, if any
    pub fn game(&self) -> Option<&GameState> {
        match &self.screen {
            Screen::Playing(state) => Some(&**state),
            Screen::Menu => None,
        }
    }

    pub fn game_mut(&mut self) -> Option<&mut GameState> {
        match &mut self.screen {
            Screen::Playing(state) => Some(&mut **state),
            Screen::Menu => None,
        }
    }

    /// Apply a menu button. Ignored outside the menu, except theme toggling.
    pub fn menu(&mut self, action: MenuAction) -> Result<()> {
        if action == MenuAction::ToggleTheme {
            self.settings.theme = self.settings.theme.toggled();
            return Ok(());
        }
        if !matches!(self.screen, Screen::Menu) {
            return Ok(());
        }
        match action {
            MenuAction::FewerPlayers => self.settings.fewer_players(),
            MenuAction::MorePlayers => self.settings.more_players(),
            MenuAction::Start => self.start()?,
            MenuAction::ToggleTheme => {}
        }
        Ok(())
    }

    /// Start a new session with the current settings
    pub fn start(&mut self) -> Result<()> {
        let state = GameState::new(&self.settings)?;
        self.screen = Screen::Playing(Box::new(state));
        self.input = TickInput::default();
        Ok(())
    }

    /// Leave the session and discard it
    pub fn back_to_menu(&mut self) {
        log::info!("Back to menu");
        self.screen = Screen::Menu;
        self.input = TickInput::default();
    }

    /// A click on a board cell. After a win any click returns to the menu.
    pub fn click_cell(&mut self, row: usize, col: usize) {
        match self.game().map(|state| state.phase) {
            Some(GamePhase::GameOver) => self.back_to_menu(),
            Some(_) => self.input.place = Some((row, col)),
            None => {}
        }
    }

    /// A click in pixel coordinates; points outside the board are ignored
    /// (but still leave a finished game).
    pub fn click_at(&mut self, pos: Vec2) {
        let Some(state) = self.game() else {
            return;
        };
        if state.phase == GamePhase::GameOver {
            self.back_to_menu();
            return;
        }
        let cell = state
            .layout
            .cell_at(pos, state.board.rows(), state.board.cols());
        if cell.is_some() {
            self.input.place = cell;
        }
    }

    /// Run one simulation tick and return the events it produced
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let input = std::mem::take(&mut self.input);
        match &mut self.screen {
            Screen::Playing(state) => {
                tick(state, &input);
                state.drain_events()
            }
            Screen::Menu => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_menu_flow() {
        let mut app = App::new(Settings::default());
        app.menu(MenuAction::MorePlayers).unwrap();
        app.menu(MenuAction::MorePlayers).unwrap();
        app.menu(MenuAction::ToggleTheme).unwrap();
        assert_eq!(app.settings.num_players, 4);
        assert_eq!(app.settings.theme, Theme::Light);

        app.menu(MenuAction::Start).unwrap();
        let state = app.game().unwrap();
        assert_eq!(state.num_players(), 4);

        // Player count is locked while playing
        app.menu(MenuAction::FewerPlayers).unwrap();
        assert_eq!(app.settings.num_players, 4);
    }

    #[test]
    fn test_click_reaches_board_on_next_tick() {
        let mut app = App::new(Settings::default());
        app.start().unwrap();
        app.click_at(Vec2::new(150.0, 250.0));
        let events = app.tick();
        assert!(events.contains(&GameEvent::Placed {
            player: 0,
            row: 2,
            col: 1
        }));
        // The click was consumed
        assert!(app.tick().is_empty());
    }

    #[test]
    fn test_click_after_win_returns_to_menu() {
        let mut app = App::new(Settings {
            rows: 3,
            cols: 3,
            particle_speed: 1000.0,
            ..Settings::default()
        });
        app.start().unwrap();
        for (row, col) in [(0, 0), (0, 1), (0, 0)] {
            app.click_cell(row, col);
            for _ in 0..5 {
                app.tick();
            }
        }
        assert_eq!(app.game().and_then(|s| s.winner), Some(0));

        app.click_cell(2, 2);
        assert!(matches!(app.screen, Screen::Menu));
    }

    #[test]
    fn test_start_rejects_invalid_settings() {
        let mut app = App::new(Settings {
            rows: 1,
            ..Settings::default()
        });
        assert!(app.start().is_err());
        assert!(app.game().is_none());
    }
}
