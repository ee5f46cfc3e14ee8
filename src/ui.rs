//! Text renderer
//!
//! Draws the menu and the board as plain text for the terminal front end.
//! Cells show their atom count followed by the owner's initial; cells one
//! atom away from exploding are marked with `*`.

use std::fmt::Write;

use crate::settings::Settings;
use crate::sim::{GamePhase, GameState};

/// Menu screen
pub fn render_menu(settings: &Settings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "CHAIN REACTION");
    let _ = writeln!(out, "Players: {}", settings.num_players);
    let _ = writeln!(out, "Theme: {}", settings.theme.as_str());
    let _ = writeln!(out, "[-] fewer  [+] more  [t] theme  [s] start  [q] quit");
    out
}

/// Board, atoms in flight and turn status
pub fn render_game(state: &GameState) -> String {
    let mut out = String::new();
    let cols = state.board.cols();

    let _ = write!(out, "   ");
    for col in 0..cols {
        let _ = write!(out, "{col:>4}");
    }
    out.push('\n');

    for row in 0..state.board.rows() {
        let _ = write!(out, "{row:>3}");
        for col in 0..cols {
            let text = match state.board.get(row, col) {
                Some(cell) if !cell.is_empty() => {
                    let initial = cell
                        .owner
                        .and_then(|o| state.players.get(o))
                        .map_or('?', |p| p.name().chars().next().unwrap_or('?'));
                    let mark = if state.board.is_critical(row, col) { "*" } else { "" };
                    format!("{}{initial}{mark}", cell.count)
                }
                _ => ".".to_string(),
            };
            let _ = write!(out, "{text:>4}");
        }
        out.push('\n');
    }

    if !state.particles.is_empty() {
        let _ = writeln!(out, "{} atoms in flight", state.particles.len());
    }
    let _ = writeln!(out, "{}", status_line(state));
    out
}

/// One-line summary of whose turn it is or who won
pub fn status_line(state: &GameState) -> String {
    let totals = state.board.orb_totals(state.num_players());
    let roster: Vec<String> = state
        .players
        .iter()
        .zip(&totals)
        .map(|(p, total)| {
            if p.alive {
                format!("{}:{total}", p.name())
            } else {
                format!("{}:out", p.name())
            }
        })
        .collect();

    let headline = match (state.winner, state.phase) {
        (Some(w), _) => format!("{} WINS!", state.players[w].name()),
        (None, GamePhase::Resolving) => "Resolving...".to_string(),
        (None, _) => format!("{}'s turn", state.current().name()),
    };
    format!("{headline}  [{}]", roster.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_render_game_shows_atoms() {
        let settings = Settings {
            rows: 3,
            cols: 3,
            ..Settings::default()
        };
        let mut state = GameState::new(&settings).unwrap();
        tick(&mut state, &TickInput::place(1, 1));
        tick(&mut state, &TickInput::place(0, 0));

        let text = render_game(&state);
        assert!(text.contains("1R"));
        assert!(text.contains("1G*"));
        assert!(text.contains("RED's turn"));
        assert!(text.contains("GREEN:1"));
    }

    #[test]
    fn test_render_menu() {
        let text = render_menu(&Settings::default());
        assert!(text.contains("Players: 2"));
        assert!(text.contains("Theme: Dark"));
    }
}
