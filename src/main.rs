//! Chain Reaction terminal front end
//!
//! Reads commands from stdin, feeds them to the simulation and redraws the
//! board as text. Each placement is ticked until the board settles.

use std::io::{self, BufRead, Write};

use chain_reaction::Settings;
use chain_reaction::consts::TICKS_PER_SECOND;
use chain_reaction::app::{App, MenuAction, Screen};
use chain_reaction::sim::{GameEvent, GamePhase};
use chain_reaction::ui::{render_game, render_menu};

/// Simulated time allowed for one move to resolve before handing control back
const MAX_RESOLVE_TICKS: u32 = 120 * TICKS_PER_SECOND;

fn main() {
    env_logger::init();
    log::info!("Chain Reaction (terminal) starting...");

    let settings = Settings::load(Settings::FILE_NAME);
    let mut app = App::new(settings);

    if let Err(e) = run(&mut app) {
        log::error!("I/O error: {e}");
    }

    if let Err(e) = app.settings.save_to(Settings::FILE_NAME) {
        log::warn!("Could not save settings: {e}");
    }
}

fn run(app: &mut App) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    redraw(app, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        if matches!(words.first(), Some(&"q") | Some(&"quit")) {
            break;
        }

        if matches!(app.screen, Screen::Menu) {
            let action = match words.first().copied() {
                Some("-") => Some(MenuAction::FewerPlayers),
                Some("+") => Some(MenuAction::MorePlayers),
                Some("t") => Some(MenuAction::ToggleTheme),
                Some("s") | Some("start") => Some(MenuAction::Start),
                _ => None,
            };
            if let Some(action) = action {
                if let Err(e) = app.menu(action) {
                    writeln!(stdout, "Cannot start: {e}")?;
                }
            }
        } else {
            game_command(app, &words, &mut stdout)?;
        }
        redraw(app, &mut stdout)?;
    }
    Ok(())
}

fn game_command(app: &mut App, words: &[&str], out: &mut impl Write) -> io::Result<()> {
    match words {
        ["menu"] => app.back_to_menu(),
        ["t"] => {
            let _ = app.menu(MenuAction::ToggleTheme);
        }
        ["reset", n] => {
            let result = n
                .parse::<usize>()
                .ok()
                .zip(app.game_mut())
                .map(|(n, state)| state.reset(n));
            match result {
                Some(Ok(())) => {}
                Some(Err(e)) => writeln!(out, "{e}")?,
                None => writeln!(out, "usage: reset <players>")?,
            }
        }
        [row, col] => match (row.parse::<usize>(), col.parse::<usize>()) {
            (Ok(row), Ok(col)) => {
                app.click_cell(row, col);
                resolve(app, out)?;
            }
            _ => writeln!(out, "usage: <row> <col>")?,
        },
        // Any other input acts as a click (leaves a finished game)
        _ => {
            if app.game().is_some_and(|s| s.phase == GamePhase::GameOver) {
                app.back_to_menu();
            }
        }
    }
    Ok(())
}

/// Tick until the session awaits input again, reporting what happened
fn resolve(app: &mut App, out: &mut impl Write) -> io::Result<()> {
    let mut explosions = 0;
    for _ in 0..MAX_RESOLVE_TICKS {
        for event in app.tick() {
            match event {
                GameEvent::Exploded { .. } => explosions += 1,
                GameEvent::Eliminated { player } => {
                    let name = app.game().map_or("?", |s| s.players[player].name());
                    writeln!(out, "{name} is out!")?;
                }
                _ => {}
            }
        }
        if app.game().is_none_or(|s| s.phase != GamePhase::Resolving) {
            break;
        }
    }
    if explosions > 0 {
        writeln!(out, "{explosions} explosions")?;
    }
    Ok(())
}

fn redraw(app: &App, out: &mut impl Write) -> io::Result<()> {
    match app.game() {
        Some(state) => write!(out, "{}", render_game(state))?,
        None => write!(out, "{}", render_menu(&app.settings))?,
    }
    out.flush()
}
