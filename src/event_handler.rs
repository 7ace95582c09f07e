use crate::app::App;
use crate::models::InputMode;
use crate::sources::WebPageSource;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::io::Result;

/// Returns `Ok(true)` when the user asked to leave the screen.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    let quit = match app.screen.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Editing => handle_editing_mode(app, key),
    };
    if quit {
        app.should_quit = true;
    }
    Ok(quit)
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,

        // --- ROW NAVIGATION ---
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.screen.select_next(),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => app.screen.select_previous(),

        // --- ACTIVATION ---
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate_selected();
            app.flush();
        }
        KeyCode::Char('e') => app.screen.begin_editing(app.prefs.as_ref()),
        KeyCode::Char('c') => {
            app.set_home_page(WebPageSource::Blank);
            app.screen.status_message = String::from("Homepage cleared");
            app.flush();
        }
        KeyCode::Char('r') => app.reload(),
        _ => {}
    }
    false
}

fn handle_editing_mode(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => {
            app.commit_edit();
            app.flush();
        }
        // CLEAR LINE (Standard Terminal Shortcut)
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.screen.edit_buffer.clear();
        }
        // PASTE (Standard Shortcut)
        KeyCode::Char('v') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(text) = app.clipboard_text() {
                for c in text.chars() {
                    app.screen.push_char(c);
                }
            }
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.screen.push_char(c)
        }
        KeyCode::Backspace => {
            app.screen.edit_buffer.pop();
        }
        KeyCode::Esc => app.screen.cancel_edit(),
        _ => {}
    }
    false
}
