use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    // Clear any transient status message on keypress
    app.status_message = None;

    match (key.modifiers, key.code) {
        // Quit: q or Ctrl+C
        (KeyModifiers::NONE, KeyCode::Char('q')) => app.should_quit = true,
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        (_, KeyCode::Char('?')) => app.show_help = true,

        // Search: / (the query stays live while typing)
        (_, KeyCode::Char('/')) => app.mode = Mode::Search,

        // Cursor movement
        (_, KeyCode::Char('j') | KeyCode::Down) => app.move_cursor(1),
        (_, KeyCode::Char('k') | KeyCode::Up) => app.move_cursor(-1),
        (_, KeyCode::PageDown) => app.move_cursor(10),
        (_, KeyCode::PageUp) => app.move_cursor(-10),
        (_, KeyCode::Char('g') | KeyCode::Home) => app.jump_top(),
        (_, KeyCode::Char('G') | KeyCode::End) => app.jump_bottom(),

        // Tree
        (_, KeyCode::Char('l') | KeyCode::Right) => app.expand_or_enter(),
        (_, KeyCode::Char('h') | KeyCode::Left) => app.collapse_or_parent(),
        (_, KeyCode::Enter | KeyCode::Char(' ')) => app.activate(),

        // First-move filter
        (_, KeyCode::Char('m') | KeyCode::Tab) => app.cycle_first_move(true),
        (_, KeyCode::Char('M') | KeyCode::BackTab) => app.cycle_first_move(false),
        (_, KeyCode::Char('0')) => app.set_first_move(None),

        // Esc drops the query, x drops every filter
        (_, KeyCode::Esc) => app.set_query(String::new()),
        (_, KeyCode::Char('x')) => app.clear_filters(),

        (_, KeyCode::Char('y')) => app.copy_pgn(),

        _ => {}
    }
}
