use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode::pop_grapheme;

pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Cancel: drop the query entirely
        (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
            app.set_query(String::new());
        }

        // Keep the query and go back to the tree
        (_, KeyCode::Enter) => {
            app.mode = Mode::Navigate;
        }

        (_, KeyCode::Backspace) => {
            let mut query = app.query.clone();
            pop_grapheme(&mut query);
            app.set_query(query);
        }

        // Ctrl+U clears the line
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            app.set_query(String::new());
        }

        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
            let mut query = app.query.clone();
            query.push(c);
            app.set_query(query);
        }

        _ => {}
    }
}
