use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::clipboard::MemoryClipboard;
use crate::model::{Catalog, CatalogSource, Config, Opening, OpeningStyle};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

pub fn opening(name: &str, eco: &str, moves: &[&str], style: OpeningStyle) -> Opening {
    Opening {
        name: name.into(),
        eco: eco.into(),
        moves: moves.iter().map(|m| m.to_string()).collect(),
        ideas: String::new(),
        style,
        famous: Vec::new(),
    }
}

/// Four openings: two sharing a long prefix, one Sicilian, one 1. d4 line.
pub fn sample_openings() -> Vec<Opening> {
    vec![
        opening(
            "Italian Game",
            "C50",
            &["e4", "e5", "Nf3", "Nc6", "Bc4"],
            OpeningStyle::Classical,
        ),
        opening(
            "Ruy Lopez",
            "C60",
            &["e4", "e5", "Nf3", "Nc6", "Bb5"],
            OpeningStyle::Positional,
        ),
        opening(
            "Sicilian Najdorf",
            "B90",
            &["e4", "c5", "Nf3", "d6", "d4", "cxd4", "Nxd4", "Nf6", "Nc3", "a6"],
            OpeningStyle::Aggressive,
        ),
        opening(
            "Queen's Gambit",
            "D06",
            &["d4", "d5", "c4"],
            OpeningStyle::Classical,
        ),
    ]
}

/// An App over the given openings with an in-memory clipboard.
pub fn app_with_openings(openings: Vec<Opening>) -> App {
    let catalog = Catalog::new(CatalogSource::Builtin, openings);
    App::new(catalog, Config::default(), Box::new(MemoryClipboard::default()))
}

pub fn sample_app() -> App {
    app_with_openings(sample_openings())
}
