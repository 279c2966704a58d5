use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

pub const SEARCH_PLACEHOLDER: &str = "Search name or ECO\u{2026}";

/// Render the header: title and search box, first-move chips, separator
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    // Row 0: title + search box
    let mut title_spans = vec![
        Span::styled(
            " Chess Beads",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   / ", dim_style),
    ];
    let searching = app.mode == Mode::Search;
    if app.query.is_empty() && !searching {
        title_spans.push(Span::styled(SEARCH_PLACEHOLDER, dim_style));
    } else {
        title_spans.push(Span::styled(
            app.query.clone(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
        if searching {
            title_spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
        }
    }

    // Row 1: first-move chips, "all" first
    let mut chip_spans = vec![Span::styled(" first move ", dim_style)];
    let all = std::iter::once(None).chain(app.first_moves.iter().map(Some));
    for chip in all {
        let is_active = chip == app.first_move.as_ref();
        let label = format!(" {} ", chip.map_or("all", String::as_str));
        let style = if is_active {
            Style::default()
                .fg(app.theme.highlight)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        chip_spans.push(Span::styled(label, style));
    }

    // Row 2: separator
    let separator = Span::styled("\u{2500}".repeat(area.width as usize), dim_style);

    let lines = vec![
        Line::from(title_spans),
        Line::from(chip_spans),
        Line::from(separator),
    ];
    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
