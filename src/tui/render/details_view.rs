use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::model::Opening;
use crate::ops::board::{BoardGrid, piece_glyph};
use crate::ops::pgn::moves_to_pgn;
use crate::tui::app::App;

pub const NO_SELECTION: &str = "Select an opening to view details";

/// Render the details panel for the selected opening
pub fn render_details_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .padding(Padding::left(1))
        .style(Style::default().bg(bg));

    let lines = match app.selection.get() {
        Some(opening) => opening_lines(app, opening),
        None => vec![Line::from(Span::styled(
            NO_SELECTION,
            Style::default().fg(app.theme.dim).bg(bg),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn opening_lines<'a>(app: &App, opening: &'a Opening) -> Vec<Line<'a>> {
    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);
    let heading_style = Style::default()
        .fg(app.theme.dim)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(
            opening.name.as_str(),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                opening.eco.as_str(),
                Style::default().fg(app.theme.highlight).bg(bg),
            ),
            Span::styled(" \u{00B7} ", dim_style),
            Span::styled(
                opening.style.as_str(),
                Style::default()
                    .fg(app.theme.style_color(opening.style))
                    .bg(bg),
            ),
        ]),
        Line::from(""),
    ];

    if app.config.ui.show_board {
        match BoardGrid::after(&opening.moves) {
            Ok(grid) => {
                board_lines(app, &grid, &mut lines);
                lines.push(Line::from(""));
            }
            Err(e) => {
                lines.push(Line::from(Span::styled(
                    format!("Board unavailable: {}", e),
                    Style::default().fg(app.theme.red).bg(bg),
                )));
                lines.push(Line::from(""));
            }
        }
    }

    lines.push(Line::from(Span::styled("PGN", heading_style)));
    let pgn = moves_to_pgn(&opening.moves);
    if pgn.is_empty() {
        lines.push(Line::from(Span::styled("(starting position)", dim_style)));
    } else {
        lines.push(Line::from(Span::styled(pgn, text_style)));
    }
    if app.copy_acknowledged() {
        lines.push(Line::from(Span::styled(
            "Copied!",
            Style::default()
                .fg(app.theme.green)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::styled("y", Style::default().fg(app.theme.highlight).bg(bg)),
            Span::styled(" copy PGN", dim_style),
        ]));
    }

    if !opening.ideas.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Ideas", heading_style)));
        lines.push(Line::from(Span::styled(opening.ideas.as_str(), text_style)));
    }
    if !opening.famous.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Famous players", heading_style)));
        lines.push(Line::from(Span::styled(
            opening.famous.join(", "),
            text_style,
        )));
    }

    lines
}

/// Eight ranks, eighth rank first, three cells per square, then file letters
/// and the side to move.
fn board_lines(app: &App, grid: &BoardGrid, lines: &mut Vec<Line<'_>>) {
    let bg = app.theme.background;
    let label_style = Style::default().fg(app.theme.dim).bg(bg);

    for rank in (0..8).rev() {
        let mut spans = vec![Span::styled(format!("{} ", rank + 1), label_style)];
        for file in 0..8 {
            // a1 is a dark square
            let square_bg = if (file + rank) % 2 == 0 {
                app.theme.dark_square
            } else {
                app.theme.light_square
            };
            let (glyph, fg) = match grid.piece_at(file, rank) {
                Some(p) if p.is_ascii_uppercase() => {
                    (piece_glyph(p.to_ascii_lowercase()), app.theme.white_piece)
                }
                Some(p) => (piece_glyph(p), app.theme.black_piece),
                None => (' ', square_bg),
            };
            spans.push(Span::styled(
                format!(" {} ", glyph),
                Style::default().fg(fg).bg(square_bg),
            ));
        }
        lines.push(Line::from(spans));
    }

    let files: String = ('a'..='h').map(|f| format!(" {} ", f)).collect();
    lines.push(Line::from(Span::styled(format!("  {}", files), label_style)));

    let to_move = if grid.white_to_move() {
        "White to move"
    } else {
        "Black to move"
    };
    lines.push(Line::from(Span::styled(to_move, label_style)));
}
