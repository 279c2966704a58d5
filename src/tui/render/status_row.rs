use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::{display_width, fit_to_width, truncate_to_width};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => {
            let (text, color) = match &app.status_message {
                Some(msg) => (format!(" {}", msg), app.theme.highlight),
                None => (format!(" {}", summary(app)), app.theme.dim),
            };
            let hint = "/ search  m first move  y copy  ? help";
            let left_width = width.saturating_sub(display_width(hint));
            // Hints give way to the message on narrow terminals
            if left_width > display_width(&text) {
                Line::from(vec![
                    Span::styled(
                        fit_to_width(&text, left_width),
                        Style::default().fg(color).bg(bg),
                    ),
                    Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)),
                ])
            } else {
                Line::from(Span::styled(
                    truncate_to_width(&text, width),
                    Style::default().fg(color).bg(bg),
                ))
            }
        }
        Mode::Search => {
            // Search prompt: /query▌
            let mut spans = vec![
                Span::styled(
                    format!("/{}", app.query),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)), // ▌ cursor
            ];
            let hint = "Enter keep  Esc clear";
            let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
            let hint_width = display_width(hint);
            if content_width + hint_width < width {
                let padding = width - content_width - hint_width;
                spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
                spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
            }
            Line::from(spans)
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// `4 openings`, or `2 of 36 openings · first move e4` when filtered
fn summary(app: &App) -> String {
    let total = app.catalog.len();
    if !app.is_filtered() {
        return format!("{} openings", total);
    }
    let mut text = format!("{} of {} openings", app.filtered.len(), total);
    if let Some(m) = &app.first_move {
        text.push_str(&format!(" \u{00B7} first move {}", m));
    }
    text
}
