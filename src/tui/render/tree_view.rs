use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use regex::Regex;

use crate::model::Opening;
use crate::ops::pgn::ply_label;
use crate::tui::app::{App, FlatItem};
use crate::util::unicode::display_width;

use super::push_highlighted_spans;

/// Shown in place of the tree when the filters leave nothing
pub const NO_MATCHES: &str = "No openings match your filters.";

/// Render the move tree panel
pub fn render_tree_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let flat_items = app.build_flat_items();

    if flat_items.is_empty() {
        let empty = Paragraph::new(format!(" {}", NO_MATCHES))
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;
    let cursor = app.cursor.min(flat_items.len() - 1);
    app.cursor = cursor;
    if cursor < app.scroll_offset {
        app.scroll_offset = cursor;
    } else if visible_height > 0 && cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = cursor + 1 - visible_height;
    }
    let scroll = app.scroll_offset;

    let search_re = app.query_re();
    let end = flat_items.len().min(scroll + visible_height);
    let mut lines: Vec<Line> = Vec::with_capacity(visible_height);

    for (item, row) in flat_items[scroll..end].iter().zip(scroll..end) {
        lines.push(render_row(
            app,
            item,
            row == cursor,
            area.width as usize,
            search_re.as_ref(),
        ));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

fn render_row<'a>(
    app: &'a App,
    item: &FlatItem,
    is_cursor: bool,
    width: usize,
    search_re: Option<&Regex>,
) -> Line<'a> {
    let bg = app.theme.background;
    let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
    let dim_style = Style::default().fg(app.theme.dim).bg(row_bg);
    let mut spans: Vec<Span> = Vec::new();

    // Column 0 reservation: left border accent for the cursor row
    if is_cursor {
        spans.push(Span::styled(
            "\u{258E}",
            Style::default().fg(app.theme.selection_border).bg(row_bg),
        ));
    } else {
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    let (depth, is_last_sibling, ancestor_last) = match item {
        FlatItem::Node {
            depth,
            is_last_sibling,
            ancestor_last,
            ..
        }
        | FlatItem::Opening {
            depth,
            is_last_sibling,
            ancestor_last,
            ..
        } => (*depth, *is_last_sibling, ancestor_last.as_slice()),
    };

    let marker = match item {
        FlatItem::Node {
            is_expandable: true,
            is_expanded,
            ..
        } => {
            if *is_expanded {
                "\u{25BC}" // ▼
            } else {
                "\u{25B6}" // ▶
            }
        }
        FlatItem::Node { .. } => " ",
        FlatItem::Opening { .. } => "\u{2022}", // •
    };

    // Tree prefix: nothing at depth 0, continuation lines + branch below it
    if depth > 0 {
        spans.push(Span::styled("  ", dim_style));
        for is_ancestor_last in ancestor_last.iter().skip(1) {
            if *is_ancestor_last {
                spans.push(Span::styled("   ", dim_style));
            } else {
                spans.push(Span::styled("\u{2502}  ", dim_style)); // │ + 2 spaces
            }
        }
        let tree_char = if is_last_sibling {
            "\u{2514}" // └
        } else {
            "\u{251C}" // ├
        };
        spans.push(Span::styled(tree_char, dim_style));
    }
    spans.push(Span::styled(marker, dim_style));
    spans.push(Span::styled(" ", dim_style));

    match item {
        FlatItem::Node { path, token, .. } => {
            let move_style = if is_cursor {
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(row_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.text).bg(row_bg)
            };
            spans.push(Span::styled(ply_label(depth), dim_style));
            spans.push(Span::styled(" ", dim_style));
            spans.push(Span::styled(token.clone(), move_style));

            if let Some(node) = app.tree.find(path) {
                match node.openings.as_slice() {
                    [] => {}
                    [only] if node.children.is_empty() => {
                        spans.push(Span::styled("  ", dim_style));
                        push_opening_label(&mut spans, app, only, row_bg, search_re);
                    }
                    listed => {
                        spans.push(Span::styled(format!("  ({})", listed.len()), dim_style));
                    }
                }
            }
        }
        FlatItem::Opening { .. } => {
            if let Some(opening) = app.opening_for(item) {
                push_opening_label(&mut spans, app, opening, row_bg, search_re);
            }
        }
    }

    // Fill the rest of the cursor row with the selection background
    if is_cursor {
        let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        if used < width {
            spans.push(Span::styled(
                " ".repeat(width - used),
                Style::default().bg(row_bg),
            ));
        }
    }

    Line::from(spans)
}

/// `ECO name`, with query matches highlighted. The selected opening is bold.
fn push_opening_label<'a>(
    spans: &mut Vec<Span<'a>>,
    app: &App,
    opening: &Opening,
    row_bg: ratatui::style::Color,
    search_re: Option<&Regex>,
) {
    let is_selected = app.selection.is_selected(opening);
    let mut name_style = Style::default()
        .fg(app.theme.style_color(opening.style))
        .bg(row_bg);
    let mut eco_style = Style::default().fg(app.theme.dim).bg(row_bg);
    if is_selected {
        name_style = name_style.add_modifier(Modifier::BOLD);
        eco_style = eco_style.fg(app.theme.highlight).add_modifier(Modifier::BOLD);
    }
    let highlight_style = Style::default()
        .fg(app.theme.search_match_fg)
        .bg(app.theme.search_match_bg)
        .add_modifier(Modifier::BOLD);

    push_highlighted_spans(spans, &opening.eco, eco_style, highlight_style, search_re);
    spans.push(Span::styled(" ", Style::default().bg(row_bg)));
    push_highlighted_spans(spans, &opening.name, name_style, highlight_style, search_re);
}
