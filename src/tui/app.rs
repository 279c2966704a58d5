use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::io::catalog_io;
use crate::io::clipboard::{Clipboard, SystemClipboard};
use crate::io::config_io;
use crate::io::logging;
use crate::io::watcher::{CatalogWatcher, FileEvent};
use crate::model::{Catalog, Config, Opening, TreeNode, build_tree, child_path};
use crate::ops::expansion::{ExpansionState, policy_for};
use crate::ops::filter;
use crate::ops::pgn::moves_to_pgn;
use crate::ops::selection::Selection;

use super::input;
use super::render;
use super::theme::Theme;

/// How long the "Copied!" acknowledgment stays visible
pub const COPY_ACK_WINDOW: Duration = Duration::from_millis(1500);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
}

/// A flattened row in the tree panel's visible list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlatItem {
    /// A move node
    Node {
        /// Path identifier, e.g. `"/e4/e5"`
        path: String,
        token: String,
        depth: usize,
        is_expandable: bool,
        is_expanded: bool,
        is_last_sibling: bool,
        /// For building tree continuation lines: whether each ancestor is the last sibling
        ancestor_last: Vec<bool>,
    },
    /// One of several openings that end on the same node
    Opening {
        /// Path of the node the opening ends on
        node_path: String,
        /// Index into that node's `openings`
        index: usize,
        depth: usize,
        is_last_sibling: bool,
        ancestor_last: Vec<bool>,
    },
}

impl FlatItem {
    pub fn depth(&self) -> usize {
        match self {
            FlatItem::Node { depth, .. } | FlatItem::Opening { depth, .. } => *depth,
        }
    }

    /// Stable identity of the row across rebuilds
    fn row_key(&self) -> String {
        match self {
            FlatItem::Node { path, .. } => path.clone(),
            FlatItem::Opening {
                node_path, index, ..
            } => format!("{}#{}", node_path, index),
        }
    }
}

/// Main application state
pub struct App {
    pub catalog: Catalog,
    pub config: Config,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// Help overlay visible
    pub show_help: bool,
    /// Free-text filter over name and ECO code
    pub query: String,
    /// First-move filter
    pub first_move: Option<String>,
    /// Distinct first moves of the whole catalog (the chips in the header)
    pub first_moves: Vec<String>,
    pub filtered: Vec<Opening>,
    pub tree: TreeNode,
    pub expansion: ExpansionState,
    pub selection: Selection,
    /// Cursor index into the flat visible rows
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    /// When the PGN was last copied successfully
    pub copied_at: Option<Instant>,
    /// One-line message for the status row (reload results, copy errors)
    pub status_message: Option<String>,
    pub clipboard: Box<dyn Clipboard>,
    pub watcher: Option<CatalogWatcher>,
}

impl App {
    pub fn new(catalog: Catalog, config: Config, clipboard: Box<dyn Clipboard>) -> Self {
        let theme = Theme::from_config(&config.ui);
        let first_moves = filter::first_moves(&catalog.openings);
        let filtered = catalog.openings.clone();
        let tree = build_tree(&filtered);
        let expansion = ExpansionState::with_policy(
            policy_for(config.tree.expand),
            &tree,
            false,
            None,
        );

        App {
            catalog,
            config,
            theme,
            mode: Mode::Navigate,
            should_quit: false,
            show_help: false,
            query: String::new(),
            first_move: None,
            first_moves,
            filtered,
            tree,
            expansion,
            selection: Selection::new(),
            cursor: 0,
            scroll_offset: 0,
            copied_at: None,
            status_message: None,
            clipboard,
            watcher: None,
        }
    }

    pub fn is_filtered(&self) -> bool {
        filter::is_filtered(&self.query, self.first_move.as_deref())
    }

    /// Recompute everything derived from the catalog and the filters:
    /// filtered list, tree, selection, then expansion.
    pub fn refresh(&mut self) {
        let anchor = self.build_flat_items().get(self.cursor).map(FlatItem::row_key);

        self.filtered =
            filter::filter_openings(&self.catalog.openings, &self.query, self.first_move.as_deref());
        self.tree = build_tree(&self.filtered);
        if self.selection.reconcile(&self.filtered) {
            tracing::debug!("selection cleared by filter");
        }
        let is_filtered = self.is_filtered();
        self.expansion
            .rebuild(&self.tree, is_filtered, self.selection.get());

        // Keep the cursor on the same row when it survived the rebuild
        let items = self.build_flat_items();
        self.cursor = anchor
            .and_then(|key| items.iter().position(|item| item.row_key() == key))
            .unwrap_or(0);
        self.clamp_cursor(items.len());
    }

    fn clamp_cursor(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Build the flat list of visible rows from the tree and expansion state
    pub fn build_flat_items(&self) -> Vec<FlatItem> {
        let mut items = Vec::new();
        flatten_node(&self.tree, "", 0, &[], &self.expansion, &mut items);
        items
    }

    /// The row under the cursor
    pub fn cursor_item(&self) -> Option<FlatItem> {
        self.build_flat_items().into_iter().nth(self.cursor)
    }

    /// The opening a row stands for: the opening of an opening row, or the
    /// only opening of a leaf node. Openings on a node with child moves get
    /// rows of their own.
    pub fn opening_for(&self, item: &FlatItem) -> Option<&Opening> {
        match item {
            FlatItem::Node { path, .. } => {
                let node = self.tree.find(path)?;
                if !node.children.is_empty() {
                    return None;
                }
                match node.openings.as_slice() {
                    [only] => Some(only),
                    _ => None,
                }
            }
            FlatItem::Opening {
                node_path, index, ..
            } => self.tree.find(node_path)?.openings.get(*index),
        }
    }

    /// Case-insensitive regex for highlighting the live query in rows
    pub fn query_re(&self) -> Option<Regex> {
        let q = filter::normalize_query(&self.query);
        if q.is_empty() {
            return None;
        }
        Regex::new(&format!("(?i){}", regex::escape(&q))).ok()
    }

    // -----------------------------------------------------------------------
    // Tree interaction
    // -----------------------------------------------------------------------

    /// Activate the cursor row. A leaf holding exactly one opening selects
    /// it; any other expandable node toggles. Opening rows only select.
    pub fn activate(&mut self) {
        let Some(item) = self.cursor_item() else {
            return;
        };
        if let Some(opening) = self.opening_for(&item).cloned() {
            tracing::debug!(opening = %opening.key(), "selected");
            self.selection.select(opening);
        }
        if let FlatItem::Node { path, .. } = &item {
            self.expansion.toggle(&self.tree, path);
        }
        let len = self.build_flat_items().len();
        self.clamp_cursor(len);
    }

    /// Expand the cursor node, or step into it when already open
    pub fn expand_or_enter(&mut self) {
        let items = self.build_flat_items();
        let Some(FlatItem::Node {
            path,
            is_expandable: true,
            is_expanded,
            ..
        }) = items.get(self.cursor)
        else {
            return;
        };
        if *is_expanded {
            if self.cursor + 1 < items.len() {
                self.cursor += 1;
            }
        } else {
            self.expansion.expand(&self.tree, path);
        }
    }

    /// Collapse the cursor node, or move to its parent row
    pub fn collapse_or_parent(&mut self) {
        let items = self.build_flat_items();
        let Some(item) = items.get(self.cursor) else {
            return;
        };
        if let FlatItem::Node {
            path,
            is_expanded: true,
            ..
        } = item
        {
            self.expansion.collapse(path);
            return;
        }
        let depth = item.depth();
        if depth == 0 {
            return;
        }
        if let Some(i) = items[..self.cursor]
            .iter()
            .rposition(|it| matches!(it, FlatItem::Node { .. }) && it.depth() == depth - 1)
        {
            self.cursor = i;
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.build_flat_items().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let next = self.cursor.saturating_add_signed(delta);
        self.cursor = next.min(len - 1);
    }

    pub fn jump_top(&mut self) {
        self.cursor = 0;
    }

    pub fn jump_bottom(&mut self) {
        self.cursor = self.build_flat_items().len().saturating_sub(1);
    }

    // -----------------------------------------------------------------------
    // Filters
    // -----------------------------------------------------------------------

    pub fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.refresh();
        }
    }

    pub fn set_first_move(&mut self, first_move: Option<String>) {
        let first_move = first_move.filter(|m| !m.is_empty());
        if self.first_move != first_move {
            tracing::debug!(first_move = ?first_move, "first-move filter");
            self.first_move = first_move;
            self.refresh();
        }
    }

    /// Step through none → each first move → none, forward or backward.
    pub fn cycle_first_move(&mut self, forward: bool) {
        let n = self.first_moves.len() + 1;
        let current = match &self.first_move {
            None => 0,
            Some(m) => self.first_moves.iter().position(|f| f == m).map_or(0, |i| i + 1),
        };
        let next = if forward {
            (current + 1) % n
        } else {
            (current + n - 1) % n
        };
        let first_move = next.checked_sub(1).map(|i| self.first_moves[i].clone());
        self.set_first_move(first_move);
    }

    pub fn clear_filters(&mut self) {
        if !self.query.is_empty() || self.first_move.is_some() {
            self.query.clear();
            self.first_move = None;
            self.refresh();
        }
    }

    // -----------------------------------------------------------------------
    // Clipboard
    // -----------------------------------------------------------------------

    /// Copy the selected opening's PGN. Failures are logged and shown in the
    /// status row; they never interrupt the session.
    pub fn copy_pgn(&mut self) {
        let Some(opening) = self.selection.get() else {
            return;
        };
        let pgn = moves_to_pgn(&opening.moves);
        match self.clipboard.set_text(&pgn) {
            Ok(()) => {
                tracing::info!(opening = %opening.key(), "copied PGN");
                self.copied_at = Some(Instant::now());
                self.status_message = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "copy failed");
                self.copied_at = None;
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Whether the "Copied!" acknowledgment is showing at `now`
    pub fn copy_acknowledged_at(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPY_ACK_WINDOW)
    }

    pub fn copy_acknowledged(&self) -> bool {
        self.copy_acknowledged_at(Instant::now())
    }

    // -----------------------------------------------------------------------
    // Catalog reload
    // -----------------------------------------------------------------------

    /// Re-read the catalog file. On error the current catalog stays.
    pub fn reload_catalog(&mut self) {
        let Some(path) = self.catalog.file().cloned() else {
            return;
        };
        match catalog_io::load_catalog_file(&path) {
            Ok(catalog) => {
                tracing::info!(path = %path.display(), openings = catalog.len(), "catalog reloaded");
                self.status_message = Some(format!("reloaded {} openings", catalog.len()));
                self.catalog = catalog;
                self.first_moves = filter::first_moves(&self.catalog.openings);
                if let Some(m) = &self.first_move
                    && !self.first_moves.contains(m)
                {
                    self.first_move = None;
                }
                self.refresh();
            }
            Err(e) => {
                tracing::warn!(error = %e, "catalog reload failed");
                self.status_message = Some(e.to_string());
            }
        }
    }

    pub fn handle_file_events(&mut self, events: Vec<FileEvent>) {
        if events
            .iter()
            .any(|e| matches!(e, FileEvent::CatalogChanged(_)))
        {
            self.reload_catalog();
        }
    }
}

/// Recursively flatten the sub-items of `node` into visible rows.
///
/// The sub-items of a node are the openings that end on it followed by its
/// child moves. A leaf with a single opening stands for that opening itself,
/// so its opening gets no row.
fn flatten_node(
    node: &TreeNode,
    path: &str,
    depth: usize,
    ancestor_last: &[bool],
    expansion: &ExpansionState,
    items: &mut Vec<FlatItem>,
) {
    let listed = path.is_empty() || node.openings.len() > 1 || !node.children.is_empty();
    let opening_rows = if listed { node.openings.len() } else { 0 };
    let total = opening_rows + node.children.len();

    for index in 0..opening_rows {
        items.push(FlatItem::Opening {
            node_path: path.to_string(),
            index,
            depth,
            is_last_sibling: index + 1 == total,
            ancestor_last: ancestor_last.to_vec(),
        });
    }

    for (i, (token, child)) in node.children.iter().enumerate() {
        let is_last = opening_rows + i + 1 == total;
        let path = child_path(path, token);
        let is_expandable = child.is_expandable();
        let is_expanded = is_expandable && expansion.is_expanded(&path);

        items.push(FlatItem::Node {
            path: path.clone(),
            token: token.clone(),
            depth,
            is_expandable,
            is_expanded,
            is_last_sibling: is_last,
            ancestor_last: ancestor_last.to_vec(),
        });

        if is_expanded {
            let mut child_ancestors = ancestor_last.to_vec();
            child_ancestors.push(is_last);
            flatten_node(child, &path, depth + 1, &child_ancestors, expansion, items);
        }
    }
}

/// Run the TUI application
pub fn run(
    config_path: Option<&Path>,
    catalog_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::read_config(config_path)?;
    let _log_guard = logging::init_file_logging(&config_io::default_log_dir(), &config.log);

    let path = catalog_io::catalog_path(catalog_path, &config);
    let catalog = catalog_io::load_catalog(path.as_deref())?;
    tracing::info!(openings = catalog.len(), source = ?catalog.source, "starting TUI");

    let watch = config.catalog.watch;
    let mut app = App::new(catalog, config, Box::new(SystemClipboard::new()));

    if watch && let Some(file) = app.catalog.file() {
        match CatalogWatcher::start(file) {
            Ok(w) => app.watcher = Some(w),
            Err(e) => tracing::warn!(error = %e, "could not watch catalog"),
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("exiting TUI");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        let events = app.watcher.as_ref().map(|w| w.poll()).unwrap_or_default();
        if !events.is_empty() {
            app.handle_file_events(events);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::clipboard::MemoryClipboard;
    use crate::model::{CatalogSource, OpeningStyle};
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    fn node_paths(app: &App) -> Vec<String> {
        app.build_flat_items()
            .into_iter()
            .filter_map(|item| match item {
                FlatItem::Node { path, .. } => Some(path),
                FlatItem::Opening { .. } => None,
            })
            .collect()
    }

    fn cursor_to_path(app: &mut App, path: &str) {
        app.cursor = app
            .build_flat_items()
            .iter()
            .position(|item| matches!(item, FlatItem::Node { path: p, .. } if p == path))
            .unwrap();
    }

    #[test]
    fn first_level_expanded_by_default() {
        let app = sample_app();
        assert_eq!(
            node_paths(&app),
            vec!["/e4", "/e4/e5", "/e4/c5", "/d4", "/d4/d5"]
        );
        assert!(!app.expansion.is_expanded("/e4/e5"));
    }

    #[test]
    fn activating_a_row_toggles_it() {
        let mut app = sample_app();
        cursor_to_path(&mut app, "/e4");
        app.activate();
        assert_eq!(node_paths(&app), vec!["/e4", "/d4", "/d4/d5"]);
        app.activate();
        assert_eq!(
            node_paths(&app),
            vec!["/e4", "/e4/e5", "/e4/c5", "/d4", "/d4/d5"]
        );
    }

    #[test]
    fn activating_single_opening_leaf_selects_it() {
        let mut app = sample_app();
        cursor_to_path(&mut app, "/d4/d5");
        app.activate();
        assert!(app.expansion.is_expanded("/d4/d5"));
        assert!(app.selection.get().is_none());
        cursor_to_path(&mut app, "/d4/d5/c4");
        app.activate();
        assert_eq!(
            app.selection.get().map(|o| o.name.as_str()),
            Some("Queen's Gambit")
        );
    }

    #[test]
    fn shared_node_lists_openings_and_selects_without_toggling() {
        let mut app = app_with_openings(vec![
            opening("Sicilian Najdorf", "B90", &["e4", "c5"], OpeningStyle::Aggressive),
            opening("Sicilian Dragon", "B70", &["e4", "c5"], OpeningStyle::Aggressive),
        ]);
        cursor_to_path(&mut app, "/e4/c5");
        app.activate();
        assert!(app.expansion.is_expanded("/e4/c5"));
        assert!(app.selection.get().is_none());

        let items = app.build_flat_items();
        let sub = items
            .iter()
            .position(|item| matches!(item, FlatItem::Opening { index: 1, .. }))
            .unwrap();
        app.cursor = sub;
        app.activate();
        assert_eq!(
            app.selection.get().map(|o| o.name.as_str()),
            Some("Sicilian Dragon")
        );
        assert!(app.expansion.is_expanded("/e4/c5"));
    }

    #[test]
    fn opening_on_inner_node_gets_its_own_row() {
        let mut app = app_with_openings(vec![
            opening("Sicilian Defense", "B20", &["e4", "c5"], OpeningStyle::Aggressive),
            opening(
                "Sicilian Najdorf",
                "B90",
                &["e4", "c5", "Nf3", "d6"],
                OpeningStyle::Aggressive,
            ),
        ]);
        app.set_query("sicilian".into());
        assert_eq!(app.build_flat_items().len(), 5);

        // The node itself only toggles
        cursor_to_path(&mut app, "/e4/c5");
        app.activate();
        assert!(!app.expansion.is_expanded("/e4/c5"));
        assert!(app.selection.get().is_none());
        app.activate();
        assert!(app.expansion.is_expanded("/e4/c5"));

        let row = app
            .build_flat_items()
            .iter()
            .position(|item| {
                matches!(item, FlatItem::Opening { node_path, index: 0, .. } if node_path == "/e4/c5")
            })
            .unwrap();
        app.cursor = row;
        app.activate();
        assert_eq!(
            app.selection.get().map(|o| o.name.as_str()),
            Some("Sicilian Defense")
        );
        assert!(app.expansion.is_expanded("/e4/c5"));
        assert_eq!(app.build_flat_items().len(), 5);
    }

    #[test]
    fn filtering_expands_everything() {
        let mut app = sample_app();
        app.set_query("italian".into());
        assert_eq!(
            node_paths(&app),
            vec!["/e4", "/e4/e5", "/e4/e5/Nf3", "/e4/e5/Nf3/Nc6", "/e4/e5/Nf3/Nc6/Bc4"]
        );
    }

    #[test]
    fn clearing_filter_reveals_selection() {
        let mut app = sample_app();
        app.set_query("ruy".into());
        cursor_to_path(&mut app, "/e4/e5/Nf3/Nc6/Bb5");
        app.activate();
        assert_eq!(app.selection.get().map(|o| o.eco.as_str()), Some("C60"));

        app.set_query(String::new());
        for path in ["/e4", "/e4/e5", "/e4/e5/Nf3", "/e4/e5/Nf3/Nc6"] {
            assert!(app.expansion.is_expanded(path), "{} should be open", path);
        }
        assert!(!app.expansion.is_expanded("/d4/d5"));
    }

    #[test]
    fn filter_that_excludes_selection_clears_it() {
        let mut app = sample_app();
        app.selection.select(app.catalog.openings[0].clone());
        app.set_first_move(Some("d4".into()));
        assert!(app.selection.get().is_none());
    }

    #[test]
    fn clear_filters_drops_blank_query() {
        let mut app = sample_app();
        app.set_query("   ".into());
        assert!(!app.is_filtered());
        app.clear_filters();
        assert_eq!(app.query, "");
    }

    #[test]
    fn empty_first_move_is_no_filter() {
        let mut app = sample_app();
        app.set_first_move(Some(String::new()));
        assert_eq!(app.first_move, None);
        assert_eq!(app.filtered.len(), app.catalog.len());
    }

    #[test]
    fn no_matches_gives_empty_tree() {
        let mut app = sample_app();
        app.set_query("zzz".into());
        assert!(app.filtered.is_empty());
        assert!(app.build_flat_items().is_empty());
        assert_eq!(app.cursor, 0);
        app.activate();
        app.move_cursor(1);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn cycle_first_move_wraps_through_none() {
        let mut app = sample_app();
        assert_eq!(app.first_moves, vec!["d4", "e4"]);
        app.cycle_first_move(true);
        assert_eq!(app.first_move.as_deref(), Some("d4"));
        app.cycle_first_move(true);
        assert_eq!(app.first_move.as_deref(), Some("e4"));
        app.cycle_first_move(true);
        assert_eq!(app.first_move, None);
        app.cycle_first_move(false);
        assert_eq!(app.first_move.as_deref(), Some("e4"));
        assert!(app.filtered.iter().all(|o| o.moves[0] == "e4"));
    }

    #[test]
    fn collapse_moves_to_parent() {
        let mut app = sample_app();
        cursor_to_path(&mut app, "/e4/c5");
        app.collapse_or_parent();
        let items = app.build_flat_items();
        assert!(matches!(&items[app.cursor], FlatItem::Node { path, .. } if path == "/e4"));
        app.collapse_or_parent();
        assert!(!app.expansion.is_expanded("/e4"));
    }

    #[test]
    fn expand_then_enter() {
        let mut app = sample_app();
        cursor_to_path(&mut app, "/e4/e5");
        app.expand_or_enter();
        assert!(app.expansion.is_expanded("/e4/e5"));
        let before = app.cursor;
        app.expand_or_enter();
        assert_eq!(app.cursor, before + 1);
    }

    #[test]
    fn copy_pgn_acknowledges_for_a_while() {
        let mut app = sample_app();
        app.copy_pgn();
        assert!(app.copied_at.is_none());

        app.selection.select(app.catalog.openings[1].clone());
        app.copy_pgn();
        let at = app.copied_at.unwrap();
        assert!(app.copy_acknowledged_at(at + Duration::from_millis(1000)));
        assert!(!app.copy_acknowledged_at(at + COPY_ACK_WINDOW));
    }

    #[test]
    fn copy_failure_is_swallowed() {
        let mut app = sample_app();
        app.clipboard = Box::new(MemoryClipboard {
            fail_with: Some("no display".into()),
            ..Default::default()
        });
        app.selection.select(app.catalog.openings[0].clone());
        app.copy_pgn();
        assert!(app.copied_at.is_none());
        assert_eq!(
            app.status_message.as_deref(),
            Some("clipboard unavailable: no display")
        );
    }

    #[test]
    fn reload_replaces_catalog_and_keeps_valid_selection() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("openings.json");
        std::fs::write(
            &path,
            r#"[{"name": "Dutch Defense", "eco": "A80", "moves": ["d4", "f5"], "style": "aggressive"}]"#,
        )
        .unwrap();
        let mut app = sample_app();
        app.catalog = Catalog::new(CatalogSource::File(path.clone()), app.catalog.openings.clone());
        app.set_first_move(Some("e4".into()));

        app.handle_file_events(vec![FileEvent::CatalogChanged(path)]);
        assert_eq!(app.catalog.len(), 1);
        assert_eq!(app.first_move, None);
        assert_eq!(app.first_moves, vec!["d4"]);
        assert_eq!(app.status_message.as_deref(), Some("reloaded 1 openings"));
    }

    #[test]
    fn reload_error_keeps_catalog() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("openings.json");
        std::fs::write(&path, "not json").unwrap();
        let mut app = sample_app();
        let before = app.catalog.len();
        app.catalog = Catalog::new(CatalogSource::File(path), app.catalog.openings.clone());
        app.reload_catalog();
        assert_eq!(app.catalog.len(), before);
        assert!(app.status_message.is_some());
    }
}
