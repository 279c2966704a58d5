use serde::Serialize;

use crate::model::opening::{Opening, OpeningStyle};
use crate::model::tree::{TreeNode, child_path};
use crate::ops::board::{self, BoardGrid};
use crate::ops::pgn::{moves_to_pgn, ply_label};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct OpeningJson {
    pub eco: String,
    pub name: String,
    pub style: OpeningStyle,
    pub moves: Vec<String>,
    pub pgn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fen: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ideas: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub famous: Vec<String>,
}

#[derive(Serialize)]
pub struct OpeningRefJson {
    pub eco: String,
    pub name: String,
}

#[derive(Serialize)]
pub struct TreeNodeJson {
    pub token: String,
    pub path: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub openings: Vec<OpeningRefJson>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNodeJson>,
}

#[derive(Serialize)]
pub struct PgnJson {
    pub eco: String,
    pub name: String,
    pub pgn: String,
}

#[derive(Serialize)]
pub struct FirstMovesJson {
    pub first_moves: Vec<String>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// Full opening record. `with_fen` replays the moves to add the position.
pub fn opening_to_json(opening: &Opening, with_fen: bool) -> OpeningJson {
    let fen = if with_fen {
        board::moves_to_fen(&opening.moves).ok()
    } else {
        None
    };
    OpeningJson {
        eco: opening.eco.clone(),
        name: opening.name.clone(),
        style: opening.style,
        moves: opening.moves.clone(),
        pgn: moves_to_pgn(&opening.moves),
        fen,
        ideas: opening.ideas.clone(),
        famous: opening.famous.clone(),
    }
}

/// The children of `root` as nested JSON nodes. Openings attached to the
/// root itself (empty move lists) are not represented.
pub fn tree_to_json(root: &TreeNode) -> Vec<TreeNodeJson> {
    children_to_json(root, "")
}

fn children_to_json(node: &TreeNode, path: &str) -> Vec<TreeNodeJson> {
    node.children
        .iter()
        .map(|(token, child)| {
            let path = child_path(path, token);
            TreeNodeJson {
                token: token.clone(),
                openings: child
                    .openings
                    .iter()
                    .map(|o| OpeningRefJson {
                        eco: o.eco.clone(),
                        name: o.name.clone(),
                    })
                    .collect(),
                children: children_to_json(child, &path),
                path,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// One-line summary: `C50  Italian Game  classical`
pub fn format_opening_line(opening: &Opening) -> String {
    format!("{}  {}  {}", opening.eco, opening.name, opening.style)
}

/// The move tree as indented text, two spaces per ply. Nodes that end an
/// opening list it in brackets after the move.
pub fn format_tree(root: &TreeNode) -> Vec<String> {
    let mut lines = Vec::new();
    for opening in &root.openings {
        lines.push(format!("[{} {}]", opening.eco, opening.name));
    }
    format_children(root, 0, &mut lines);
    lines
}

fn format_children(node: &TreeNode, depth: usize, lines: &mut Vec<String>) {
    for (token, child) in &node.children {
        let mut line = format!("{}{} {}", "  ".repeat(depth), ply_label(depth), token);
        for opening in &child.openings {
            line.push_str(&format!("  [{} {}]", opening.eco, opening.name));
        }
        lines.push(line);
        format_children(child, depth + 1, lines);
    }
}

/// Detailed opening view
pub fn format_opening_detail(opening: &Opening, show_board: bool) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("{} ({})", opening.name, opening.eco));
    lines.push(format!("style: {}", opening.style));

    let pgn = moves_to_pgn(&opening.moves);
    if !pgn.is_empty() {
        lines.push(format!("pgn: {}", pgn));
    }

    match board::replay(&opening.moves) {
        Ok(pos) => {
            lines.push(format!("fen: {}", board::fen_of(&pos)));
            if show_board {
                let grid = BoardGrid::from_position(&pos);
                lines.push(String::new());
                lines.extend(grid.to_ascii().lines().map(|l| format!("  {}", l)));
                lines.push(String::new());
            }
        }
        Err(e) => lines.push(format!("fen: unavailable ({})", e)),
    }

    if !opening.ideas.is_empty() {
        lines.push(format!("ideas: {}", opening.ideas));
    }
    if !opening.famous.is_empty() {
        lines.push(format!("famous: {}", opening.famous.join(", ")));
    }
    lines
}
