use indexmap::IndexMap;
use serde::Serialize;

use crate::model::opening::Opening;
use crate::ops::board::{self, BoardError};

/// Structured result from `beads check`, suitable for --json output.
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    pub valid: bool,
    pub errors: Vec<CheckError>,
    pub warnings: Vec<CheckWarning>,
}

/// A validation error (something that should be fixed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CheckError {
    /// Two or more records share the same (eco, name) identity
    #[serde(rename = "duplicate_opening")]
    DuplicateOpening {
        eco: String,
        name: String,
        indices: Vec<usize>,
    },
    /// A move token does not replay from the starting position
    #[serde(rename = "illegal_move")]
    IllegalMove {
        eco: String,
        name: String,
        ply: usize,
        token: String,
    },
    /// Name or ECO code is blank
    #[serde(rename = "missing_identity")]
    MissingIdentity { index: usize },
}

/// A validation warning (non-critical issue).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CheckWarning {
    /// Opening has no moves, so it sits on the tree root
    #[serde(rename = "no_moves")]
    NoMoves { eco: String, name: String },
    /// Two differently named openings with the exact same moves
    #[serde(rename = "shared_line")]
    SharedLine { line: String, names: Vec<String> },
    #[serde(rename = "missing_ideas")]
    MissingIdeas { eco: String, name: String },
}

/// Validate a catalog and return structured results.
///
/// Checks performed:
/// 1. Every record has a name and ECO code
/// 2. No two records share an (eco, name) identity
/// 3. Every move sequence replays legally
/// 4. Warnings for empty move lists, missing ideas, and lines shared by
///    several names
pub fn check_catalog(openings: &[Opening]) -> CheckResult {
    let mut result = CheckResult::default();

    // First-seen order drives the order of the reports
    let mut by_key: IndexMap<(&str, &str), Vec<usize>> = IndexMap::new();
    let mut by_line: IndexMap<&[String], Vec<&str>> = IndexMap::new();

    for (index, opening) in openings.iter().enumerate() {
        if opening.name.trim().is_empty() || opening.eco.trim().is_empty() {
            result.errors.push(CheckError::MissingIdentity { index });
        }

        by_key
            .entry((opening.eco.as_str(), opening.name.as_str()))
            .or_default()
            .push(index);

        if opening.moves.is_empty() {
            result.warnings.push(CheckWarning::NoMoves {
                eco: opening.eco.clone(),
                name: opening.name.clone(),
            });
        } else {
            let names = by_line.entry(opening.moves.as_slice()).or_default();
            if !names.contains(&opening.name.as_str()) {
                names.push(opening.name.as_str());
            }
        }

        if opening.ideas.trim().is_empty() {
            result.warnings.push(CheckWarning::MissingIdeas {
                eco: opening.eco.clone(),
                name: opening.name.clone(),
            });
        }

        if let Err(e) = board::replay(&opening.moves) {
            let (ply, token) = match e {
                BoardError::InvalidToken { ply, token } | BoardError::IllegalMove { ply, token } => {
                    (ply, token)
                }
            };
            result.errors.push(CheckError::IllegalMove {
                eco: opening.eco.clone(),
                name: opening.name.clone(),
                ply,
                token,
            });
        }
    }

    for ((eco, name), indices) in by_key {
        if indices.len() > 1 {
            result.errors.push(CheckError::DuplicateOpening {
                eco: eco.to_string(),
                name: name.to_string(),
                indices,
            });
        }
    }

    for (line, names) in by_line {
        if names.len() > 1 {
            result.warnings.push(CheckWarning::SharedLine {
                line: crate::ops::pgn::moves_to_pgn(line),
                names: names.iter().map(|n| n.to_string()).collect(),
            });
        }
    }

    result.valid = result.errors.is_empty();
    result
}
