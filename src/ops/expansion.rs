//! Expand/collapse state for the move tree.
//!
//! Expansion is a set of path identifiers (`"/e4/e5"`) kept apart from the
//! tree itself, so trees can be rebuilt freely while open/closed state
//! carries over by path. On every rebuild (or when the filter-active signal
//! flips) an [`ExpansionPolicy`] recomputes the set; between rebuilds the
//! user toggles individual paths.

use std::collections::HashSet;

use crate::model::config::ExpandMode;
use crate::model::opening::Opening;
use crate::model::tree::{TreeNode, expandable_paths, first_level_paths, prefix_paths};

/// Decides which paths are open right after the tree is rebuilt.
pub trait ExpansionPolicy {
    fn expanded_paths(
        &self,
        tree: &TreeNode,
        is_filtered: bool,
        selected: Option<&Opening>,
    ) -> HashSet<String>;
}

/// Open everything while a filter narrows the tree. Without a filter, open
/// the first level plus the path down to the selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealPolicy;

impl ExpansionPolicy for RevealPolicy {
    fn expanded_paths(
        &self,
        tree: &TreeNode,
        is_filtered: bool,
        selected: Option<&Opening>,
    ) -> HashSet<String> {
        if is_filtered {
            return expandable_paths(tree).into_iter().collect();
        }
        let mut paths: HashSet<String> = first_level_paths(tree).into_iter().collect();
        if let Some(opening) = selected {
            paths.extend(prefix_paths(&opening.moves));
        }
        paths
    }
}

/// Open every node regardless of filtering.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandAllPolicy;

impl ExpansionPolicy for ExpandAllPolicy {
    fn expanded_paths(
        &self,
        tree: &TreeNode,
        _is_filtered: bool,
        _selected: Option<&Opening>,
    ) -> HashSet<String> {
        expandable_paths(tree).into_iter().collect()
    }
}

/// Build the policy named in the config
pub fn policy_for(mode: ExpandMode) -> Box<dyn ExpansionPolicy> {
    match mode {
        ExpandMode::Reveal => Box::new(RevealPolicy),
        ExpandMode::All => Box::new(ExpandAllPolicy),
    }
}

/// The set of open tree paths plus the policy that resets it.
pub struct ExpansionState {
    expanded: HashSet<String>,
    is_filtered: bool,
    policy: Box<dyn ExpansionPolicy>,
}

impl std::fmt::Debug for ExpansionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpansionState")
            .field("expanded", &self.expanded)
            .field("is_filtered", &self.is_filtered)
            .finish_non_exhaustive()
    }
}

impl ExpansionState {
    /// Initial state for a freshly mounted tree, using the reveal policy.
    pub fn new(tree: &TreeNode, is_filtered: bool, selected: Option<&Opening>) -> Self {
        Self::with_policy(Box::new(RevealPolicy), tree, is_filtered, selected)
    }

    pub fn with_policy(
        policy: Box<dyn ExpansionPolicy>,
        tree: &TreeNode,
        is_filtered: bool,
        selected: Option<&Opening>,
    ) -> Self {
        let expanded = policy.expanded_paths(tree, is_filtered, selected);
        ExpansionState {
            expanded,
            is_filtered,
            policy,
        }
    }

    /// Recompute after the tree was rebuilt or the filter-active signal
    /// changed. Manual toggles made since the last rebuild are discarded.
    pub fn rebuild(&mut self, tree: &TreeNode, is_filtered: bool, selected: Option<&Opening>) {
        self.expanded = self.policy.expanded_paths(tree, is_filtered, selected);
        self.is_filtered = is_filtered;
    }

    /// Flip one node open/closed. Only expandable nodes react; returns the
    /// new open state, or `None` when the path names nothing expandable.
    pub fn toggle(&mut self, tree: &TreeNode, path: &str) -> Option<bool> {
        let node = tree.find(path)?;
        if !node.is_expandable() || path.is_empty() {
            return None;
        }
        Some(self.flip(path))
    }

    fn flip(&mut self, path: &str) -> bool {
        if self.expanded.remove(path) {
            false
        } else {
            self.expanded.insert(path.to_string());
            true
        }
    }

    /// Open a node if it is closed. Returns true if anything changed.
    pub fn expand(&mut self, tree: &TreeNode, path: &str) -> bool {
        match tree.find(path) {
            Some(node) if node.is_expandable() && !path.is_empty() => {
                self.expanded.insert(path.to_string())
            }
            _ => false,
        }
    }

    /// Close a node if it is open. Returns true if anything changed.
    pub fn collapse(&mut self, path: &str) -> bool {
        self.expanded.remove(path)
    }

    /// Whether a path is open. The root is always open; unknown paths are
    /// simply closed.
    pub fn is_expanded(&self, path: &str) -> bool {
        path.is_empty() || self.expanded.contains(path)
    }

    pub fn is_filtered(&self) -> bool {
        self.is_filtered
    }

    /// Open paths, sorted for stable output
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.expanded.iter().map(|p| p.as_str()).collect();
        paths.sort_unstable();
        paths
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
