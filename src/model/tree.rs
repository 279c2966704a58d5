use indexmap::IndexMap;

use super::opening::Opening;

/// A node in the opening move tree.
///
/// Each node stands for one ply (e.g. "e4"). Children are keyed by move
/// token in first-seen order. `openings` holds the openings whose move
/// sequence ends exactly here; a node can carry openings and children at
/// the same time when one opening is a prefix of another.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TreeNode {
    /// The move this node represents. `None` only for the root.
    pub token: Option<String>,
    pub children: IndexMap<String, TreeNode>,
    pub openings: Vec<Opening>,
}

impl TreeNode {
    pub fn root() -> Self {
        TreeNode::default()
    }

    fn with_token(token: &str) -> Self {
        TreeNode {
            token: Some(token.to_string()),
            children: IndexMap::new(),
            openings: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// A row can be opened when it has children or more than one opening
    /// to list beneath it.
    pub fn is_expandable(&self) -> bool {
        !self.children.is_empty() || self.openings.len() > 1
    }

    pub fn child(&self, token: &str) -> Option<&TreeNode> {
        self.children.get(token)
    }

    /// Walk a sequence of move tokens from this node.
    pub fn descend<S: AsRef<str>>(&self, moves: &[S]) -> Option<&TreeNode> {
        let mut current = self;
        for m in moves {
            current = current.child(m.as_ref())?;
        }
        Some(current)
    }

    /// Look up a node by path identifier (`"/e4/e5"`). The empty path is
    /// this node. Unknown paths give `None`.
    pub fn find(&self, path: &str) -> Option<&TreeNode> {
        self.descend(&path_tokens(path))
    }

    /// Number of openings in this subtree, including this node's own.
    pub fn opening_count(&self) -> usize {
        self.openings.len()
            + self
                .children
                .values()
                .map(|c| c.opening_count())
                .sum::<usize>()
    }
}

/// Build a deterministic move tree from a list of openings.
///
/// Each opening's moves are walked from the root, creating intermediate
/// nodes as needed; the opening is attached to the node of its final move
/// (the root itself for an empty move list).
pub fn build_tree(openings: &[Opening]) -> TreeNode {
    let mut root = TreeNode::root();

    for opening in openings {
        let mut current = &mut root;
        for token in &opening.moves {
            current = current
                .children
                .entry(token.clone())
                .or_insert_with(|| TreeNode::with_token(token));
        }
        current.openings.push(opening.clone());
    }

    root
}

/// Path identifier for a move sequence: `["e4", "e5"]` -> `"/e4/e5"`.
/// The root's path is the empty string.
pub fn path_id<S: AsRef<str>>(moves: &[S]) -> String {
    let mut path = String::new();
    for m in moves {
        path.push('/');
        path.push_str(m.as_ref());
    }
    path
}

/// Split a path identifier back into move tokens.
pub fn path_tokens(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Append one move to a path identifier
pub fn child_path(parent: &str, token: &str) -> String {
    format!("{}/{}", parent, token)
}

/// Every prefix path of a move sequence, shortest first:
/// `["e4", "e5"]` -> `["/e4", "/e4/e5"]`.
pub fn prefix_paths<S: AsRef<str>>(moves: &[S]) -> Vec<String> {
    let mut paths = Vec::with_capacity(moves.len());
    let mut current = String::new();
    for m in moves {
        current = child_path(&current, m.as_ref());
        paths.push(current.clone());
    }
    paths
}

/// Paths of every expandable node below the root, in depth-first order.
pub fn expandable_paths(root: &TreeNode) -> Vec<String> {
    let mut paths = Vec::new();
    collect_expandable(root, "", &mut paths);
    paths
}

fn collect_expandable(node: &TreeNode, path: &str, out: &mut Vec<String>) {
    for (token, child) in &node.children {
        let path = child_path(path, token);
        if child.is_expandable() {
            out.push(path.clone());
        }
        collect_expandable(child, &path, out);
    }
}

/// Paths of the root's direct children.
pub fn first_level_paths(root: &TreeNode) -> Vec<String> {
    root.children
        .keys()
        .map(|token| child_path("", token))
        .collect()
}
