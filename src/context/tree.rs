use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::{Component, Path, PathBuf};

/// One segment of the vault's directory skeleton.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub name: String,
    pub children: BTreeMap<String, TreeNode>,
}

impl TreeNode {
    pub fn new(name: impl Into<String>) -> Self {
        TreeNode {
            name: name.into(),
            children: BTreeMap::new(),
        }
    }

    /// Walks `segments` from this node, creating missing children.
    pub fn insert<I, S>(
        &mut self,
        segments: I,
    ) where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut node = self;
        for segment in segments {
            let segment = segment.into();
            node = node
                .children
                .entry(segment.clone())
                .or_insert_with(|| TreeNode::new(segment));
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get(
        &self,
        name: &str,
    ) -> Option<&TreeNode> {
        self.children.get(name)
    }
}

/// Builds the name tree for `files`, keyed by their path relative to `root`.
pub fn build_tree(
    root: &Path,
    files: &[PathBuf],
) -> TreeNode {
    let mut tree = TreeNode::new(root_name(root));
    for file in files {
        let rel = file.strip_prefix(root).unwrap_or(file);
        tree.insert(rel.components().filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        }));
    }
    tree
}

/// Renders the directory skeleton of `files` as an ASCII diagram.
///
/// Only nodes that have children are drawn, so file leaves never appear.
pub fn render_tree(
    root: &Path,
    files: &[PathBuf],
) -> String {
    let tree = build_tree(root, files);
    let mut out = String::new();
    writeln!(out, "└── {}/", tree.name).unwrap();
    render_children(&tree, "    ", &mut out);
    out
}

fn render_children(
    node: &TreeNode,
    prefix: &str,
    out: &mut String,
) {
    // BTreeMap iteration is already ascending by name
    let dirs: Vec<&TreeNode> = node.children.values().filter(|c| !c.is_leaf()).collect();
    for (idx, child) in dirs.iter().enumerate() {
        let last = idx + 1 == dirs.len();
        let branch = if last { "└── " } else { "├── " };
        writeln!(out, "{prefix}{branch}{}/", child.name).unwrap();
        let next = format!("{prefix}{}", if last { "    " } else { "│   " });
        render_children(child, &next, out);
    }
}

fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}
