use md_ingest::tree::{build_tree, render_tree};
use std::path::PathBuf;

fn vault_files(rel: &[&str]) -> (PathBuf, Vec<PathBuf>) {
    let root = PathBuf::from("/home/me/vault");
    let files = rel.iter().map(|r| root.join(r)).collect();
    (root, files)
}

#[test]
fn sibling_directories_are_sorted_and_files_hidden() {
    let (root, files) = vault_files(&["d/e.md", "a/b.md", "a/c.md"]);
    let rendered = render_tree(&root, &files);
    insta::assert_snapshot!(rendered, @r"
    └── vault/
        ├── a/
        └── d/
    ");
    assert!(!rendered.contains(".md"));
}

#[test]
fn every_directory_segment_has_one_node() {
    let (root, files) = vault_files(&["a/b/c.md", "a/b/d.md", "a/e.md"]);
    let tree = build_tree(&root, &files);
    assert_eq!(tree.name, "vault");
    let a = tree.get("a").unwrap();
    assert_eq!(a.children.len(), 2);
    assert_eq!(a.get("b").unwrap().children.len(), 2);
}

#[test]
fn deep_last_branch_uses_blank_continuation() {
    let (root, files) = vault_files(&["a/x.md", "z/y/w/q.md"]);
    let rendered = render_tree(&root, &files);
    assert_eq!(
        rendered,
        "└── vault/\n    ├── a/\n    └── z/\n        └── y/\n            └── w/\n"
    );
}
