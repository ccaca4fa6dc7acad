#![allow(dead_code)]
use assert_fs::{TempDir, prelude::*};
use md_ingest::config::Config;

/// Builds a fixture vault:
/// root/
///   notes/x.md          "hello world"
///   notes/deep/y.md     "secret plans"
///   top.md              "top level"
///   .obsidian/ws.md     hidden dirs are still ingested
///   notes/skip.txt      wrong extension
pub fn basic_vault() -> TempDir {
    let td = TempDir::new().unwrap();
    td.child("notes/deep").create_dir_all().unwrap();
    td.child(".obsidian").create_dir_all().unwrap();
    td.child("notes/x.md").write_str("hello world").unwrap();
    td.child("notes/deep/y.md").write_str("secret plans").unwrap();
    td.child("top.md").write_str("top level").unwrap();
    td.child(".obsidian/ws.md").write_str("workspace").unwrap();
    td.child("notes/skip.txt").write_str("not a note").unwrap();
    td
}

pub fn config_for(
    vault: &TempDir,
    out: &TempDir,
    words: &[&str],
    chunk_budget: usize,
) -> Config {
    Config {
        source_root: vault.path().to_path_buf(),
        output_dir: out.path().to_path_buf(),
        redaction_terms: words.iter().map(|w| w.to_string()).collect(),
        chunk_budget,
        extension: ".md".to_string(),
    }
}
