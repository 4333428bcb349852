mod check;
mod eval;
mod list;
mod server;

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub(crate) const PUZZLES: &str = r#"
puzzles = ["10:12-2*1+0:1", "42:6*7+00-0:2", "not-a-puzzle"]

[equation]
length = 8
"#;

/// Write `contents` as puzzles.toml in a fresh temp dir
pub(crate) fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("puzzles.toml");
    fs::write(&path, contents).unwrap();
    (temp_dir, path)
}
