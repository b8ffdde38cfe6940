// tests/common/mod.rs
//! Shared fixtures for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary directory tree that is removed on drop.
pub struct Tree {
    dir: TempDir,
}

impl Tree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(self, rel: &str, contents: impl AsRef<[u8]>) -> Self {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
        self
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }
}

/// a.txt (3 lines), b.go (5 lines), c.bin (not UTF-8).
pub fn sample_tree() -> Tree {
    Tree::new()
        .file("a.txt", "alpha\nbeta\ngamma\n")
        .file("b.go", "package main\n\nimport \"fmt\"\n\nfunc main() { fmt.Println() }\n")
        .file("c.bin", [0x89, b'P', b'N', b'G', 0xff, 0x00, b'\n'])
}
