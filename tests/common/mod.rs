#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

/// Scratch directory holding a settings file and post fixtures.
#[derive(Debug)]
pub struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().expect("create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dir.path().join("post_stats.json")
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }
}

/// `count` space-separated words wrapped in a paragraph.
pub fn paragraph_of(count: usize) -> String {
    format!("<p>{}</p>", vec!["lorem"; count].join(" "))
}
