//! Source file discovery.

use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directories never descended into.
const SKIPPED_DIRS: &[&str] = &["target"];

/// Collect Rust sources under `roots`, sorted and de-duplicated.
///
/// Directories are walked recursively, skipping `target` and hidden
/// directories below each root. A root that names a file is always included.
pub async fn rust_files(roots: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
    let roots = roots.to_vec();
    let files = tokio::task::spawn_blocking(move || walk(&roots))
        .await
        .map_err(io::Error::other)??;
    tracing::debug!(count = files.len(), "discovered rust sources");
    Ok(files)
}

fn walk(roots: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for root in roots {
        let entries = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry));
        for entry in entries {
            let entry = entry?;
            if entry.file_type().is_file() && (entry.depth() == 0 || is_rust_source(entry.path())) {
                files.push(entry.into_path());
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn is_rust_source(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "rs")
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.') || SKIPPED_DIRS.contains(&name))
}
