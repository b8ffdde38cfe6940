use crate::error::{EngineError, Result};
use ignore::{DirEntry, WalkBuilder};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Recursive, sequential walk yielding every regular file under `root`.
///
/// All of the `ignore` crate's standard filters are turned off, so hidden
/// files and files listed in `.gitignore` are visited as well. Directory
/// symlinks are not followed; file symlinks are yielded when their target
/// is a regular file.
///
/// # Errors
/// Fails up front when `root` is missing or not a directory. Errors met
/// during the walk (e.g. an unreadable subdirectory) are yielded as `Err`
/// items and are meant to end the scan.
pub fn walk_files(root: &Path) -> Result<impl Iterator<Item = Result<PathBuf>>> {
    check_root(root)?;
    debug!("walking directory tree {}", root.display());

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    Ok(walker.filter_map(|entry| match entry {
        Ok(entry) => regular_file(entry).map(Ok),
        Err(err) => Some(Err(EngineError::Walk(err))),
    }))
}

fn check_root(root: &Path) -> Result<()> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(EngineError::NotADirectory(root.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(EngineError::RootNotFound(root.to_path_buf()))
        }
        Err(source) => Err(EngineError::RootAccess {
            path: root.to_path_buf(),
            source,
        }),
    }
}

fn regular_file(entry: DirEntry) -> Option<PathBuf> {
    let file_type = entry.file_type()?;
    if file_type.is_file() {
        return Some(entry.into_path());
    }
    if file_type.is_symlink() {
        return match fs::metadata(entry.path()) {
            Ok(meta) if meta.is_file() => Some(entry.into_path()),
            _ => {
                debug!("skipping symlink {}", entry.path().display());
                None
            }
        };
    }
    None
}
