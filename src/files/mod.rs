//! Filesystem leaf operations: tree walking, shallow listings, guarded
//! reads, and the mkdir/copy helpers the build scripts use.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::models::{DirEntry, EntryKind};

/// Decimal megabytes, matching how the build reports file sizes.
const BYTES_PER_MEGABYTE: f64 = 1_000_000.0;

/// Recursively list file paths under `root` in file-name sorted order.
///
/// Dot-prefixed entries below the root are skipped entirely. Directories
/// whose name appears in `exclude` are pruned, the root included. A `root`
/// that exists but is not a directory yields an empty list.
pub fn walk_files(root: impl AsRef<Path>, exclude: &[String]) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    if !fs::symlink_metadata(root)?.is_dir() {
        return Ok(Vec::new());
    }
    if is_excluded(root, exclude) {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || keep_entry(e, exclude));
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn keep_entry(entry: &walkdir::DirEntry, exclude: &[String]) -> bool {
    let name = entry.file_name().to_string_lossy();
    if name.starts_with('.') {
        return false;
    }
    !(entry.file_type().is_dir() && exclude.iter().any(|ex| ex == name.as_ref()))
}

fn is_excluded(dir: &Path, exclude: &[String]) -> bool {
    dir.file_name()
        .map(|n| n.to_string_lossy())
        .is_some_and(|name| exclude.iter().any(|ex| ex == name.as_ref()))
}

/// Shallow-list the immediate children of one directory with type tags.
///
/// Dot-prefixed names are skipped and the result is sorted by name. A path
/// that is not a directory is [`Error::InvalidDirectory`].
pub fn list_dir(dir: impl AsRef<Path>) -> Result<Vec<DirEntry>> {
    let dir = dir.as_ref();
    if !fs::symlink_metadata(dir)?.is_dir() {
        return Err(Error::InvalidDirectory(dir.to_path_buf()));
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        // file_type() does not follow symlinks, so a symlink is a File
        let kind = if entry.file_type()?.is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::File
        };
        entries.push(DirEntry {
            kind,
            name,
            path: entry.path(),
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Outcome of a guarded read: the content, or a too-large notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    TooLarge { megabytes: u64 },
}

impl FileContent {
    pub fn is_too_large(&self) -> bool {
        matches!(self, FileContent::TooLarge { .. })
    }
}

impl fmt::Display for FileContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileContent::Text(text) => f.write_str(text),
            FileContent::TooLarge { megabytes } => {
                write!(f, "File size {megabytes}MB is too large to open")
            }
        }
    }
}

/// Read a file only if it is at most one decimal megabyte, else return a
/// [`FileContent::TooLarge`] notice carrying the size rounded to whole
/// megabytes instead of the content.
pub fn read_file_guarded(path: impl AsRef<Path>) -> Result<FileContent> {
    let path = path.as_ref();
    let megabytes = fs::metadata(path)?.len() as f64 / BYTES_PER_MEGABYTE;
    if megabytes > 1.0 {
        return Ok(FileContent::TooLarge {
            megabytes: megabytes.round() as u64,
        });
    }
    Ok(FileContent::Text(fs::read_to_string(path)?))
}

/// Idempotent directory creation.
pub fn mkdir(path: impl AsRef<Path>) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Byte-copy a file.
pub fn copy_file(from: impl AsRef<Path>, to: impl AsRef<Path>) -> Result<()> {
    fs::copy(from, to)?;
    Ok(())
}
