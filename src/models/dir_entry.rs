use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Whether a directory child is itself a directory.
///
/// Anything that is not a directory, symlinks included, is tagged `File`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
}

/// One immediate child of a directory, as returned by a shallow listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirEntry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub name: String,
    pub path: PathBuf,
}
