//! The HTML page record collection.
//!
//! [`read_pages`] loads every `.htm`/`.html` file under a tree into
//! [`PageFile`] records; a build step mutates their text in memory and
//! [`Pages::write_changed`] flushes only the records that were touched.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::files::walk_files;
use crate::models::PageFile;

/// A collection of loaded pages with lookup by logical name.
#[derive(Debug, Default)]
pub struct Pages(Vec<PageFile>);

impl Pages {
    /// Lookup by logical name. A query ending in `.html` matches the page
    /// named by the query minus that suffix.
    pub fn get(&self, name: &str) -> Option<&PageFile> {
        let name = strip_query(name);
        self.0.iter().find(|p| p.name == name)
    }

    /// Mutable lookup, same matching as [`get`](Self::get).
    pub fn get_mut(&mut self, name: &str) -> Option<&mut PageFile> {
        let name = strip_query(name);
        self.0.iter_mut().find(|p| p.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageFile> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PageFile> {
        self.0.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Persist only the records flagged as changed. Returns how many files
    /// were written.
    pub fn write_changed(&self) -> Result<usize> {
        let mut count = 0;
        for page in &self.0 {
            if page.changed {
                fs::write(&page.path, &page.data)?;
                count += 1;
            }
        }
        if count > 0 {
            tracing::info!(count, "wrote changed pages");
        }
        Ok(count)
    }
}

impl FromIterator<PageFile> for Pages {
    fn from_iter<I: IntoIterator<Item = PageFile>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Pages {
    type Item = PageFile;
    type IntoIter = std::vec::IntoIter<PageFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn strip_query(name: &str) -> &str {
    name.strip_suffix(".html").unwrap_or(name)
}

/// Walk `root` and load every page file into memory, `changed = false`.
///
/// A file is a page when its extension is `htm` or `html`; everything else
/// in the tree is ignored. `exclude` prunes directories by name, as in
/// [`walk_files`].
pub fn read_pages(root: impl AsRef<Path>, exclude: &[String]) -> Result<Pages> {
    walk_files(root, exclude)?
        .into_iter()
        .filter(|path| is_page(path))
        .map(|path| {
            let data = fs::read_to_string(&path)?;
            Ok(PageFile::new(path, data))
        })
        .collect()
}

fn is_page(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("htm") || ext.eq_ignore_ascii_case("html"))
}
