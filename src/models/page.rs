use std::path::{Path, PathBuf};

/// An HTML page loaded into memory.
///
/// The `name` is the logical page name: the final path component with a
/// trailing `.html` stripped (a `.htm` file keeps its extension in the
/// name). Mutations go through [`set_data`](Self::set_data) and
/// [`replace`](Self::replace) so the `changed` flag stays accurate and the
/// flush step only rewrites pages that were actually touched.
#[derive(Debug, Clone)]
pub struct PageFile {
    pub path: PathBuf,
    pub name: String,
    pub data: String,
    pub changed: bool,
}

impl PageFile {
    /// Build a record from a path and its loaded content, `changed = false`.
    pub fn new(path: impl Into<PathBuf>, data: String) -> Self {
        let path = path.into();
        let name = logical_name(&path);
        Self {
            path,
            name,
            data,
            changed: false,
        }
    }

    /// Replace the page content, flagging the record changed when the new
    /// content actually differs.
    pub fn set_data(&mut self, data: impl Into<String>) {
        let data = data.into();
        if data != self.data {
            self.data = data;
            self.changed = true;
        }
    }

    /// Literal substring substitution across the page content. Flags the
    /// record changed when at least one occurrence was replaced.
    pub fn replace(&mut self, from: &str, to: &str) {
        if self.data.contains(from) {
            self.data = self.data.replace(from, to);
            self.changed = true;
        }
    }
}

/// Final path component with a trailing `.html` stripped.
pub fn logical_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.strip_suffix(".html") {
        Some(stem) => stem.to_string(),
        None => file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_name_strips_html() {
        assert_eq!(logical_name(Path::new("pages/about.html")), "about");
    }

    #[test]
    fn test_logical_name_keeps_htm() {
        assert_eq!(logical_name(Path::new("pages/legacy.htm")), "legacy.htm");
    }

    #[test]
    fn test_set_data_same_content_leaves_unchanged() {
        let mut page = PageFile::new("a.html", "<p>hi</p>".to_string());
        page.set_data("<p>hi</p>");
        assert!(!page.changed);
    }

    #[test]
    fn test_set_data_new_content_flags_changed() {
        let mut page = PageFile::new("a.html", "<p>hi</p>".to_string());
        page.set_data("<p>bye</p>");
        assert!(page.changed);
        assert_eq!(page.data, "<p>bye</p>");
    }

    #[test]
    fn test_replace_without_match_leaves_unchanged() {
        let mut page = PageFile::new("a.html", "<p>hi</p>".to_string());
        page.replace("missing", "x");
        assert!(!page.changed);
    }

    #[test]
    fn test_replace_rewrites_all_occurrences() {
        let mut page = PageFile::new("a.html", "@old/x @old/y".to_string());
        page.replace("@old", "@new");
        assert!(page.changed);
        assert_eq!(page.data, "@new/x @new/y");
    }
}
