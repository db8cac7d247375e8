use std::path::{Component, Path, PathBuf};

/// Structured metadata extracted from one file path.
///
/// Fields are derived once at construction and never mutated. Whenever
/// `extension` is non-empty, `file_name == file_base_name + "." + extension`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub file_path: PathBuf,
    /// Final path component, extension included.
    pub file_name: String,
    /// `file_name` up to the first dot.
    pub file_base_name: String,
    /// Everything after the first dot; empty when the name has no dot.
    pub extension: String,
    /// Path segments from the root down to the immediate parent directory.
    pub folder_names: Vec<String>,
}

impl FileRecord {
    /// Extract a record from a path.
    ///
    /// Returns `None` when the path has no final component or the file name
    /// is not valid UTF-8.
    pub fn from_path(path: &Path) -> Option<FileRecord> {
        let file_name = path.file_name()?.to_str()?.to_owned();

        // Split on the first dot only: "a.tar.gz" -> ("a", "tar.gz").
        // A name without any dot yields an empty extension, not an error.
        let (file_base_name, extension) = match file_name.split_once('.') {
            Some((base, ext)) => (base.to_owned(), ext.to_owned()),
            None => (file_name.clone(), String::new()),
        };

        let folder_names = path.parent().map(folder_chain).unwrap_or_default();

        Some(FileRecord {
            file_path: path.to_path_buf(),
            file_name,
            file_base_name,
            extension,
            folder_names,
        })
    }
}

/// Plain segments of `dir` in order; root, prefix and `.`/`..` markers are
/// dropped, as are segments that are not valid UTF-8.
fn folder_chain(dir: &Path) -> Vec<String> {
    dir.components()
        .filter_map(|c| match c {
            Component::Normal(seg) => seg.to_str().map(str::to_owned),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
