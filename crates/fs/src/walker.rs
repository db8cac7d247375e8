use std::fs::read_dir;
use std::io::Result;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::excludes::ExcludeSet;
use crate::record::FileRecord;

/// Recursively list every regular file under `root` and extract a
/// [`FileRecord`] for each, sorted lexicographically by full path.
///
/// An unreadable `root` is an error; unreadable directories further down
/// are logged and skipped so one bad subtree does not abort the scan.
/// Symlinks are never followed.
pub fn walk(root: &Path, excludes: &ExcludeSet) -> Result<Vec<FileRecord>> {
    let mut paths = Vec::new();
    collect_files(root, excludes, &mut paths)?;

    paths.sort();

    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        match FileRecord::from_path(&path) {
            Some(record) => records.push(record),
            None => warn!("[walk] skipping non-UTF-8 file name: {:?}", path),
        }
    }

    debug!("[walk] {} files under {:?}", records.len(), root);
    Ok(records)
}

fn collect_files(dir: &Path, excludes: &ExcludeSet, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry_res in read_dir(dir)? {
        let entry = match entry_res {
            Ok(e) => e,
            Err(e) => {
                warn!("[walk] error reading entry in {:?}: {e}", dir);
                continue;
            }
        };

        // file_type does not traverse symlinks, so a link to a directory
        // is neither recursed into nor listed.
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) => {
                warn!("[walk] file_type({:?}) failed: {e}", entry.path());
                continue;
            }
        };

        let path = entry.path();
        if excludes.is_excluded(&path, file_type.is_dir()) {
            continue;
        }

        if file_type.is_dir() {
            if let Err(e) = collect_files(&path, excludes, out) {
                warn!("[walk] read_dir({:?}) failed: {e}", path);
            }
        } else if file_type.is_file() {
            out.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
