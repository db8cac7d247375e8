use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// Gitignore-style patterns that prune files and whole directories from a
/// walk. The default set excludes nothing.
pub struct ExcludeSet {
    matcher: Gitignore,
}

impl Default for ExcludeSet {
    fn default() -> Self {
        let matcher = GitignoreBuilder::new(Path::new("."))
            .build()
            .expect("build empty exclude matcher");
        ExcludeSet { matcher }
    }
}

impl ExcludeSet {
    /// Build an exclude set rooted at `root` from gitignore-style patterns.
    pub fn new(root: &Path, patterns: &[String]) -> Result<Self, ignore::Error> {
        let mut builder = GitignoreBuilder::new(root);

        for pat in patterns {
            builder.add_line(None, pat)?;
        }

        Ok(ExcludeSet {
            matcher: builder.build()?,
        })
    }

    #[inline]
    #[must_use]
    pub fn is_excluded(&self, path: &Path, is_dir: bool) -> bool {
        self.matcher
            .matched_path_or_any_parents(path, is_dir)
            .is_ignore()
    }
}

#[cfg(test)]
#[path = "excludes_tests.rs"]
mod tests;
