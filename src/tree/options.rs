use std::collections::BTreeSet;

/// Directory names skipped by default: dependency, cache and VCS folders.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &["node_modules", "venv", ".git", ".vscode", "__pycache__"];

/// Configuration options for rendering a directory tree.
#[derive(Debug, Clone)]
pub struct TreeOptions {
    /// Directory base names excluded from output and traversal (exact match)
    pub ignored_dirs: BTreeSet<String>,

    /// Maximum depth to descend (None = unlimited). Depth 1 lists only the
    /// root's immediate children.
    pub max_depth: Option<usize>,

    /// Classify symlinks by their target instead of the link itself
    pub follow_symlinks: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            ignored_dirs: DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()).collect(),
            max_depth: None,
            follow_symlinks: true,
        }
    }
}

impl TreeOptions {
    /// Create a new TreeOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the ignore list
    pub fn with_ignored<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_dirs = names.into_iter().map(Into::into).collect();
        self
    }

    /// Add one name to the ignore list
    pub fn ignore(mut self, name: impl Into<String>) -> Self {
        self.ignored_dirs.insert(name.into());
        self
    }

    /// Set maximum recursion depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set whether to follow symbolic links
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// True if a directory with this base name must be skipped
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored_dirs.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = TreeOptions::default();
        assert_eq!(opts.max_depth, None);
        assert!(opts.follow_symlinks);
        assert_eq!(opts.ignored_dirs.len(), DEFAULT_IGNORED_DIRS.len());
        assert!(opts.is_ignored("node_modules"));
        assert!(opts.is_ignored(".git"));
    }

    #[test]
    fn test_ignore_is_exact_match() {
        let opts = TreeOptions::default();
        assert!(!opts.is_ignored("node_modules2"));
        assert!(!opts.is_ignored("Node_Modules"));
        assert!(!opts.is_ignored("git"));
    }

    #[test]
    fn test_with_ignored_replaces_defaults() {
        let opts = TreeOptions::new().with_ignored(["target"]);
        assert!(opts.is_ignored("target"));
        assert!(!opts.is_ignored("node_modules"));
    }

    #[test]
    fn test_options_chaining() {
        let opts = TreeOptions::new()
            .with_ignored(Vec::<String>::new())
            .ignore("build")
            .with_max_depth(2)
            .with_follow_symlinks(false);

        assert_eq!(opts.ignored_dirs.len(), 1);
        assert!(opts.is_ignored("build"));
        assert_eq!(opts.max_depth, Some(2));
        assert!(!opts.follow_symlinks);
    }
}
