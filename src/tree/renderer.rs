use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Result, TreeError};

use super::entry::{DirectoryEntry, EntryKind};
use super::listing::{list_directory, Listing};
use super::options::TreeOptions;

/// Connector for an entry that has siblings after it
pub const BRANCH: &str = "├── ";
/// Connector for the final entry at its level
pub const LAST_BRANCH: &str = "└── ";
/// Continuation under a non-last entry
pub const PIPE_PAD: &str = "│   ";
/// Continuation under a last entry
pub const SPACE_PAD: &str = "    ";

/// Marker line standing for the root directory itself
pub const ROOT_MARKER: &str = ".";

/// Counters collected while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub directories: usize,
    pub files: usize,
    /// Inline error lines plus entries that could not be statted
    pub errors: usize,
}

/// Result of rendering a whole tree from its root.
#[derive(Debug, Clone)]
pub struct RenderedTree {
    /// Absolute path of the rendered root
    pub root: PathBuf,
    /// Root marker line followed by one line per entry, newline terminated
    pub body: String,
    pub stats: TreeStats,
    /// True if the walk stopped early; `body` then holds only complete lines
    pub interrupted: bool,
}

impl RenderedTree {
    pub fn header(&self) -> String {
        format!("Directory tree for: {}", self.root.display())
    }

    /// Header line plus body
    pub fn to_text(&self) -> String {
        format!("{}\n{}", self.header(), self.body)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} {}, {} {}",
            self.stats.directories,
            plural(self.stats.directories, "directory", "directories"),
            self.stats.files,
            plural(self.stats.files, "file", "files"),
        )
    }
}

fn plural<'s>(n: usize, one: &'s str, many: &'s str) -> &'s str {
    if n == 1 {
        one
    } else {
        many
    }
}

/// Mutable state of one walk. Each recursion level only appends to `out`.
struct Walk {
    out: String,
    stats: TreeStats,
    interrupted: bool,
    /// Canonical paths of the directories currently being descended
    ancestors: Vec<PathBuf>,
}

impl Walk {
    fn new(ancestors: Vec<PathBuf>) -> Self {
        Self {
            out: String::new(),
            stats: TreeStats::default(),
            interrupted: false,
            ancestors,
        }
    }

    fn push_line(&mut self, prefix: &str, connector: &str, text: &str) {
        self.out.push_str(prefix);
        self.out.push_str(connector);
        self.out.push_str(text);
        self.out.push('\n');
    }
}

/// Renders a directory subtree as text, depth first.
pub struct TreeRenderer<'a> {
    options: &'a TreeOptions,
    interrupt: Option<&'a AtomicBool>,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(options: &'a TreeOptions) -> Self {
        Self {
            options,
            interrupt: None,
        }
    }

    /// Stop the walk as soon as `flag` becomes true
    pub fn with_interrupt(mut self, flag: &'a AtomicBool) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Render the tree rooted at `root`.
    ///
    /// The root must exist, be a directory and be listable; any of those
    /// failing is returned as an error. Failures further down are written
    /// inline and never abort the walk.
    pub fn render(&self, root: &Path) -> Result<RenderedTree> {
        let root = resolve_root(root)?;
        let listing = list_directory(&root, self.options).map_err(|source| TreeError::Io {
            path: root.clone(),
            source,
        })?;

        tracing::debug!(root = %root.display(), entries = listing.len(), "Rendering tree");

        let mut walk = Walk::new(vec![root.clone()]);
        walk.out.push_str(ROOT_MARKER);
        walk.out.push('\n');
        self.render_listing(&listing, "", 1, &mut walk);

        Ok(RenderedTree {
            root,
            body: walk.out,
            stats: walk.stats,
            interrupted: walk.interrupted,
        })
    }

    /// Render a single node line for `path` followed by its subtree.
    ///
    /// `prefix` is the indentation accumulated from the node's ancestors and
    /// `is_last` tells whether it is the final sibling at its level.
    pub fn render_entry(&self, path: &Path, prefix: &str, is_last: bool) -> String {
        let entry = match self.stat(path) {
            Ok(metadata) => DirectoryEntry::from_metadata(path.to_path_buf(), &metadata),
            Err(err) => DirectoryEntry::inaccessible(path.to_path_buf(), err.to_string()),
        };
        let ancestors = path
            .parent()
            .and_then(|p| p.canonicalize().ok())
            .into_iter()
            .collect();

        let mut walk = Walk::new(ancestors);
        self.render_node(&entry, prefix, is_last, 1, &mut walk);
        walk.out
    }

    fn stat(&self, path: &Path) -> io::Result<std::fs::Metadata> {
        if self.options.follow_symlinks {
            std::fs::metadata(path)
        } else {
            std::fs::symlink_metadata(path)
        }
    }

    fn is_interrupted(&self) -> bool {
        self.interrupt.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn render_listing(&self, listing: &Listing, prefix: &str, depth: usize, walk: &mut Walk) {
        let count = listing.len();
        for (i, child) in listing.iter().enumerate() {
            if walk.interrupted || self.is_interrupted() {
                walk.interrupted = true;
                return;
            }
            self.render_node(child, prefix, i + 1 == count, depth, walk);
        }
    }

    fn render_node(
        &self,
        entry: &DirectoryEntry,
        prefix: &str,
        is_last: bool,
        depth: usize,
        walk: &mut Walk,
    ) {
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        walk.push_line(prefix, connector, &entry.label());

        match entry.kind {
            EntryKind::Directory => walk.stats.directories += 1,
            EntryKind::File => {
                walk.stats.files += 1;
                return;
            }
            EntryKind::Inaccessible { .. } => {
                walk.stats.errors += 1;
                return;
            }
        }

        if self.options.max_depth.is_some_and(|max| depth >= max) {
            return;
        }

        let child_prefix = format!("{}{}", prefix, if is_last { SPACE_PAD } else { PIPE_PAD });

        let canonical = if self.options.follow_symlinks {
            entry.path.canonicalize().ok()
        } else {
            None
        };
        if let Some(canonical) = &canonical {
            if walk.ancestors.contains(canonical) {
                tracing::debug!(path = %entry.path.display(), "Symlink cycle, not descending");
                walk.push_line(
                    &child_prefix,
                    LAST_BRANCH,
                    "Error reading directory: symlink cycle detected",
                );
                walk.stats.errors += 1;
                return;
            }
        }

        let listing = match list_directory(&entry.path, self.options) {
            Ok(listing) => listing,
            Err(err) => {
                tracing::debug!(path = %entry.path.display(), error = %err, "Cannot read directory");
                walk.push_line(
                    &child_prefix,
                    LAST_BRANCH,
                    &format!("Error reading directory: {}", err),
                );
                walk.stats.errors += 1;
                return;
            }
        };

        let pushed = canonical.is_some();
        if let Some(canonical) = canonical {
            walk.ancestors.push(canonical);
        }
        self.render_listing(&listing, &child_prefix, depth + 1, walk);
        if pushed {
            walk.ancestors.pop();
        }
    }
}

/// Resolve the target to an absolute directory path.
fn resolve_root(path: &Path) -> Result<PathBuf> {
    let root = path.canonicalize().map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            TreeError::PathNotFound(path.to_path_buf())
        } else {
            TreeError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    if !root.is_dir() {
        return Err(TreeError::NotADirectory(root));
    }
    Ok(root)
}

/// Render `root` with the given options.
pub fn render_tree(root: &Path, options: &TreeOptions) -> Result<RenderedTree> {
    TreeRenderer::new(options).render(root)
}
