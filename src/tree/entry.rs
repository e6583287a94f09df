use std::fs::Metadata;
use std::path::{Path, PathBuf};

/// What a listed filesystem object turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// The entry exists in its parent's listing but could not be statted
    Inaccessible { message: String },
}

/// A single node found while listing a directory.
///
/// Children are not stored here; a directory's contents are read on demand
/// when the renderer descends into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Entry name (last component of path)
    pub name: String,

    /// Full path to the file or directory
    pub path: PathBuf,

    pub kind: EntryKind,
}

impl DirectoryEntry {
    /// Build an entry from metadata already fetched for `path`.
    pub fn from_metadata(path: PathBuf, metadata: &Metadata) -> Self {
        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        Self {
            name: entry_name(&path),
            path,
            kind,
        }
    }

    pub fn inaccessible(path: PathBuf, message: String) -> Self {
        Self {
            name: entry_name(&path),
            path,
            kind: EntryKind::Inaccessible { message },
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Text shown after the connector on this entry's line
    pub fn label(&self) -> String {
        match &self.kind {
            EntryKind::Inaccessible { message } => format!("{} [error: {}]", self.name, message),
            _ => self.name.clone(),
        }
    }
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_last_component() {
        let entry = DirectoryEntry::inaccessible(PathBuf::from("/a/b/link"), "gone".into());
        assert_eq!(entry.name, "link");
        assert!(!entry.is_dir());
    }

    #[test]
    fn test_label_of_inaccessible_entry() {
        let entry = DirectoryEntry::inaccessible(
            PathBuf::from("/test/dangling"),
            "No such file or directory (os error 2)".to_string(),
        );
        assert_eq!(
            entry.label(),
            "dangling [error: No such file or directory (os error 2)]"
        );
    }

    #[test]
    fn test_from_metadata_detects_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let metadata = std::fs::metadata(dir.path()).unwrap();
        let entry = DirectoryEntry::from_metadata(dir.path().to_path_buf(), &metadata);
        assert!(entry.is_dir());
        assert_eq!(entry.label(), entry.name);
    }
}
