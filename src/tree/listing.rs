use std::fs;
use std::io;
use std::path::Path;

use super::entry::DirectoryEntry;
use super::options::TreeOptions;

/// The visible children of one directory, split into two sorted groups.
#[derive(Debug, Default)]
pub struct Listing {
    pub directories: Vec<DirectoryEntry>,
    /// Regular files, other non-directories, and entries that could not be statted
    pub files: Vec<DirectoryEntry>,
}

impl Listing {
    pub fn len(&self) -> usize {
        self.directories.len() + self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries in emission order: directories first, then files.
    pub fn iter(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.directories.iter().chain(self.files.iter())
    }
}

/// Read one directory, drop ignored directories, then partition and sort.
///
/// Only failure to open the directory itself is an error. An entry whose
/// metadata cannot be read is kept as an inaccessible leaf.
pub fn list_directory(path: &Path, options: &TreeOptions) -> io::Result<Listing> {
    let mut listing = Listing::default();

    for item in fs::read_dir(path)? {
        let item = match item {
            Ok(item) => item,
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "Skipping unreadable directory entry");
                continue;
            }
        };

        let child_path = item.path();
        let metadata = if options.follow_symlinks {
            fs::metadata(&child_path)
        } else {
            fs::symlink_metadata(&child_path)
        };

        match metadata {
            Ok(metadata) => {
                let entry = DirectoryEntry::from_metadata(child_path, &metadata);
                if entry.is_dir() {
                    if options.is_ignored(&entry.name) {
                        tracing::trace!(path = %entry.path.display(), "Ignoring directory");
                        continue;
                    }
                    listing.directories.push(entry);
                } else {
                    listing.files.push(entry);
                }
            }
            Err(err) => {
                tracing::debug!(path = %child_path.display(), error = %err, "Cannot stat entry");
                listing
                    .files
                    .push(DirectoryEntry::inaccessible(child_path, err.to_string()));
            }
        }
    }

    listing.directories.sort_by(|a, b| a.name.cmp(&b.name));
    listing.files.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(listing)
}
