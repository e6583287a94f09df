mod entry;
mod listing;
mod options;
mod renderer;

pub use entry::{DirectoryEntry, EntryKind};
pub use listing::{list_directory, Listing};
pub use options::{TreeOptions, DEFAULT_IGNORED_DIRS};
pub use renderer::{
    render_tree, RenderedTree, TreeRenderer, TreeStats, BRANCH, LAST_BRANCH, PIPE_PAD, ROOT_MARKER,
    SPACE_PAD,
};
