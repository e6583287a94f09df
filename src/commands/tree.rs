//! Tree command implementation

use std::io::{self, Write};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{Result, TreeError};
use crate::signals;
use crate::tree::{RenderedTree, TreeOptions, TreeRenderer};

/// How a run ended when no error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Complete,
    /// Stopped by a signal; the printed tree is partial
    Interrupted,
}

/// Merge command-line overrides into the configured options
pub fn build_options(args: &Cli, config: &Config) -> TreeOptions {
    let mut options = config.tree_options();

    if args.no_default_ignores {
        options.ignored_dirs.clear();
    }
    options.ignored_dirs.extend(args.ignore.iter().cloned());

    if let Some(depth) = args.max_depth {
        options.max_depth = Some(depth);
    }
    if args.no_follow_symlinks {
        options.follow_symlinks = false;
    }

    options
}

/// Run the tree command
pub fn run(args: &Cli, config: &Config) -> Result<Outcome> {
    let options = build_options(args, config);
    tracing::debug!(?options, "Tree options");

    let renderer = TreeRenderer::new(&options);
    let renderer = match signals::install_interrupt_handler() {
        Ok(flag) => renderer.with_interrupt(flag),
        Err(err) => {
            tracing::warn!(error = %err, "Could not install signal handlers");
            renderer
        }
    };

    tracing::info!(path = %args.path.display(), "Rendering directory tree");

    let tree = renderer.render(&args.path)?;

    write_tree(&mut io::stdout().lock(), &tree, args.summary).map_err(|source| TreeError::Io {
        path: tree.root.clone(),
        source,
    })?;

    if tree.stats.errors > 0 {
        tracing::info!(errors = tree.stats.errors, "Some entries could not be read");
    }

    if tree.interrupted {
        eprintln!("interrupted");
        return Ok(Outcome::Interrupted);
    }
    Ok(Outcome::Complete)
}

fn write_tree(out: &mut impl Write, tree: &RenderedTree, summary: bool) -> io::Result<()> {
    out.write_all(tree.to_text().as_bytes())?;
    if summary {
        writeln!(out)?;
        writeln!(out, "{}", tree.summary())?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_write_tree_with_summary() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::File::create(dir.path().join("only.txt")).unwrap();
        let tree = crate::tree::render_tree(dir.path(), &TreeOptions::default()).unwrap();

        let mut buf = Vec::new();
        write_tree(&mut buf, &tree, true).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("Directory tree for: "));
        assert!(text.contains(".\n└── only.txt\n"));
        assert!(text.ends_with("\n0 directories, 1 file\n"));
    }

    #[test]
    fn test_cli_ignores_extend_config() {
        let args = Cli::parse_from(["dirtree", "-I", "target"]);
        let options = build_options(&args, &Config::default());

        assert!(options.is_ignored("target"));
        assert!(options.is_ignored("node_modules"));
    }

    #[test]
    fn test_no_default_ignores_keeps_cli_names() {
        let args = Cli::parse_from(["dirtree", "--no-default-ignores", "-I", "dist"]);
        let options = build_options(&args, &Config::default());

        assert_eq!(options.ignored_dirs.len(), 1);
        assert!(options.is_ignored("dist"));
    }

    #[test]
    fn test_cli_overrides_depth_and_symlinks() {
        let mut config = Config::default();
        config.tree.max_depth = Some(5);

        let args = Cli::parse_from(["dirtree", "-L", "2", "--no-follow-symlinks"]);
        let options = build_options(&args, &config);

        assert_eq!(options.max_depth, Some(2));
        assert!(!options.follow_symlinks);
    }

    #[test]
    fn test_config_depth_used_without_flag() {
        let mut config = Config::default();
        config.tree.max_depth = Some(5);

        let args = Cli::parse_from(["dirtree"]);
        assert_eq!(build_options(&args, &config).max_depth, Some(5));
    }
}
