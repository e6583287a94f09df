use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// dirtree - Print a directory hierarchy as an ASCII tree
#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to render
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH", env = "DIRTREE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Additional directory name to skip (can be specified multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "NAME")]
    pub ignore: Vec<String>,

    /// Don't skip the default or configured directory names
    #[arg(long)]
    pub no_default_ignores: bool,

    /// Maximum depth to descend
    #[arg(short = 'L', long, value_name = "N", value_parser = parse_depth)]
    pub max_depth: Option<usize>,

    /// Don't follow symbolic links
    #[arg(long)]
    pub no_follow_symlinks: bool,

    /// Print directory and file counts after the tree
    #[arg(short, long)]
    pub summary: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

fn parse_depth(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("depth must be at least 1".to_string()),
        Ok(depth) => Ok(depth),
        Err(e) => Err(e.to_string()),
    }
}
