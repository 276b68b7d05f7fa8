//! CLI argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wikigraph")]
#[command(author, version, about = "Render the link graph of a vimwiki/markdown notes directory", long_about = None)]
pub struct Cli {
    /// Root directory of the wiki
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Cluster nodes into one subgraph per subdirectory
    #[arg(long)]
    pub cluster: bool,

    /// Keep individual diary entries instead of collapsing them into a
    /// single `diary.wiki` node
    #[arg(long)]
    pub keep_diary: bool,

    /// Only draw nodes with at least this many outgoing links
    /// (default 0: draw everything)
    #[arg(short, long)]
    pub level: Option<usize>,

    /// Exclude paths matching this regex from the graph
    #[arg(short, long)]
    pub ignore: Option<String>,

    /// Directory name to skip while walking; may be repeated.
    /// `.git` is always skipped
    #[arg(short, long)]
    pub skip: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Dot)]
    pub format: Format,

    /// Path to a TOML config file (default: <DIR>/.wikigraph.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Graph-description document for Graphviz
    #[default]
    Dot,
    /// Adjacency map as JSON
    Json,
}
