//! Wikigraph - extract and render the link graph of a plain-text wiki.
//!
//! # Overview
//!
//! Wikigraph scans a directory of vimwiki/markdown documents, extracts
//! `[[wiki]]` and `[markdown](links)`, and builds a graph of which
//! document links to which:
//! - two link syntaxes, resolved against each document's directory
//! - remap rules that rename or collapse groups of paths
//! - an ignore pattern that drops paths from the graph entirely
//! - DOT output with connectivity filtering and optional clustering
//!
//! # Example
//!
//! ```no_run
//! use wikigraph::{export, RemapTable, Wiki};
//!
//! let mut wiki = Wiki::new("/path/to/wiki", RemapTable::new(), None).unwrap();
//! wiki.walk(&[".git".to_string()]).unwrap();
//!
//! let dot = export::render(wiki.graph(), 0, false);
//! dot.write_to(&mut std::io::stdout().lock()).unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod parser;
pub mod wiki;

// Re-export main types at crate root
pub use config::Config;
pub use error::{GraphError, Result};
pub use graph::{IgnoreFilter, LinkGraph, RemapTable};
pub use wiki::Wiki;
