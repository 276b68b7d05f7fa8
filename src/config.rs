//! Run configuration: defaults, optional TOML file, CLI overrides.

use crate::error::{GraphError, Result};
use crate::graph::RemapTable;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Config file looked up in the wiki root when no explicit path is given.
pub const CONFIG_FILE: &str = ".wikigraph.toml";

const DIARY_DIR: &str = "diary";
const DIARY_NODE: &str = "diary.wiki";

/// Settings controlling a single scan-and-render run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Collapse every path containing `diary` into a single node.
    pub collapse_diary: bool,

    /// Group nodes into one cluster subgraph per subdirectory.
    pub cluster: bool,

    /// Minimum outgoing-edge count for a source node to be drawn.
    pub level: usize,

    /// Regex for paths left out of the graph entirely.
    pub ignore: Option<String>,

    /// Directory names skipped during traversal, in addition to `.git`.
    pub skip: Vec<String>,

    /// Additional pattern -> replacement remap rules, applied in key order.
    pub remap: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            collapse_diary: true,
            cluster: false,
            level: 0,
            ignore: None,
            skip: Vec::new(),
            remap: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    ///
    /// With no explicit `file`, reads `.wikigraph.toml` under `root` when
    /// present and falls back to the defaults otherwise. An explicit file
    /// that cannot be read is a configuration error.
    pub fn load(file: Option<&Path>, root: &Path) -> Result<Self> {
        let path = match file {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = root.join(CONFIG_FILE);
                if !candidate.is_file() {
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let text = fs::read_to_string(&path)
            .map_err(|e| GraphError::Config(format!("cannot read {}: {e}", path.display())))?;
        Ok(toml::from_str(&text)?)
    }

    /// Remap table for this run: the diary rule (when collapsing) followed
    /// by any configured rules.
    pub fn remap_table(&self) -> RemapTable {
        let mut table = RemapTable::new();
        if self.collapse_diary {
            table.insert(DIARY_DIR, DIARY_NODE);
        }
        for (pattern, replacement) in &self.remap {
            table.insert(pattern.clone(), replacement.clone());
        }
        table
    }

    /// Directory names excluded from traversal. `.git` always is.
    pub fn skip_dirs(&self) -> Vec<String> {
        let mut dirs = vec![".git".to_string()];
        dirs.extend(self.skip.iter().cloned());
        dirs
    }
}
