//! Wiki traversal and the scan pipeline.

use crate::error::{GraphError, Result};
use crate::graph::{self, IgnoreFilter, LinkGraph, RemapTable};
use crate::parser;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A wiki directory being scanned into a link graph.
///
/// Owns the adjacency structure for the duration of one run; after the
/// walk the graph is read-only.
#[derive(Debug)]
pub struct Wiki {
    root: PathBuf,
    graph: LinkGraph,
    remap: RemapTable,
    ignore: IgnoreFilter,
}

impl Wiki {
    /// Create a scanner for the wiki rooted at `root`.
    ///
    /// The ignore pattern is compiled here, so a malformed pattern fails
    /// before any traversal starts.
    pub fn new(root: impl Into<PathBuf>, remap: RemapTable, ignore: Option<&str>) -> Result<Self> {
        Ok(Self {
            root: root.into(),
            graph: LinkGraph::new(),
            remap,
            ignore: IgnoreFilter::from_pattern(ignore)?,
        })
    }

    /// Walk every file under the root and scan it for links.
    ///
    /// Directories whose name appears in `skip_dirs` are skipped whole, as
    /// are ignored paths. A traversal error is logged and aborts the walk.
    pub fn walk(&mut self, skip_dirs: &[String]) -> Result<()> {
        let mut entries = WalkDir::new(&self.root).into_iter();

        while let Some(entry) = entries.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    eprintln!("err {err}");
                    return Err(err.into());
                }
            };

            if entry.file_type().is_dir() {
                let name = entry.file_name().to_string_lossy();
                if entry.depth() > 0 && skip_dirs.iter().any(|skip| skip.as_str() == name) {
                    eprintln!("skipping: {name}");
                    entries.skip_current_dir();
                }
                continue;
            }

            if self.ignore_path(&entry.path().to_string_lossy()) {
                continue;
            }

            self.scan_file(entry.path())?;
        }

        Ok(())
    }

    /// True when `path` matches the configured ignore pattern.
    pub fn ignore_path(&self, path: &str) -> bool {
        self.ignore.matches(path)
    }

    /// Scan one document and record its outgoing links.
    ///
    /// The document is keyed by its path relative to the wiki root; a file
    /// outside the root is an error.
    pub fn scan_file(&mut self, path: &Path) -> Result<()> {
        let key = path
            .strip_prefix(&self.root)
            .map_err(|_| GraphError::OutsideRoot {
                path: path.to_path_buf(),
                root: self.root.clone(),
            })?
            .to_string_lossy()
            .into_owned();
        let dir = parent_dir(&key);

        let file = File::open(path)?;
        self.scan_lines(&key, &dir, BufReader::new(file))
    }

    /// Feed every line of `reader` through the parse/resolve/remap/insert
    /// pipeline under the document identifier `key`.
    ///
    /// Lines are read as raw bytes and converted lossily, so a stray
    /// binary file never aborts the scan.
    fn scan_lines<R: BufRead>(&mut self, key: &str, dir: &str, mut reader: R) -> Result<()> {
        self.graph.ensure_node(key);

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);

            for target in parser::links(&line) {
                // links into ignored territory never reach the graph
                if self.ignore_path(&target) {
                    continue;
                }

                let joined = graph::join(dir, &target);
                let (source, target) = self.remap.apply(dir, key, &joined);
                self.graph.insert(&source, &target);
            }
        }

        Ok(())
    }

    /// The adjacency structure built so far.
    pub fn graph(&self) -> &LinkGraph {
        &self.graph
    }

    /// Consume the wiki, keeping only the graph.
    pub fn into_graph(self) -> LinkGraph {
        self.graph
    }
}

/// Containing directory of a node identifier; `.` for root-level files.
fn parent_dir(key: &str) -> String {
    match key.rsplit_once('/') {
        Some((dir, _)) => dir.to_string(),
        None => ".".to_string(),
    }
}
