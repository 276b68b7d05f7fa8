//! Minimal DOT graph builder and serializer.
//!
//! Covers exactly what the exporter needs: create-or-fetch nodes, cluster
//! subgraphs, directed edges with an existence check, and hand-emitted
//! text output.

use std::collections::{BTreeMap, HashMap};
use std::io::{self, Write};

/// Handle to a node inside a [`DotGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// A directed graph with optional cluster subgraphs.
#[derive(Debug, Default)]
pub struct DotGraph {
    attrs: Vec<(String, String)>,
    ids: Vec<String>,
    index: HashMap<String, NodeId>,
    clusters: BTreeMap<String, Vec<NodeId>>,
    edges: Vec<(NodeId, NodeId)>,
}

impl DotGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a graph-level attribute, e.g. `rankdir = "LR"`.
    pub fn set_attr(&mut self, key: &str, value: &str) {
        self.attrs.push((key.to_string(), value.to_string()));
    }

    /// Create-or-fetch a node at top level.
    pub fn node(&mut self, id: &str) -> NodeId {
        if let Some(&handle) = self.index.get(id) {
            return handle;
        }
        let handle = NodeId(self.ids.len());
        self.ids.push(id.to_string());
        self.index.insert(id.to_string(), handle);
        handle
    }

    /// Create-or-fetch a node inside a named cluster subgraph.
    ///
    /// A node that already exists keeps its original placement; fetching
    /// never moves it between clusters.
    pub fn cluster_node(&mut self, cluster: &str, id: &str) -> NodeId {
        if let Some(&handle) = self.index.get(id) {
            return handle;
        }
        let handle = self.node(id);
        self.clusters
            .entry(cluster.to_string())
            .or_default()
            .push(handle);
        handle
    }

    /// Add a directed edge between two node handles.
    pub fn edge(&mut self, from: NodeId, to: NodeId) {
        self.edges.push((from, to));
    }

    /// True when an edge between this exact pair already exists.
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.edges.iter().any(|&(a, b)| a == from && b == to)
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Serialize the graph as DOT text.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "digraph {{")?;
        for (key, value) in &self.attrs {
            writeln!(writer, "\t{}=\"{}\";", key, escape(value))?;
        }

        let mut clustered = vec![false; self.ids.len()];
        for members in self.clusters.values() {
            for &NodeId(idx) in members {
                clustered[idx] = true;
            }
        }

        for (n, (name, members)) in self.clusters.iter().enumerate() {
            writeln!(writer, "\tsubgraph cluster_{n} {{")?;
            writeln!(writer, "\t\tlabel=\"{}\";", escape(name))?;
            for &NodeId(idx) in members {
                writeln!(writer, "\t\t\"{}\";", escape(&self.ids[idx]))?;
            }
            writeln!(writer, "\t}}")?;
        }

        for (idx, id) in self.ids.iter().enumerate() {
            if !clustered[idx] {
                writeln!(writer, "\t\"{}\";", escape(id))?;
            }
        }

        for &(NodeId(from), NodeId(to)) in &self.edges {
            writeln!(
                writer,
                "\t\"{}\" -> \"{}\";",
                escape(&self.ids[from]),
                escape(&self.ids[to])
            )?;
        }

        writeln!(writer, "}}")
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
