//! Adjacency bookkeeping for the link graph.

use serde::Serialize;
use std::collections::BTreeMap;

/// Mapping from each document identifier to its outgoing link targets.
///
/// Targets keep insertion order and are deduplicated on insert. Keys are
/// ordered, so iteration, and therefore rendered output, is deterministic
/// across runs.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct LinkGraph {
    adjacency: BTreeMap<String, Vec<String>>,
}

impl LinkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `target` to the outgoing list of `source`.
    ///
    /// Creates the list when absent. Inserting an already-present target is
    /// a no-op; comparison is exact and case-sensitive.
    pub fn insert(&mut self, source: &str, target: &str) {
        let outgoing = self.adjacency.entry(source.to_string()).or_default();
        if !outgoing.iter().any(|t| t == target) {
            outgoing.push(target.to_string());
        }
    }

    /// Guarantee a node exists, with an empty outgoing list if new.
    ///
    /// Documents without any links still show up in the rendered graph.
    pub fn ensure_node(&mut self, id: &str) {
        self.adjacency.entry(id.to_string()).or_default();
    }

    /// Outgoing targets for a node, in insertion order.
    pub fn outgoing(&self, id: &str) -> &[String] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when the node is present, even with no outgoing links.
    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Iterate over `(source, targets)` entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.adjacency
            .iter()
            .map(|(source, targets)| (source.as_str(), targets.as_slice()))
    }

    /// Number of source nodes tracked.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
