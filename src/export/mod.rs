//! Graph export: connectivity filtering, clustering, DOT conversion.

pub mod dot;

pub use dot::{DotGraph, NodeId};

use crate::graph::LinkGraph;

/// Convert the adjacency structure into a DOT graph.
///
/// Source nodes with fewer than `level` outgoing links are dropped along
/// with their edges; `level = 0` keeps everything. A dropped source can
/// still show up as the target of a kept edge. With `cluster` set, nodes
/// under a subdirectory are grouped into one cluster subgraph per distinct
/// directory, and the two endpoints of an edge are placed independently.
pub fn render(graph: &LinkGraph, level: usize, cluster: bool) -> DotGraph {
    let mut dot = DotGraph::new();
    dot.set_attr("rankdir", "LR");

    for (source, targets) in graph.iter() {
        if targets.len() < level {
            continue;
        }

        let a = place(&mut dot, cluster, source);

        for target in targets {
            let b = place(&mut dot, cluster, target);

            // the same logical edge can come up again in another cluster
            // context; draw it once
            if !dot.has_edge(a, b) {
                dot.edge(a, b);
            }
        }
    }

    dot
}

fn place(dot: &mut DotGraph, cluster: bool, id: &str) -> NodeId {
    if cluster {
        if let Some((dir, _)) = id.rsplit_once('/') {
            return dot.cluster_node(dir, id);
        }
    }
    dot.node(id)
}
