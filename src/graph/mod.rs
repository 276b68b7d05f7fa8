//! Link graph construction: path resolution, remapping, adjacency.

pub mod adjacency;
pub mod remap;
pub mod resolve;

pub use adjacency::LinkGraph;
pub use remap::{IgnoreFilter, RemapTable};
pub use resolve::join;
