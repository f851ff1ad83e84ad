//! Undirected weighted graph with on-demand shortest paths.
//!
//! [`Graph`] owns the vertices and edges and keeps an [`AdjacencyIndex`]
//! rebuilt after every change to the edge set. [`shortest_path`] runs a
//! heap-backed Dijkstra search over that index.

mod adjacency;
mod error;
mod input;
mod path;
mod store;

pub use adjacency::{AdjacencyIndex, Neighbor};
pub use error::{GraphError, Result};
pub use input::{parse_vertex_id, parse_weight};
pub use path::{Distance, PathResult, shortest_path};
pub use store::{Edge, Graph, Position, Vertex};

/// Vertex identifier. Live vertices are always numbered `1..=N`.
pub type VertexId = u32;

/// Positive edge weight.
pub type Weight = u32;
