use std::collections::HashMap;

use log::debug;

use super::adjacency::AdjacencyIndex;
use super::error::{GraphError, Result};
use super::{VertexId, Weight};

/// Where a vertex sits on screen. Stored for the renderer, never read by the
/// graph itself.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Position {
	/// Create a position.
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// A live vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
	/// Identifier, unique among live vertices.
	pub id: VertexId,
	/// Display position.
	pub position: Position,
}

/// An undirected weighted edge. `from` and `to` are interchangeable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	/// First endpoint.
	pub from: VertexId,
	/// Second endpoint.
	pub to: VertexId,
	/// Positive weight, the same in both directions.
	pub weight: Weight,
}

impl Edge {
	/// Whether either endpoint is `id`.
	pub fn touches(&self, id: VertexId) -> bool {
		self.from == id || self.to == id
	}

	/// Whether this edge joins `a` and `b`, in either direction.
	pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
		(self.from == a && self.to == b) || (self.from == b && self.to == a)
	}
}

/// Vertices, edges and the adjacency index derived from them.
///
/// Every mutation is validated before anything changes, so a rejected call
/// leaves the graph exactly as it was.
#[derive(Clone, Debug, Default)]
pub struct Graph {
	vertices: Vec<Vertex>,
	edges: Vec<Edge>,
	adjacency: AdjacencyIndex,
}

impl Graph {
	/// Create an empty graph.
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a vertex at `position` and return its identifier: one past the
	/// highest live identifier, or 1 for an empty graph.
	pub fn add_vertex(&mut self, position: Position) -> VertexId {
		let id = self.vertices.iter().map(|v| v.id).max().unwrap_or(0) + 1;
		self.vertices.push(Vertex { id, position });
		debug!("added vertex {id} at ({:.0}, {:.0})", position.x, position.y);
		id
	}

	/// Connect `from` and `to` with an edge of the given weight.
	///
	/// Parallel edges are kept; the path search picks the cheapest.
	pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()> {
		self.require(from)?;
		self.require(to)?;
		if from == to {
			return Err(GraphError::SelfLoop(from));
		}
		if weight == 0 {
			return Err(GraphError::ZeroWeight { from, to });
		}

		self.edges.push(Edge { from, to, weight });
		self.adjacency = AdjacencyIndex::rebuild(&self.edges);
		debug!("added edge {from} - {to} ({weight})");
		Ok(())
	}

	/// Delete a vertex and every edge touching it, then renumber the
	/// survivors to `1..=N` in their current order.
	///
	/// Identifiers held by callers are stale afterwards.
	pub fn remove_vertex(&mut self, id: VertexId) -> Result<()> {
		let index = self
			.vertices
			.iter()
			.position(|v| v.id == id)
			.ok_or(GraphError::UnknownVertex(id))?;
		self.vertices.remove(index);
		self.edges.retain(|edge| !edge.touches(id));

		let mut renumbered = HashMap::with_capacity(self.vertices.len());
		for (slot, vertex) in (1..).zip(self.vertices.iter_mut()) {
			renumbered.insert(vertex.id, slot);
			vertex.id = slot;
		}
		let remap = |old: VertexId| renumbered.get(&old).copied().unwrap_or(old);
		for edge in &mut self.edges {
			edge.from = remap(edge.from);
			edge.to = remap(edge.to);
		}

		self.adjacency = AdjacencyIndex::rebuild(&self.edges);
		debug!(
			"removed vertex {id}, {} vertices and {} edges remain",
			self.vertices.len(),
			self.edges.len()
		);
		Ok(())
	}

	/// Move a vertex. Edges and identifiers are unaffected.
	pub fn move_vertex(&mut self, id: VertexId, position: Position) -> Result<()> {
		let vertex = self
			.vertices
			.iter_mut()
			.find(|v| v.id == id)
			.ok_or(GraphError::UnknownVertex(id))?;
		vertex.position = position;
		Ok(())
	}

	/// Look up a vertex.
	pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
		self.vertices.iter().find(|v| v.id == id)
	}

	/// Whether `id` names a live vertex.
	pub fn contains(&self, id: VertexId) -> bool {
		self.vertex(id).is_some()
	}

	/// Vertices in identifier order.
	pub fn vertices(&self) -> &[Vertex] {
		&self.vertices
	}

	/// Edges in insertion order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// The adjacency index for the current edge set.
	pub fn adjacency(&self) -> &AdjacencyIndex {
		&self.adjacency
	}

	/// Number of live vertices.
	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	/// Number of edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Whether the graph has no vertices.
	pub fn is_empty(&self) -> bool {
		self.vertices.is_empty()
	}

	pub(super) fn require(&self, id: VertexId) -> Result<()> {
		if self.contains(id) {
			Ok(())
		} else {
			Err(GraphError::UnknownVertex(id))
		}
	}
}
