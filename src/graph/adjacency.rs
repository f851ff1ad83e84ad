use std::collections::BTreeMap;

use super::store::Edge;
use super::{VertexId, Weight};

/// One directed entry of the adjacency index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbor {
	/// The vertex on the other end of the edge.
	pub vertex: VertexId,
	/// Edge weight.
	pub weight: Weight,
}

/// Vertex to incident-edge lookup, derived wholesale from an edge list.
///
/// Each edge `{a, b, w}` appears as `(b, w)` under `a` and `(a, w)` under
/// `b`. Neighbor order follows edge insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyIndex {
	map: BTreeMap<VertexId, Vec<Neighbor>>,
}

impl AdjacencyIndex {
	/// Build the index for `edges`.
	pub fn rebuild(edges: &[Edge]) -> Self {
		let mut map: BTreeMap<VertexId, Vec<Neighbor>> = BTreeMap::new();
		for edge in edges {
			map.entry(edge.from).or_default().push(Neighbor {
				vertex: edge.to,
				weight: edge.weight,
			});
			map.entry(edge.to).or_default().push(Neighbor {
				vertex: edge.from,
				weight: edge.weight,
			});
		}
		Self { map }
	}

	/// Neighbors of `id`; empty for isolated or unknown vertices.
	pub fn neighbors(&self, id: VertexId) -> &[Neighbor] {
		self.map.get(&id).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Number of vertices with at least one incident edge.
	pub fn len(&self) -> usize {
		self.map.len()
	}

	/// Whether no edges were indexed.
	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}

	/// Entries in vertex order.
	pub fn iter(&self) -> impl Iterator<Item = (VertexId, &[Neighbor])> {
		self.map.iter().map(|(&id, neighbors)| (id, neighbors.as_slice()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn edges() -> Vec<Edge> {
		vec![
			Edge { from: 1, to: 2, weight: 4 },
			Edge { from: 3, to: 1, weight: 2 },
			Edge { from: 1, to: 2, weight: 9 },
		]
	}

	#[test]
	fn indexes_both_directions_in_insertion_order() {
		let index = AdjacencyIndex::rebuild(&edges());

		assert_eq!(
			index.neighbors(1),
			&[
				Neighbor { vertex: 2, weight: 4 },
				Neighbor { vertex: 3, weight: 2 },
				Neighbor { vertex: 2, weight: 9 },
			]
		);
		assert_eq!(
			index.neighbors(2),
			&[
				Neighbor { vertex: 1, weight: 4 },
				Neighbor { vertex: 1, weight: 9 },
			]
		);
		assert_eq!(index.neighbors(3), &[Neighbor { vertex: 1, weight: 2 }]);
		assert_eq!(index.len(), 3);
	}

	#[test]
	fn holds_two_entries_per_edge() {
		let index = AdjacencyIndex::rebuild(&edges());
		let entries: usize = index.iter().map(|(_, n)| n.len()).sum();
		assert_eq!(entries, 2 * edges().len());
	}

	#[test]
	fn rebuild_is_repeatable() {
		assert_eq!(
			AdjacencyIndex::rebuild(&edges()),
			AdjacencyIndex::rebuild(&edges())
		);
	}

	#[test]
	fn unknown_vertex_has_no_neighbors() {
		let index = AdjacencyIndex::rebuild(&[]);
		assert!(index.is_empty());
		assert!(index.neighbors(7).is_empty());
	}
}
