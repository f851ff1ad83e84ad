use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;

use log::debug;

use super::VertexId;
use super::error::Result;
use super::store::Graph;

/// Total weight of a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Distance {
	/// Sum of the traversed edge weights.
	Finite(u64),
	/// No path exists.
	Unreachable,
}

impl fmt::Display for Distance {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Distance::Finite(total) => write!(f, "{total}"),
			Distance::Unreachable => f.write_str("unreachable"),
		}
	}
}

/// Outcome of a path query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathResult {
	/// Vertices from source to destination, inclusive. Empty when unreachable.
	pub path: Vec<VertexId>,
	/// Total weight.
	pub distance: Distance,
}

impl PathResult {
	/// The result for a destination that cannot be reached.
	pub fn unreachable() -> Self {
		Self {
			path: Vec::new(),
			distance: Distance::Unreachable,
		}
	}

	/// Whether a path was found.
	pub fn is_reachable(&self) -> bool {
		self.distance != Distance::Unreachable
	}

	/// Whether the path visits `id`.
	pub fn contains(&self, id: VertexId) -> bool {
		self.path.contains(&id)
	}

	/// Whether the path steps directly between `a` and `b`, in either
	/// direction.
	pub fn traverses(&self, a: VertexId, b: VertexId) -> bool {
		self.path
			.windows(2)
			.any(|step| (step[0] == a && step[1] == b) || (step[0] == b && step[1] == a))
	}
}

impl fmt::Display for PathResult {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if !self.is_reachable() {
			return f.write_str("unreachable");
		}
		for (i, id) in self.path.iter().enumerate() {
			if i > 0 {
				f.write_str(" -> ")?;
			}
			write!(f, "{id}")?;
		}
		Ok(())
	}
}

/// Frontier entry. Ordered so that `BinaryHeap` pops the smallest distance
/// first, and among equal distances the earliest pushed.
#[derive(Debug, PartialEq, Eq)]
struct Candidate {
	distance: u64,
	seq: u64,
	vertex: VertexId,
}

impl Ord for Candidate {
	fn cmp(&self, other: &Self) -> Ordering {
		other
			.distance
			.cmp(&self.distance)
			.then_with(|| other.seq.cmp(&self.seq))
	}
}

impl PartialOrd for Candidate {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

/// Find a minimum-weight path from `source` to `destination`.
///
/// Dijkstra's algorithm with lazy deletion: a vertex may sit in the
/// frontier several times, and entries popped after it was finalized are
/// skipped. The search stops as soon as the destination is finalized.
///
/// Fails with [`GraphError::UnknownVertex`](super::GraphError::UnknownVertex)
/// if either endpoint is not in the graph. An unreachable destination is
/// not an error; it yields [`PathResult::unreachable`].
pub fn shortest_path(graph: &Graph, source: VertexId, destination: VertexId) -> Result<PathResult> {
	graph.require(source)?;
	graph.require(destination)?;

	let adjacency = graph.adjacency();
	// absent means infinity
	let mut best: HashMap<VertexId, u64> = HashMap::from([(source, 0)]);
	let mut previous: HashMap<VertexId, VertexId> = HashMap::new();
	let mut finalized: HashSet<VertexId> = HashSet::new();
	let mut frontier = BinaryHeap::from([Candidate {
		distance: 0,
		seq: 0,
		vertex: source,
	}]);
	let mut seq = 0;

	while let Some(Candidate {
		distance, vertex, ..
	}) = frontier.pop()
	{
		if !finalized.insert(vertex) {
			continue;
		}
		if vertex == destination {
			break;
		}

		for neighbor in adjacency.neighbors(vertex) {
			let candidate = distance + u64::from(neighbor.weight);
			if best.get(&neighbor.vertex).is_none_or(|&known| candidate < known) {
				best.insert(neighbor.vertex, candidate);
				previous.insert(neighbor.vertex, vertex);
				seq += 1;
				frontier.push(Candidate {
					distance: candidate,
					seq,
					vertex: neighbor.vertex,
				});
			}
		}
	}

	let result = match best.get(&destination) {
		Some(&total) => walk_back(&previous, source, destination)
			.map(|path| PathResult {
				path,
				distance: Distance::Finite(total),
			})
			.unwrap_or_else(PathResult::unreachable),
		None => PathResult::unreachable(),
	};
	debug!(
		"shortest path {source} -> {destination}: {result} ({})",
		result.distance
	);
	Ok(result)
}

/// Follow predecessors from `destination` to `source`. `None` if the chain
/// breaks before reaching the source.
fn walk_back(
	previous: &HashMap<VertexId, VertexId>,
	source: VertexId,
	destination: VertexId,
) -> Option<Vec<VertexId>> {
	let mut path = vec![destination];
	let mut current = destination;
	while current != source {
		current = *previous.get(&current)?;
		path.push(current);
	}
	path.reverse();
	Some(path)
}

impl Graph {
	/// Shorthand for [`shortest_path`] on this graph.
	pub fn shortest_path(&self, source: VertexId, destination: VertexId) -> Result<PathResult> {
		shortest_path(self, source, destination)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{GraphError, Position};

	fn graph(vertices: usize, edges: &[(VertexId, VertexId, u32)]) -> Graph {
		let mut graph = Graph::new();
		for _ in 0..vertices {
			graph.add_vertex(Position::default());
		}
		for &(from, to, weight) in edges {
			graph.add_edge(from, to, weight).unwrap();
		}
		graph
	}

	#[test]
	fn picks_cheaper_detour() {
		// 1 --2-- 2 --1-- 4 --4-- 5
		// |                       |
		// +--10-- 3 ------1-------+
		let g = graph(5, &[(1, 2, 2), (1, 3, 10), (4, 2, 1), (4, 5, 4), (3, 5, 1)]);
		let result = g.shortest_path(1, 5).unwrap();
		assert_eq!(result.path, vec![1, 2, 4, 5]);
		assert_eq!(result.distance, Distance::Finite(7));
	}

	#[test]
	fn later_relaxation_replaces_first_guess() {
		let g = graph(3, &[(1, 3, 10), (1, 2, 1), (2, 3, 1)]);
		let result = g.shortest_path(1, 3).unwrap();
		assert_eq!(result.path, vec![1, 2, 3]);
		assert_eq!(result.distance, Distance::Finite(2));
	}

	#[test]
	fn same_source_and_destination() {
		let g = graph(2, &[(1, 2, 3)]);
		let result = g.shortest_path(2, 2).unwrap();
		assert_eq!(result.path, vec![2]);
		assert_eq!(result.distance, Distance::Finite(0));
	}

	#[test]
	fn isolated_vertex_is_reachable_from_itself() {
		let g = graph(1, &[]);
		assert_eq!(g.shortest_path(1, 1).unwrap().path, vec![1]);
	}

	#[test]
	fn unreachable_destination() {
		let g = graph(3, &[(1, 2, 5)]);
		let result = g.shortest_path(1, 3).unwrap();
		assert_eq!(result, PathResult::unreachable());
		assert!(!result.is_reachable());
		assert_eq!(result.to_string(), "unreachable");
	}

	#[test]
	fn cheapest_parallel_edge_wins() {
		let g = graph(2, &[(1, 2, 10), (1, 2, 3)]);
		let result = g.shortest_path(1, 2).unwrap();
		assert_eq!(result.path, vec![1, 2]);
		assert_eq!(result.distance, Distance::Finite(3));
	}

	#[test]
	fn edges_work_in_both_directions() {
		let g = graph(3, &[(2, 1, 4), (3, 2, 6)]);
		let result = g.shortest_path(1, 3).unwrap();
		assert_eq!(result.path, vec![1, 2, 3]);
		assert_eq!(result.distance, Distance::Finite(10));
	}

	#[test]
	fn unknown_endpoints_are_errors() {
		let g = graph(2, &[(1, 2, 1)]);
		assert_eq!(g.shortest_path(3, 1), Err(GraphError::UnknownVertex(3)));
		assert_eq!(g.shortest_path(1, 0), Err(GraphError::UnknownVertex(0)));
	}

	#[test]
	fn query_after_deletion_uses_new_ids() {
		let mut g = graph(4, &[(1, 2, 1), (2, 3, 1), (3, 4, 1), (1, 4, 9)]);
		g.remove_vertex(2).unwrap();
		// old 1 -9- old 4 and old 3 -1- old 4 => 1 -9- 3 -1- 2
		let result = g.shortest_path(1, 2).unwrap();
		assert_eq!(result.path, vec![1, 3, 2]);
		assert_eq!(result.distance, Distance::Finite(10));
	}

	#[test]
	fn large_weights_do_not_overflow() {
		let g = graph(3, &[(1, 2, u32::MAX), (2, 3, u32::MAX)]);
		let result = g.shortest_path(1, 3).unwrap();
		assert_eq!(result.distance, Distance::Finite(2 * u64::from(u32::MAX)));
	}

	#[test]
	fn frontier_pops_smallest_then_oldest() {
		let mut frontier = BinaryHeap::new();
		for (distance, seq, vertex) in [(5, 0, 1), (2, 1, 2), (2, 2, 3), (9, 3, 4)] {
			frontier.push(Candidate {
				distance,
				seq,
				vertex,
			});
		}
		let order: Vec<_> = std::iter::from_fn(|| frontier.pop().map(|c| c.vertex)).collect();
		assert_eq!(order, vec![2, 3, 1, 4]);
	}

	#[test]
	fn path_membership() {
		let result = PathResult {
			path: vec![1, 3, 2],
			distance: Distance::Finite(4),
		};
		assert!(result.contains(3));
		assert!(!result.contains(4));
		assert!(result.traverses(3, 1));
		assert!(result.traverses(3, 2));
		assert!(!result.traverses(1, 2));
		assert_eq!(result.to_string(), "1 -> 3 -> 2");
	}
}
