use crate::graph::{Graph, Position, VertexId};

pub const NODE_RADIUS: f64 = 30.0;
pub const HIT_RADIUS: f64 = NODE_RADIUS;

pub const BACKGROUND: &str = "#1a1a2e";
pub const EDGE_COLOR: &str = "#4682B4";
pub const PATH_COLOR: &str = "#FF4500";
pub const NODE_COLOR: &str = "#00FA9A";
pub const NODE_BORDER: &str = "#006400";
pub const WEIGHT_COLOR: &str = "#FFD700";
pub const LABEL_COLOR: &str = "#000";

pub const EDGE_WIDTH: f64 = 4.0;
pub const PATH_EDGE_WIDTH: f64 = 6.0;
pub const BORDER_WIDTH: f64 = 4.0;

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub vertex: Option<VertexId>,
	pub start_x: f64,
	pub start_y: f64,
	pub vertex_start: Position,
}

#[derive(Clone, Debug, Default)]
pub struct CanvasState {
	pub drag: DragState,
	pub width: f64,
	pub height: f64,
}

impl CanvasState {
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn begin_drag(&mut self, graph: &Graph, id: VertexId, x: f64, y: f64) {
		let Some(vertex) = graph.vertex(id) else {
			return;
		};
		self.drag = DragState {
			active: true,
			vertex: Some(id),
			start_x: x,
			start_y: y,
			vertex_start: vertex.position,
		};
	}

	/// Where the dragged vertex should move for a pointer at `(x, y)`.
	pub fn drag_target(&self, x: f64, y: f64) -> Option<(VertexId, Position)> {
		if !self.drag.active {
			return None;
		}
		let id = self.drag.vertex?;
		let start = self.drag.vertex_start;
		Some((
			id,
			Position::new(
				start.x + (x - self.drag.start_x),
				start.y + (y - self.drag.start_y),
			),
		))
	}

	pub fn end_drag(&mut self) {
		self.drag = DragState::default();
	}
}

/// Topmost vertex under the pointer. Later vertices are drawn on top.
pub fn vertex_at(graph: &Graph, x: f64, y: f64) -> Option<VertexId> {
	graph
		.vertices()
		.iter()
		.rev()
		.find(|v| (v.position.x - x).hypot(v.position.y - y) < HIT_RADIUS)
		.map(|v| v.id)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn two_vertices() -> Graph {
		let mut graph = Graph::new();
		graph.add_vertex(Position::new(100.0, 100.0));
		graph.add_vertex(Position::new(120.0, 100.0));
		graph
	}

	#[test]
	fn hit_test_prefers_topmost() {
		let graph = two_vertices();
		assert_eq!(vertex_at(&graph, 110.0, 100.0), Some(2));
		assert_eq!(vertex_at(&graph, 75.0, 100.0), Some(1));
		assert_eq!(vertex_at(&graph, 300.0, 300.0), None);
	}

	#[test]
	fn drag_keeps_grab_offset() {
		let graph = two_vertices();
		let mut state = CanvasState::default();
		state.begin_drag(&graph, 1, 110.0, 105.0);

		assert_eq!(
			state.drag_target(150.0, 125.0),
			Some((1, Position::new(140.0, 120.0)))
		);

		state.end_drag();
		assert_eq!(state.drag_target(150.0, 125.0), None);
	}

	#[test]
	fn drag_on_missing_vertex_is_ignored() {
		let mut state = CanvasState::default();
		state.begin_drag(&Graph::new(), 4, 0.0, 0.0);
		assert!(!state.drag.active);
	}
}
