use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::*;
use crate::graph::{Graph, PathResult, Position};

pub fn render(
	state: &CanvasState,
	graph: &Graph,
	route: Option<&PathResult>,
	ctx: &CanvasRenderingContext2d,
) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	draw_edges(graph, route, ctx);
	draw_vertices(graph, route, ctx);
}

fn draw_edges(graph: &Graph, route: Option<&PathResult>, ctx: &CanvasRenderingContext2d) {
	for edge in graph.edges() {
		let (Some(a), Some(b)) = (graph.vertex(edge.from), graph.vertex(edge.to)) else {
			continue;
		};
		let (a, b) = (a.position, b.position);
		let on_path = route.is_some_and(|r| r.traverses(edge.from, edge.to));

		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.set_stroke_style_str(if on_path { PATH_COLOR } else { EDGE_COLOR });
		ctx.set_line_width(if on_path { PATH_EDGE_WIDTH } else { EDGE_WIDTH });
		ctx.stroke();

		// weight label sits on the midpoint
		ctx.set_fill_style_str(WEIGHT_COLOR);
		ctx.set_font("18px sans-serif");
		let _ = ctx.fill_text(
			&edge.weight.to_string(),
			(a.x + b.x) / 2.0,
			(a.y + b.y) / 2.0,
		);
	}
}

fn draw_vertices(graph: &Graph, route: Option<&PathResult>, ctx: &CanvasRenderingContext2d) {
	for vertex in graph.vertices() {
		let Position { x, y } = vertex.position;
		let on_path = route.is_some_and(|r| r.contains(vertex.id));

		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(if on_path { PATH_COLOR } else { NODE_COLOR });
		ctx.fill();
		ctx.set_stroke_style_str(NODE_BORDER);
		ctx.set_line_width(BORDER_WIDTH);
		ctx.stroke();

		ctx.set_fill_style_str(LABEL_COLOR);
		ctx.set_font("20px sans-serif");
		let _ = ctx.fill_text(&vertex.id.to_string(), x, y);
	}
}
