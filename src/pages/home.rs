use leptos::html::Input;
use leptos::prelude::*;
use log::{info, warn};
use web_sys::MouseEvent;

use crate::components::graph_canvas::GraphCanvas;
use crate::graph::{self, Graph, PathResult, VertexId, parse_vertex_id, parse_weight};

/// Parse the path query fields and run it.
fn find_path(graph: &Graph, source: &str, destination: &str) -> graph::Result<PathResult> {
	let source = parse_vertex_id("source", source)?;
	let destination = parse_vertex_id("destination", destination)?;
	graph.shortest_path(source, destination)
}

/// Parse the edge fields and add the edge.
fn add_edge(graph: &mut Graph, from: &str, to: &str, weight: &str) -> graph::Result<()> {
	let from = parse_vertex_id("from", from)?;
	let to = parse_vertex_id("to", to)?;
	let weight = parse_weight(weight)?;
	graph.add_edge(from, to, weight)
}

/// Parse the vertex field and delete that vertex.
fn delete_vertex(graph: &mut Graph, id: &str) -> graph::Result<VertexId> {
	let id = parse_vertex_id("vertex", id)?;
	graph.remove_vertex(id)?;
	Ok(id)
}

fn describe(result: &PathResult) -> String {
	if result.is_reachable() {
		format!("Shortest Path: {result}\nTotal Distance: {}", result.distance)
	} else {
		"No path between those vertices".into()
	}
}

fn field(input: NodeRef<Input>) -> String {
	input
		.get_untracked()
		.map(|el| el.value())
		.unwrap_or_default()
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph = RwSignal::new(Graph::new());
	let route = RwSignal::new(None::<PathResult>);
	let output = RwSignal::new(String::new());

	let (source_ref, destination_ref) = (NodeRef::<Input>::new(), NodeRef::<Input>::new());
	let (from_ref, to_ref, weight_ref) = (
		NodeRef::<Input>::new(),
		NodeRef::<Input>::new(),
		NodeRef::<Input>::new(),
	);
	let delete_ref = NodeRef::<Input>::new();

	let report_error = move |err: graph::GraphError| {
		warn!("{err}");
		output.set(err.to_string());
	};

	let on_find_path = move |_: MouseEvent| {
		let result = graph.with_untracked(|g| {
			find_path(g, &field(source_ref), &field(destination_ref))
		});
		match result {
			Ok(result) => {
				output.set(describe(&result));
				route.set(Some(result));
			}
			Err(err) => {
				route.set(None);
				report_error(err);
			}
		}
	};

	let on_add_edge = move |_: MouseEvent| {
		let (from, to, weight) = (field(from_ref), field(to_ref), field(weight_ref));
		match graph.try_update(|g| add_edge(g, &from, &to, &weight)) {
			Some(Err(err)) => report_error(err),
			_ => {
				route.set(None);
				output.set(String::new());
			}
		}
	};

	let on_delete = move |_: MouseEvent| {
		let raw = field(delete_ref);
		match graph.try_update(|g| delete_vertex(g, &raw)) {
			Some(Err(err)) => report_error(err),
			_ => {
				info!("vertex {raw} deleted, remaining vertices renumbered");
				route.set(None);
				output.set(String::new());
			}
		}
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<GraphCanvas graph=graph route=route fullscreen=true />
				<div class="graph-overlay">
					<h1>"Shortest Path Finder"</h1>
					<p class="subtitle">"Click to add a vertex. Drag a vertex to move it."</p>

					<div class="controls">
						<input node_ref=from_ref type="number" min="1" placeholder="From" />
						<input node_ref=to_ref type="number" min="1" placeholder="To" />
						<input node_ref=weight_ref type="number" min="1" placeholder="Weight" />
						<button on:click=on_add_edge>"Add Edge"</button>
					</div>
					<div class="controls">
						<input node_ref=source_ref type="number" min="1" placeholder="Source" />
						<input node_ref=destination_ref type="number" min="1" placeholder="Destination" />
						<button on:click=on_find_path>"Find Path"</button>
					</div>
					<div class="controls">
						<input node_ref=delete_ref type="number" min="1" placeholder="Vertex" />
						<button on:click=on_delete>"Delete Vertex"</button>
					</div>

					<p class="output" style="white-space: pre-line;">{move || output.get()}</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
