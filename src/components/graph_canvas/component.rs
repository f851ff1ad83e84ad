use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::{CanvasState, vertex_at};
use crate::graph::{Graph, PathResult, Position};

/// Canvas editor for `graph`.
///
/// Clicking empty space adds a vertex, dragging a vertex moves it. The
/// vertices and edges of `route` are highlighted. Adding a vertex clears
/// `route`.
#[component]
pub fn GraphCanvas(
	graph: RwSignal<Graph>,
	route: RwSignal<Option<PathResult>>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<CanvasState>> = Rc::new(RefCell::new(CanvasState::default()));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resized = Trigger::new();
	let (state_init, resize_cb_init) = (state.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		state_init.borrow_mut().resize(w, h);
		resized.notify();

		if fullscreen && resize_cb_init.borrow().is_none() {
			let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let (nw, nh) = window_size(&win);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				state_resize.borrow_mut().resize(nw, nh);
				resized.notify();
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
	});

	let state_draw = state.clone();
	Effect::new(move |_| {
		resized.track();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(ctx) = context_2d(&canvas) else {
			warn!("canvas has no 2d context");
			return;
		};
		let s = state_draw.borrow();
		graph.with(|g| route.with(|r| render::render(&s, g, r.as_ref(), &ctx)));
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		match graph.with_untracked(|g| vertex_at(g, x, y)) {
			Some(id) => {
				graph.with_untracked(|g| state_md.borrow_mut().begin_drag(g, id, x, y));
			}
			None => {
				graph.update(|g| {
					g.add_vertex(Position::new(x, y));
				});
				route.set(None);
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};
		let Some((id, position)) = state_mm.borrow().drag_target(x, y) else {
			return;
		};
		graph.update(|g| {
			if let Err(err) = g.move_vertex(id, position) {
				warn!("drag: {err}");
			}
		});
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| state_mu.borrow_mut().end_drag();

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| state_ml.borrow_mut().end_drag();

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; cursor: crosshair;"
		/>
	}
}

fn window_size(window: &Window) -> (f64, f64) {
	let dimension = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64());
	(
		dimension(window.inner_width()).unwrap_or(800.0),
		dimension(window.inner_height()).unwrap_or(600.0),
	)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

/// Pointer position relative to the canvas.
fn pointer(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}
