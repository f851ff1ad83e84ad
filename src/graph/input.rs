//! Parsing of raw form text into identifiers and weights.

use log::warn;

use super::error::{GraphError, Result};
use super::{VertexId, Weight};

/// Parse a vertex identifier typed by the user.
pub fn parse_vertex_id(field: &'static str, raw: &str) -> Result<VertexId> {
	parse_positive(field, raw)
}

/// Parse an edge weight typed by the user.
pub fn parse_weight(raw: &str) -> Result<Weight> {
	parse_positive("weight", raw)
}

fn parse_positive(field: &'static str, raw: &str) -> Result<u32> {
	match raw.trim().parse::<u32>() {
		Ok(value) if value > 0 => Ok(value),
		_ => {
			warn!("rejected {field} input {raw:?}");
			Err(GraphError::malformed(field, raw))
		}
	}
}
