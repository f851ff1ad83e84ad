//! Errors raised at the graph's mutation and query boundary.

use thiserror::Error;

use super::VertexId;

/// Rejections reported by [`Graph`](super::Graph) mutations, path queries and
/// input parsing. A rejected operation leaves the graph untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
	/// The identifier does not name a live vertex.
	#[error("unknown vertex {0}")]
	UnknownVertex(VertexId),

	/// Edge weights must be positive.
	#[error("edge {from} - {to} needs a positive weight")]
	ZeroWeight {
		/// First endpoint.
		from: VertexId,
		/// Second endpoint.
		to: VertexId,
	},

	/// Both endpoints name the same vertex.
	#[error("vertex {0} cannot be connected to itself")]
	SelfLoop(VertexId),

	/// Text input that is not a positive integer.
	#[error("{field} must be a positive integer, got {value:?}")]
	Malformed {
		/// Which input was being read.
		field: &'static str,
		/// The raw text.
		value: String,
	},
}

impl GraphError {
	/// Create a malformed input error.
	pub fn malformed(field: &'static str, value: impl Into<String>) -> Self {
		Self::Malformed {
			field,
			value: value.into(),
		}
	}
}

/// Result alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
