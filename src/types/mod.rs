//! All data types for the weighted graph library.

pub mod attribute;
pub mod edge;
pub mod error;
pub mod node;

pub use attribute::{AttrValue, Attributes};
pub use edge::{Edge, EdgeId};
pub use error::{GraphError, GraphResult};
pub use node::Node;

/// Caller-supplied node identifier.
pub type NodeId = i64;

/// Weight given to edges added without an explicit weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;
