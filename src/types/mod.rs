//! All data types for the transit graph library.

pub mod edge;
pub mod error;
pub mod path;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use path::Path;

/// Weight given to edges added without one.
pub const DEFAULT_WEIGHT: f64 = 1.0;
