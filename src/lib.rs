//! Schema Layout - automatic entity-relationship diagram layout
//!
//! Given database tables (sized boxes) and the foreign keys between them,
//! computes non-overlapping positions and smooth curved connector paths.
//!
//! ```no_run
//! use schema_layout::core::auto_layout::{LayoutEdge, LayoutEngine, LayoutInput, LayoutNode};
//!
//! let input = LayoutInput::new(
//!     vec![
//!         LayoutNode::new("users", 240.0, 120.0),
//!         LayoutNode::new("orders", 240.0, 148.0),
//!     ],
//!     vec![LayoutEdge::new("orders", "users")],
//! );
//! let layout = LayoutEngine::default().with_seed(42).layout(&input)?;
//! assert_eq!(layout.nodes.len(), 2);
//! # Ok::<(), schema_layout::core::LayoutError>(())
//! ```

pub mod core;

pub use crate::core::auto_layout::{
    LayoutConfig, LayoutEdge, LayoutEngine, LayoutInput, LayoutNode, LayoutOutput, PositionedNode,
    RoutedEdge,
};
pub use crate::core::error::{LayoutError, LayoutResult};
