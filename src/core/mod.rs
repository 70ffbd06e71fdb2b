//! Core domain models and the automatic diagram layout engine

pub mod auto_layout;
#[cfg(feature = "cli")]
pub mod config;
pub mod error;
#[cfg(feature = "cli")]
pub mod logging;
#[cfg(feature = "runtime")]
pub mod runtime;
mod schema;

pub use error::{LayoutError, LayoutResult};
pub use schema::*;
