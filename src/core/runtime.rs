//! Running layouts off the caller's thread
//!
//! The O(n²) repulsion pass makes large schemas slow enough to stall an
//! interactive caller. These helpers move the work onto tokio's blocking pool.

use crate::core::auto_layout::{LayoutEngine, LayoutInput, LayoutOutput};
use crate::core::error::LayoutResult;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::task::JoinHandle;

/// Handle to a layout running on the blocking pool
pub struct LayoutTask {
    cancel: Arc<AtomicBool>,
    handle: JoinHandle<LayoutResult<LayoutOutput>>,
}

impl LayoutTask {
    /// Ask the simulation to stop at its next step
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Wait for the layout to finish
    pub async fn join(self) -> Result<LayoutResult<LayoutOutput>, tokio::task::JoinError> {
        self.handle.await
    }
}

/// Start `engine.layout(input)` on tokio's blocking pool
///
/// Must be called from within a tokio runtime.
pub fn spawn_layout(engine: LayoutEngine, input: LayoutInput) -> LayoutTask {
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);

    let handle = tokio::task::spawn_blocking(move || {
        tracing::debug!(nodes = input.nodes.len(), "Background layout started");
        engine.layout_with_cancel(&input, &flag)
    });

    LayoutTask { cancel, handle }
}
