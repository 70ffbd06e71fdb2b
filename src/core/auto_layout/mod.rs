//! Auto-layout module for automatic table arrangement
//!
//! This module computes positions for every table of a schema diagram and
//! curved connector paths for every foreign key, without user input.
//!
//! The pipeline runs in a single pass:
//! 1. **Analysis**: undirected adjacency, degrees, junction and hub tables
//! 2. **Placement**: jittered square grid seeding
//! 3. **Simulation**: repulsion, edge attraction, centering and damping for a
//!    fixed number of steps
//! 4. **Post-processing**: grid snapping, then translation so the smallest
//!    coordinate equals the configured padding
//! 5. **Routing**: right-to-left anchored cubic Bezier curves, sampled
//!
//! A run is a pure function of its input, configuration and random seed; no
//! state survives between runs.

mod analysis;
mod config;
mod geometry;
mod paths;
mod placement;
mod post_process;
mod simulation;
mod types;

pub use analysis::{GraphAnalysis, analyze};
pub use config::LayoutConfig;
pub use geometry::{LayoutBounds, Vec2};
pub use paths::{
    compute_paths, control_offset, cubic_bezier, source_anchor, spline_path, target_anchor,
};
pub use types::{LayoutEdge, LayoutInput, LayoutNode, LayoutOutput, PositionedNode, RoutedEdge};

use crate::core::error::{LayoutError, LayoutResult};
use crate::core::schema::SchemaGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::AtomicBool;
use tracing::{debug, info_span};

/// Reusable layout settings: tuning constants plus an optional fixed seed
#[derive(Clone, Debug, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
    seed: Option<u64>,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config, seed: None }
    }

    /// Fix the jitter seed so identical input yields identical output
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn layout(&self, input: &LayoutInput) -> LayoutResult<LayoutOutput> {
        let mut rng = self.rng();
        run_pipeline(&input.nodes, &input.edges, &self.config, &mut rng, None)
    }

    /// Like [`LayoutEngine::layout`], but stops simulating once `cancel` is set
    ///
    /// A cancelled run still snaps, normalizes and routes the positions reached
    /// so far, so its output satisfies the same guarantees as a full run.
    pub fn layout_with_cancel(
        &self,
        input: &LayoutInput,
        cancel: &AtomicBool,
    ) -> LayoutResult<LayoutOutput> {
        let mut rng = self.rng();
        run_pipeline(
            &input.nodes,
            &input.edges,
            &self.config,
            &mut rng,
            Some(cancel),
        )
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Lay out `nodes` and route `edges` using the caller's random source
pub fn enhance<R: Rng>(
    nodes: &[LayoutNode],
    edges: &[LayoutEdge],
    config: &LayoutConfig,
    rng: &mut R,
) -> LayoutResult<LayoutOutput> {
    run_pipeline(nodes, edges, config, rng, None)
}

fn run_pipeline<R: Rng>(
    nodes: &[LayoutNode],
    edges: &[LayoutEdge],
    config: &LayoutConfig,
    rng: &mut R,
    cancel: Option<&AtomicBool>,
) -> LayoutResult<LayoutOutput> {
    let span = info_span!("auto_layout", nodes = nodes.len(), edges = edges.len());
    let _enter = span.enter();

    config.validate()?;
    validate_nodes(nodes)?;

    if nodes.is_empty() {
        return Ok(LayoutOutput::default());
    }

    let analysis = analyze(nodes, edges);
    debug!(
        junctions = analysis.junctions.len(),
        hubs = analysis.hubs.len(),
        mean_degree = analysis.mean_degree(),
        "Analyzed relationship graph"
    );

    let mut particles = placement::place(nodes, config, rng);
    let stats = simulation::simulate(&mut particles, edges, config, cancel);
    debug!(
        iterations = stats.iterations,
        cancelled = stats.cancelled,
        "Force simulation finished"
    );

    post_process::snap_to_grid(&mut particles, config.grid_spacing);
    post_process::normalize(&mut particles, config.padding);

    let positioned: Vec<PositionedNode> = particles
        .into_iter()
        .map(|p| PositionedNode {
            id: p.id,
            x: p.position.x,
            y: p.position.y,
        })
        .collect();

    let routed = compute_paths(edges, &positioned, nodes, config);

    Ok(LayoutOutput {
        nodes: positioned,
        edges: routed,
    })
}

fn validate_nodes(nodes: &[LayoutNode]) -> LayoutResult<()> {
    let mut seen = HashSet::with_capacity(nodes.len());
    for node in nodes {
        let valid_size = node.width.is_finite()
            && node.height.is_finite()
            && node.width > 0.0
            && node.height > 0.0;
        if !valid_size {
            return Err(LayoutError::InvalidDimensions {
                id: node.id.clone(),
                width: node.width,
                height: node.height,
            });
        }
        if !seen.insert(node.id.as_str()) {
            return Err(LayoutError::DuplicateNode(node.id.clone()));
        }
    }
    Ok(())
}

/// Build layout input from a schema graph
///
/// Tables are identified by name and sized by their column count; each
/// relationship becomes an edge from its source table to its target table.
pub fn layout_input_from_graph(graph: &SchemaGraph) -> LayoutInput {
    let nodes = graph
        .node_indices()
        .filter_map(|idx| graph.node_weight(idx))
        .map(|table| {
            let (width, height) = table.layout_size();
            LayoutNode::new(table.name.clone(), width, height)
        })
        .collect();

    let edges = graph
        .edge_indices()
        .filter_map(|e| {
            let (from, to) = graph.edge_endpoints(e)?;
            Some(LayoutEdge::new(
                graph.node_weight(from)?.name.clone(),
                graph.node_weight(to)?.name.clone(),
            ))
        })
        .collect();

    LayoutInput::new(nodes, edges)
}

/// Applies the calculated layout to the graph
///
/// Tables without a position in `layout` keep their current position.
pub fn apply_layout(graph: &mut SchemaGraph, layout: &LayoutOutput) {
    let positions: HashMap<&str, (f64, f64)> = layout
        .nodes
        .iter()
        .map(|node| (node.id.as_str(), (node.x, node.y)))
        .collect();

    for table in graph.node_weights_mut() {
        if let Some(position) = positions.get(table.name.as_str()) {
            table.position = *position;
        }
    }
}

/// Convenience function to auto-layout with default config
pub fn auto_layout(graph: &mut SchemaGraph) -> LayoutResult<LayoutOutput> {
    auto_layout_with_engine(graph, &LayoutEngine::default())
}

/// Convenience function to auto-layout with custom config
pub fn auto_layout_with_config(
    graph: &mut SchemaGraph,
    config: &LayoutConfig,
) -> LayoutResult<LayoutOutput> {
    auto_layout_with_engine(graph, &LayoutEngine::new(config.clone()))
}

pub fn auto_layout_with_engine(
    graph: &mut SchemaGraph,
    engine: &LayoutEngine,
) -> LayoutResult<LayoutOutput> {
    let layout = engine.layout(&layout_input_from_graph(graph))?;
    apply_layout(graph, &layout);
    Ok(layout)
}
