//! Connectivity analysis of the relationship graph.
//!
//! Foreign keys are treated as undirected here. The junction and hub sets are
//! reported for diagnostics only; neither placement nor the force model
//! weights nodes by them yet.

use super::types::{LayoutEdge, LayoutNode};
use std::collections::{HashMap, HashSet};

/// Adjacency and degree information for one layout run
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphAnalysis {
    /// Undirected neighbour sets, one entry per input node
    pub adjacency: HashMap<String, HashSet<String>>,
    /// Number of distinct neighbours per node
    pub degree: HashMap<String, usize>,
    /// Nodes with degree >= 2, likely bridge tables of many-to-many relations
    pub junctions: HashSet<String>,
    /// Nodes with degree strictly above the mean
    pub hubs: HashSet<String>,
}

impl GraphAnalysis {
    pub fn degree_of(&self, id: &str) -> usize {
        self.degree.get(id).copied().unwrap_or(0)
    }

    pub fn is_junction(&self, id: &str) -> bool {
        self.junctions.contains(id)
    }

    pub fn is_hub(&self, id: &str) -> bool {
        self.hubs.contains(id)
    }

    pub fn mean_degree(&self) -> f64 {
        if self.degree.is_empty() {
            return 0.0;
        }
        self.degree.values().sum::<usize>() as f64 / self.degree.len() as f64
    }
}

/// Build the undirected adjacency of `nodes` and classify junctions and hubs
///
/// Edges naming an unknown node are ignored entirely. Parallel edges collapse
/// into a single neighbour; a self reference makes a node its own neighbour.
pub fn analyze(nodes: &[LayoutNode], edges: &[LayoutEdge]) -> GraphAnalysis {
    let mut adjacency: HashMap<String, HashSet<String>> = nodes
        .iter()
        .map(|node| (node.id.clone(), HashSet::new()))
        .collect();

    for edge in edges {
        if !adjacency.contains_key(&edge.from) || !adjacency.contains_key(&edge.to) {
            continue;
        }
        if let Some(neighbors) = adjacency.get_mut(&edge.from) {
            neighbors.insert(edge.to.clone());
        }
        if let Some(neighbors) = adjacency.get_mut(&edge.to) {
            neighbors.insert(edge.from.clone());
        }
    }

    let degree: HashMap<String, usize> = adjacency
        .iter()
        .map(|(id, neighbors)| (id.clone(), neighbors.len()))
        .collect();

    let junctions = degree
        .iter()
        .filter(|(_, d)| **d >= 2)
        .map(|(id, _)| id.clone())
        .collect();

    let mut analysis = GraphAnalysis {
        adjacency,
        degree,
        junctions,
        hubs: HashSet::new(),
    };

    let mean = analysis.mean_degree();
    analysis.hubs = analysis
        .degree
        .iter()
        .filter(|(_, d)| **d as f64 > mean)
        .map(|(id, _)| id.clone())
        .collect();

    analysis
}
