//! Input and output records of the layout pipeline.
//!
//! The serde shapes match what the diagram canvas exchanges as JSON:
//! nodes are `{id, width, height}`, edges are `{from, to}`, routed edges carry
//! their path as an array of `[x, y]` pairs.

use super::geometry::LayoutBounds;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A table box to be placed
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    pub id: String,
    pub width: f64,
    pub height: f64,
}

impl LayoutNode {
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }
}

/// A foreign-key reference from one table to another
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutEdge {
    pub from: String,
    pub to: String,
}

impl LayoutEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn is_self_reference(&self) -> bool {
        self.from == self.to
    }
}

/// Top-left corner chosen for a node
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionedNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

/// Sampled curve connecting two nodes, from source anchor to target anchor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoutedEdge {
    pub from: String,
    pub to: String,
    pub path: Vec<(f64, f64)>,
}

impl RoutedEdge {
    pub fn start(&self) -> Option<(f64, f64)> {
        self.path.first().copied()
    }

    pub fn end(&self) -> Option<(f64, f64)> {
        self.path.last().copied()
    }

    /// SVG path data drawing the sampled curve as a polyline
    pub fn to_svg_path(&self) -> String {
        let mut points = self.path.iter();
        let Some((x, y)) = points.next() else {
            return String::new();
        };

        let mut data = format!("M {} {}", x, y);
        for (x, y) in points {
            data.push_str(&format!(" L {} {}", x, y));
        }
        data
    }
}

/// Everything the layout needs: table boxes and the references between them
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutInput {
    #[serde(default)]
    pub nodes: Vec<LayoutNode>,
    #[serde(default)]
    pub edges: Vec<LayoutEdge>,
}

impl LayoutInput {
    pub fn new(nodes: Vec<LayoutNode>, edges: Vec<LayoutEdge>) -> Self {
        Self { nodes, edges }
    }
}

/// Result of a layout run, in input order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutOutput {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<RoutedEdge>,
}

impl LayoutOutput {
    pub fn position_of(&self, id: &str) -> Option<(f64, f64)> {
        self.nodes
            .iter()
            .find(|node| node.id == id)
            .map(|node| (node.x, node.y))
    }

    /// Bounding box of every positioned node, grown by `margin` on each side
    ///
    /// Node sizes come from `dimensions`; a positioned node without a matching
    /// entry counts as a point. Returns `None` for an empty layout.
    pub fn bounds(&self, dimensions: &[LayoutNode], margin: f64) -> Option<LayoutBounds> {
        let sizes: HashMap<&str, (f64, f64)> = dimensions
            .iter()
            .map(|node| (node.id.as_str(), (node.width, node.height)))
            .collect();

        let mut nodes = self.nodes.iter();
        let first = nodes.next()?;
        let (w, h) = sizes.get(first.id.as_str()).copied().unwrap_or((0.0, 0.0));
        let mut bounds = LayoutBounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x + w,
            max_y: first.y + h,
        };

        for node in nodes {
            let (w, h) = sizes.get(node.id.as_str()).copied().unwrap_or((0.0, 0.0));
            bounds.include_rect(node.x, node.y, w, h);
        }

        Some(bounds.expand(margin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_json_shape() {
        let input: LayoutInput = serde_json::from_str(
            r#"{
                "nodes": [{"id": "users", "width": 240, "height": 148}],
                "edges": [{"from": "orders", "to": "users"}]
            }"#,
        )
        .unwrap();

        assert_eq!(input.nodes[0], LayoutNode::new("users", 240.0, 148.0));
        assert_eq!(input.edges[0], LayoutEdge::new("orders", "users"));
    }

    #[test]
    fn test_missing_edges_default_to_empty() {
        let input: LayoutInput = serde_json::from_str(r#"{"nodes": []}"#).unwrap();
        assert!(input.nodes.is_empty());
        assert!(input.edges.is_empty());
    }

    #[test]
    fn test_routed_edge_serializes_path_as_pairs() {
        let edge = RoutedEdge {
            from: "a".to_string(),
            to: "b".to_string(),
            path: vec![(1.0, 2.0), (3.5, 4.0)],
        };
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(json["path"], serde_json::json!([[1.0, 2.0], [3.5, 4.0]]));
    }

    #[test]
    fn test_svg_path() {
        let edge = RoutedEdge {
            from: "a".to_string(),
            to: "b".to_string(),
            path: vec![(0.0, 10.0), (5.0, 12.5), (10.0, 20.0)],
        };
        assert_eq!(edge.to_svg_path(), "M 0 10 L 5 12.5 L 10 20");
        assert_eq!(edge.start(), Some((0.0, 10.0)));
        assert_eq!(edge.end(), Some((10.0, 20.0)));

        let empty = RoutedEdge {
            from: "a".to_string(),
            to: "b".to_string(),
            path: vec![],
        };
        assert_eq!(empty.to_svg_path(), "");
    }

    #[test]
    fn test_self_reference() {
        assert!(LayoutEdge::new("employees", "employees").is_self_reference());
        assert!(!LayoutEdge::new("orders", "users").is_self_reference());
    }

    #[test]
    fn test_bounds() {
        let output = LayoutOutput {
            nodes: vec![
                PositionedNode {
                    id: "a".to_string(),
                    x: 80.0,
                    y: 80.0,
                },
                PositionedNode {
                    id: "b".to_string(),
                    x: 400.0,
                    y: 200.0,
                },
            ],
            edges: vec![],
        };
        let dims = vec![
            LayoutNode::new("a", 240.0, 100.0),
            LayoutNode::new("b", 240.0, 150.0),
        ];

        let bounds = output.bounds(&dims, 0.0).unwrap();
        assert_eq!(bounds.min_x, 80.0);
        assert_eq!(bounds.min_y, 80.0);
        assert_eq!(bounds.max_x, 640.0);
        assert_eq!(bounds.max_y, 350.0);

        let padded = output.bounds(&dims, 100.0).unwrap();
        assert_eq!(padded.min_x, -20.0);

        assert_eq!(output.position_of("b"), Some((400.0, 200.0)));
        assert_eq!(output.position_of("zzz"), None);
        assert!(LayoutOutput::default().bounds(&dims, 10.0).is_none());
    }
}
