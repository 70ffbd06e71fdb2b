//! Edge routing between laid-out tables.
//!
//! Every edge leaves its source table at the middle of the right side and
//! enters its target at the middle of the left side, following a sampled
//! cubic Bezier whose control points extend horizontally from both anchors.
//! Anchor sides never flip, so an edge pointing "backwards" loops around.

use super::config::LayoutConfig;
use super::geometry::Vec2;
use super::types::{LayoutEdge, LayoutNode, PositionedNode, RoutedEdge};
use std::collections::HashMap;
use tracing::warn;

/// Midpoint of the right side of a node at `position`
pub fn source_anchor(position: Vec2, node: &LayoutNode) -> Vec2 {
    Vec2::new(position.x + node.width, position.y + node.height / 2.0)
}

/// Midpoint of the left side of a node at `position`
pub fn target_anchor(position: Vec2, node: &LayoutNode) -> Vec2 {
    Vec2::new(position.x, position.y + node.height / 2.0)
}

/// Point at `t` on the cubic Bezier curve through `p0`..`p3`
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f64) -> Vec2 {
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let t2 = t * t;

    p0.scale(mt2 * mt)
        .add(p1.scale(3.0 * mt2 * t))
        .add(p2.scale(3.0 * mt * t2))
        .add(p3.scale(t2 * t))
}

/// Horizontal distance of the control points from their anchors
pub fn control_offset(from: Vec2, to: Vec2, config: &LayoutConfig) -> f64 {
    (from.distance(to) * config.control_offset_ratio)
        .clamp(config.control_offset_min, config.control_offset_max)
}

/// Sample the curve from `from` to `to` into `segments + 1` points
///
/// The first and last points are exactly the anchors.
pub fn spline_path(from: Vec2, to: Vec2, config: &LayoutConfig) -> Vec<(f64, f64)> {
    let segments = config.curve_segments.max(1);
    let offset = control_offset(from, to, config);
    let c1 = Vec2::new(from.x + offset, from.y);
    let c2 = Vec2::new(to.x - offset, to.y);

    let mut path = Vec::with_capacity(segments + 1);
    path.push(from.to_tuple());
    for i in 1..segments {
        let t = i as f64 / segments as f64;
        path.push(cubic_bezier(from, c1, c2, to, t).to_tuple());
    }
    path.push(to.to_tuple());
    path
}

/// Route every edge over the final node positions
///
/// Returns one routed edge per input edge, in input order. An edge whose
/// endpoint is missing from `positions` or `nodes` gets a two-point
/// placeholder path at the origin.
pub fn compute_paths(
    edges: &[LayoutEdge],
    positions: &[PositionedNode],
    nodes: &[LayoutNode],
    config: &LayoutConfig,
) -> Vec<RoutedEdge> {
    let positions: HashMap<&str, Vec2> = positions
        .iter()
        .map(|p| (p.id.as_str(), Vec2::new(p.x, p.y)))
        .collect();
    let dimensions: HashMap<&str, &LayoutNode> =
        nodes.iter().map(|n| (n.id.as_str(), n)).collect();

    let resolve = |id: &str| -> Option<_> { Some((*positions.get(id)?, *dimensions.get(id)?)) };

    edges
        .iter()
        .map(|edge| {
            let path = match (resolve(&edge.from), resolve(&edge.to)) {
                (Some((from_pos, from_node)), Some((to_pos, to_node))) => spline_path(
                    source_anchor(from_pos, from_node),
                    target_anchor(to_pos, to_node),
                    config,
                ),
                _ => {
                    warn!(
                        from = %edge.from,
                        to = %edge.to,
                        "Cannot route edge with unknown endpoint"
                    );
                    vec![(0.0, 0.0), (0.0, 0.0)]
                }
            };

            RoutedEdge {
                from: edge.from.clone(),
                to: edge.to.clone(),
                path,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positioned(id: &str, x: f64, y: f64) -> PositionedNode {
        PositionedNode {
            id: id.to_string(),
            x,
            y,
        }
    }

    #[test]
    fn test_anchors() {
        let node = LayoutNode::new("users", 240.0, 100.0);
        let pos = Vec2::new(80.0, 120.0);

        assert_eq!(source_anchor(pos, &node), Vec2::new(320.0, 170.0));
        assert_eq!(target_anchor(pos, &node), Vec2::new(80.0, 170.0));
    }

    #[test]
    fn test_bezier_endpoints_and_midpoint() {
        let p0 = Vec2::new(0.0, 0.0);
        let p1 = Vec2::new(100.0, 0.0);
        let p2 = Vec2::new(100.0, 100.0);
        let p3 = Vec2::new(200.0, 100.0);

        assert_eq!(cubic_bezier(p0, p1, p2, p3, 0.0), p0);
        assert_eq!(cubic_bezier(p0, p1, p2, p3, 1.0), p3);

        // Symmetric S-curve passes through the midpoint of its anchors
        let mid = cubic_bezier(p0, p1, p2, p3, 0.5);
        assert!((mid.x - 100.0).abs() < 1e-9);
        assert!((mid.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_control_offset_is_clamped() {
        let config = LayoutConfig::default();
        let offset = |x: f64| control_offset(Vec2::default(), Vec2::new(x, 0.0), &config);

        assert_eq!(offset(50.0), 40.0);
        assert!((offset(300.0) - 90.0).abs() < 1e-9);
        assert_eq!(offset(5000.0), 120.0);
    }

    #[test]
    fn test_spline_path_sampling() {
        let config = LayoutConfig::default();
        let from = Vec2::new(320.0, 130.0);
        let to = Vec2::new(640.0, 210.0);

        let path = spline_path(from, to, &config);

        assert_eq!(path.len(), config.curve_segments + 1);
        assert_eq!(path[0], (320.0, 130.0));
        assert_eq!(path[path.len() - 1], (640.0, 210.0));

        // The curve leaves the source heading right and enters the target from the left
        assert!(path[1].0 > from.x);
        assert!(path[path.len() - 2].0 < to.x);
    }

    #[test]
    fn test_compute_paths_uses_final_positions() {
        let nodes = vec![
            LayoutNode::new("orders", 240.0, 100.0),
            LayoutNode::new("users", 240.0, 150.0),
        ];
        let positions = vec![
            positioned("orders", 80.0, 80.0),
            positioned("users", 400.0, 120.0),
        ];
        let edges = vec![LayoutEdge::new("orders", "users")];

        let routed = compute_paths(&edges, &positions, &nodes, &LayoutConfig::default());

        assert_eq!(routed.len(), 1);
        assert_eq!(routed[0].from, "orders");
        assert_eq!(routed[0].to, "users");
        assert_eq!(routed[0].start(), Some((320.0, 130.0)));
        assert_eq!(routed[0].end(), Some((400.0, 195.0)));
    }

    #[test]
    fn test_parallel_edges_are_routed_independently() {
        let nodes = vec![
            LayoutNode::new("a", 240.0, 100.0),
            LayoutNode::new("b", 240.0, 100.0),
        ];
        let positions = vec![positioned("a", 80.0, 80.0), positioned("b", 480.0, 80.0)];
        let edges = vec![LayoutEdge::new("a", "b"), LayoutEdge::new("a", "b")];

        let routed = compute_paths(&edges, &positions, &nodes, &LayoutConfig::default());
        assert_eq!(routed.len(), 2);
        assert_eq!(routed[0], routed[1]);
    }

    #[test]
    fn test_missing_endpoint_gets_placeholder() {
        let nodes = vec![LayoutNode::new("a", 240.0, 100.0)];
        let positions = vec![positioned("a", 80.0, 80.0)];
        let edges = vec![LayoutEdge::new("a", "ghost")];

        let routed = compute_paths(&edges, &positions, &nodes, &LayoutConfig::default());

        assert_eq!(routed.len(), 1);
        assert_eq!(routed[0].path, vec![(0.0, 0.0), (0.0, 0.0)]);
    }

    #[test]
    fn test_self_reference_loops_around_node() {
        let nodes = vec![LayoutNode::new("employees", 240.0, 120.0)];
        let positions = vec![positioned("employees", 80.0, 80.0)];
        let edges = vec![LayoutEdge::new("employees", "employees")];

        let routed = compute_paths(&edges, &positions, &nodes, &LayoutConfig::default());
        let path = &routed[0].path;

        assert_eq!(path.first(), Some(&(320.0, 140.0)));
        assert_eq!(path.last(), Some(&(80.0, 140.0)));
        // Control points sit outside the box on both sides
        assert!(path[1].0 > 320.0);
        assert!(path[path.len() - 2].0 < 80.0);
    }
}
