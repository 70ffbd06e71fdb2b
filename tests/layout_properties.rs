//! Property tests for the layout guarantees that hold for every input.

use proptest::prelude::*;
use schema_layout::core::auto_layout::{Vec2, source_anchor, target_anchor};
use schema_layout::{LayoutConfig, LayoutEdge, LayoutEngine, LayoutInput, LayoutNode};
use std::collections::HashSet;

fn schema_strategy() -> impl Strategy<Value = LayoutInput> {
    prop::collection::vec((120.0f64..400.0, 1usize..20), 0..12).prop_flat_map(|sizes| {
        let count = sizes.len();
        let nodes: Vec<LayoutNode> = sizes
            .into_iter()
            .enumerate()
            .map(|(i, (width, columns))| {
                LayoutNode::new(format!("table_{}", i), width, 36.0 + columns as f64 * 28.0)
            })
            .collect();

        let edges = if count == 0 {
            Just(Vec::new()).boxed()
        } else {
            prop::collection::vec((0..count, 0..count), 0..(count * 2))
                .prop_map(|pairs| {
                    pairs
                        .into_iter()
                        .map(|(a, b)| {
                            LayoutEdge::new(format!("table_{}", a), format!("table_{}", b))
                        })
                        .collect::<Vec<_>>()
                })
                .boxed()
        };

        edges.prop_map(move |edges| LayoutInput::new(nodes.clone(), edges))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn layout_preserves_cardinality(input in schema_strategy(), seed in any::<u64>()) {
        let output = LayoutEngine::default().with_seed(seed).layout(&input).unwrap();

        prop_assert_eq!(output.nodes.len(), input.nodes.len());
        prop_assert_eq!(output.edges.len(), input.edges.len());

        let ids: HashSet<&str> = output.nodes.iter().map(|n| n.id.as_str()).collect();
        prop_assert_eq!(ids.len(), input.nodes.len());
        for node in &input.nodes {
            prop_assert!(ids.contains(node.id.as_str()));
        }
    }

    #[test]
    fn layout_is_padded_and_grid_aligned(input in schema_strategy(), seed in any::<u64>()) {
        let config = LayoutConfig::default();
        let output = LayoutEngine::new(config.clone())
            .with_seed(seed)
            .layout(&input)
            .unwrap();

        for node in &output.nodes {
            prop_assert!(node.x >= config.padding);
            prop_assert!(node.y >= config.padding);
            prop_assert_eq!(node.x % config.grid_spacing, 0.0);
            prop_assert_eq!(node.y % config.grid_spacing, 0.0);
        }
    }

    #[test]
    fn layout_is_deterministic_for_a_seed(input in schema_strategy(), seed in any::<u64>()) {
        let engine = LayoutEngine::default().with_seed(seed);
        prop_assert_eq!(engine.layout(&input).unwrap(), engine.layout(&input).unwrap());
    }

    #[test]
    fn paths_start_and_end_at_anchors(input in schema_strategy(), seed in any::<u64>()) {
        let output = LayoutEngine::default().with_seed(seed).layout(&input).unwrap();

        for edge in &output.edges {
            prop_assert!(edge.path.len() >= 2);

            let from = input.nodes.iter().find(|n| n.id == edge.from).unwrap();
            let to = input.nodes.iter().find(|n| n.id == edge.to).unwrap();
            let from_pos = Vec2::from(output.position_of(&edge.from).unwrap());
            let to_pos = Vec2::from(output.position_of(&edge.to).unwrap());

            prop_assert_eq!(edge.start(), Some(source_anchor(from_pos, from).to_tuple()));
            prop_assert_eq!(edge.end(), Some(target_anchor(to_pos, to).to_tuple()));
        }
    }
}
