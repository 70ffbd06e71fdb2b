use super::config::LayoutConfig;
use super::geometry::Vec2;
use super::types::LayoutNode;
use rand::Rng;

/// Simulation state of one node, alive only for a single layout run
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Particle {
    pub id: String,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Seed every node on a jittered, roughly square grid at rest
///
/// Node `i` lands in column `i % columns`, row `i / columns` where
/// `columns = ceil(sqrt(n))`. Connectivity plays no part in seeding.
pub(crate) fn place<R: Rng>(
    nodes: &[LayoutNode],
    config: &LayoutConfig,
    rng: &mut R,
) -> Vec<Particle> {
    if nodes.is_empty() {
        return Vec::new();
    }

    let columns = (nodes.len() as f64).sqrt().ceil() as usize;

    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let col = (index % columns) as f64;
            let row = (index / columns) as f64;

            Particle {
                id: node.id.clone(),
                position: Vec2::new(
                    config.start_x + col * config.base_spacing + jitter(rng, config.jitter),
                    config.start_y + row * config.base_spacing + jitter(rng, config.jitter),
                ),
                velocity: Vec2::default(),
            }
        })
        .collect()
}

fn jitter<R: Rng>(rng: &mut R, amount: f64) -> f64 {
    if amount > 0.0 {
        rng.gen_range(-amount..=amount)
    } else {
        0.0
    }
}
