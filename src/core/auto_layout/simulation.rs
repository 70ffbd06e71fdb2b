//! Force-directed simulation
//!
//! Every step simulates three forces:
//! - **Repulsion**: each pair of nearby nodes pushes apart (inverse square)
//! - **Attraction**: connected nodes stretched beyond the ideal edge length are
//!   pulled back together (spring-like, never pulls below the ideal length)
//! - **Centering**: every node is pulled gently toward the centroid of the
//!   initial placement
//!
//! Velocities are integrated with explicit Euler steps and damped. The step
//! count is fixed; there is no convergence test.

use super::config::LayoutConfig;
use super::geometry::Vec2;
use super::placement::Particle;
use super::types::LayoutEdge;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{trace, warn};

/// How a simulation run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SimulationStats {
    pub iterations: usize,
    pub cancelled: bool,
}

/// Move `particles` according to the force model
///
/// Edges whose endpoints are not among the particles exert no force. When
/// `cancel` is set between two steps the run stops early and keeps the
/// positions reached so far.
pub(crate) fn simulate(
    particles: &mut [Particle],
    edges: &[LayoutEdge],
    config: &LayoutConfig,
    cancel: Option<&AtomicBool>,
) -> SimulationStats {
    let node_count = particles.len();
    if node_count == 0 {
        return SimulationStats {
            iterations: 0,
            cancelled: false,
        };
    }

    let springs = resolve_springs(particles, edges);
    let center = centroid(particles);
    let cutoff = config.repulsion_cutoff();

    let mut forces = vec![Vec2::default(); node_count];

    for iteration in 0..config.iterations {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            warn!(iteration, "Layout simulation cancelled");
            return SimulationStats {
                iterations: iteration,
                cancelled: true,
            };
        }

        forces.fill(Vec2::default());

        // Repulsion between all pairs within the cutoff
        for i in 0..node_count {
            for j in (i + 1)..node_count {
                let delta = particles[j].position.sub(particles[i].position);
                let dist_sq = delta.length_squared() + config.epsilon;
                let dist = dist_sq.sqrt();

                if dist < cutoff {
                    let magnitude = config.repulsion_strength / dist_sq;
                    let force = delta.scale(magnitude / dist);
                    forces[i] = forces[i].sub(force);
                    forces[j] = forces[j].add(force);
                }
            }
        }

        // Attraction along stretched edges
        for &(a, b) in &springs {
            let delta = particles[b].position.sub(particles[a].position);
            let dist = delta.length();

            if dist > config.ideal_edge_length {
                let magnitude = (dist - config.ideal_edge_length) * config.attraction_strength;
                let force = delta.scale(magnitude / dist);
                forces[a] = forces[a].add(force);
                forces[b] = forces[b].sub(force);
            }
        }

        // Centering toward the initial centroid
        for (force, particle) in forces.iter_mut().zip(particles.iter()) {
            let pull = center.sub(particle.position).scale(config.center_strength);
            *force = force.add(pull);
        }

        // Damped Euler integration
        for (particle, force) in particles.iter_mut().zip(forces.iter()) {
            particle.velocity = particle.velocity.add(*force).scale(config.damping);
            particle.position = particle.position.add(particle.velocity);
        }

        if iteration % 100 == 0 {
            trace!(
                iteration,
                energy = kinetic_energy(particles),
                "Simulation step"
            );
        }
    }

    SimulationStats {
        iterations: config.iterations,
        cancelled: false,
    }
}

/// Map edges to particle index pairs, dropping those with unknown endpoints
fn resolve_springs(particles: &[Particle], edges: &[LayoutEdge]) -> Vec<(usize, usize)> {
    let index: HashMap<&str, usize> = particles
        .iter()
        .enumerate()
        .map(|(i, p)| (p.id.as_str(), i))
        .collect();

    let springs: Vec<(usize, usize)> = edges
        .iter()
        .filter_map(|edge| {
            let a = index.get(edge.from.as_str())?;
            let b = index.get(edge.to.as_str())?;
            Some((*a, *b))
        })
        .collect();

    let dangling = edges.len() - springs.len();
    if dangling > 0 {
        warn!(dangling, "Edges reference unknown nodes and exert no force");
    }

    springs
}

fn centroid(particles: &[Particle]) -> Vec2 {
    let sum = particles
        .iter()
        .fold(Vec2::default(), |acc, p| acc.add(p.position));
    sum.scale(1.0 / particles.len() as f64)
}

fn kinetic_energy(particles: &[Particle]) -> f64 {
    let total: f64 = particles.iter().map(|p| p.velocity.length_squared()).sum();
    total / 2.0
}
