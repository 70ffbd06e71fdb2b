use super::placement::Particle;

/// Round both coordinates of every particle to the nearest multiple of `grid`
pub(crate) fn snap_to_grid(particles: &mut [Particle], grid: f64) {
    for particle in particles.iter_mut() {
        particle.position.x = (particle.position.x / grid).round() * grid;
        particle.position.y = (particle.position.y / grid).round() * grid;
    }
}

/// Translate all particles so the smallest x and y both equal `padding`
pub(crate) fn normalize(particles: &mut [Particle], padding: f64) {
    if particles.is_empty() {
        return;
    }

    let min_x = particles
        .iter()
        .map(|p| p.position.x)
        .fold(f64::INFINITY, f64::min);
    let min_y = particles
        .iter()
        .map(|p| p.position.y)
        .fold(f64::INFINITY, f64::min);

    for particle in particles.iter_mut() {
        particle.position.x = particle.position.x - min_x + padding;
        particle.position.y = particle.position.y - min_y + padding;
    }
}
