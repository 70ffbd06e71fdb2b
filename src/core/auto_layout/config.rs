use crate::core::error::{LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};

/// Tuning constants for the layout pipeline
///
/// These are the levers for the "feel" of a diagram: raise `repulsion_strength`
/// or `min_distance` for a looser spread, raise `attraction_strength` or lower
/// `ideal_edge_length` to pull related tables into tighter clusters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Numerator of the inverse-square repulsion between every pair of nodes
    pub repulsion_strength: f64,
    /// Spring factor applied to the stretch beyond `ideal_edge_length`
    pub attraction_strength: f64,
    /// Minimum comfortable spacing between nodes
    pub min_distance: f64,
    /// Repulsion is skipped for pairs farther than `min_distance * repulsion_cutoff_factor`
    pub repulsion_cutoff_factor: f64,
    /// Pull toward the initial centroid
    pub center_strength: f64,
    /// Velocity retained after each step
    pub damping: f64,
    /// Number of simulation steps
    pub iterations: usize,
    /// Target separation of connected nodes
    pub ideal_edge_length: f64,
    /// Added to squared distances so coincident nodes never divide by zero
    pub epsilon: f64,
    /// Size of the seeding grid cells
    pub base_spacing: f64,
    /// Origin of the seeding grid
    pub start_x: f64,
    pub start_y: f64,
    /// Maximum seed offset in each axis
    pub jitter: f64,
    /// Final coordinates are rounded to multiples of this
    pub grid_spacing: f64,
    /// Smallest coordinate after normalization
    pub padding: f64,
    /// Bezier control offset as a share of anchor distance
    pub control_offset_ratio: f64,
    pub control_offset_min: f64,
    pub control_offset_max: f64,
    /// Number of straight segments per routed edge
    pub curve_segments: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            repulsion_strength: 80000.0,
            attraction_strength: 0.03,
            min_distance: 320.0,
            repulsion_cutoff_factor: 3.0,
            center_strength: 0.005,
            damping: 0.9,
            iterations: 400,
            ideal_edge_length: 300.0,
            epsilon: 0.01,
            base_spacing: 350.0,
            start_x: 100.0,
            start_y: 100.0,
            jitter: 30.0,
            grid_spacing: 40.0,
            padding: 80.0,
            control_offset_ratio: 0.3,
            control_offset_min: 40.0,
            control_offset_max: 120.0,
            curve_segments: 20,
        }
    }
}

impl LayoutConfig {
    /// Distance beyond which two nodes no longer repel each other
    pub fn repulsion_cutoff(&self) -> f64 {
        self.min_distance * self.repulsion_cutoff_factor
    }

    /// Check that every constant is finite and inside its usable range
    pub fn validate(&self) -> LayoutResult<()> {
        let finite = [
            ("repulsion_strength", self.repulsion_strength),
            ("attraction_strength", self.attraction_strength),
            ("min_distance", self.min_distance),
            ("repulsion_cutoff_factor", self.repulsion_cutoff_factor),
            ("center_strength", self.center_strength),
            ("damping", self.damping),
            ("ideal_edge_length", self.ideal_edge_length),
            ("epsilon", self.epsilon),
            ("base_spacing", self.base_spacing),
            ("start_x", self.start_x),
            ("start_y", self.start_y),
            ("jitter", self.jitter),
            ("grid_spacing", self.grid_spacing),
            ("padding", self.padding),
            ("control_offset_ratio", self.control_offset_ratio),
            ("control_offset_min", self.control_offset_min),
            ("control_offset_max", self.control_offset_max),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(LayoutError::InvalidConfig(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }

        let non_negative = [
            ("repulsion_strength", self.repulsion_strength),
            ("attraction_strength", self.attraction_strength),
            ("min_distance", self.min_distance),
            ("repulsion_cutoff_factor", self.repulsion_cutoff_factor),
            ("center_strength", self.center_strength),
            ("ideal_edge_length", self.ideal_edge_length),
            ("base_spacing", self.base_spacing),
            ("jitter", self.jitter),
            ("padding", self.padding),
            ("control_offset_ratio", self.control_offset_ratio),
            ("control_offset_min", self.control_offset_min),
        ];
        if let Some((name, value)) = non_negative.iter().find(|(_, v)| *v < 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "{} must not be negative, got {}",
                name, value
            )));
        }

        if self.epsilon <= 0.0 {
            return Err(LayoutError::InvalidConfig(
                "epsilon must be positive".to_string(),
            ));
        }
        if self.damping <= 0.0 || self.damping > 1.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "damping must be in (0, 1], got {}",
                self.damping
            )));
        }
        if self.grid_spacing <= 0.0 {
            return Err(LayoutError::InvalidConfig(
                "grid_spacing must be positive".to_string(),
            ));
        }
        // Normalization shifts by `padding`, so it must keep grid alignment
        if (self.padding / self.grid_spacing).fract() != 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "padding ({}) must be a multiple of grid_spacing ({})",
                self.padding, self.grid_spacing
            )));
        }
        if self.control_offset_min > self.control_offset_max {
            return Err(LayoutError::InvalidConfig(format!(
                "control_offset_min ({}) exceeds control_offset_max ({})",
                self.control_offset_min, self.control_offset_max
            )));
        }
        if self.curve_segments == 0 {
            return Err(LayoutError::InvalidConfig(
                "curve_segments must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
