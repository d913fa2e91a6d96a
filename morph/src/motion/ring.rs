use rand::Rng;

use super::field::NoiseField;
use crate::core::util::{TWO_PI, map_range};

pub const NUM_POINTS: usize = 7;
pub const RADIUS: f64 = 85.0;
pub const CENTER: (f64, f64) = (100.0, 100.0);
/// Maximum distance a point may travel from its origin along either axis
pub const WOBBLE: f64 = 20.0;
/// Phase cursors start somewhere in `[0, PHASE_RANGE)`
pub const PHASE_RANGE: f64 = 1000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoint {
    pub x: f64,
    pub y: f64,
    pub origin_x: f64,
    pub origin_y: f64,
    pub noise_offset_x: f64,
    pub noise_offset_y: f64,
}

impl ControlPoint {
    pub fn new(
        x: f64,
        y: f64,
        noise_offset_x: f64,
        noise_offset_y: f64,
    ) -> Self {
        Self {
            x,
            y,
            origin_x: x,
            origin_y: y,
            noise_offset_x,
            noise_offset_y,
        }
    }

    pub fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Move the point to where the noise field places it for the current
    /// phase cursors, then advance both cursors by `step`.
    pub fn perturb(&mut self, field: &impl NoiseField, step: f64) {
        let nx = field.diagonal(self.noise_offset_x);
        let ny = field.diagonal(self.noise_offset_y);

        self.x = map_range(
            nx,
            -1.0,
            1.0,
            self.origin_x - WOBBLE,
            self.origin_x + WOBBLE,
        );
        self.y = map_range(
            ny,
            -1.0,
            1.0,
            self.origin_y - WOBBLE,
            self.origin_y + WOBBLE,
        );

        self.noise_offset_x += step;
        self.noise_offset_y += step;
    }

    pub fn within_wobble(&self) -> bool {
        (self.x - self.origin_x).abs() <= WOBBLE
            && (self.y - self.origin_y).abs() <= WOBBLE
    }
}

/// The fixed, ordered ring of control points the blob outline is fit
/// through. Points are never added, removed or reordered after creation.
#[derive(Clone, Debug)]
pub struct PointRing {
    points: [ControlPoint; NUM_POINTS],
}

impl PointRing {
    /// Points are evenly spaced on the circle starting one step past angle 0,
    /// each with independent random phases for x and y.
    pub fn new(rng: &mut impl Rng) -> Self {
        let angle_step = TWO_PI / NUM_POINTS as f64;

        let points = std::array::from_fn(|i| {
            let theta = (i + 1) as f64 * angle_step;
            let x = CENTER.0 + theta.cos() * RADIUS;
            let y = CENTER.1 + theta.sin() * RADIUS;

            ControlPoint::new(
                x,
                y,
                rng.random_range(0.0..PHASE_RANGE),
                rng.random_range(0.0..PHASE_RANGE),
            )
        });

        Self { points }
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn positions(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(ControlPoint::xy).collect()
    }

    pub fn perturb(&mut self, field: &impl NoiseField, step: f64) {
        for point in &mut self.points {
            point.perturb(field, step);
        }
    }
}
