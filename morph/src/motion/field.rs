//! Noise fields used as a smooth pseudo-random perturbation source.

use noise::{NoiseFn, Simplex};
use std::fmt;

use crate::core::util::constrain;

/// A continuous, deterministic 2D noise function returning values in
/// `[-1, 1]`.
pub trait NoiseField {
    fn noise(&self, x: f64, y: f64) -> f64;

    /// Sample along the field's diagonal, i.e. `noise(offset, offset)`. This
    /// is how phase cursors are read: a single scalar per axis.
    fn diagonal(&self, offset: f64) -> f64 {
        self.noise(offset, offset)
    }
}

/// Seeded 2D simplex noise.
#[derive(Clone)]
pub struct SimplexField {
    seed: u32,
    simplex: Simplex,
}

impl SimplexField {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            simplex: Simplex::new(seed),
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl fmt::Debug for SimplexField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimplexField")
            .field("seed", &self.seed)
            .finish()
    }
}

impl NoiseField for SimplexField {
    fn noise(&self, x: f64, y: f64) -> f64 {
        // Simplex output may overshoot the unit range by a hair
        constrain::clamp(self.simplex.get([x, y]), -1.0, 1.0)
    }
}

impl<T: NoiseField + ?Sized> NoiseField for Box<T> {
    fn noise(&self, x: f64, y: f64) -> f64 {
        (**self).noise(x, y)
    }
}
