use super::field::NoiseField;
use crate::core::util::map_range;
use crate::runtime::config::DEFAULT_NOISE_STEP;

/// The hue cursor moves this many times slower than the point cursors
pub const HUE_RATE_DIVISOR: f64 = 6.0;

/// Speed and hue phase shared by the point wobble and the color cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    pub noise_step: f64,
    pub hue_noise_offset: f64,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(DEFAULT_NOISE_STEP)
    }
}

impl AnimationState {
    pub fn new(noise_step: f64) -> Self {
        Self {
            noise_step,
            hue_noise_offset: 0.0,
        }
    }

    /// Current hue in degrees, always within `[0, 360]`
    pub fn hue(&self, field: &impl NoiseField) -> f64 {
        let n = field.diagonal(self.hue_noise_offset);
        map_range(n, -1.0, 1.0, 0.0, 360.0)
    }

    pub fn advance_hue(&mut self) {
        self.hue_noise_offset += self.noise_step / HUE_RATE_DIVISOR;
    }

    pub fn jump_hue(&mut self, amount: f64) {
        self.hue_noise_offset += amount;
    }
}
