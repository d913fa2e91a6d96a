use std::fmt;

use crate::core::util::{constrain, lerp};

/// Degrees between the gradient's start and stop hue
pub const HUE_SPREAD: f64 = 100.0;
pub const SATURATION: f64 = 100.0;
pub const LIGHTNESS: f64 = 75.0;

/// A color in the HSL model with CSS units: hue in degrees (unbounded, wraps
/// on conversion), saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Hue normalized into `[0, 360)`
    pub fn wrapped_hue(&self) -> f64 {
        constrain::wrap(self.hue, 0.0, 360.0)
    }

    /// Convert to sRGB components in `[0, 1]`
    pub fn to_rgb(&self) -> [f32; 3] {
        let s = constrain::clamp(self.saturation / 100.0, 0.0, 1.0);
        let l = constrain::clamp(self.lightness / 100.0, 0.0, 1.0);
        let h = self.wrapped_hue() / 60.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        [(r + m) as f32, (g + m) as f32, (b + m) as f32]
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// The two ends of the blob's fill gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient {
    pub start: Hsl,
    pub stop: Hsl,
}

impl Gradient {
    pub fn from_hue(hue: f64) -> Self {
        Self {
            start: Hsl::new(hue, SATURATION, LIGHTNESS),
            stop: Hsl::new(hue + HUE_SPREAD, SATURATION, LIGHTNESS),
        }
    }

    /// RGB color at `t` along the gradient, interpolated in sRGB space the
    /// way browsers interpolate gradient stops.
    pub fn rgb_at(&self, t: f64) -> [f32; 3] {
        let t = constrain::clamp(t, 0.0, 1.0);
        let a = self.start.to_rgb();
        let b = self.stop.to_rgb();
        std::array::from_fn(|i| lerp(a[i] as f64, b[i] as f64, t) as f32)
    }
}
