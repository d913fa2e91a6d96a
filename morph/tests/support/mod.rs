use std::cell::Cell;

use morph::motion::NoiseField;

#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        assert!(
            ($a - $b).abs() < 0.001,
            "Values not approximately equal: {} and {}, difference: {}",
            $a,
            $b,
            ($a - $b).abs()
        );
    };
}

/// Replays a fixed sequence of samples, cycling when exhausted
pub struct ScriptedNoise {
    values: Vec<f64>,
    cursor: Cell<usize>,
}

impl ScriptedNoise {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            cursor: Cell::new(0),
        }
    }
}

impl NoiseField for ScriptedNoise {
    fn noise(&self, _x: f64, _y: f64) -> f64 {
        let i = self.cursor.get();
        self.cursor.set(i + 1);
        self.values[i % self.values.len()]
    }
}
