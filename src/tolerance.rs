//! Tolerances for comparing derivatives across segment joints.

use kurbo::Vec2;
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

/// How closely two vectors must agree to be considered equal.
///
/// The comparison is relative: two vectors match when the length of their
/// difference is at most `epsilon` times the length of the longer one (or
/// `epsilon` itself for vectors shorter than 1). An epsilon of zero demands
/// bitwise-equal components; negative and NaN epsilons are treated as zero.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub struct Tolerance {
    epsilon: f64,
}

impl Tolerance {
    /// Exact comparison.
    pub const EXACT: Tolerance = Tolerance { epsilon: 0.0 };

    /// A relative tolerance of `epsilon`, clamped to be non-negative.
    pub fn new(epsilon: f64) -> Tolerance {
        let epsilon = if epsilon > 0.0 { epsilon } else { 0.0 };
        Tolerance { epsilon }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Whether `a` and `b` agree within this tolerance.
    pub fn vectors_match(&self, a: Vec2, b: Vec2) -> bool {
        // Also covers a negative or NaN epsilon read from serialized data.
        if self.epsilon.is_nan() || self.epsilon <= 0.0 {
            return a == b;
        }
        let scale = a.hypot().max(b.hypot()).max(1.0);
        (a - b).hypot() <= self.epsilon * scale
    }
}

impl Default for Tolerance {
    fn default() -> Tolerance {
        Tolerance { epsilon: 1e-9 }
    }
}
