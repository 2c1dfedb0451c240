//! The cubic Hermite segment.

use kurbo::{Point, Vec2};
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::bezier::BezierCurve;

/// A cubic Hermite curve defined by its endpoints and tangent handles.
///
/// The tangents are stored as handle offsets, the way they appear on a
/// Bézier control polygon: `n0` points from `p0` towards the first inner
/// control point and `n1` points from `p1` towards the second. The velocity
/// of the curve is therefore `3 * n0` at the start and `-3 * n1` at the end,
/// which makes conversion to and from [`BezierCurve`] exact.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub struct HermiteCurve {
    pub p0: Point,
    pub p1: Point,
    pub n0: Vec2,
    pub n1: Vec2,
}

impl HermiteCurve {
    pub fn new(p0: Point, p1: Point, n0: Vec2, n1: Vec2) -> HermiteCurve {
        HermiteCurve { p0, p1, n0, n1 }
    }

    /// Build from four Bézier-style control points.
    ///
    /// The endpoints are the first and last point; the tangents are derived
    /// from the inner points.
    pub fn from_control_points(pts: [Point; 4]) -> HermiteCurve {
        HermiteCurve {
            p0: pts[0],
            p1: pts[3],
            n0: pts[1] - pts[0],
            n1: pts[2] - pts[3],
        }
    }

    /// The equivalent Bézier control points.
    pub fn control_points(&self) -> [Point; 4] {
        [self.p0, self.p0 + self.n0, self.p1 + self.n1, self.p1]
    }

    /// Velocity at the start, `3 * n0`.
    fn m0(&self) -> Vec2 {
        3.0 * self.n0
    }

    /// Velocity at the end, `-3 * n1`.
    fn m1(&self) -> Vec2 {
        -3.0 * self.n1
    }

    pub fn eval(&self, u: f64) -> Point {
        let u2 = u * u;
        let u3 = u2 * u;
        let h00 = 2.0 * u3 - 3.0 * u2 + 1.0;
        let h10 = u3 - 2.0 * u2 + u;
        let h01 = -2.0 * u3 + 3.0 * u2;
        let h11 = u3 - u2;
        let v = h00 * self.p0.to_vec2()
            + h10 * self.m0()
            + h01 * self.p1.to_vec2()
            + h11 * self.m1();
        v.to_point()
    }

    pub fn eval_first_derivative(&self, u: f64) -> Vec2 {
        let u2 = u * u;
        let h00 = 6.0 * u2 - 6.0 * u;
        let h10 = 3.0 * u2 - 4.0 * u + 1.0;
        let h01 = -6.0 * u2 + 6.0 * u;
        let h11 = 3.0 * u2 - 2.0 * u;
        h00 * self.p0.to_vec2() + h10 * self.m0() + h01 * self.p1.to_vec2() + h11 * self.m1()
    }

    pub fn eval_second_derivative(&self, u: f64) -> Vec2 {
        let h00 = 12.0 * u - 6.0;
        let h10 = 6.0 * u - 4.0;
        let h01 = -12.0 * u + 6.0;
        let h11 = 6.0 * u - 2.0;
        h00 * self.p0.to_vec2() + h10 * self.m0() + h01 * self.p1.to_vec2() + h11 * self.m1()
    }
}

impl From<BezierCurve> for HermiteCurve {
    fn from(b: BezierCurve) -> HermiteCurve {
        HermiteCurve::from_control_points(b.control_points())
    }
}
