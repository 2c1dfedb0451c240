//! The cubic Bézier segment.

use kurbo::{CubicBez, Point, Vec2};
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::hermite::HermiteCurve;

/// A cubic Bézier curve defined by four control points.
///
/// `p0` and `p3` are the endpoints; `p1` and `p2` pull the curve towards
/// themselves but are not interpolated.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub struct BezierCurve {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl BezierCurve {
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> BezierCurve {
        BezierCurve { p0, p1, p2, p3 }
    }

    /// The control points in order.
    pub fn control_points(&self) -> [Point; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    /// Mutable access to control point `index` (0 to 3).
    pub(crate) fn control_point_mut(&mut self, index: usize) -> Option<&mut Point> {
        match index {
            0 => Some(&mut self.p0),
            1 => Some(&mut self.p1),
            2 => Some(&mut self.p2),
            3 => Some(&mut self.p3),
            _ => None,
        }
    }

    /// Evaluate the Bernstein polynomial at `u`.
    ///
    /// `u` is not clamped; values outside `0..=1` extrapolate the polynomial.
    pub fn eval(&self, u: f64) -> Point {
        let mu = 1.0 - u;
        let v = (mu * mu * mu) * self.p0.to_vec2()
            + (3.0 * u * mu * mu) * self.p1.to_vec2()
            + (3.0 * u * u * mu) * self.p2.to_vec2()
            + (u * u * u) * self.p3.to_vec2();
        v.to_point()
    }

    /// Evaluate the hodograph at `u`.
    pub fn eval_first_derivative(&self, u: f64) -> Vec2 {
        let mu = 1.0 - u;
        let d0 = self.p1 - self.p0;
        let d1 = self.p2 - self.p1;
        let d2 = self.p3 - self.p2;
        3.0 * ((mu * mu) * d0 + (2.0 * u * mu) * d1 + (u * u) * d2)
    }

    pub fn eval_second_derivative(&self, u: f64) -> Vec2 {
        let dd0 = (self.p2 - self.p1) - (self.p1 - self.p0);
        let dd1 = (self.p3 - self.p2) - (self.p2 - self.p1);
        6.0 * ((1.0 - u) * dd0 + u * dd1)
    }
}

impl From<[Point; 4]> for BezierCurve {
    fn from(pts: [Point; 4]) -> BezierCurve {
        BezierCurve::new(pts[0], pts[1], pts[2], pts[3])
    }
}

impl From<HermiteCurve> for BezierCurve {
    fn from(h: HermiteCurve) -> BezierCurve {
        BezierCurve::new(h.p0, h.p0 + h.n0, h.p1 + h.n1, h.p1)
    }
}

impl From<CubicBez> for BezierCurve {
    fn from(c: CubicBez) -> BezierCurve {
        BezierCurve::new(c.p0, c.p1, c.p2, c.p3)
    }
}

impl From<BezierCurve> for CubicBez {
    fn from(c: BezierCurve) -> CubicBez {
        CubicBez::new(c.p0, c.p1, c.p2, c.p3)
    }
}
