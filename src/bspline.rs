//! Clamped uniform cubic B-splines.

use kurbo::{BezPath, Point, Vec2};
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::bezier::BezierCurve;
use crate::bezier_spline::BezierSpline;
use crate::error::Error;
use crate::util::MAX_INTERIOR_T;

/// Polynomial degree of every B-spline in this crate.
pub const DEGREE: usize = 3;

/// A cubic B-spline over a clamped uniform knot vector.
///
/// The curve interpolates its first and last control point and is C²
/// everywhere in between. The knot vector is derived from the number of
/// control points and is never stored independently of them, so only the
/// control points are serialized.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", try_from = "Vec<Point>", into = "Vec<Point>")
)]
pub struct BSpline {
    control_points: Vec<Point>,
    knots: Vec<f64>,
}

/// Compute the clamped uniform knot vector for `nb_ctrl_pts` control points.
///
/// The vector has `nb_ctrl_pts + 4` entries: four zeros, then the interior
/// knots spaced evenly over `(0, 1)`, then four ones.
pub fn clamped_knots(nb_ctrl_pts: usize) -> Vec<f64> {
    debug_assert!(nb_ctrl_pts > DEGREE);
    let spans = (nb_ctrl_pts - DEGREE) as f64;
    (0..nb_ctrl_pts + DEGREE + 1)
        .map(|i| ((i as f64 - DEGREE as f64) / spans).max(0.0).min(1.0))
        .collect()
}

/// Cox–de Boor recursion for `N_{i,degree}(t)`.
///
/// Terms over knot spans shorter than machine epsilon contribute nothing.
fn basis(knots: &[f64], i: usize, degree: usize, t: f64) -> f64 {
    if degree == 0 {
        return if knots[i] <= t && t < knots[i + 1] { 1.0 } else { 0.0 };
    }
    let mut n = 0.0;
    let d0 = knots[i + degree] - knots[i];
    if d0 >= f64::EPSILON {
        n += basis(knots, i, degree - 1, t) * (t - knots[i]) / d0;
    }
    let d1 = knots[i + degree + 1] - knots[i + 1];
    if d1 >= f64::EPSILON {
        n += basis(knots, i + 1, degree - 1, t) * (knots[i + degree + 1] - t) / d1;
    }
    n
}

impl BSpline {
    /// Create a B-spline from at least 4 control points.
    pub fn new(control_points: Vec<Point>) -> Result<BSpline, Error> {
        if control_points.len() <= DEGREE {
            return Err(Error::TooFewControlPoints {
                min: DEGREE + 1,
                found: control_points.len(),
            });
        }
        let knots = clamped_knots(control_points.len());
        Ok(BSpline {
            control_points,
            knots,
        })
    }

    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Move a control point. The knot vector is unaffected.
    pub fn set_control_point(&mut self, index: usize, p: Point) -> Result<(), Error> {
        let len = self.control_points.len();
        let slot = self
            .control_points
            .get_mut(index)
            .ok_or(Error::ControlPointOutOfRange { index, len })?;
        log::trace!("control point {} -> {:?}", index, p);
        *slot = p;
        Ok(())
    }

    /// Evaluate the position at `t`.
    ///
    /// Parameters at or beyond the ends snap to the first and last control
    /// point.
    pub fn eval(&self, t: f64) -> Point {
        if t <= 0.0 {
            return self.control_points[0];
        }
        if t >= MAX_INTERIOR_T {
            return self.control_points[self.control_points.len() - 1];
        }
        self.control_points
            .iter()
            .enumerate()
            .fold(Vec2::ZERO, |acc, (i, p)| {
                acc + basis(&self.knots, i, DEGREE, t) * p.to_vec2()
            })
            .to_point()
    }

    /// Control polygon of the first derivative curve.
    fn first_difference(&self) -> Vec<Vec2> {
        self.control_points
            .windows(2)
            .enumerate()
            .map(|(i, w)| {
                let span = self.knots[i + DEGREE + 1] - self.knots[i + 1];
                if span < f64::EPSILON {
                    Vec2::ZERO
                } else {
                    (DEGREE as f64 / span) * (w[1] - w[0])
                }
            })
            .collect()
    }

    /// Control polygon of the second derivative curve.
    fn second_difference(&self) -> Vec<Vec2> {
        self.first_difference()
            .windows(2)
            .enumerate()
            .map(|(i, w)| {
                let span = self.knots[i + DEGREE + 1] - self.knots[i + 2];
                if span < f64::EPSILON {
                    Vec2::ZERO
                } else {
                    ((DEGREE - 1) as f64 / span) * (w[1] - w[0])
                }
            })
            .collect()
    }

    /// The derivative of [`eval`](Self::eval) with respect to `t`.
    ///
    /// This includes the knot-spacing factor, so a 4-point spline has the
    /// velocity `3 (P1 - P0)` at `t = 0`, like the equivalent Bézier curve.
    pub fn eval_first_derivative(&self, t: f64) -> Vec2 {
        let t = t.max(0.0).min(MAX_INTERIOR_T);
        self.first_difference()
            .iter()
            .enumerate()
            .fold(Vec2::ZERO, |acc, (i, &q)| {
                acc + basis(&self.knots, i + 1, DEGREE - 1, t) * q
            })
    }

    /// The second derivative of [`eval`](Self::eval) with respect to `t`.
    pub fn eval_second_derivative(&self, t: f64) -> Vec2 {
        let t = t.max(0.0).min(MAX_INTERIOR_T);
        self.second_difference()
            .iter()
            .enumerate()
            .fold(Vec2::ZERO, |acc, (i, &r)| {
                acc + basis(&self.knots, i + 2, DEGREE - 2, t) * r
            })
    }

    /// Evaluate the blossom of the span starting at knot `span`.
    ///
    /// This is de Boor's algorithm with a separate argument per level.
    fn blossom(&self, span: usize, args: [f64; DEGREE]) -> Point {
        let base = span - DEGREE;
        let mut d = [Vec2::ZERO; DEGREE + 1];
        for (j, slot) in d.iter_mut().enumerate() {
            *slot = self.control_points[base + j].to_vec2();
        }
        for r in 1..=DEGREE {
            let x = args[r - 1];
            for j in (r..=DEGREE).rev() {
                let i = base + j;
                let denom = self.knots[i + DEGREE + 1 - r] - self.knots[i];
                let alpha = if denom < f64::EPSILON {
                    0.0
                } else {
                    (x - self.knots[i]) / denom
                };
                d[j] = d[j - 1].lerp(d[j], alpha);
            }
        }
        d[DEGREE].to_point()
    }

    /// Convert to an equivalent piecewise Bézier spline.
    ///
    /// Each knot span becomes one segment, and since the spans are uniform
    /// the global parameter is preserved.
    pub fn to_bezier_spline(&self) -> BezierSpline {
        let m = self.control_points.len();
        log::debug!("converting {} control points to {} Bézier segments", m, m - DEGREE);
        let mut curves = Vec::with_capacity(m - DEGREE);
        // Joints are shared between neighbouring segments, not recomputed.
        let mut p0 = self.control_points[0];
        for k in DEGREE..m {
            let (a, b) = (self.knots[k], self.knots[k + 1]);
            debug_assert!(a < b);
            let p3 = if k == m - 1 {
                self.control_points[m - 1]
            } else {
                self.blossom(k, [b, b, b])
            };
            curves.push(BezierCurve::new(
                p0,
                self.blossom(k, [a, a, b]),
                self.blossom(k, [a, b, b]),
                p3,
            ));
            p0 = p3;
        }
        BezierSpline::from_curves(curves)
    }

    /// Render the curve exactly as a Bézier path.
    pub fn to_bez_path(&self) -> BezPath {
        self.to_bezier_spline().to_bez_path()
    }
}

impl TryFrom<Vec<Point>> for BSpline {
    type Error = Error;

    fn try_from(control_points: Vec<Point>) -> Result<BSpline, Error> {
        BSpline::new(control_points)
    }
}

impl From<BSpline> for Vec<Point> {
    fn from(spline: BSpline) -> Vec<Point> {
        spline.control_points
    }
}
