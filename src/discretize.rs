//! Sampling curves into polylines.

use kurbo::{Point, Vec2};

use crate::bezier::BezierCurve;
use crate::bezier_spline::BezierSpline;
use crate::bspline::BSpline;
use crate::error::Error;
use crate::hermite::HermiteCurve;
use crate::hermite_spline::HermiteSpline;

/// A curve that can be evaluated over the unit parameter interval.
pub trait Sample {
    /// The point at parameter `t`, or `None` if there is nothing to
    /// evaluate (an empty spline).
    fn sample(&self, t: f64) -> Option<Point>;
}

impl Sample for BezierCurve {
    fn sample(&self, t: f64) -> Option<Point> {
        Some(self.eval(t))
    }
}

impl Sample for HermiteCurve {
    fn sample(&self, t: f64) -> Option<Point> {
        Some(self.eval(t))
    }
}

impl Sample for BezierSpline {
    fn sample(&self, t: f64) -> Option<Point> {
        self.eval(t)
    }
}

impl Sample for HermiteSpline {
    fn sample(&self, t: f64) -> Option<Point> {
        self.eval(t)
    }
}

impl Sample for BSpline {
    fn sample(&self, t: f64) -> Option<Point> {
        Some(self.eval(t))
    }
}

/// Sample `nb_pts` points at evenly spaced parameters from 0 to 1.
///
/// The spacing is uniform in the parameter, not in arclength.
pub fn linear<C: Sample + ?Sized>(curve: &C, nb_pts: usize) -> Result<Vec<Point>, Error> {
    if nb_pts < 2 {
        return Err(Error::TooFewSamples(nb_pts));
    }
    let last = (nb_pts - 1) as f64;
    (0..nb_pts)
        .map(|i| {
            let t = (i as f64 / last).min(1.0);
            curve.sample(t).ok_or(Error::EmptySpline)
        })
        .collect()
}

/// Unit normals along a polyline.
///
/// The tangent at each vertex is the central difference of its neighbours
/// (one-sided at the ends), and the normal is that tangent turned a quarter
/// turn counter-clockwise. Vertices with no usable tangent get a zero normal.
pub fn normals(polyline: &[Point]) -> Vec<Vec2> {
    let n = polyline.len();
    (0..n)
        .map(|i| {
            if n < 2 {
                return Vec2::ZERO;
            }
            let prev = polyline[i.saturating_sub(1)];
            let next = polyline[(i + 1).min(n - 1)];
            let tangent = next - prev;
            let len = tangent.hypot();
            if len < f64::EPSILON {
                Vec2::ZERO
            } else {
                Vec2::new(-tangent.y, tangent.x) / len
            }
        })
        .collect()
}
