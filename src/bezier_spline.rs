//! A piecewise cubic Bézier spline.

use kurbo::{BezPath, Point, Vec2};
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::bezier::BezierCurve;
use crate::error::Error;
use crate::hermite_spline::HermiteSpline;
use crate::tolerance::Tolerance;
use crate::util::{self, MAX_INTERIOR_T};

/// An ordered sequence of cubic Bézier segments.
///
/// The global parameter `t` runs from 0 to 1 over the whole spline, with
/// segment `i` of `n` covering `i / n ..= (i + 1) / n`. Segments do not
/// share control points, so continuity is not enforced; it can be queried
/// with [`is_c1_continuous`](BezierSpline::is_c1_continuous).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub struct BezierSpline {
    curves: Vec<BezierCurve>,
}

impl BezierSpline {
    /// Build a spline from groups of four control points.
    ///
    /// The number of points must be a multiple of 4; an empty slice gives an
    /// empty spline.
    pub fn new(ctrl_pts: &[Point]) -> Result<BezierSpline, Error> {
        if ctrl_pts.len() % 4 != 0 {
            return Err(Error::ControlPointCount {
                multiple: 4,
                found: ctrl_pts.len(),
            });
        }
        let curves = ctrl_pts
            .chunks_exact(4)
            .map(|c| BezierCurve::new(c[0], c[1], c[2], c[3]))
            .collect();
        Ok(BezierSpline { curves })
    }

    pub fn from_curves(curves: Vec<BezierCurve>) -> BezierSpline {
        BezierSpline { curves }
    }

    /// Convert a Hermite spline, segment by segment.
    ///
    /// Both representations describe the same cubics, so this is exact.
    pub fn from_hermite_spline(spline: &HermiteSpline) -> BezierSpline {
        let curves = spline
            .curves()
            .iter()
            .map(|&h| BezierCurve::from(h))
            .collect();
        BezierSpline { curves }
    }

    /// Read a B-spline style control polygon as joined Bézier segments.
    ///
    /// Segment `k` uses points `3k ..= 3k + 3`, so consecutive segments
    /// share their joint point. This is a geometric reading of the polygon,
    /// not a change of basis; see [`BSpline::to_bezier_spline`] for that.
    ///
    /// At least 4 points are required. Points left over after the last
    /// complete segment are dropped and reported with a warning.
    ///
    /// [`BSpline::to_bezier_spline`]: crate::BSpline::to_bezier_spline
    pub fn from_bspline_points(ctrl_pts: &[Point]) -> Result<BezierSpline, Error> {
        if ctrl_pts.len() < 4 {
            return Err(Error::TooFewControlPoints {
                min: 4,
                found: ctrl_pts.len(),
            });
        }
        let n_seg = (ctrl_pts.len() - 1) / 3;
        let used = 3 * n_seg + 1;
        if used < ctrl_pts.len() {
            log::warn!(
                "dropping {} trailing control points that do not complete a segment",
                ctrl_pts.len() - used
            );
        }
        let curves = (0..n_seg)
            .map(|k| {
                let c = &ctrl_pts[3 * k..3 * k + 4];
                BezierCurve::new(c[0], c[1], c[2], c[3])
            })
            .collect();
        Ok(BezierSpline { curves })
    }

    pub fn curves(&self) -> &[BezierCurve] {
        &self.curves
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn add_curve(&mut self, curve: BezierCurve) {
        self.curves.push(curve);
    }

    /// Remove and return the segment at `index`.
    pub fn remove_curve(&mut self, index: usize) -> Result<BezierCurve, Error> {
        if index >= self.curves.len() {
            return Err(Error::SegmentOutOfRange {
                index,
                len: self.curves.len(),
            });
        }
        log::debug!("removing segment {} of {}", index, self.curves.len());
        Ok(self.curves.remove(index))
    }

    /// Move control point `index` (0 to 3) of segment `segment`.
    ///
    /// Only that segment changes; a shared joint must be moved in both
    /// neighbouring segments by the caller.
    pub fn set_control_point(
        &mut self,
        segment: usize,
        index: usize,
        p: Point,
    ) -> Result<(), Error> {
        let len = self.curves.len();
        let curve = self
            .curves
            .get_mut(segment)
            .ok_or(Error::SegmentOutOfRange { index: segment, len })?;
        let slot = curve
            .control_point_mut(index)
            .ok_or(Error::ControlPointOutOfRange { index, len: 4 })?;
        log::trace!("segment {} control point {} -> {:?}", segment, index, p);
        *slot = p;
        Ok(())
    }

    /// All control points, four per segment.
    pub fn control_points(&self) -> Vec<Point> {
        self.curves.iter().flat_map(|c| c.control_points()).collect()
    }

    /// Evaluate the position at global parameter `t`.
    ///
    /// Returns `None` if the spline has no segments.
    pub fn eval(&self, t: f64) -> Option<Point> {
        if t <= 0.0 {
            return self.curves.first().map(|c| c.p0);
        }
        if t >= MAX_INTERIOR_T {
            return self.curves.last().map(|c| c.p3);
        }
        if self.curves.is_empty() {
            return None;
        }
        let (i, u) = util::locate(t, self.curves.len());
        Some(self.curves[i].eval(u))
    }

    /// Evaluate the first derivative with respect to the local parameter.
    ///
    /// `t` is clamped so that it always falls strictly inside a segment.
    pub fn eval_first_derivative(&self, t: f64) -> Option<Vec2> {
        self.eval_interior(t, BezierCurve::eval_first_derivative)
    }

    pub fn eval_second_derivative(&self, t: f64) -> Option<Vec2> {
        self.eval_interior(t, BezierCurve::eval_second_derivative)
    }

    fn eval_interior(&self, t: f64, f: impl Fn(&BezierCurve, f64) -> Vec2) -> Option<Vec2> {
        if self.curves.is_empty() {
            return None;
        }
        let t = t.max(0.0).min(MAX_INTERIOR_T);
        let (i, u) = util::locate(t, self.curves.len());
        Some(f(&self.curves[i], u))
    }

    /// Whether first derivatives agree at every joint, within the default
    /// [`Tolerance`].
    pub fn is_c1_continuous(&self) -> bool {
        self.is_c1_continuous_within(Tolerance::default())
    }

    pub fn is_c1_continuous_within(&self, tol: Tolerance) -> bool {
        util::joints_match(&self.curves, tol, BezierCurve::eval_first_derivative)
    }

    pub fn is_c2_continuous(&self) -> bool {
        self.is_c2_continuous_within(Tolerance::default())
    }

    pub fn is_c2_continuous_within(&self, tol: Tolerance) -> bool {
        util::joints_match(&self.curves, tol, BezierCurve::eval_second_derivative)
    }

    /// Render the spline to a Bézier path.
    ///
    /// A new subpath is started whenever a segment does not begin where the
    /// previous one ended.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut last: Option<Point> = None;
        for c in &self.curves {
            if last != Some(c.p0) {
                path.move_to(c.p0);
            }
            path.curve_to(c.p1, c.p2, c.p3);
            last = Some(c.p3);
        }
        path
    }
}

impl From<&HermiteSpline> for BezierSpline {
    fn from(spline: &HermiteSpline) -> BezierSpline {
        BezierSpline::from_hermite_spline(spline)
    }
}
