//! A piecewise cubic Hermite spline.

use kurbo::{Point, Vec2};
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::bezier_spline::BezierSpline;
use crate::error::Error;
use crate::hermite::HermiteCurve;
use crate::tolerance::Tolerance;
use crate::util::{self, MAX_INTERIOR_T};

/// An ordered sequence of cubic Hermite segments.
///
/// Parametrized like [`BezierSpline`]: segment `i` of `n` covers
/// `i / n ..= (i + 1) / n` of the global parameter.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub struct HermiteSpline {
    curves: Vec<HermiteCurve>,
}

impl HermiteSpline {
    /// Build a spline from groups of four Bézier-style control points.
    ///
    /// Each group becomes one segment through
    /// [`HermiteCurve::from_control_points`].
    pub fn new(ctrl_pts: &[Point]) -> Result<HermiteSpline, Error> {
        if ctrl_pts.len() % 4 != 0 {
            return Err(Error::ControlPointCount {
                multiple: 4,
                found: ctrl_pts.len(),
            });
        }
        let curves = ctrl_pts
            .chunks_exact(4)
            .map(|c| HermiteCurve::from_control_points([c[0], c[1], c[2], c[3]]))
            .collect();
        Ok(HermiteSpline { curves })
    }

    /// Build a spline from endpoint pairs and their tangent handles.
    ///
    /// Segment `k` runs from `points[2k]` to `points[2k + 1]` with tangents
    /// `tangents[2k]` and `tangents[2k + 1]`, in the handle convention of
    /// [`HermiteCurve`].
    pub fn with_tangents(points: &[Point], tangents: &[Vec2]) -> Result<HermiteSpline, Error> {
        if points.len() % 2 != 0 {
            return Err(Error::ControlPointCount {
                multiple: 2,
                found: points.len(),
            });
        }
        if points.len() != tangents.len() {
            return Err(Error::TangentCountMismatch {
                points: points.len(),
                tangents: tangents.len(),
            });
        }
        let curves = points
            .chunks_exact(2)
            .zip(tangents.chunks_exact(2))
            .map(|(p, n)| HermiteCurve::new(p[0], p[1], n[0], n[1]))
            .collect();
        Ok(HermiteSpline { curves })
    }

    pub fn from_curves(curves: Vec<HermiteCurve>) -> HermiteSpline {
        HermiteSpline { curves }
    }

    /// Convert a Bézier spline; the tangents are derived from each
    /// segment's inner control points.
    pub fn from_bezier_spline(spline: &BezierSpline) -> HermiteSpline {
        let curves = spline
            .curves()
            .iter()
            .map(|&b| HermiteCurve::from(b))
            .collect();
        HermiteSpline { curves }
    }

    pub fn curves(&self) -> &[HermiteCurve] {
        &self.curves
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn add_curve(&mut self, curve: HermiteCurve) {
        self.curves.push(curve);
    }

    pub fn remove_curve(&mut self, index: usize) -> Result<HermiteCurve, Error> {
        if index >= self.curves.len() {
            return Err(Error::SegmentOutOfRange {
                index,
                len: self.curves.len(),
            });
        }
        log::debug!("removing segment {} of {}", index, self.curves.len());
        Ok(self.curves.remove(index))
    }

    /// Move control point `index` of segment `segment`, addressed in the
    /// Bézier-style view returned by [`control_points`](Self::control_points).
    ///
    /// Moving an endpoint keeps its handle point in place, so the adjacent
    /// tangent is re-derived.
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
        let mut pts = curve.control_points();
        let slot = pts
            .get_mut(index)
            .ok_or(Error::ControlPointOutOfRange { index, len: 4 })?;
        log::trace!("segment {} control point {} -> {:?}", segment, index, p);
        *slot = p;
        *curve = HermiteCurve::from_control_points(pts);
        Ok(())
    }

    /// Bézier-style control points, four per segment.
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
            return self.curves.last().map(|c| c.p1);
        }
        if self.curves.is_empty() {
            return None;
        }
        let (i, u) = util::locate(t, self.curves.len());
        Some(self.curves[i].eval(u))
    }

    pub fn eval_first_derivative(&self, t: f64) -> Option<Vec2> {
        self.eval_interior(t, HermiteCurve::eval_first_derivative)
    }

    pub fn eval_second_derivative(&self, t: f64) -> Option<Vec2> {
        self.eval_interior(t, HermiteCurve::eval_second_derivative)
    }

    fn eval_interior(&self, t: f64, f: impl Fn(&HermiteCurve, f64) -> Vec2) -> Option<Vec2> {
        if self.curves.is_empty() {
            return None;
        }
        let t = t.max(0.0).min(MAX_INTERIOR_T);
        let (i, u) = util::locate(t, self.curves.len());
        Some(f(&self.curves[i], u))
    }

    pub fn is_c1_continuous(&self) -> bool {
        self.is_c1_continuous_within(Tolerance::default())
    }

    pub fn is_c1_continuous_within(&self, tol: Tolerance) -> bool {
        util::joints_match(&self.curves, tol, HermiteCurve::eval_first_derivative)
    }

    pub fn is_c2_continuous(&self) -> bool {
        self.is_c2_continuous_within(Tolerance::default())
    }

    pub fn is_c2_continuous_within(&self, tol: Tolerance) -> bool {
        util::joints_match(&self.curves, tol, HermiteCurve::eval_second_derivative)
    }
}

impl From<&BezierSpline> for HermiteSpline {
    fn from(spline: &BezierSpline) -> HermiteSpline {
        HermiteSpline::from_bezier_spline(spline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_points(rng: &mut StdRng, n: usize) -> Vec<Point> {
        (0..n)
            .map(|_| Point::new(rng.gen_range(-500.0..500.0), rng.gen_range(-500.0..500.0)))
            .collect()
    }

    #[test]
    fn bezier_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);
        for n_seg in 1..6 {
            let pts = random_points(&mut rng, 4 * n_seg);
            let bezier = BezierSpline::new(&pts).unwrap();
            let hermite = HermiteSpline::from(&bezier);
            assert_eq!(hermite.len(), n_seg);
            let back = BezierSpline::from(&hermite);
            for (a, b) in pts.iter().zip(back.control_points()) {
                assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
                assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
            }
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let (p, q) = (bezier.eval(t).unwrap(), hermite.eval(t).unwrap());
                assert_abs_diff_eq!(p.x, q.x, epsilon = 1e-9);
                assert_abs_diff_eq!(p.y, q.y, epsilon = 1e-9);
            }
        }
    }

    fn assert_near(a: Vec2, b: Vec2) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
    }

    #[test]
    fn derivatives_agree_with_bezier_spline() {
        let pts = [
            Point::new(0., 0.),
            Point::new(0., 100.),
            Point::new(100., 100.),
            Point::new(100., 0.),
            Point::new(100., 0.),
            Point::new(150., -80.),
            Point::new(220., 40.),
            Point::new(300., 0.),
        ];
        let hermite = HermiteSpline::new(&pts).unwrap();
        let bezier = BezierSpline::new(&pts).unwrap();
        for &t in &[0.0, 0.1, 0.25, 0.5, 0.6, 0.75, 0.9] {
            assert_near(
                hermite.eval_first_derivative(t).unwrap(),
                bezier.eval_first_derivative(t).unwrap(),
            );
            assert_near(
                hermite.eval_second_derivative(t).unwrap(),
                bezier.eval_second_derivative(t).unwrap(),
            );
        }
    }

    #[test]
    fn derivatives_clamp_to_end_segments() {
        let mut rng = StdRng::seed_from_u64(11);
        let spline = HermiteSpline::new(&random_points(&mut rng, 12)).unwrap();
        let (first, last) = (spline.curves()[0], spline.curves()[2]);
        for &t in &[1.0, 2.0] {
            assert_near(
                spline.eval_first_derivative(t).unwrap(),
                last.eval_first_derivative(1.0),
            );
            assert_near(
                spline.eval_second_derivative(t).unwrap(),
                last.eval_second_derivative(1.0),
            );
        }
        assert_eq!(
            spline.eval_first_derivative(-1.0),
            Some(first.eval_first_derivative(0.0))
        );
        assert_eq!(
            spline.eval_second_derivative(-1.0),
            Some(first.eval_second_derivative(0.0))
        );
    }

    #[test]
    fn tangent_pairs() {
        let points = [
            Point::new(0., 0.),
            Point::new(100., 0.),
            Point::new(100., 0.),
            Point::new(200., 50.),
        ];
        let tangents = [
            Vec2::new(0., 30.),
            Vec2::new(-20., 0.),
            Vec2::new(20., 0.),
            Vec2::new(0., -30.),
        ];
        let spline = HermiteSpline::with_tangents(&points, &tangents).unwrap();
        assert_eq!(spline.len(), 2);
        assert_eq!(spline.curves()[1].p0, Point::new(100., 0.));
        assert_eq!(spline.curves()[1].n1, Vec2::new(0., -30.));
        assert_eq!(spline.eval(0.0), Some(Point::new(0., 0.)));
        assert_eq!(spline.eval(0.5), Some(Point::new(100., 0.)));
        assert_eq!(spline.eval(1.0), Some(Point::new(200., 50.)));
        // Handles on both sides of the joint are opposite and equal.
        assert!(spline.is_c1_continuous());
    }

    #[test]
    fn tangent_pair_errors() {
        let points = [Point::ZERO; 3];
        assert_eq!(
            HermiteSpline::with_tangents(&points, &[Vec2::ZERO; 3]),
            Err(Error::ControlPointCount {
                multiple: 2,
                found: 3
            })
        );
        assert_eq!(
            HermiteSpline::with_tangents(&points[..2], &[Vec2::ZERO; 4]),
            Err(Error::TangentCountMismatch {
                points: 2,
                tangents: 4
            })
        );
        assert!(HermiteSpline::new(&points).is_err());
    }

    #[test]
    fn continuity_checks() {
        let line: Vec<Point> = (0..8).map(|i| Point::new(i as f64, 0.)).collect();
        // Segments 0..=3 and 4..=7 of a uniformly spaced line.
        let mut pts = line[..4].to_vec();
        pts.extend_from_slice(&line[3..7]);
        let spline = HermiteSpline::new(&pts).unwrap();
        assert!(spline.is_c1_continuous());
        assert!(spline.is_c2_continuous());

        let mut bent = spline.clone();
        bent.set_control_point(1, 1, Point::new(4., 1.)).unwrap();
        assert!(!bent.is_c1_continuous());
        assert!(!bent.is_c2_continuous());

        let single = HermiteSpline::new(&line[..4]).unwrap();
        assert!(single.is_c1_continuous());
        assert!(single.is_c2_continuous());
    }

    #[test]
    fn c2_tolerance_is_configurable() {
        let pts = [
            Point::new(0., 0.),
            Point::new(1., 1.),
            Point::new(2., 1.),
            Point::new(3., 0.),
            Point::new(3., 0.),
            Point::new(4., -1.),
            Point::new(5., -1.),
            Point::new(6., 0.),
        ];
        let spline = HermiteSpline::new(&pts).unwrap();
        assert!(spline.is_c1_continuous_within(Tolerance::EXACT));
        assert!(!spline.is_c2_continuous());
        assert!(spline.is_c2_continuous_within(Tolerance::new(2.5)));
    }

    #[test]
    fn editing_rederives_tangents() {
        let pts = [
            Point::new(0., 0.),
            Point::new(0., 10.),
            Point::new(10., 10.),
            Point::new(10., 0.),
        ];
        let mut spline = HermiteSpline::new(&pts).unwrap();
        spline.set_control_point(0, 0, Point::new(-5., 0.)).unwrap();
        let c = spline.curves()[0];
        assert_eq!(c.p0, Point::new(-5., 0.));
        assert_eq!(c.n0, Vec2::new(5., 10.));
        assert_eq!(spline.control_points()[1], Point::new(0., 10.));
        assert!(spline.set_control_point(1, 0, Point::ZERO).is_err());
        assert!(spline.set_control_point(0, 7, Point::ZERO).is_err());
    }

    #[test]
    fn add_and_remove() {
        let mut spline = HermiteSpline::default();
        assert_eq!(spline.eval(0.3), None);
        assert_eq!(spline.eval_second_derivative(0.3), None);
        let h = HermiteCurve::new(
            Point::ZERO,
            Point::new(1., 0.),
            Vec2::new(0.5, 0.),
            Vec2::new(-0.5, 0.),
        );
        spline.add_curve(h);
        spline.add_curve(h);
        assert_eq!(spline.len(), 2);
        assert_eq!(spline.remove_curve(1), Ok(h));
        assert_eq!(
            spline.remove_curve(1),
            Err(Error::SegmentOutOfRange { index: 1, len: 1 })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let pts = [
            Point::new(0., 0.),
            Point::new(0., 10.),
            Point::new(10., 10.),
            Point::new(10., 0.),
        ];
        let spline = HermiteSpline::new(&pts).unwrap();
        let json = serde_json::to_string(&spline).unwrap();
        let back: HermiteSpline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spline);
    }
}
