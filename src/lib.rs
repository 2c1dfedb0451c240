//! Cubic curves in 2D.
//!
//! This crate represents, evaluates and converts between three families of
//! parametric cubics:
//!
//! - [`BezierCurve`] segments, joined into a [`BezierSpline`],
//! - [`HermiteCurve`] segments, joined into a [`HermiteSpline`],
//! - clamped uniform cubic [`BSpline`]s.
//!
//! Splines are parametrized over `0..=1` with every segment covering an
//! equal share of the interval. Any of these can be sampled into a polyline
//! with [`discretize::linear`].
//!
//! ```
//! use cubic2d::{discretize, BezierSpline, HermiteSpline};
//! use kurbo::Point;
//!
//! let spline = BezierSpline::new(&[
//!     Point::new(0., 0.),
//!     Point::new(0., 100.),
//!     Point::new(100., 100.),
//!     Point::new(100., 0.),
//! ])
//! .unwrap();
//! assert_eq!(spline.eval(0.5), Some(Point::new(50., 75.)));
//!
//! let hermite = HermiteSpline::from(&spline);
//! let polyline = discretize::linear(&hermite, 32).unwrap();
//! assert_eq!(polyline.len(), 32);
//! ```

mod bezier;
mod bezier_spline;
mod bspline;
pub mod discretize;
mod error;
mod hermite;
mod hermite_spline;
mod tolerance;
mod util;

pub use bezier::BezierCurve;
pub use bezier_spline::BezierSpline;
pub use bspline::{clamped_knots, BSpline, DEGREE};
pub use discretize::Sample;
pub use error::Error;
pub use hermite::HermiteCurve;
pub use hermite_spline::HermiteSpline;
pub use tolerance::Tolerance;
