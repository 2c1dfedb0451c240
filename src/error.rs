//! Errors reported when building or sampling curves.

use thiserror::Error;

/// Errors returned by the fallible constructors and operations of this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The number of control points is not a multiple of the segment size.
    #[error("expected a multiple of {multiple} control points, found {found}")]
    ControlPointCount { multiple: usize, found: usize },

    /// Not enough control points for the requested curve.
    #[error("need at least {min} control points, found {found}")]
    TooFewControlPoints { min: usize, found: usize },

    /// Points and tangents must come in pairs.
    #[error("found {tangents} tangents for {points} points")]
    TangentCountMismatch { points: usize, tangents: usize },

    /// A polyline needs at least both endpoints.
    #[error("discretization needs at least 2 samples, requested {0}")]
    TooFewSamples(usize),

    /// The spline has no segments to evaluate.
    #[error("spline has no segments")]
    EmptySpline,

    /// A segment index past the end of the spline.
    #[error("segment index {index} out of range for {len} segments")]
    SegmentOutOfRange { index: usize, len: usize },

    /// A control point index past the end of the curve or spline.
    #[error("control point index {index} out of range for {len} control points")]
    ControlPointOutOfRange { index: usize, len: usize },
}
