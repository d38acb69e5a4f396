mod circle;
mod ellipse;
mod helix;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use helix::Helix;

use crate::math::{Point3, Vector3};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }
}

/// Trait for parametric curves in 3D space.
///
/// Evaluation is total: every implementation accepts any finite `t`,
/// including values outside [`Curve::domain`]. Periodic curves wrap via
/// trigonometric periodicity.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    fn evaluate(&self, t: f64) -> Point3;

    /// Computes the first derivative of position with respect to `t`.
    ///
    /// The result is the raw rate-of-change vector, not normalized.
    fn derivative(&self, t: f64) -> Vector3;

    /// Returns the natural parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed over its natural domain.
    fn is_closed(&self) -> bool;
}
