use crate::math::{Point3, Vector3};

use super::{Curve, CurveDomain};

/// A circle of given radius, centered at the origin in the xy-plane.
///
/// `P(t) = (radius * cos(t), radius * sin(t), 0)`
///
/// The radius is taken as given: zero or negative values are accepted and
/// produce degenerate but well-defined geometry (a zero-radius circle
/// collapses to the origin).
#[derive(Debug, Clone)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Creates a new circle from its radius.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Curve for Circle {
    fn evaluate(&self, t: f64) -> Point3 {
        let x = self.radius * t.cos();
        let y = self.radius * t.sin();
        Point3::new(x, y, 0.0)
    }

    fn derivative(&self, t: f64) -> Vector3 {
        let dx = -self.radius * t.sin();
        let dy = self.radius * t.cos();
        Vector3::new(dx, dy, 0.0)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, std::f64::consts::TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
