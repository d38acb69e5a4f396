use crate::math::{Point3, Vector3};

use super::{Curve, CurveDomain};

/// An axis-aligned ellipse centered at the origin in the xy-plane.
///
/// `P(t) = (radius_x * cos(t), radius_y * sin(t), 0)`
///
/// Both radii are taken as given; degenerate values (zero, negative) are
/// accepted and propagate through evaluation unchanged.
#[derive(Debug, Clone)]
pub struct Ellipse {
    radius_x: f64,
    radius_y: f64,
}

impl Ellipse {
    /// Creates a new ellipse from its x and y radii.
    #[must_use]
    pub fn new(radius_x: f64, radius_y: f64) -> Self {
        Self { radius_x, radius_y }
    }

    /// Returns the radius along the x axis.
    #[must_use]
    pub fn radius_x(&self) -> f64 {
        self.radius_x
    }

    /// Returns the radius along the y axis.
    #[must_use]
    pub fn radius_y(&self) -> f64 {
        self.radius_y
    }
}

impl Curve for Ellipse {
    fn evaluate(&self, t: f64) -> Point3 {
        let x = self.radius_x * t.cos();
        let y = self.radius_y * t.sin();
        Point3::new(x, y, 0.0)
    }

    fn derivative(&self, t: f64) -> Vector3 {
        let dx = -self.radius_x * t.sin();
        let dy = self.radius_y * t.cos();
        Vector3::new(dx, dy, 0.0)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, std::f64::consts::TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
