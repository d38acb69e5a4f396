use std::f64::consts::TAU;

use crate::math::{Point3, Vector3};

use super::{Curve, CurveDomain};

/// A circular helix around the z axis.
///
/// `P(t) = (radius * cos(t), radius * sin(t), step * t / TAU)`
///
/// `step` is the pitch: the z-advance per full turn of the parameter.
/// Dividing by `TAU` converts the pitch into a per-radian rate, so the
/// z coordinate grows linearly and without bound in `t`.
#[derive(Debug, Clone)]
pub struct Helix {
    radius: f64,
    step: f64,
}

impl Helix {
    /// Creates a new helix from its radius and pitch.
    #[must_use]
    pub fn new(radius: f64, step: f64) -> Self {
        Self { radius, step }
    }

    /// Returns the radius of the helix.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the pitch (z-advance per full turn).
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Curve for Helix {
    fn evaluate(&self, t: f64) -> Point3 {
        let x = self.radius * t.cos();
        let y = self.radius * t.sin();
        let z = self.step * t / TAU;
        Point3::new(x, y, z)
    }

    fn derivative(&self, t: f64) -> Vector3 {
        let dx = -self.radius * t.sin();
        let dy = self.radius * t.cos();
        let dz = self.step / TAU;
        Vector3::new(dx, dy, dz)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    fn is_closed(&self) -> bool {
        false
    }
}
