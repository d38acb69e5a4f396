use std::fmt;

use crate::error::Result;
use crate::math::{Point3, Vector3};
use crate::scene::{CurveId, Scene};

/// A position/derivative pair sampled from one curve.
#[derive(Debug, Clone)]
pub struct CurveSample {
    /// The sampled curve.
    pub id: CurveId,
    /// Position at the sample parameter.
    pub point: Point3,
    /// First derivative at the sample parameter, not normalized.
    pub derivative: Vector3,
}

impl fmt::Display for CurveSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Point: ({}, {}, {}) Derivative: ({}, {}, {})",
            self.point.x,
            self.point.y,
            self.point.z,
            self.derivative.x,
            self.derivative.y,
            self.derivative.z
        )
    }
}

/// Samples every curve in a scene at a fixed parameter.
pub struct SampleScene {
    t: f64,
}

impl SampleScene {
    /// Creates a new `SampleScene` query.
    #[must_use]
    pub fn new(t: f64) -> Self {
        Self { t }
    }

    /// Executes the query, returning one sample per curve in scene order.
    ///
    /// The traversal is read-only; curves are evaluated through their
    /// polymorphic [`Curve`](crate::geometry::curve::Curve) view.
    ///
    /// # Errors
    ///
    /// Returns an error if a scene id cannot be resolved.
    pub fn execute(&self, scene: &Scene) -> Result<Vec<CurveSample>> {
        let mut samples = Vec::with_capacity(scene.len());
        for &id in scene.curve_ids() {
            let curve = scene.curve(id)?.as_curve();
            samples.push(CurveSample {
                id,
                point: curve.evaluate(self.t),
                derivative: curve.derivative(self.t),
            });
        }
        Ok(samples)
    }
}
