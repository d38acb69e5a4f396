use rand::Rng;

use crate::geometry::curve::{Circle, Ellipse, Helix};
use crate::scene::{CurveId, Scene, SceneCurve};

/// Radius range for generated curves.
const RADIUS_MIN: f64 = 1.0;
const RADIUS_MAX: f64 = 11.0;

/// Pitch range for generated helices.
const STEP_MIN: f64 = 0.1;
const STEP_MAX: f64 = 0.6;

/// Ratio of a generated ellipse's y radius to its x radius.
const MINOR_RATIO: f64 = 0.5;

/// Populates a scene with randomly shaped curves.
///
/// Each slot draws a radius, a pitch, and a variant selector from the
/// supplied generator, so a seeded generator reproduces the same scene.
pub struct GenerateScene {
    count: usize,
}

impl GenerateScene {
    /// Creates a new `GenerateScene` operation.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Executes the operation, inserting the generated curves into the
    /// scene and returning their IDs in insertion order.
    pub fn execute<R: Rng>(&self, scene: &mut Scene, rng: &mut R) -> Vec<CurveId> {
        let mut ids = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let radius = rng.gen_range(RADIUS_MIN..RADIUS_MAX);
            let step = rng.gen_range(STEP_MIN..STEP_MAX);

            let curve = match rng.gen_range(0..3) {
                0 => SceneCurve::Circle(Circle::new(radius)),
                1 => SceneCurve::Ellipse(Ellipse::new(radius, radius * MINOR_RATIO)),
                _ => SceneCurve::Helix(Helix::new(radius, step)),
            };
            ids.push(scene.add_curve(curve));
        }
        ids
    }
}
