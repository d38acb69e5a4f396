use crate::error::Result;
use crate::scene::Scene;

/// Result of a [`SumCircleRadii`] query.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleRadii {
    /// Radii of all circle curves, sorted ascending.
    pub radii: Vec<f64>,
    /// Sum of the radii.
    pub total: f64,
}

/// Sums the radii of all circle-variant curves in a scene.
///
/// Curves of other variants are skipped, not errored. The selected radii
/// are sorted ascending before summing; with no circles present the result
/// is an empty list and a total of `0.0`.
#[derive(Debug, Default)]
pub struct SumCircleRadii;

impl SumCircleRadii {
    /// Creates a new `SumCircleRadii` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the query over the whole scene.
    ///
    /// # Errors
    ///
    /// Returns an error if a scene id cannot be resolved.
    pub fn execute(&self, scene: &Scene) -> Result<CircleRadii> {
        let mut radii = Vec::new();
        for &id in scene.curve_ids() {
            if let Some(circle) = scene.curve(id)?.as_circle() {
                radii.push(circle.radius());
            }
        }
        radii.sort_by(f64::total_cmp);
        let total = radii.iter().sum();
        Ok(CircleRadii { radii, total })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::{Circle, Ellipse, Helix};
    use crate::operations::creation::GenerateScene;
    use crate::scene::SceneCurve;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_scene_sums_to_zero() {
        let scene = Scene::new();
        let result = SumCircleRadii::new().execute(&scene).unwrap();
        assert!(result.radii.is_empty());
        assert!(result.total.abs() < f64::EPSILON);
    }

    #[test]
    fn no_circles_sums_to_zero() {
        let mut scene = Scene::new();
        scene.add_curve(SceneCurve::Ellipse(Ellipse::new(3.0, 1.5)));
        scene.add_curve(SceneCurve::Helix(Helix::new(2.0, 0.4)));
        let result = SumCircleRadii::new().execute(&scene).unwrap();
        assert!(result.radii.is_empty());
        assert!(result.total.abs() < f64::EPSILON);
    }

    #[test]
    fn sorts_ascending_and_sums() {
        let mut scene = Scene::new();
        scene.add_curve(SceneCurve::Circle(Circle::new(3.0)));
        scene.add_curve(SceneCurve::Circle(Circle::new(1.0)));
        scene.add_curve(SceneCurve::Circle(Circle::new(2.0)));
        let result = SumCircleRadii::new().execute(&scene).unwrap();
        assert_eq!(result.radii, vec![1.0, 2.0, 3.0]);
        assert!((result.total - 6.0).abs() < 1e-12);
    }

    #[test]
    fn skips_other_variants() {
        let mut scene = Scene::new();
        scene.add_curve(SceneCurve::Circle(Circle::new(2.0)));
        scene.add_curve(SceneCurve::Ellipse(Ellipse::new(5.0, 2.5)));
        scene.add_curve(SceneCurve::Helix(Helix::new(7.0, 0.3)));
        let result = SumCircleRadii::new().execute(&scene).unwrap();
        assert_eq!(result.radii, vec![2.0]);
        assert!((result.total - 2.0).abs() < 1e-12);
    }

    #[test]
    fn total_matches_unsorted_sum_over_generated_scene() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut scene = Scene::new();
        GenerateScene::new(50).execute(&mut scene, &mut rng);

        let expected: f64 = scene
            .iter()
            .filter_map(|(_, curve)| curve.as_circle())
            .map(Circle::radius)
            .sum();

        let result = SumCircleRadii::new().execute(&scene).unwrap();
        assert!((result.total - expected).abs() < 1e-9);
        assert_eq!(
            result.radii.len(),
            scene.iter().filter(|(_, c)| c.as_circle().is_some()).count()
        );
    }
}
