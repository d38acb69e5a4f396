use crate::geometry::curve::{Circle, Curve, Ellipse, Helix};

slotmap::new_key_type! {
    /// Unique identifier for a curve in the scene store.
    pub struct CurveId;
}

/// The runtime variant of a stored curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    /// A circle.
    Circle,
    /// An ellipse.
    Ellipse,
    /// A helix.
    Helix,
}

/// The geometric curve owned by a scene slot.
///
/// Each slot holds exactly one concrete variant; the variant is fixed at
/// construction and never changes. The enum tag replaces runtime type
/// identification when narrowing a heterogeneous scene to one variant.
#[derive(Debug, Clone)]
pub enum SceneCurve {
    /// A circle.
    Circle(Circle),
    /// An ellipse.
    Ellipse(Ellipse),
    /// A helix.
    Helix(Helix),
}

impl SceneCurve {
    /// Returns the variant tag of this curve.
    #[must_use]
    pub fn kind(&self) -> CurveKind {
        match self {
            Self::Circle(_) => CurveKind::Circle,
            Self::Ellipse(_) => CurveKind::Ellipse,
            Self::Helix(_) => CurveKind::Helix,
        }
    }

    /// Returns the circle if this curve is the circle variant.
    #[must_use]
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Self::Circle(circle) => Some(circle),
            _ => None,
        }
    }

    /// Returns the curve as a polymorphic [`Curve`] for evaluation.
    #[must_use]
    pub fn as_curve(&self) -> &dyn Curve {
        match self {
            Self::Circle(circle) => circle,
            Self::Ellipse(ellipse) => ellipse,
            Self::Helix(helix) => helix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(SceneCurve::Circle(Circle::new(1.0)).kind(), CurveKind::Circle);
        assert_eq!(
            SceneCurve::Ellipse(Ellipse::new(1.0, 2.0)).kind(),
            CurveKind::Ellipse
        );
        assert_eq!(SceneCurve::Helix(Helix::new(1.0, 0.5)).kind(), CurveKind::Helix);
    }

    #[test]
    fn as_circle_narrows_only_circles() {
        let circle = SceneCurve::Circle(Circle::new(2.0));
        let helix = SceneCurve::Helix(Helix::new(2.0, 0.5));
        assert!(circle.as_circle().is_some());
        assert!(helix.as_circle().is_none());
    }

    #[test]
    fn as_curve_dispatches_to_variant() {
        let curve = SceneCurve::Ellipse(Ellipse::new(3.0, 2.0));
        let p = curve.as_curve().evaluate(0.0);
        let q = Ellipse::new(3.0, 2.0).evaluate(0.0);
        assert!((p - q).norm() < TOLERANCE);
    }
}
