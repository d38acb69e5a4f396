mod curve;

pub use curve::{CurveId, CurveKind, SceneCurve};

use crate::error::SceneError;
use slotmap::SlotMap;

/// Central arena that owns all curves of a scene.
///
/// Curves are referenced by typed IDs (generational indices) and traversed
/// in insertion order. A curve is owned by exactly one scene and is never
/// mutated after insertion.
#[derive(Debug, Default)]
pub struct Scene {
    curves: SlotMap<CurveId, SceneCurve>,
    order: Vec<CurveId>,
}

impl Scene {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a curve, taking ownership, and returns its ID.
    pub fn add_curve(&mut self, curve: SceneCurve) -> CurveId {
        let id = self.curves.insert(curve);
        self.order.push(id);
        id
    }

    /// Returns a reference to the curve, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn curve(&self, id: CurveId) -> Result<&SceneCurve, SceneError> {
        self.curves
            .get(id)
            .ok_or_else(|| SceneError::EntityNotFound("curve".into()))
    }

    /// Returns the curve IDs in insertion order.
    #[must_use]
    pub fn curve_ids(&self) -> &[CurveId] {
        &self.order
    }

    /// Iterates over the curves in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (CurveId, &SceneCurve)> {
        self.order.iter().filter_map(|&id| Some((id, self.curves.get(id)?)))
    }

    /// Returns the number of curves in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether the scene contains no curves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
