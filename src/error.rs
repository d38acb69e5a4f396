use thiserror::Error;

/// Top-level error type for the Curvis curve kernel.
#[derive(Debug, Error)]
pub enum CurvisError {
    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors related to scene storage and lookup.
///
/// Curve evaluation itself is total over all finite parameters and has no
/// error type; the only fallible surface is resolving an id in the scene
/// store.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Convenience type alias for results using [`CurvisError`].
pub type Result<T> = std::result::Result<T, CurvisError>;
