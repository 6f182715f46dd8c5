use thiserror::Error;

/// Failures surfaced by the engine's pools and image transforms.
///
/// Attribute binding never produces these; it degrades to fallbacks instead.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A pool was asked to construct an object before [`crate::pool::PoolsManager::init`]
    /// captured the application handle.
    #[error("pools used before init captured an application context")]
    NotInitialized,

    /// Target size rejected by an image transformation.
    #[error(
        "cannot apply transformation on width: {width} or height: {height} \
         less than or equal to zero and not SIZE_ORIGINAL"
    )]
    InvalidDimensions { width: i32, height: i32 },

    /// The shared layout thread could not be spawned.
    #[error("failed to spawn layout thread")]
    LayoutThread(#[source] std::io::Error),
}
