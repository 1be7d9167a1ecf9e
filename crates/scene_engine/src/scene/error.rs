//! Scene errors

use crate::config::ConfigError;
use crate::foundation::collections::NodeId;
use thiserror::Error;

/// Scene error types
///
/// Tree and collision edge cases (missing collider, missing parent, cycles,
/// out-of-range indices, repeated destroy) are not errors; they resolve to
/// sentinel results or no-ops. Errors are reserved for misuse.
#[derive(Error, Debug)]
pub enum SceneError {
    /// The handle does not refer to a live node of this scene
    #[error("Invalid node handle: {0:?}")]
    InvalidNode(NodeId),

    /// Scene configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias for scene operations
pub type Result<T> = std::result::Result<T, SceneError>;
