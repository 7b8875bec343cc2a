use std::path::PathBuf;
use thiserror::Error;

/// Errors related to the model artifact and inference
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model artifact not found at {path:?}")]
    ArtifactMissing { path: PathBuf },

    #[error("Failed to load model artifact: {reason}")]
    LoadFailed { reason: String },

    #[error("Model contract violation: {reason}")]
    ContractViolation { reason: String },

    #[error("Inference failed: {reason}")]
    Inference { reason: String },

    #[error("Malformed model output: {reason}")]
    MalformedOutput { reason: String },
}
