use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
#[derive(Error, Debug, PartialEq, Eq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Operands belong to different graphs during operation '{operation}'")]
    GraphMismatch { operation: &'static str },
    // Add more specific errors as needed
}
