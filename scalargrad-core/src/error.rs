use thiserror::Error;

/// Custom error type for the scalargrad crates.
///
/// The differentiation engine itself is total over `f64` and never produces one of
/// these: non-finite results flow through as IEEE-754 `NaN`/`inf`. Errors only come
/// from the layers built on top of it (network shapes, initialisation, losses).
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("Input size mismatch: expected {expected} inputs, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("Length mismatch during operation {operation}: {left} vs {right}")]
    LengthMismatch {
        left: usize,
        right: usize,
        operation: String,
    },

    #[error("Operation {0} received no inputs")]
    EmptyInput(String),

    #[error("A network needs at least one layer")]
    EmptyNetwork,

    #[error("Invalid initialisation: {0}")]
    InvalidInit(String),
}
