use crate::error::ScalarGradError;
use crate::ops::{add_op, div_op, pow_op, sub_op};
use crate::value::Value;

/// How the per-sample squared errors are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Sum,
    Mean,
}

/// Squared error between `predictions` and `targets`, reduced to one scalar.
///
/// The result is an ordinary expression node; call `backward()` on it to get
/// gradients for every parameter that fed the predictions.
///
/// # Errors
/// - `ScalarGradError::LengthMismatch` if the slices differ in length.
/// - `ScalarGradError::EmptyInput` if they are empty.
pub fn squared_error_loss(
    predictions: &[Value],
    targets: &[Value],
    reduction: Reduction,
) -> Result<Value, ScalarGradError> {
    if predictions.len() != targets.len() {
        return Err(ScalarGradError::LengthMismatch {
            left: predictions.len(),
            right: targets.len(),
            operation: "squared_error_loss".to_string(),
        });
    }
    let sum = predictions
        .iter()
        .zip(targets)
        .map(|(p, t)| pow_op(&sub_op(p, t), 2.0))
        .reduce(|acc, term| add_op(acc, term))
        .ok_or_else(|| ScalarGradError::EmptyInput("squared_error_loss".to_string()))?;

    Ok(match reduction {
        Reduction::Sum => sum,
        Reduction::Mean => div_op(sum, predictions.len() as f64),
    })
}

/// `Σ (p_i - t_i)^2`.
pub fn sum_squared_error(predictions: &[Value], targets: &[Value]) -> Result<Value, ScalarGradError> {
    squared_error_loss(predictions, targets, Reduction::Sum)
}

/// Mean squared error, `Σ (p_i - t_i)^2 / n`.
pub fn mse(predictions: &[Value], targets: &[Value]) -> Result<Value, ScalarGradError> {
    squared_error_loss(predictions, targets, Reduction::Mean)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
