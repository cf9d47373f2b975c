use crate::error::ScalarGradError;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Step size and acceptance threshold for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Perturbation used for the central difference.
    pub epsilon: f64,
    /// Maximum accepted absolute *and* relative difference.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            tolerance: 1e-5,
        }
    }
}

/// Checks analytical gradients against numerical gradients using central differences.
///
/// One fresh leaf is built per entry of `inputs`, `func` is evaluated on them and
/// `backward()` is run on its output. Each leaf's gradient is then compared to
/// `(f(x + eps) - f(x - eps)) / (2 * eps)`, where every evaluation
/// builds a new graph.
///
/// A gradient passes if its absolute difference *or* its difference relative to the
/// larger of the two gradients is within `config.tolerance` (`approx::relative_eq!`).
pub fn check_grad<F>(func: F, inputs: &[f64], config: GradCheckConfig) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    let epsilon = config.epsilon;
    let tolerance = config.tolerance;

    // --- 1. Forward and Backward Pass ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves)?;
    output.backward();

    let evaluate = |perturbed: &[f64]| -> Result<f64, GradCheckError> {
        let perturbed_leaves: Vec<Value> = perturbed.iter().map(|&x| Value::new(x)).collect();
        Ok(func(&perturbed_leaves)?.value())
    };

    // --- 2. Iterate through Inputs ---
    for (i, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.gradient();

        let mut data_plus = inputs.to_vec();
        data_plus[i] += epsilon;
        let loss_plus = evaluate(&data_plus)?;

        let mut data_minus = inputs.to_vec();
        data_minus[i] -= epsilon;
        let loss_minus = evaluate(&data_minus)?;

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        // --- Check for NaN/Infinite Gradients ---
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        // --- Compare Gradients ---
        let difference = (analytical_grad - numerical_grad).abs();
        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
        if difference > tolerance {
            log::warn!(
                "check_grad: input {} only passed on relative tolerance (analytical {}, numerical {}, diff {})",
                i,
                analytical_grad,
                numerical_grad,
                difference
            );
        } else {
            log::debug!(
                "check_grad: input {} ok (analytical {}, numerical {})",
                i,
                analytical_grad,
                numerical_grad
            );
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
