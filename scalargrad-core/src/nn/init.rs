use crate::error::ScalarGradError;
use crate::value::Value;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// How to draw the initial value of a parameter.
///
/// Randomness always comes from a caller-supplied generator; seed it
/// (`StdRng::seed_from_u64`) for reproducible networks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform on `[low, high]`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
    /// Always the same value.
    Constant(f64),
}

impl Default for Init {
    /// Uniform on `[-1, 1]`, the default for neuron weights.
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Checks the distribution parameters.
    ///
    /// # Errors
    /// `ScalarGradError::InvalidInit` for non-finite bounds, `low >= high`, or a
    /// negative or non-finite standard deviation.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        match *self {
            Init::Uniform { low, high } => {
                if !low.is_finite() || !high.is_finite() || low >= high {
                    return Err(ScalarGradError::InvalidInit(format!(
                        "uniform bounds must be finite with low < high, got [{}, {}]",
                        low, high
                    )));
                }
            }
            Init::Normal { mean, std } => {
                if !mean.is_finite() || !std.is_finite() || std < 0.0 {
                    return Err(ScalarGradError::InvalidInit(format!(
                        "normal needs a finite mean and a finite, non-negative std, got mean {} std {}",
                        mean, std
                    )));
                }
            }
            Init::Constant(value) => {
                if !value.is_finite() {
                    return Err(ScalarGradError::InvalidInit(format!(
                        "constant must be finite, got {}",
                        value
                    )));
                }
            }
        }
        Ok(())
    }

    /// Draws one value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, ScalarGradError> {
        self.validate()?;
        let value = match *self {
            Init::Uniform { low, high } => Uniform::new_inclusive(low, high).sample(rng),
            Init::Normal { mean, std } => Normal::new(mean, std)
                .map_err(|e| ScalarGradError::InvalidInit(e.to_string()))?
                .sample(rng),
            Init::Constant(value) => value,
        };
        Ok(value)
    }

    /// Creates `n` leaves drawn from this distribution.
    pub fn leaves<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<Value>, ScalarGradError> {
        (0..n).map(|_| self.sample(rng).map(Value::new)).collect()
    }
}

/// Overwrites the value of every parameter with a fresh draw from `init`.
pub fn init_<R: Rng + ?Sized>(params: &[Value], init: &Init, rng: &mut R) -> Result<(), ScalarGradError> {
    for param in params {
        param.set_value(init.sample(rng)?);
    }
    Ok(())
}

/// Sets the value of every parameter to 0.
pub fn zeros_(params: &[Value]) {
    for param in params {
        param.set_value(0.0);
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
