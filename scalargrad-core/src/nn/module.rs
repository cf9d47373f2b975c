use crate::error::ScalarGradError;
use crate::value::Value;

/// The base trait for neurons, layers and networks.
///
/// A module owns leaf [`Value`]s (its parameters) and builds a fresh expression
/// over them on every forward pass. It never differentiates anything itself:
/// gradients come from calling `backward()` on a scalar built from its outputs.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// Returns `ScalarGradError::InputSizeMismatch` if `inputs` does not have the
    /// number of entries the module was built for.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns handles to all learnable parameters, in a stable order.
    ///
    /// The handles share the module's nodes, so `set_value` on them updates the module.
    fn parameters(&self) -> Vec<Value>;

    /// Returns the parameters along with hierarchical names
    /// (e.g. `"layers.0.neurons.2.w.1"`), in the same order as [`parameters`](Module::parameters).
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Resets the gradient of every parameter to zero.
    ///
    /// Call before each backward pass when training, otherwise gradients of
    /// successive passes add up.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.reset_gradient();
        }
    }

    /// Number of learnable parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

/// Prefixes every name of `named` with `prefix.`.
pub(crate) fn prefixed(prefix: &str, named: Vec<(String, Value)>) -> Vec<(String, Value)> {
    named
        .into_iter()
        .map(|(name, param)| (format!("{}.{}", prefix, name), param))
        .collect()
}
