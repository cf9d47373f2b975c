use scalargrad_core::Value;

// Define modules for optimizers
pub mod sgd;

pub use sgd::Sgd;

/// Trait for optimization algorithms.
///
/// An optimizer owns handles to the leaf parameters it updates. Because handles
/// share their node, updating them updates the model that produced them.
pub trait Optimizer {
    /// Performs a single optimization step from the parameters' current gradients.
    ///
    /// Call after `backward()` on the loss.
    fn step(&mut self);

    /// Resets the gradient of every managed parameter to 0.
    ///
    /// Should be called before the backward pass, otherwise gradients from
    /// successive iterations add up.
    fn zero_grad(&mut self) {
        for param in self.params() {
            param.reset_gradient();
        }
    }

    /// The parameters this optimizer updates.
    fn params(&self) -> &[Value];
}
