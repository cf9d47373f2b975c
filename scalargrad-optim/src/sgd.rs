use crate::Optimizer;
use log::{debug, warn};
use scalargrad_core::Value;

/// Implements stochastic gradient descent, optionally with momentum.
///
/// Without momentum each step applies `p = p - lr * grad(p)`. With momentum a
/// velocity is kept per parameter: `v = momentum * v + grad(p)`, then `p = p - lr * v`.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Value>,
    lr: f64,
    momentum: f64,
    velocities: Vec<f64>,
    step_count: usize,
}

impl Sgd {
    /// Creates a plain gradient descent optimizer.
    ///
    /// # Arguments
    ///
    /// * `params` - Handles to the leaves to update, e.g. `mlp.parameters()`.
    /// * `lr` - The learning rate.
    pub fn new(params: impl IntoIterator<Item = Value>, lr: f64) -> Self {
        Self::with_momentum(params, lr, 0.0)
    }

    /// Creates an optimizer with the given momentum factor (0 disables it).
    pub fn with_momentum(params: impl IntoIterator<Item = Value>, lr: f64, momentum: f64) -> Self {
        let params: Vec<Value> = params.into_iter().collect();
        let velocities = vec![0.0; params.len()];
        Sgd {
            params,
            lr,
            momentum,
            velocities,
            step_count: 0,
        }
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    /// Changes the learning rate used by subsequent steps.
    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    /// Number of `step` calls so far.
    pub fn step_count(&self) -> usize {
        self.step_count
    }
}

impl Optimizer for Sgd {
    fn step(&mut self) {
        self.step_count += 1;
        let mut skipped = 0;
        for (i, (param, velocity)) in self.params.iter().zip(self.velocities.iter_mut()).enumerate() {
            let grad = param.gradient();
            if !grad.is_finite() {
                warn!(
                    "Sgd: skipping parameter {} ({:?}) with non-finite gradient {}",
                    i,
                    param.label(),
                    grad
                );
                skipped += 1;
                continue;
            }
            let update = if self.momentum != 0.0 {
                *velocity = self.momentum * *velocity + grad;
                *velocity
            } else {
                grad
            };
            param.set_value(param.value() - self.lr * update);
        }
        debug!(
            "Sgd: step {} updated {} parameters (lr = {}, momentum = {}, skipped = {})",
            self.step_count,
            self.params.len() - skipped,
            self.lr,
            self.momentum,
            skipped
        );
    }

    fn params(&self) -> &[Value] {
        &self.params
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
