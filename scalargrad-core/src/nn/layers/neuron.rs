use crate::error::ScalarGradError;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::ops::{add_op, mul_op, tanh_op};
use crate::value::Value;
use rand::Rng;

/// Non-linearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    /// Hyperbolic tangent, output in `[-1, 1]`.
    #[default]
    Tanh,
    /// No activation: the neuron is affine.
    Linear,
}

/// A single unit computing `activation(b + Σ w_i x_i)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a tanh neuron with `nin` weights drawn uniformly from `[-1, 1]` and a
    /// zero bias.
    pub fn new<R: Rng + ?Sized>(nin: usize, rng: &mut R) -> Self {
        let weights = (0..nin)
            .map(|i| Value::with_label(rng.gen_range(-1.0..=1.0), format!("w{}", i)))
            .collect();
        Neuron {
            weights,
            bias: Value::with_label(0.0, "b"),
            activation: Activation::Tanh,
        }
    }

    /// Creates an affine neuron (no tanh) with `nin` weights drawn uniformly from
    /// `[-1, 1]` and a zero bias. Meant for the output layer of a regression network.
    pub fn linear<R: Rng + ?Sized>(nin: usize, rng: &mut R) -> Self {
        Neuron {
            activation: Activation::Linear,
            ..Neuron::new(nin, rng)
        }
    }

    /// Creates a neuron whose weights are drawn from `init`. The bias starts at 0.
    pub fn with_init<R: Rng + ?Sized>(
        nin: usize,
        init: &Init,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        let weights = init.leaves(nin, rng)?;
        for (i, w) in weights.iter().enumerate() {
            w.set_label(format!("w{}", i));
        }
        Ok(Neuron {
            weights,
            bias: Value::with_label(0.0, "b"),
            activation,
        })
    }

    /// Number of inputs this neuron expects.
    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Builds the neuron's output for `x`.
    ///
    /// The sum starts from the bias and adds `w_i * x_i` in order.
    pub fn activate(&self, x: &[Value]) -> Result<Value, ScalarGradError> {
        if x.len() != self.weights.len() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: x.len(),
            });
        }
        let act = self
            .weights
            .iter()
            .zip(x)
            .fold(self.bias.clone(), |act, (w, xi)| add_op(act, mul_op(w, xi)));
        Ok(match self.activation {
            Activation::Tanh => tanh_op(&act),
            Activation::Linear => act,
        })
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Ok(vec![self.activate(inputs)?])
    }

    /// Weights in order, then the bias.
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut named: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w.{}", i), w.clone()))
            .collect();
        named.push(("b".to_string(), self.bias.clone()));
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
