use crate::error::ScalarGradError;
use crate::nn::init::Init;
use crate::nn::layers::layer::Layer;
use crate::nn::layers::neuron::Activation;
use crate::nn::module::{prefixed, Module};
use crate::value::Value;
use log::debug;
use rand::Rng;

/// A multi-layer perceptron: layers applied in sequence.
///
/// `Mlp::new(3, &[4, 4, 1], rng)` builds `3 -> 4 -> 4 -> 1` with tanh everywhere,
/// 41 parameters in total.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates a network with `nin` inputs and one layer per entry of `nouts`.
    ///
    /// # Errors
    /// `ScalarGradError::EmptyNetwork` if `nouts` is empty.
    pub fn new<R: Rng + ?Sized>(nin: usize, nouts: &[usize], rng: &mut R) -> Result<Self, ScalarGradError> {
        if nouts.is_empty() {
            return Err(ScalarGradError::EmptyNetwork);
        }
        let sizes = Self::sizes(nin, nouts);
        let layers = sizes
            .windows(2)
            .map(|w| Layer::new(w[0], w[1], rng))
            .collect();
        let mlp = Mlp { layers };
        debug!("Built MLP {:?} with {} parameters", sizes, mlp.num_parameters());
        Ok(mlp)
    }

    /// Like [`Mlp::new`], but with a custom weight distribution and the given
    /// activation on the last layer. Hidden layers always use tanh.
    pub fn with_init<R: Rng + ?Sized>(
        nin: usize,
        nouts: &[usize],
        init: &Init,
        output_activation: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalarGradError> {
        if nouts.is_empty() {
            return Err(ScalarGradError::EmptyNetwork);
        }
        let sizes = Self::sizes(nin, nouts);
        let last = sizes.len() - 2;
        let layers = sizes
            .windows(2)
            .enumerate()
            .map(|(i, w)| {
                let activation = if i == last {
                    output_activation
                } else {
                    Activation::Tanh
                };
                Layer::with_init(w[0], w[1], init, activation, rng)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mlp = Mlp { layers };
        debug!(
            "Built MLP {:?} ({:?} output) with {} parameters",
            sizes,
            output_activation,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    fn sizes(nin: usize, nouts: &[usize]) -> Vec<usize> {
        std::iter::once(nin).chain(nouts.iter().copied()).collect()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut x = inputs.to_vec();
        for layer in &self.layers {
            x = layer.forward(&x)?;
        }
        Ok(x)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| prefixed(&format!("layers.{}", i), l.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
