// src/nn/layers/mod.rs
// Neuron, layer of neurons, and multi-layer perceptron.

pub mod layer;
pub mod mlp;
pub mod neuron;

// Re-export key layer structs
pub use layer::Layer;
pub use mlp::Mlp;
pub use neuron::{Activation, Neuron};
