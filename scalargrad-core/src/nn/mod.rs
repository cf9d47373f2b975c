// src/nn/mod.rs
// Neurons, layers and networks assembled from the operator layer.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module

// Re-export common items
pub use init::Init;
pub use layers::{Activation, Layer, Mlp, Neuron};
pub use losses::{mse, squared_error_loss, sum_squared_error, Reduction};
pub use module::Module;
