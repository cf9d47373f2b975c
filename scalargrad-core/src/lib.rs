// Déclare les modules principaux de la crate
pub mod autograd;
pub mod ops;
pub mod value;
pub mod value_data;

pub mod nn;
pub mod utils;

pub use nn::{Module, Mlp};

// Ré-exporte le type Value pour qu'il soit accessible directement via `scalargrad_core::Value`
pub use value::{make_leaf, Value};
// Re-export the operand conversion traits required by the public op functions
pub use ops::traits::{IntoOperand, ScalarOperand};
pub use ops::{add_op, div_op, exp_op, mul_op, neg_op, pow_op, sub_op, tanh_op};

pub mod error;
pub use error::ScalarGradError;
