// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linear activations used by the neurons of [`nn`](crate::nn).
//!
//! ## Currently Implemented:
//! - [`tanh_op`]: hyperbolic tangent.

pub mod tanh;

// Re-export key functions
pub use tanh::tanh_op;
