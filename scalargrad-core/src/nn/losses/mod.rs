pub mod mse;

pub use mse::{mse, squared_error_loss, sum_squared_error, Reduction};
