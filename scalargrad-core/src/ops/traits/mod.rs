mod numeric;

pub use numeric::{IntoOperand, ScalarOperand};
