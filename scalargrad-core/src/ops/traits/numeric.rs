use crate::value::Value;
use num_traits::ToPrimitive;

/// Anything that can stand as an operand of a graph operation.
///
/// Implemented for `Value`, `&Value` (a shared handle to the same node) and the
/// [`ScalarOperand`] types, which become a fresh unlabeled leaf.
pub trait IntoOperand {
    fn into_operand(self) -> Value;
}

impl IntoOperand for Value {
    fn into_operand(self) -> Value {
        self
    }
}

impl IntoOperand for &Value {
    fn into_operand(self) -> Value {
        self.clone()
    }
}

/// A plain number usable as a constant operand.
///
/// Constants take part in the graph as ordinary leaves: they receive a gradient
/// like any other node, but nobody holds on to it.
pub trait ScalarOperand: ToPrimitive + Copy + 'static {
    /// Converts to `f64`. Every implementor converts losslessly or by rounding,
    /// so the `NaN` fallback is never hit in practice.
    fn to_operand_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

macro_rules! impl_scalar_operand {
    ($($scalar:ty),*) => {
        $(
            impl ScalarOperand for $scalar {}

            impl IntoOperand for $scalar {
                fn into_operand(self) -> Value {
                    Value::new(self.to_operand_f64())
                }
            }
        )*
    };
}

impl_scalar_operand!(f64, f32, i32, i64, u32);
