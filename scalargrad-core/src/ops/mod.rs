//! # Operator Layer (`ops`)
//!
//! Every operation computes its forward value eagerly and records, on the node it
//! returns, the operands and the rule needed by the backward pass.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a function (`add_op`, `tanh_op`, ...)
//!   that performs the forward computation and sets up the backward pass. The binary
//!   ones accept any [`IntoOperand`]: a `Value`, a `&Value`, or a plain number, which
//!   is wrapped in a fresh unlabeled leaf.
//! - **`Backward` Structs:** `AddBackward`, `MulBackward`, `PowBackward`, `ExpBackward`
//!   and `TanhBackward` implement [`BackwardOp`](crate::autograd::BackwardOp).
//!   `neg_op`, `sub_op` and `div_op` are compositions of those and have no rule of
//!   their own.
//! - **Operators:** `+ - * /` and unary `-` on `Value`/`&Value` (and mixed with numbers)
//!   delegate to the `_op` functions.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, neg, sub, pow, div.
//! - [`math_elem`]: exp.
//! - [`activation`]: tanh.
//! - [`traits`]: operand conversion.

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Implements a `std::ops` binary operator for `Value`, `&Value` and the scalar
/// types on either side, delegating to the given `_op` function.
macro_rules! impl_binary_operator {
    (@scalar_lhs $op_trait:ident, $method:ident, $op_fn:path; $($scalar:ty),*) => {
        $(
            impl std::ops::$op_trait<$crate::value::Value> for $scalar {
                type Output = $crate::value::Value;

                fn $method(self, rhs: $crate::value::Value) -> $crate::value::Value {
                    $op_fn(self, rhs)
                }
            }

            impl std::ops::$op_trait<&$crate::value::Value> for $scalar {
                type Output = $crate::value::Value;

                fn $method(self, rhs: &$crate::value::Value) -> $crate::value::Value {
                    $op_fn(self, rhs)
                }
            }
        )*
    };
    ($op_trait:ident, $method:ident, $op_fn:path) => {
        impl<R: $crate::ops::traits::IntoOperand> std::ops::$op_trait<R> for $crate::value::Value {
            type Output = $crate::value::Value;

            fn $method(self, rhs: R) -> $crate::value::Value {
                $op_fn(self, rhs)
            }
        }

        impl<R: $crate::ops::traits::IntoOperand> std::ops::$op_trait<R> for &$crate::value::Value {
            type Output = $crate::value::Value;

            fn $method(self, rhs: R) -> $crate::value::Value {
                $op_fn(self, rhs)
            }
        }

        impl_binary_operator!(@scalar_lhs $op_trait, $method, $op_fn; f64, f32, i32, i64, u32);
    };
}

// Declare operation submodules
pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod traits;

pub use activation::tanh_op;
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::exp_op;

/// Applies a unary operation to a node.
///
/// Computes `op_fn(a.value())`, then builds the output node with the backward
/// struct returned by `backward_builder`, which receives a handle to `a`.
///
/// # Arguments
/// * `a`: The input node.
/// * `op_fn`: The forward function.
/// * `backward_builder`: Builds the `BackwardOp` capturing the operand.
/// * `op_name`: Tag recorded on the output node.
pub(crate) fn apply_unary_op<F, B, G>(a: &Value, op_fn: F, backward_builder: B, op_name: &str) -> Value
where
    F: Fn(f64) -> f64,
    B: FnOnce(Value) -> G,
    G: BackwardOp + 'static,
{
    let data = op_fn(a.value());
    Value::from_op(data, op_name, backward_builder(a.clone()))
}
