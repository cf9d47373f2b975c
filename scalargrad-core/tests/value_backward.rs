mod common;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use common::{labeled, setup_logger};
use scalargrad_core::autograd::grad_check::{check_grad, GradCheckConfig};
use scalargrad_core::utils::testing::{check_gradients_near, check_value_near};
use scalargrad_core::{make_leaf, Value};

#[test]
fn test_neuron_expression_gradients() {
    setup_logger();
    let x1 = labeled(2.0, "x1");
    let x2 = labeled(0.0, "x2");
    let w1 = labeled(-3.0, "w1");
    let w2 = labeled(1.0, "w2");
    let b = labeled(6.881_373_587_019_543, "b");

    let n = &(&x1 * &w1) + &(&x2 * &w2) + &b;
    let o = n.tanh();
    o.backward();

    check_value_near(&o, 0.7071, 1e-4);
    check_gradients_near(&[x1, x2, w1, w2, b], &[-1.5, 0.5, 1.0, 0.0, 0.5], 1e-4);
}

#[test]
fn test_tanh_via_exp_matches_tanh() {
    let x = make_leaf(0.8814, Some("x"));
    let e = (2.0f64 * &x).exp();
    let o = (&e - 1.0) / (&e + 1.0);
    o.backward();

    let expected = 0.8814f64.tanh();
    assert_relative_eq!(o.value(), expected, epsilon = 1e-12);
    assert_relative_eq!(x.gradient(), 1.0 - expected * expected, epsilon = 1e-9);
}

#[test]
fn test_self_addition_accumulates() {
    let a = Value::new(3.0);
    let b = &a + &a;
    b.backward();
    assert_eq!(b.value(), 6.0);
    assert_eq!(a.gradient(), 2.0);
}

#[test]
fn test_shared_operand_diamond() {
    let a = Value::new(-2.0);
    let b = Value::new(3.0);
    let d = &a * &b;
    let e = &a + &b;
    let f = &d * &e;
    f.backward();
    assert_eq!(f.value(), -6.0);
    // df/da = b*e + d, df/db = a*e + d
    assert_eq!(a.gradient(), -3.0);
    assert_eq!(b.gradient(), -8.0);
}

#[test]
fn test_repeated_backward_accumulates_until_reset() {
    let a = Value::new(4.0);
    let y = &a * 3.0;
    y.backward();
    y.backward();
    assert_eq!(a.gradient(), 6.0);

    a.reset_gradient();
    y.reset_gradient();
    y.backward();
    assert_eq!(a.gradient(), 3.0);
}

#[test]
fn test_mixed_scalar_forms() {
    let a = Value::new(2.0);
    assert_eq!((&a + 1).value(), 3.0);
    assert_eq!((1i32 + &a).value(), 3.0);
    assert_eq!((&a - 0.5).value(), 1.5);
    assert_eq!((0.5f64 - &a).value(), -1.5);
    assert_eq!((&a * 4.0f32).value(), 8.0);
    assert_eq!((4u32 * &a).value(), 8.0);
    assert_eq!((&a / 4.0).value(), 0.5);
    assert_eq!((4i64 / &a).value(), 2.0);
    assert_eq!((-&a).value(), -2.0);
}

#[test]
fn test_division_by_zero_is_infinite() {
    let a = Value::new(1.0);
    let z = Value::new(0.0);
    let q = &a / &z;
    assert!(q.value().is_infinite());
    q.backward();
    // 1 * 0^-1 has derivative 0^-1 w.r.t. a
    assert!(a.gradient().is_infinite());
}

#[test]
fn test_parameter_update_between_passes() {
    let w = make_leaf(0.5, Some("w"));
    let x = Value::new(2.0);
    let loss_at = |w: &Value| (w * &x - 3.0).pow(2.0);

    let loss = loss_at(&w);
    loss.backward();
    let before = loss.value();
    w.set_value(w.value() - 0.05 * w.gradient());
    w.reset_gradient();

    let after = loss_at(&w).value();
    assert!(after < before, "loss did not decrease: {} -> {}", before, after);
}

#[test]
fn test_composite_gradients_match_finite_differences() {
    setup_logger();
    let config = GradCheckConfig::default();
    let result = check_grad(
        |v: &[Value]| {
            let (a, b, c) = (&v[0], &v[1], &v[2]);
            Ok((a * b + c.exp()).tanh() / (b.pow(2.0) + 1.0) - a)
        },
        &[0.3, -1.2, 0.4],
        config,
    );
    assert!(result.is_ok(), "{:?}", result);
}

#[test]
fn test_leaf_backward_seeds_one() {
    let a = Value::new(7.0);
    a.backward();
    assert_abs_diff_eq!(a.gradient(), 1.0);
}
