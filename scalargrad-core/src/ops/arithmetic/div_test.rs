use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use approx::assert_relative_eq;

#[test]
fn test_div_forward_and_backward() {
    let g = Value::with_label(8.0, "g");
    let h = Value::with_label(2.0, "h");
    let i = div_op(&g, &h);
    assert_relative_eq!(i.value(), 4.0);
    i.backward();
    // 1/h
    assert_relative_eq!(g.gradient(), 0.5);
    // -g/h^2
    assert_relative_eq!(h.gradient(), -2.0);
}

#[test]
fn test_div_scalar_forms() {
    let a = Value::new(3.0);
    let b = &a / 2.0;
    assert_relative_eq!(b.value(), 1.5);
    b.backward();
    assert_relative_eq!(a.gradient(), 0.5);

    let c = Value::new(4.0);
    let d = 2.0f64 / &c;
    assert_relative_eq!(d.value(), 0.5);
    d.backward();
    assert_relative_eq!(c.gradient(), -0.125);
}

#[test]
fn test_div_by_zero_propagates_infinity() {
    let a = Value::new(1.0);
    let zero = Value::new(0.0);
    let q = &a / &zero;
    assert!(q.value().is_infinite());
    q.backward();
    assert!(a.gradient().is_infinite());
    assert!(!zero.gradient().is_finite());
}

#[test]
fn test_div_grad_check() {
    let result = check_grad(
        |xs| Ok(&xs[0] / &xs[1]),
        &[1.5, -0.6],
        GradCheckConfig::default(),
    );
    assert!(result.is_ok(), "{:?}", result);
}
