use crate::value::Value;

/// Checks that a node's value is within `tolerance` of `expected`.
/// Panics with both numbers and the node's label otherwise.
pub fn check_value_near(actual: &Value, expected: f64, tolerance: f64) {
    let a = actual.value();
    let diff = (a - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Value mismatch for {:?}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.label(),
            a,
            expected,
            diff,
            tolerance
        );
    }
}

/// Checks the accumulated gradients of `nodes` against `expected`, in order.
pub fn check_gradients_near(nodes: &[Value], expected: &[f64], tolerance: f64) {
    assert_eq!(nodes.len(), expected.len(), "Gradient count mismatch");
    for (i, (node, e)) in nodes.iter().zip(expected).enumerate() {
        let g = node.gradient();
        let diff = (g - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch at index {} ({:?}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                node.label(),
                g,
                e,
                diff,
                tolerance
            );
        }
    }
}

/// Creates one unlabeled leaf per entry of `data`.
pub fn leaves(data: &[f64]) -> Vec<Value> {
    data.iter().map(|&v| Value::new(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_value_near_accepts_close_values() {
        check_value_near(&Value::new(1.0 + 1e-10), 1.0, 1e-9);
    }

    #[test]
    #[should_panic(expected = "Value mismatch")]
    fn test_check_value_near_rejects_far_values() {
        check_value_near(&Value::with_label(1.5, "x"), 1.0, 1e-9);
    }

    #[test]
    #[should_panic(expected = "Value mismatch")]
    fn test_check_value_near_rejects_nan() {
        check_value_near(&Value::new(f64::NAN), 1.0, 1e-9);
    }

    #[test]
    #[should_panic(expected = "Gradient mismatch at index 1")]
    fn test_check_gradients_near_reports_index() {
        let nodes = leaves(&[1.0, 2.0]);
        nodes[0].set_gradient(0.5);
        nodes[1].set_gradient(0.7);
        check_gradients_near(&nodes, &[0.5, 0.0], 1e-9);
    }
}
