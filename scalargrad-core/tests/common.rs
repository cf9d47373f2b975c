use scalargrad_core::Value;
use std::sync::Once;

static LOGGER_INIT: Once = Once::new();

// Installs env_logger once per test binary; RUST_LOG=debug shows the engine's logs.
#[allow(dead_code)]
pub fn setup_logger() {
    LOGGER_INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[allow(dead_code)]
pub fn labeled(data: f64, label: &str) -> Value {
    Value::with_label(data, label)
}

// The 4-sample dataset used by the training tests.
#[allow(dead_code)]
pub fn tiny_dataset() -> (Vec<Vec<f64>>, Vec<f64>) {
    let xs = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let ys = vec![1.0, -1.0, -1.0, 1.0];
    (xs, ys)
}
