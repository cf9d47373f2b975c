use super::*;
use approx::assert_relative_eq;
use scalargrad_core::nn::sum_squared_error;
use scalargrad_core::{Mlp, Module};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn param_with_grad(value: f64, grad: f64) -> Value {
    let p = Value::new(value);
    p.set_gradient(grad);
    p
}

#[test]
fn test_sgd_basic_step() {
    let params = vec![param_with_grad(1.0, 0.1), param_with_grad(-2.0, -0.4)];
    let mut optimizer = Sgd::new(params.clone(), 0.1);
    assert_eq!(optimizer.momentum(), 0.0, "plain SGD has no momentum");
    optimizer.step();
    assert_relative_eq!(params[0].value(), 1.0 - 0.01);
    assert_relative_eq!(params[1].value(), -2.0 + 0.04);
    assert_eq!(optimizer.step_count(), 1);
}

#[test]
fn test_sgd_momentum_accumulates_velocity() {
    let p = param_with_grad(0.0, 1.0);
    let mut optimizer = Sgd::with_momentum(vec![p.clone()], 0.1, 0.9);
    assert_eq!(optimizer.momentum(), 0.9);
    assert_eq!(optimizer.lr(), 0.1);
    optimizer.step();
    // v = 1
    assert_relative_eq!(p.value(), -0.1);
    optimizer.step();
    // v = 0.9 * 1 + 1 = 1.9
    assert_relative_eq!(p.value(), -0.1 - 0.19, epsilon = 1e-12);
}

#[test]
fn test_sgd_zero_grad() {
    let params = vec![param_with_grad(1.0, 3.0), param_with_grad(2.0, -1.0)];
    let mut optimizer = Sgd::new(params.clone(), 0.5);
    optimizer.zero_grad();
    assert!(params.iter().all(|p| p.gradient() == 0.0));
    assert_eq!(params[0].value(), 1.0, "zero_grad must not touch values");
}

#[test]
fn test_sgd_skips_non_finite_gradients() {
    let good = param_with_grad(1.0, 1.0);
    let nan = param_with_grad(2.0, f64::NAN);
    let inf = param_with_grad(3.0, f64::INFINITY);
    let mut optimizer = Sgd::new(vec![good.clone(), nan.clone(), inf.clone()], 0.1);
    optimizer.step();
    assert_relative_eq!(good.value(), 0.9);
    assert_eq!(nan.value(), 2.0);
    assert_eq!(inf.value(), 3.0);
}

#[test]
fn test_sgd_params_share_nodes() {
    let p = Value::new(5.0);
    let optimizer = Sgd::new(vec![p.clone()], 0.1);
    assert!(Value::ptr_eq(&optimizer.params()[0], &p));
}

#[test]
fn test_set_lr() {
    let p = param_with_grad(1.0, 1.0);
    let mut optimizer = Sgd::new(vec![p.clone()], 0.1);
    optimizer.set_lr(0.5);
    assert_eq!(optimizer.lr(), 0.5);
    optimizer.step();
    assert_relative_eq!(p.value(), 0.5);
}

#[test]
fn test_sgd_trains_mlp() {
    let _ = env_logger::builder().is_test(true).try_init();
    let xs = [[2.0, 3.0, -1.0], [3.0, -1.0, 0.5], [0.5, 1.0, 1.0], [1.0, 1.0, -1.0]];
    let ys = [1.0, -1.0, -1.0, 1.0];
    let mut rng = StdRng::seed_from_u64(2024);
    let mlp = Mlp::new(3, &[4, 4, 1], &mut rng).unwrap();
    let mut optimizer = Sgd::with_momentum(mlp.parameters(), 0.02, 0.5);

    let loss_of = |mlp: &Mlp| {
        let preds: Vec<Value> = xs
            .iter()
            .map(|x| {
                let inputs: Vec<Value> = x.iter().map(|&v| Value::new(v)).collect();
                mlp.forward(&inputs).unwrap().remove(0)
            })
            .collect();
        let targets: Vec<Value> = ys.iter().map(|&y| Value::new(y)).collect();
        sum_squared_error(&preds, &targets).unwrap()
    };

    let initial = loss_of(&mlp).value();
    for _ in 0..100 {
        let loss = loss_of(&mlp);
        optimizer.zero_grad();
        loss.backward();
        optimizer.step();
    }
    let fin = loss_of(&mlp).value();
    assert!(fin < initial, "loss went from {} to {}", initial, fin);
    assert_eq!(optimizer.step_count(), 100);
}
