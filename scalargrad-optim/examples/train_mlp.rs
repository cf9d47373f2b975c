//! Fits a 3 -> 4 -> 4 -> 1 tanh network to four labelled points.
//!
//! Run with `RUST_LOG=debug` to see the engine and optimizer logs.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::sum_squared_error;
use scalargrad_core::{Mlp, Module, ScalarGradError, Value};
use scalargrad_optim::{Optimizer, Sgd};

const EPOCHS: usize = 100;
const LEARNING_RATE: f64 = 0.05;

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut rng = StdRng::seed_from_u64(42);
    let mlp = Mlp::new(3, &[4, 4, 1], &mut rng)?;
    println!("Model: {} parameters", mlp.num_parameters());

    let mut optimizer = Sgd::new(mlp.parameters(), LEARNING_RATE);
    let targets: Vec<Value> = ys.iter().map(|&y| Value::new(y)).collect();

    for epoch in 0..EPOCHS {
        let mut preds = Vec::with_capacity(xs.len());
        for x in &xs {
            let inputs: Vec<Value> = x.iter().map(|&v| Value::new(v)).collect();
            let mut out = mlp.forward(&inputs)?;
            preds.push(out.remove(0));
        }
        let loss = sum_squared_error(&preds, &targets)?;

        optimizer.zero_grad();
        loss.backward();
        optimizer.step();

        if epoch % 10 == 0 || epoch == EPOCHS - 1 {
            println!("epoch {:>3}: loss = {:.6}", epoch, loss.value());
        }
    }

    for (x, y) in xs.iter().zip(&ys) {
        let inputs: Vec<Value> = x.iter().map(|&v| Value::new(v)).collect();
        let out = mlp.forward(&inputs)?;
        println!("{:?} -> {:+.4} (target {:+.1})", x, out[0].value(), y);
    }
    Ok(())
}
