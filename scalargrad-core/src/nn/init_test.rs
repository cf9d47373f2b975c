use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_uniform_default_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    let init = Init::default();
    for _ in 0..1000 {
        let x = init.sample(&mut rng).unwrap();
        assert!((-1.0..=1.0).contains(&x), "{} out of [-1, 1]", x);
    }
}

#[test]
fn test_seeded_sampling_is_reproducible() {
    let init = Init::Normal { mean: 0.0, std: 0.5 };
    let a = init.leaves(5, &mut StdRng::seed_from_u64(42)).unwrap();
    let b = init.leaves(5, &mut StdRng::seed_from_u64(42)).unwrap();
    let a: Vec<f64> = a.iter().map(Value::value).collect();
    let b: Vec<f64> = b.iter().map(Value::value).collect();
    assert_eq!(a, b);
}

#[test]
fn test_constant() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(Init::Constant(0.25).sample(&mut rng), Ok(0.25));
}

#[test]
fn test_invalid_inits() {
    let mut rng = StdRng::seed_from_u64(0);
    let invalid = [
        Init::Uniform { low: 1.0, high: 1.0 },
        Init::Uniform { low: 2.0, high: -2.0 },
        Init::Uniform { low: f64::NEG_INFINITY, high: 0.0 },
        Init::Normal { mean: 0.0, std: -1.0 },
        Init::Normal { mean: f64::NAN, std: 1.0 },
        Init::Constant(f64::INFINITY),
    ];
    for init in invalid {
        assert!(
            matches!(init.sample(&mut rng), Err(ScalarGradError::InvalidInit(_))),
            "{:?} should be rejected",
            init
        );
    }
}

#[test]
fn test_init_and_zeros_inplace() {
    let mut rng = StdRng::seed_from_u64(3);
    let params = vec![Value::new(5.0), Value::new(-5.0)];
    init_(&params, &Init::Constant(1.5), &mut rng).unwrap();
    assert!(params.iter().all(|p| p.value() == 1.5));
    zeros_(&params);
    assert!(params.iter().all(|p| p.value() == 0.0));
}
