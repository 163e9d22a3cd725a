use std::num::NonZeroUsize;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use logistic_trainer::{
    BatchedStrategy, Dataset, GradientStrategy, ReferenceStrategy, SoftwareAccelerator,
    TrainConfig, Trainer, polynomial_map,
};

const REL_TOL: f32 = 1e-4;

fn assert_close(got: &[f32], want: &[f32]) {
    assert_eq!(got.len(), want.len());
    for (g, w) in got.iter().zip(want) {
        let bound = REL_TOL * w.abs().max(1.0);
        assert!((g - w).abs() <= bound, "got {g}, want {w} (bound {bound})");
    }
}

/// Seeded random dataset: `features` raw columns plus a 0/1 label.
fn random_dataset(examples: usize, features: usize, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let buffer: Vec<f32> = (0..examples * features)
        .map(|_| rng.random_range(-2.0..2.0))
        .collect();
    let labels: Vec<f32> = (0..examples)
        .map(|_| if rng.random::<bool>() { 1.0 } else { 0.0 })
        .collect();
    Dataset::new(buffer, labels.into(), features, examples)
}

#[test]
fn gradients_agree_for_random_inputs() {
    let dataset = polynomial_map(&random_dataset(64, 2, 7), NonZeroUsize::new(2).unwrap());
    assert_eq!(dataset.feature_count(), 5);

    let mut rng = StdRng::seed_from_u64(11);
    let theta: Vec<f32> = (0..5).map(|_| rng.random_range(-1.0..1.0)).collect();

    let mut expected = vec![0.0f32; 5];
    ReferenceStrategy::new(&dataset)
        .compute(&theta, &mut expected)
        .unwrap();

    let mut grad = vec![0.0f32; 5];
    BatchedStrategy::new(&dataset, SoftwareAccelerator::new(8))
        .unwrap()
        .compute(&theta, &mut grad)
        .unwrap();

    assert_close(&grad, &expected);
}

#[test]
fn gradients_agree_across_lane_widths() {
    let dataset = random_dataset(37, 3, 21);
    let theta = [0.3f32, -0.6, 0.9];

    let mut expected = vec![0.0f32; 3];
    ReferenceStrategy::new(&dataset)
        .compute(&theta, &mut expected)
        .unwrap();

    for lanes in [4, 8, 16] {
        let mut grad = vec![0.0f32; 3];
        BatchedStrategy::new(&dataset, SoftwareAccelerator::new(lanes))
            .unwrap()
            .compute(&theta, &mut grad)
            .unwrap();
        assert_close(&grad, &expected);
    }
}

#[test]
fn fitted_parameters_agree_after_a_full_run() {
    let raw = random_dataset(50, 1, 3);
    let dataset = polynomial_map(&raw, NonZeroUsize::new(2).unwrap());
    let config = TrainConfig::default();

    let mut cpu = Trainer::new(ReferenceStrategy::new(&dataset), &config);
    let theta_cpu = cpu.fit(dataset.feature_count()).unwrap();

    let batched = BatchedStrategy::new(&dataset, SoftwareAccelerator::default()).unwrap();
    let mut dfe = Trainer::new(batched, &config);
    let theta_dfe = dfe.fit(dataset.feature_count()).unwrap();

    assert_close(&theta_dfe, &theta_cpu);
}

#[test]
fn odd_stream_sizes_reduce_to_the_same_gradient() {
    // Sizes chosen to not divide any plausible internal chunking.
    for examples in [1, 7, 13, 31] {
        let dataset = random_dataset(examples, 2, examples as u64);
        let theta = [0.1f32, 0.2];

        let mut expected = vec![0.0f32; 2];
        ReferenceStrategy::new(&dataset)
            .compute(&theta, &mut expected)
            .unwrap();

        let mut grad = vec![0.0f32; 2];
        BatchedStrategy::new(&dataset, SoftwareAccelerator::new(8))
            .unwrap()
            .compute(&theta, &mut grad)
            .unwrap();

        assert_close(&grad, &expected);
    }
}
