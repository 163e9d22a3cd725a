use std::path::Path;

use anyhow::Context;
use log::info;

use logistic_trainer::{
    BatchedStrategy, ReferenceStrategy, SoftwareAccelerator, TrainConfig, Trainer, loader,
    polynomial_map,
};

const DATASET_FILE: &str = "data/dataset.txt";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = TrainConfig::default();
    info!(
        "degree={} learning_rate={} max_iter={}",
        config.degree, config.learning_rate, config.max_iter
    );

    let raw = loader::load(Path::new(DATASET_FILE))
        .with_context(|| format!("loading {DATASET_FILE}"))?;
    println!(
        "examples: {}, features: {}",
        raw.examples(),
        raw.feature_count()
    );

    let dataset = polynomial_map(&raw, config.degree);
    println!(
        "examples: {}, features: {} (degree-{} feature map)",
        dataset.examples(),
        dataset.feature_count(),
        config.degree
    );

    let mut trainer = Trainer::new(ReferenceStrategy::new(&dataset), &config);
    let theta = trainer.fit(dataset.feature_count())?;
    println!("CPU:");
    println!("{}", format_theta(&theta));

    let accel = SoftwareAccelerator::default();
    let mut trainer = Trainer::new(BatchedStrategy::new(&dataset, accel)?, &config);
    let theta = trainer.fit(dataset.feature_count())?;
    println!("DFE:");
    println!("{}", format_theta(&theta));

    Ok(())
}

fn format_theta(theta: &[f32]) -> String {
    theta
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
