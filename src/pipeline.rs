use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::PipelineConfig;
use crate::data::{
    features_and_labels, generate_students, save_students_csv, train_test_split, StudentRecord,
};
use crate::error::Result;
use crate::ml::{mean_squared_error, KNNRegressor, ReferenceStore};
use crate::service::PredictionService;

/// What a pipeline run produced.
#[derive(Debug)]
pub struct PipelineOutcome {
    /// Service over the regressor built from the training split.
    pub service: PredictionService,
    /// Every generated student, in generation order.
    pub students: Vec<StudentRecord>,
    pub train_size: usize,
    /// Held-out records the regressor never saw.
    pub test: Vec<StudentRecord>,
    /// Mean squared error on the held-out records, `None` when the test split is empty.
    pub test_mse: Option<f64>,
}

/// Generates data, optionally saves it, splits it, builds the reference store and evaluates it.
pub fn run(config: &PipelineConfig) -> Result<PipelineOutcome> {
    config.validate()?;
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let students = generate_students(config.samples, &config.synthetic, &mut rng)?;
    log::info!("generated {} students", students.len());

    if let Some(path) = &config.csv_path {
        save_students_csv(path, &students)?;
    }

    let (train, test) = train_test_split(students.clone(), config.train_ratio, &mut rng)?;
    let train_size = train.len();
    let store = ReferenceStore::from_records(&train, StudentRecord::to_labeled_point)?;
    let regressor = KNNRegressor::new(store);

    let test_mse = evaluate(&regressor, &test, config.k)?;
    match test_mse {
        Some(mse) => log::info!(
            "k = {}, train = {}, test = {}, test MSE = {:.3}",
            config.k,
            train_size,
            test.len(),
            mse
        ),
        None => log::info!("k = {}, train = {}, no held-out data", config.k, train_size),
    }

    Ok(PipelineOutcome {
        service: PredictionService::new(regressor, config.k),
        students,
        train_size,
        test,
        test_mse,
    })
}

/// Mean squared error of `regressor` over `records`, or `None` if there are none.
pub fn evaluate(
    regressor: &KNNRegressor,
    records: &[StudentRecord],
    k: usize,
) -> Result<Option<f64>> {
    if records.is_empty() {
        return Ok(None);
    }
    let (queries, labels) = features_and_labels(records);
    let predictions = regressor.predict_batch(&queries, k)?;
    Ok(Some(mean_squared_error(&labels, &predictions)?))
}
