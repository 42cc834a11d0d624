use crate::classifiers::Classifier;
use crate::evaluation::BasicClassificationEvaluator;
use crate::core::dataset::Dataset;
use crate::tasks::TaskError;
use cpu_time::ProcessTime;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;

/// Splits a dataset into a train and a held-out test partition with a seeded
/// shuffle, trains the learner once and scores it on the held-out rows.
pub struct HoldoutEvaluator {
    train_fraction: f64,
    seed: u64,
}

/// Outcome of one holdout run.
#[derive(Debug, Clone, Serialize)]
pub struct HoldoutReport {
    pub learner: String,
    pub relation: String,
    pub train_instances: usize,
    pub test_instances: usize,
    pub correct: u64,
    pub accuracy: f64,
    pub train_cpu_seconds: f64,
    pub score_cpu_seconds: f64,
    pub confusion: Vec<Vec<u64>>,
}

impl HoldoutEvaluator {
    pub fn new(train_fraction: f64, seed: u64) -> Result<HoldoutEvaluator, TaskError> {
        if !(train_fraction > 0.0 && train_fraction < 1.0) {
            return Err(TaskError::InvalidConfig(format!(
                "train fraction must lie in (0, 1), got {train_fraction}"
            )));
        }
        Ok(HoldoutEvaluator {
            train_fraction,
            seed,
        })
    }

    pub fn run(
        &self,
        learner: &mut dyn Classifier,
        dataset: &Dataset,
    ) -> Result<HoldoutReport, TaskError> {
        let n = dataset.num_instances();
        if n < 2 {
            return Err(TaskError::InvalidConfig(format!(
                "holdout evaluation needs at least 2 instances, got {n}"
            )));
        }

        let mut indices: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(self.seed);
        indices.shuffle(&mut rng);
        let cut = ((n as f64) * self.train_fraction).round() as usize;
        let cut = cut.clamp(1, n - 1);
        let train_set = dataset.subset(&indices[..cut]);
        let test_set = dataset.subset(&indices[cut..]);

        let train_start = ProcessTime::now();
        learner.train(&train_set)?;
        let train_cpu_seconds = train_start.elapsed().as_secs_f64();

        let mut evaluator =
            BasicClassificationEvaluator::new(dataset.header().number_of_classes());
        let score_start = ProcessTime::now();
        for row in test_set.rows() {
            let votes = learner.predict(row)?;
            evaluator.add_result(row.class_value(), &votes);
        }
        let score_cpu_seconds = score_start.elapsed().as_secs_f64();

        Ok(HoldoutReport {
            learner: learner.name().to_string(),
            relation: dataset.header().relation_name().to_string(),
            train_instances: train_set.num_instances(),
            test_instances: test_set.num_instances(),
            correct: evaluator.correct(),
            accuracy: evaluator.accuracy(),
            train_cpu_seconds,
            score_cpu_seconds,
            confusion: evaluator.confusion().to_vec(),
        })
    }
}
