mod holdout_evaluator;

use crate::classifiers::ModelError;
use thiserror::Error;

pub use holdout_evaluator::{HoldoutEvaluator, HoldoutReport};

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("invalid task configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}
