use thiserror::Error;

/// Failure modes shared by the classifier implementations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("classifier has not been trained")]
    NotTrained,

    #[error("row has {found} attributes but the model was trained with {expected}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("value {value} of attribute {attribute} was not seen during training ({limit} known values)")]
    UnseenValue {
        attribute: usize,
        value: usize,
        limit: usize,
    },

    #[error("probability distribution cannot be normalized (sum is zero or not finite)")]
    DegenerateDistribution,
}
