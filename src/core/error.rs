use thiserror::Error;

/// Raised while assembling a header, row or dataset from untrusted input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("class index {class_index} is out of range for {attributes} attributes")]
    ClassIndexOutOfRange {
        class_index: usize,
        attributes: usize,
    },

    #[error("attribute '{attribute}' declares no values")]
    EmptyValueSet { attribute: String },

    #[error("row has {found} values but the header declares {expected} attributes")]
    ArityMismatch { expected: usize, found: usize },

    #[error("value {value} is out of range for attribute '{attribute}' ({limit} values)")]
    ValueOutOfRange {
        attribute: String,
        value: usize,
        limit: usize,
    },
}
