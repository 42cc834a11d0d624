use crate::classifiers::error::ModelError;
use crate::core::dataset::Dataset;
use crate::core::row::Row;

/// Common capability set of the batch classifiers.
///
/// `train` rebuilds the model state from scratch; `predict` reads it without
/// mutation, so a trained classifier may serve concurrent predictions as long
/// as no `train` call races them. The `&mut self` / `&self` split makes that
/// single-writer discipline a compile-time property.
pub trait Classifier {
    fn name(&self) -> &'static str;

    fn train(&mut self, dataset: &Dataset) -> Result<(), ModelError>;

    /// Class-probability distribution for `row`, one entry per class value,
    /// summing to 1 within floating-point tolerance.
    fn predict(&self, row: &Row) -> Result<Vec<f64>, ModelError>;
}
