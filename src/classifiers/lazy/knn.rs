use crate::classifiers::classifier::Classifier;
use crate::classifiers::error::ModelError;
use crate::classifiers::lazy::neighbor_list::NeighborList;
use crate::core::dataset::Dataset;
use crate::core::instance_header::InstanceHeader;
use crate::core::row::Row;

pub const DEFAULT_K: usize = 3;

/// k-nearest-neighbor classifier using Hamming distance over the non-class
/// attributes. Training just retains the rows; all work happens at predict
/// time, where the kept neighbors (at least k, plus any tied with the k-th
/// distance) vote through an add-one smoothed distribution.
pub struct NearestNeighbor {
    k: usize,
    train_data: Option<Dataset>,
}

impl NearestNeighbor {
    pub fn new() -> NearestNeighbor {
        NearestNeighbor::with_k(DEFAULT_K)
    }

    pub fn with_k(k: usize) -> NearestNeighbor {
        NearestNeighbor {
            k: k.max(1),
            train_data: None,
        }
    }

    pub fn k(&self) -> usize {
        self.k
    }
}

impl Default for NearestNeighbor {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for NearestNeighbor {
    fn name(&self) -> &'static str {
        "knn"
    }

    fn train(&mut self, dataset: &Dataset) -> Result<(), ModelError> {
        self.train_data = Some(dataset.clone());
        Ok(())
    }

    fn predict(&self, row: &Row) -> Result<Vec<f64>, ModelError> {
        let train = self.train_data.as_ref().ok_or(ModelError::NotTrained)?;
        let header = train.header();
        if row.number_of_attributes() != header.number_of_attributes() {
            return Err(ModelError::ArityMismatch {
                expected: header.number_of_attributes(),
                found: row.number_of_attributes(),
            });
        }

        let mut neighbors = NeighborList::new(self.k);
        for train_row in train.rows() {
            let distance = hamming_distance(header, row, train_row)?;
            neighbors.consider(distance, train_row);
        }

        let num_classes = header.number_of_classes();
        let mut counts = vec![0.0; num_classes];
        for (_, neighbor) in neighbors.entries() {
            counts[neighbor.class_value()] += 1.0;
        }
        let denominator = neighbors.len() as f64 + num_classes as f64;
        let mut probs: Vec<f64> = counts.iter().map(|c| (c + 1.0) / denominator).collect();
        normalize(&mut probs)?;
        Ok(probs)
    }
}

/// Count of non-class attribute positions at which the rows differ.
fn hamming_distance(header: &InstanceHeader, a: &Row, b: &Row) -> Result<usize, ModelError> {
    let mut distance = 0;
    for index in 0..header.number_of_attributes() {
        if index == header.class_index() {
            continue;
        }
        let left = a.value(index).ok_or(ModelError::ArityMismatch {
            expected: header.number_of_attributes(),
            found: a.number_of_attributes(),
        })?;
        let right = b.value(index).ok_or(ModelError::ArityMismatch {
            expected: header.number_of_attributes(),
            found: b.number_of_attributes(),
        })?;
        if left != right {
            distance += 1;
        }
    }
    Ok(distance)
}

fn normalize(probs: &mut [f64]) -> Result<(), ModelError> {
    let sum: f64 = probs.iter().sum();
    if !sum.is_finite() || sum <= 0.0 {
        return Err(ModelError::DegenerateDistribution);
    }
    for p in probs {
        *p /= sum;
    }
    Ok(())
}
