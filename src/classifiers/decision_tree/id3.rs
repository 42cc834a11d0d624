use crate::classifiers::classifier::Classifier;
use crate::classifiers::decision_tree::node::TreeNode;
use crate::classifiers::error::ModelError;
use crate::core::dataset::Dataset;
use crate::core::instance_header::InstanceHeader;
use crate::core::row::Row;
use std::sync::Arc;

/// Threshold below which an information gain (or a log operand) is treated
/// as zero.
const EPSILON: f64 = 1e-6;

/// ID3 decision tree over nominal attributes.
///
/// Training recursively splits on the attribute with maximum information
/// gain; leaves keep an add-one smoothed class distribution, so a path that
/// perfectly separates one class (an identifier-like attribute) still yields
/// non-degenerate probabilities for held-out rows.
pub struct DecisionTree {
    header: Option<Arc<InstanceHeader>>,
    root: Option<TreeNode>,
}

impl DecisionTree {
    pub fn new() -> DecisionTree {
        DecisionTree {
            header: None,
            root: None,
        }
    }

    fn make_tree(header: &InstanceHeader, rows: &[&Row]) -> TreeNode {
        if rows.is_empty() {
            return TreeNode::Leaf {
                distribution: smoothed_class_distribution(header.number_of_classes(), rows),
            };
        }

        let mut best_gain = 0.0;
        let mut best_attribute = None;
        for attribute in 0..header.number_of_attributes() {
            if attribute == header.class_index() {
                continue;
            }
            let gain = information_gain(header, rows, attribute);
            if gain > best_gain {
                best_gain = gain;
                best_attribute = Some(attribute);
            }
        }

        match best_attribute {
            Some(attribute) if best_gain > EPSILON => {
                let children = split_by_value(header, rows, attribute)
                    .iter()
                    .map(|partition| Self::make_tree(header, partition))
                    .collect();
                TreeNode::Internal {
                    split_attribute: attribute,
                    children,
                }
            }
            _ => TreeNode::Leaf {
                distribution: smoothed_class_distribution(header.number_of_classes(), rows),
            },
        }
    }
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for DecisionTree {
    fn name(&self) -> &'static str {
        "id3"
    }

    fn train(&mut self, dataset: &Dataset) -> Result<(), ModelError> {
        let header = dataset.header_arc();
        let rows: Vec<&Row> = dataset.rows().iter().collect();
        self.root = Some(Self::make_tree(&header, &rows));
        self.header = Some(header);
        Ok(())
    }

    fn predict(&self, row: &Row) -> Result<Vec<f64>, ModelError> {
        let (header, root) = match (&self.header, &self.root) {
            (Some(header), Some(root)) => (header, root),
            _ => return Err(ModelError::NotTrained),
        };
        if row.number_of_attributes() != header.number_of_attributes() {
            return Err(ModelError::ArityMismatch {
                expected: header.number_of_attributes(),
                found: row.number_of_attributes(),
            });
        }
        root.distribution_for(row).map(|d| d.to_vec())
    }
}

/// log2(x / y), defined as 0 when either operand is (near) zero.
fn log2_ratio(x: f64, y: f64) -> f64 {
    if x < EPSILON || y < EPSILON {
        0.0
    } else {
        (x / y).log2()
    }
}

/// Class-label entropy of a row set, in bits.
fn entropy(header: &InstanceHeader, rows: &[&Row]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    let mut counts = vec![0.0; header.number_of_classes()];
    for row in rows {
        counts[row.class_value()] += 1.0;
    }
    let total = rows.len() as f64;
    let mut entropy = 0.0;
    for count in counts {
        let p = count / total;
        entropy -= p * log2_ratio(p, 1.0);
    }
    entropy
}

/// Reduction in class entropy achieved by partitioning `rows` on `attribute`.
fn information_gain(header: &InstanceHeader, rows: &[&Row], attribute: usize) -> f64 {
    let mut gain = entropy(header, rows);
    let total = rows.len() as f64;
    for partition in &split_by_value(header, rows, attribute) {
        if partition.is_empty() {
            continue;
        }
        gain -= (partition.len() as f64 / total) * entropy(header, partition);
    }
    gain
}

/// One partition per declared value of `attribute`, empty partitions included.
fn split_by_value<'a>(
    header: &InstanceHeader,
    rows: &[&'a Row],
    attribute: usize,
) -> Vec<Vec<&'a Row>> {
    let num_values = header
        .attribute(attribute)
        .map(|a| a.number_of_values())
        .unwrap_or(0);
    let mut partitions = vec![Vec::new(); num_values];
    for &row in rows {
        if let Some(value) = row.value(attribute) {
            if let Some(partition) = partitions.get_mut(value) {
                partition.push(row);
            }
        }
    }
    partitions
}

/// Add-one smoothed class distribution of a row set. The smoothed form
/// already sums to 1; the final division is a defensive re-normalization.
fn smoothed_class_distribution(num_classes: usize, rows: &[&Row]) -> Vec<f64> {
    let mut counts = vec![0.0; num_classes];
    for &row in rows {
        counts[row.class_value()] += 1.0;
    }
    let denominator = rows.len() as f64 + num_classes as f64;
    let mut probs: Vec<f64> = counts.iter().map(|c| (c + 1.0) / denominator).collect();
    let sum: f64 = probs.iter().sum();
    if sum > 0.0 {
        for p in &mut probs {
            *p /= sum;
        }
    }
    probs
}
