use crate::classifiers::classifier::Classifier;
use crate::classifiers::error::ModelError;
use crate::core::dataset::Dataset;
use crate::core::instance_header::InstanceHeader;
use crate::core::row::Row;
use std::sync::Arc;

/// Joint counts gathered in one pass over the training data. Every
/// (attribute, value) pair of the non-class attributes is mapped into one
/// contiguous index space through a per-attribute start offset; the class
/// slot carries no offset.
struct CountTable {
    num_instances: usize,
    class_counts: Vec<f64>,
    class_att_counts: Vec<Vec<f64>>,
    start_index: Vec<Option<usize>>,
    num_att_values: Vec<usize>,
}

impl CountTable {
    fn build(dataset: &Dataset) -> CountTable {
        let header = dataset.header();
        let num_attributes = header.number_of_attributes();
        let num_classes = header.number_of_classes();

        let mut start_index = vec![None; num_attributes];
        let mut num_att_values = vec![0; num_attributes];
        let mut total_att_values = 0;
        for index in 0..num_attributes {
            let arity = header
                .attribute(index)
                .map(|a| a.number_of_values())
                .unwrap_or(0);
            if index == header.class_index() {
                num_att_values[index] = num_classes;
            } else {
                start_index[index] = Some(total_att_values);
                num_att_values[index] = arity;
                total_att_values += arity;
            }
        }

        let mut class_counts = vec![0.0; num_classes];
        let mut class_att_counts = vec![vec![0.0; total_att_values]; num_classes];
        for row in dataset.rows() {
            let class_value = row.class_value();
            class_counts[class_value] += 1.0;
            for index in 0..num_attributes {
                let Some(start) = start_index[index] else {
                    continue;
                };
                if let Some(value) = row.value(index) {
                    class_att_counts[class_value][start + value] += 1.0;
                }
            }
        }

        CountTable {
            num_instances: dataset.num_instances(),
            class_counts,
            class_att_counts,
            start_index,
            num_att_values,
        }
    }
}

/// Naive Bayes with Laplace-smoothed frequency estimates: the prior and each
/// per-attribute conditional likelihood add one to every count, so no class
/// ever receives zero probability.
pub struct NaiveBayes {
    header: Option<Arc<InstanceHeader>>,
    counts: Option<CountTable>,
}

impl NaiveBayes {
    pub fn new() -> NaiveBayes {
        NaiveBayes {
            header: None,
            counts: None,
        }
    }
}

impl Default for NaiveBayes {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for NaiveBayes {
    fn name(&self) -> &'static str {
        "naive-bayes"
    }

    fn train(&mut self, dataset: &Dataset) -> Result<(), ModelError> {
        self.counts = Some(CountTable::build(dataset));
        self.header = Some(dataset.header_arc());
        Ok(())
    }

    fn predict(&self, row: &Row) -> Result<Vec<f64>, ModelError> {
        let (header, counts) = match (&self.header, &self.counts) {
            (Some(header), Some(counts)) => (header, counts),
            _ => return Err(ModelError::NotTrained),
        };
        if row.number_of_attributes() != header.number_of_attributes() {
            return Err(ModelError::ArityMismatch {
                expected: header.number_of_attributes(),
                found: row.number_of_attributes(),
            });
        }

        let num_classes = header.number_of_classes();
        let prior_denominator = counts.num_instances as f64 + num_classes as f64;
        let mut probs = vec![0.0; num_classes];
        for class_value in 0..num_classes {
            let class_count = counts.class_counts[class_value];
            let mut score = (class_count + 1.0) / prior_denominator;
            for index in 0..header.number_of_attributes() {
                let Some(start) = counts.start_index[index] else {
                    continue;
                };
                let value = row.value(index).ok_or(ModelError::ArityMismatch {
                    expected: header.number_of_attributes(),
                    found: row.number_of_attributes(),
                })?;
                let arity = counts.num_att_values[index];
                if value >= arity {
                    return Err(ModelError::UnseenValue {
                        attribute: index,
                        value,
                        limit: arity,
                    });
                }
                let joint = counts.class_att_counts[class_value][start + value];
                score *= (joint + 1.0) / (class_count + arity as f64);
            }
            probs[class_value] = score;
        }

        normalize(&mut probs)?;
        Ok(probs)
    }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attributes::NominalAttribute;

    const EPS: f64 = 1e-9;

    fn header(attribute_arities: &[usize], num_classes: usize) -> Arc<InstanceHeader> {
        let mut attributes: Vec<NominalAttribute> = attribute_arities
            .iter()
            .enumerate()
            .map(|(i, &n)| {
                NominalAttribute::new(
                    format!("a{i}"),
                    (0..n).map(|v| format!("v{v}")).collect(),
                )
            })
            .collect();
        attributes.push(NominalAttribute::new(
            "class",
            (0..num_classes).map(|c| format!("c{c}")).collect(),
        ));
        let class_index = attributes.len() - 1;
        Arc::new(InstanceHeader::new("test".to_string(), attributes, class_index).unwrap())
    }

    fn dataset(header: &Arc<InstanceHeader>, rows: &[Vec<usize>]) -> Dataset {
        let mut data = Dataset::new(Arc::clone(header));
        for values in rows {
            data.add_row(values.clone()).unwrap();
        }
        data
    }

    #[test]
    fn xor_dataset_gives_the_hand_computed_vector() {
        // XOR labels: every smoothed factor is (1+1)/(2+2), so both classes
        // score 0.5^3 = 0.125 and normalize to exactly [0.5, 0.5].
        let h = header(&[2, 2], 2);
        let data = dataset(&h, &[vec![0, 0, 0], vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]);
        let mut nb = NaiveBayes::new();
        nb.train(&data).unwrap();

        for values in [vec![0, 0, 0], vec![1, 0, 0], vec![0, 1, 0], vec![1, 1, 0]] {
            let row = Row::new(Arc::clone(&h), values).unwrap();
            let probs = nb.predict(&row).unwrap();
            assert!((probs[0] - 0.5).abs() < EPS, "{probs:?}");
            assert!((probs[1] - 0.5).abs() < EPS, "{probs:?}");
        }
    }

    #[test]
    fn single_attribute_probabilities_match_hand_computation() {
        // class_counts = [3, 3]; value 0 counts per class: [2, 1].
        // Scores for a=0: 0.5*0.6 and 0.5*0.4, normalizing to [0.6, 0.4].
        let h = header(&[2], 2);
        let data = dataset(
            &h,
            &[
                vec![0, 0],
                vec![0, 0],
                vec![1, 0],
                vec![0, 1],
                vec![1, 1],
                vec![1, 1],
            ],
        );
        let mut nb = NaiveBayes::new();
        nb.train(&data).unwrap();

        let row = Row::new(Arc::clone(&h), vec![0, 0]).unwrap();
        let probs = nb.predict(&row).unwrap();
        assert!((probs[0] - 0.6).abs() < EPS, "{probs:?}");
        assert!((probs[1] - 0.4).abs() < EPS, "{probs:?}");
    }

    #[test]
    fn flat_offsets_cover_mixed_arities() {
        // Attributes of arity 2 and 3 share one flat count space.
        let h = header(&[2, 3], 2);
        let data = dataset(
            &h,
            &[vec![0, 0, 0], vec![1, 2, 0], vec![0, 1, 1], vec![1, 2, 1]],
        );
        let mut nb = NaiveBayes::new();
        nb.train(&data).unwrap();

        let row = Row::new(Arc::clone(&h), vec![0, 0, 0]).unwrap();
        let probs = nb.predict(&row).unwrap();
        // c0: 0.5 * (1+1)/(2+2) * (1+1)/(2+3) = 0.1
        // c1: 0.5 * (1+1)/(2+2) * (0+1)/(2+3) = 0.05
        assert!((probs[0] - 2.0 / 3.0).abs() < EPS, "{probs:?}");
        assert!((probs[1] - 1.0 / 3.0).abs() < EPS, "{probs:?}");
    }

    #[test]
    fn output_is_a_strictly_positive_distribution() {
        let h = header(&[2, 2], 3);
        let data = dataset(&h, &[vec![0, 0, 0], vec![1, 1, 2], vec![0, 1, 1]]);
        let mut nb = NaiveBayes::new();
        nb.train(&data).unwrap();

        let row = Row::new(Arc::clone(&h), vec![1, 0, 0]).unwrap();
        let probs = nb.predict(&row).unwrap();
        let sum: f64 = probs.iter().sum();
        assert!((sum - 1.0).abs() < EPS);
        assert!(probs.iter().all(|&p| p > 0.0));
    }

    #[test]
    fn zero_instance_training_degrades_to_uniform() {
        let h = header(&[2], 2);
        let data = dataset(&h, &[]);
        let mut nb = NaiveBayes::new();
        nb.train(&data).unwrap();

        let row = Row::new(Arc::clone(&h), vec![1, 0]).unwrap();
        let probs = nb.predict(&row).unwrap();
        assert!((probs[0] - 0.5).abs() < EPS);
        assert!((probs[1] - 0.5).abs() < EPS);
    }

    #[test]
    fn value_outside_trained_range_is_an_error() {
        let narrow = header(&[2], 2);
        let data = dataset(&narrow, &[vec![0, 0], vec![1, 1]]);
        let mut nb = NaiveBayes::new();
        nb.train(&data).unwrap();

        let wide = header(&[3], 2);
        let row = Row::new(Arc::clone(&wide), vec![2, 0]).unwrap();
        assert_eq!(
            nb.predict(&row).unwrap_err(),
            ModelError::UnseenValue {
                attribute: 0,
                value: 2,
                limit: 2
            }
        );
    }

    #[test]
    fn predict_before_train_fails() {
        let h = header(&[2], 2);
        let row = Row::new(Arc::clone(&h), vec![0, 0]).unwrap();
        let nb = NaiveBayes::new();
        assert_eq!(nb.predict(&row).unwrap_err(), ModelError::NotTrained);
    }

    #[test]
    fn predictions_are_idempotent() {
        let h = header(&[2, 2], 2);
        let data = dataset(&h, &[vec![0, 0, 0], vec![1, 1, 1], vec![0, 1, 1]]);
        let mut nb = NaiveBayes::new();
        nb.train(&data).unwrap();

        let row = Row::new(Arc::clone(&h), vec![1, 0, 0]).unwrap();
        let first = nb.predict(&row).unwrap();
        let second = nb.predict(&row).unwrap();
        assert_eq!(first, second);
    }
}
