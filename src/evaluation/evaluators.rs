/// Accumulates classification results: accuracy plus a confusion matrix
/// indexed `[actual][predicted]`.
pub struct BasicClassificationEvaluator {
    seen: u64,
    correct: u64,
    confusion: Vec<Vec<u64>>,
}

impl BasicClassificationEvaluator {
    pub fn new(num_classes: usize) -> BasicClassificationEvaluator {
        BasicClassificationEvaluator {
            seen: 0,
            correct: 0,
            confusion: vec![vec![0; num_classes]; num_classes],
        }
    }

    /// Records one prediction. The predicted class is the first index with
    /// the maximum vote; a row with no usable votes counts as a miss.
    pub fn add_result(&mut self, actual_class: usize, votes: &[f64]) {
        self.seen += 1;
        let Some(predicted) = index_of_max(votes) else {
            return;
        };
        if predicted == actual_class {
            self.correct += 1;
        }
        if let Some(row) = self.confusion.get_mut(actual_class) {
            if let Some(cell) = row.get_mut(predicted) {
                *cell += 1;
            }
        }
    }

    pub fn seen(&self) -> u64 {
        self.seen
    }

    pub fn correct(&self) -> u64 {
        self.correct
    }

    pub fn accuracy(&self) -> f64 {
        if self.seen == 0 {
            0.0
        } else {
            self.correct as f64 / self.seen as f64
        }
    }

    pub fn confusion(&self) -> &[Vec<u64>] {
        &self.confusion
    }
}

fn index_of_max(votes: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &v) in votes.iter().enumerate() {
        if !v.is_finite() {
            continue;
        }
        match best {
            Some(b) if votes[b] >= v => {}
            _ => best = Some(i),
        }
    }
    best
}
