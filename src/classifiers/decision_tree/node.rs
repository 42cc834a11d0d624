use crate::classifiers::error::ModelError;
use crate::core::row::Row;

/// A node of a trained ID3 tree. Internal nodes hold exactly one child per
/// declared value of their split attribute; leaves hold a smoothed class
/// distribution. The tree is immutable once built and is rebuilt, never
/// mutated, on retraining.
#[derive(Debug, Clone)]
pub enum TreeNode {
    Leaf {
        distribution: Vec<f64>,
    },
    Internal {
        split_attribute: usize,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    /// Follows the row's attribute values down to a leaf.
    pub fn distribution_for(&self, row: &Row) -> Result<&[f64], ModelError> {
        match self {
            TreeNode::Leaf { distribution } => Ok(distribution),
            TreeNode::Internal {
                split_attribute,
                children,
            } => {
                let Some(value) = row.value(*split_attribute) else {
                    return Err(ModelError::ArityMismatch {
                        expected: *split_attribute + 1,
                        found: row.number_of_attributes(),
                    });
                };
                let child = children.get(value).ok_or(ModelError::UnseenValue {
                    attribute: *split_attribute,
                    value,
                    limit: children.len(),
                })?;
                child.distribution_for(row)
            }
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    pub fn num_nodes(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Internal { children, .. } => {
                1 + children.iter().map(TreeNode::num_nodes).sum::<usize>()
            }
        }
    }
}
