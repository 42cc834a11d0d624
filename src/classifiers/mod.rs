pub mod bayes;
pub mod classifier;
pub mod decision_tree;
pub mod error;
pub mod lazy;

pub use bayes::NaiveBayes;
pub use classifier::Classifier;
pub use decision_tree::DecisionTree;
pub use error::ModelError;
pub use lazy::NearestNeighbor;
