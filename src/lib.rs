//! Batch classifiers for nominal tabular data: an ID3 decision tree, a
//! Hamming-distance k-nearest-neighbor classifier and Laplace-smoothed
//! Naive Bayes, plus the ARFF loading and holdout evaluation around them.

pub mod arff;
pub mod classifiers;
pub mod cli;
pub mod core;
pub mod evaluation;
pub mod tasks;
