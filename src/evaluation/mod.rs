mod evaluators;

pub use evaluators::BasicClassificationEvaluator;
