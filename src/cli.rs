use crate::classifiers::lazy::DEFAULT_K;
use crate::classifiers::{Classifier, DecisionTree, NaiveBayes, NearestNeighbor};
use clap::{Parser, ValueHint};
use std::path::PathBuf;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Holdout evaluation runner for nominal-data classifiers"
)]
pub struct Cli {
    /// ARFF file with nominal attributes only
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub data: PathBuf,

    /// Learner to evaluate (id3, knn, naive-bayes)
    #[arg(long, value_name = "LEARNER")]
    pub learner: String,

    /// Number of neighbors for the knn learner
    #[arg(long, default_value_t = DEFAULT_K, value_name = "K")]
    pub k: usize,

    /// Index of the class attribute (defaults to the last attribute)
    #[arg(long, value_name = "INDEX")]
    pub class_index: Option<usize>,

    /// Fraction of rows used for training
    #[arg(long, default_value_t = 0.66, value_name = "FRACTION")]
    pub split: f64,

    /// Seed for the train/test shuffle
    #[arg(long, default_value_t = 1, value_name = "SEED")]
    pub seed: u64,

    /// File to dump the evaluation report as JSON
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub dump_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum LearnerChoice {
    Id3,
    Knn,
    NaiveBayes,
}

pub fn build_learner(choice: LearnerChoice, k: usize) -> Box<dyn Classifier> {
    match choice {
        LearnerChoice::Id3 => Box::new(DecisionTree::new()),
        LearnerChoice::Knn => Box::new(NearestNeighbor::with_k(k)),
        LearnerChoice::NaiveBayes => Box::new(NaiveBayes::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_minimal_arguments_with_defaults() {
        let cli =
            Cli::try_parse_from(["trivet", "--data", "weather.arff", "--learner", "id3"]).unwrap();
        assert_eq!(cli.data, PathBuf::from("weather.arff"));
        assert_eq!(cli.learner, "id3");
        assert_eq!(cli.k, DEFAULT_K);
        assert_eq!(cli.class_index, None);
        assert!((cli.split - 0.66).abs() < 1e-12);
        assert_eq!(cli.seed, 1);
        assert!(cli.dump_file.is_none());
    }

    #[test]
    fn parses_all_options() {
        let cli = Cli::try_parse_from([
            "trivet",
            "--data",
            "d.arff",
            "--learner",
            "knn",
            "--k",
            "5",
            "--class-index",
            "0",
            "--split",
            "0.8",
            "--seed",
            "99",
            "--dump-file",
            "report.json",
        ])
        .unwrap();
        assert_eq!(cli.k, 5);
        assert_eq!(cli.class_index, Some(0));
        assert!((cli.split - 0.8).abs() < 1e-12);
        assert_eq!(cli.seed, 99);
        assert_eq!(cli.dump_file, Some(PathBuf::from("report.json")));
    }

    #[test]
    fn missing_required_arguments_fail() {
        assert!(Cli::try_parse_from(["trivet", "--learner", "id3"]).is_err());
        assert!(Cli::try_parse_from(["trivet", "--data", "d.arff"]).is_err());
    }

    #[test]
    fn learner_choice_parses_kebab_case_names() {
        assert_eq!(LearnerChoice::from_str("id3").unwrap(), LearnerChoice::Id3);
        assert_eq!(LearnerChoice::from_str("knn").unwrap(), LearnerChoice::Knn);
        assert_eq!(
            LearnerChoice::from_str("naive-bayes").unwrap(),
            LearnerChoice::NaiveBayes
        );
        assert!(LearnerChoice::from_str("hoeffding-tree").is_err());
    }

    #[test]
    fn build_learner_picks_the_right_implementation() {
        assert_eq!(build_learner(LearnerChoice::Id3, 3).name(), "id3");
        assert_eq!(build_learner(LearnerChoice::Knn, 3).name(), "knn");
        assert_eq!(
            build_learner(LearnerChoice::NaiveBayes, 3).name(),
            "naive-bayes"
        );
    }
}
