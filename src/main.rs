use std::fs::File;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use strum::IntoEnumIterator;

use trivet::arff::load_dataset;
use trivet::cli::{Cli, LearnerChoice, build_learner};
use trivet::tasks::HoldoutEvaluator;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let choice = LearnerChoice::from_str(&cli.learner).map_err(|_| {
        let known: Vec<String> = LearnerChoice::iter().map(|c| c.to_string()).collect();
        anyhow!(
            "unknown learner '{}' (expected one of: {})",
            cli.learner,
            known.join(", ")
        )
    })?;

    let dataset = load_dataset(&cli.data, cli.class_index)
        .with_context(|| format!("failed to load ARFF data from {}", cli.data.display()))?;

    let mut learner = build_learner(choice, cli.k);
    let holdout = HoldoutEvaluator::new(cli.split, cli.seed)?;
    let report = holdout
        .run(learner.as_mut(), &dataset)
        .context("holdout evaluation failed")?;

    println!("relation:        {}", report.relation);
    println!("learner:         {}", report.learner);
    println!("train instances: {}", report.train_instances);
    println!("test instances:  {}", report.test_instances);
    println!("correct:         {}", report.correct);
    println!("accuracy:        {:.4}", report.accuracy);
    println!("train cpu (s):   {:.4}", report.train_cpu_seconds);
    println!("score cpu (s):   {:.4}", report.score_cpu_seconds);

    if let Some(path) = cli.dump_file {
        let file = File::create(&path)
            .with_context(|| format!("failed to create dump file {}", path.display()))?;
        serde_json::to_writer_pretty(file, &report)
            .context("failed to serialize the evaluation report")?;
        println!("report written to {}", path.display());
    }

    Ok(())
}
