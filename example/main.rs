use irisnet::prelude::*;
use irisnet::core::output::write_cost_history_csv;
use irisnet::plot::plot_cost_history::plot_cost_history;
use irisnet::utils;

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use tracing::info;

/// Train a 4-H-3 sigmoid network on a labeled CSV with batch gradient descent.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// CSV with a header row, 4 feature columns and a class column
    #[arg(short, long, value_name = "PATH", default_value = "data/iris.csv")]
    data: PathBuf,
    /// JSON config; any field left out keeps its default
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
    #[arg(long, value_name = "INT")]
    hidden_size: Option<usize>,
    #[arg(long, value_name = "FLOAT")]
    learning_rate: Option<f64>,
    #[arg(short, long, value_name = "INT")]
    epochs: Option<usize>,
    /// Seed for the initial weights
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,
    /// Seed for the train/test shuffle
    #[arg(long, value_name = "INT")]
    split_seed: Option<u64>,
    /// Write a PNG of the cost history here
    #[arg(long, value_name = "PATH")]
    plot: Option<PathBuf>,
    /// Write the cost history as CSV here
    #[arg(long, value_name = "PATH")]
    costs_csv: Option<PathBuf>,
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    // command line flags win over the config file
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)?,
            None => Config::default(),
        };
        if let Some(h) = self.hidden_size {
            config.model.hidden_size = h;
        }
        if let Some(lr) = self.learning_rate {
            config.train.learning_rate = lr;
        }
        if let Some(e) = self.epochs {
            config.train.epochs = e;
        }
        if let Some(s) = self.seed {
            config.model.init_seed = s;
        }
        if let Some(s) = self.split_seed {
            config.split.random_state = s;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> std::result::Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    utils::install_logger(cli.verbose)?;
    let config = cli.config()?;

    let dataset = Dataset::from_csv_path(&cli.data)?;
    info!(
        "Loaded {} samples, {} features, classes {:?}",
        dataset.len(),
        dataset.num_features(),
        dataset.class_names
    );
    let split = dataset.train_test_split(config.split.test_size, config.split.random_state)?;

    let evaluation = train_and_evaluate(&split, &config)?;
    let net = TwoLayerNet::new(evaluation.run.params.clone())?;
    println!("{}", net.summary());

    let costs = &evaluation.run.costs;
    println!(
        "Cost: {:.4} -> {:.4} over {} epochs",
        costs[0],
        costs[costs.len() - 1],
        costs.len()
    );
    println!("Test cost: {:.4}", evaluation.test_cost);
    println!("Test accuracy: {:.2}%", evaluation.test_accuracy);

    if let Some(path) = &cli.plot {
        plot_cost_history(costs, path)?;
    }
    if let Some(path) = &cli.costs_csv {
        write_cost_history_csv(costs, path)?;
    }
    Ok(())
}
