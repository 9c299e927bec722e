use burn::backend::{ndarray::NdArrayDevice, Autodiff, NdArray};
use burn::config::Config;
use clap::Parser;
use json::object;
use log::{debug, info};
use mlp_classifier::evaluate::{Accuracy, Evaluate};
use mlp_classifier::model::classifier::Classifier;
use mlp_classifier::model::config::ClassifierConfig;
use mlp_classifier::model::history::TrainingHistory;
use mlp_classifier::model::{Model, RunOutput};
use mlp_classifier::parsing::mnist;
use mlp_classifier::Result;
use std::fs::File;
use std::io::Write;

type Backend = Autodiff<NdArray>;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The path of the training dataset
    #[arg(long)]
    train_path: String,

    /// The path of the test dataset
    #[arg(long)]
    test_path: String,

    /// JSON classifier config, defaults are used when absent
    #[arg(short, long)]
    config: Option<String>,

    /// Number of epochs to train the network for
    #[arg(short = 'e', long)]
    max_epoch: Option<usize>,

    /// Learning rate of the optimizer
    #[arg(short, long)]
    learning_rate: Option<f64>,

    /// Directory the training plots are written to
    #[arg(short = 'o', long)]
    result_dir: Option<String>,

    /// Save the predictions and the true labels as JSON
    #[arg(short, long)]
    results_path: Option<String>,

    /// Save the training history as CSV (epoch, accuracy, loss)
    #[arg(long)]
    history_path: Option<String>,
}

impl Args {
    fn classifier_config(&self) -> Result<ClassifierConfig> {
        let mut config = match &self.config {
            Some(path) => ClassifierConfig::load(path)?,
            None => ClassifierConfig::default(),
        };

        if let Some(max_epoch) = self.max_epoch {
            config.max_epoch = max_epoch;
        }
        if let Some(learning_rate) = self.learning_rate {
            config.learning_rate = learning_rate;
        }
        if let Some(result_dir) = &self.result_dir {
            config.result_dir = result_dir.clone();
        }

        Ok(config)
    }
}

/// Write the training history as CSV with an `epoch,accuracy,loss` header
fn write_history(path: &str, history: &TrainingHistory) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for record in history.records() {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

/// Write the predictions of the run in JSON format, under the keys pred_y and true_y
fn write_results(path: &str, output: &RunOutput) -> std::io::Result<()> {
    let mut data = object! {};
    data["pred_y"] = output.pred_y.clone().into();
    data["true_y"] = output.true_y.clone().into();

    let mut file = File::create(path)?;

    file.write_all(data.dump().as_bytes())?;

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let config = args.classifier_config()?;

    let data = mnist::load_split(&args.train_path, &args.test_path)?;
    info!(
        "Loaded {} training and {} test samples",
        data.train.target.len(),
        data.test.target.len()
    );

    let mut classifier = Classifier::<Backend>::new(config, NdArrayDevice::Cpu).with_data(data);
    let output = classifier.run()?;

    let accuracy = Accuracy.evaluate(&output.true_y, &output.pred_y);
    println!("Test accuracy: {:.4}", accuracy);

    if let Some(history_path) = &args.history_path {
        write_history(history_path, classifier.history())?;
        debug!("History written to {}", history_path);
    }

    if let Some(results_path) = &args.results_path {
        write_results(results_path, &output)?;
        debug!("Results written to {}", results_path);
    }

    Ok(())
}
