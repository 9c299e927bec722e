use burn::{
    module::AutodiffModule,
    nn::loss::CrossEntropyLossConfig,
    optim::{GradientsParams, Optimizer},
    tensor::{
        backend::{AutodiffBackend, Backend},
        ElementConversion, Int, Tensor, TensorData,
    },
};
use log::info;
use ndarray::Array2;

use super::architecture::{Mlp, INPUT_DIM, NUM_CLASSES};
use super::config::ClassifierConfig;
use super::history::TrainingHistory;
use super::{Model, RunOutput};
use crate::error::{Error, Result};
use crate::evaluate::{Accuracy, Evaluate};
use crate::parsing::{DataSplit, Dataset};
use crate::plot;

/// The perceptron together with its training configuration, device and data
pub struct Classifier<B: AutodiffBackend> {
    config: ClassifierConfig,
    device: B::Device,
    model: Mlp<B>,
    history: TrainingHistory,
    data: Option<DataSplit>,
}

impl<B: AutodiffBackend> Classifier<B> {
    /// Construct the network on `device`. Parameters are initialized here, once.
    pub fn new(config: ClassifierConfig, device: B::Device) -> Self {
        let model = Mlp::new(&device);

        Self {
            config,
            device,
            model,
            history: TrainingHistory::default(),
            data: None,
        }
    }

    /// Attach the split consumed by `run`
    pub fn with_data(mut self, data: DataSplit) -> Self {
        self.data = Some(data);
        self
    }

    /// History of the most recent `train` call
    pub fn history(&self) -> &TrainingHistory {
        &self.history
    }

    fn run_split(&mut self, data: &DataSplit) -> Result<RunOutput> {
        let Dataset { data: train_x, target: train_y } = &data.train;
        let Dataset { data: test_x, target: test_y } = &data.test;

        info!("--start training...");
        self.train(train_x, train_y)?;

        info!("--start testing...");
        let pred_y = self.test(test_x)?;

        Ok(RunOutput {
            pred_y,
            true_y: test_y.clone(),
        })
    }
}

impl<B: AutodiffBackend> Model for Classifier<B> {
    fn train(&mut self, data: &Array2<f32>, target: &[usize]) -> Result<()> {
        check_features(data)?;
        check_labels(data, target)?;
        if target.is_empty() {
            return Err(Error::EmptyBatch);
        }

        // The whole dataset is a single batch
        let inputs = features_to_tensor::<B>(data, &self.device);
        let targets = labels_to_tensor::<B>(target, &self.device);

        let mut optim = self.config.optimizer.init::<B, Mlp<B>>();
        let loss_fn = CrossEntropyLossConfig::new().init(&self.device);
        let evaluator = Accuracy;

        self.history = TrainingHistory::with_capacity(self.config.max_epoch);

        for epoch in 0..self.config.max_epoch {
            let output = self.model.forward(inputs.clone());
            // The softmax output goes through the logits path of the loss
            let loss = loss_fn.forward(output.clone(), targets.clone());

            let grads = GradientsParams::from_grads(loss.backward(), &self.model);
            self.model = optim.step(self.config.learning_rate, self.model.clone(), grads);

            let predicted = hard_labels(output);
            let accuracy = evaluator.evaluate(target, &predicted);
            let loss = loss.into_scalar().elem::<f64>();

            self.history.push(epoch, accuracy, loss);

            if self.config.log_interval > 0 && epoch % self.config.log_interval == 0 {
                info!("Epoch: {} Accuracy: {:.4} Loss: {:.6}", epoch, accuracy, loss);
            }
        }

        plot::save_history(&self.history, &self.config.result_dir)?;

        Ok(())
    }

    fn test(&self, data: &Array2<f32>) -> Result<Vec<usize>> {
        check_features(data)?;
        if data.nrows() == 0 {
            return Ok(Vec::new());
        }

        let model = self.model.valid();
        let inputs = features_to_tensor::<B::InnerBackend>(data, &self.device);

        Ok(hard_labels(model.forward(inputs)))
    }

    fn run(&mut self) -> Result<RunOutput> {
        info!("method running...");

        let data = self.data.take().ok_or(Error::MissingData)?;
        let output = self.run_split(&data);
        self.data = Some(data);

        output
    }
}

fn check_features(data: &Array2<f32>) -> Result<()> {
    if data.ncols() != INPUT_DIM {
        return Err(Error::FeatureWidth {
            expected: INPUT_DIM,
            actual: data.ncols(),
        });
    }

    Ok(())
}

fn check_labels(data: &Array2<f32>, target: &[usize]) -> Result<()> {
    if data.nrows() != target.len() {
        return Err(Error::LengthMismatch {
            samples: data.nrows(),
            labels: target.len(),
        });
    }

    match target.iter().find(|&&label| label >= NUM_CLASSES) {
        Some(&label) => Err(Error::Label {
            label,
            num_classes: NUM_CLASSES,
        }),
        None => Ok(()),
    }
}

fn features_to_tensor<B: Backend>(data: &Array2<f32>, device: &B::Device) -> Tensor<B, 2> {
    let (rows, cols) = data.dim();
    let values: Vec<f32> = data.iter().copied().collect();

    Tensor::from_data(TensorData::new(values, [rows, cols]), device)
}

fn labels_to_tensor<B: Backend>(target: &[usize], device: &B::Device) -> Tensor<B, 1, Int> {
    let values: Vec<i64> = target.iter().map(|&label| label as i64).collect();

    Tensor::from_data(TensorData::new(values, [target.len()]), device)
}

/// Index of the most probable class of every row
fn hard_labels<B: Backend>(probabilities: Tensor<B, 2>) -> Vec<usize> {
    let [batch_size, _] = probabilities.dims();

    probabilities
        .argmax(1)
        .reshape([batch_size])
        .into_data()
        .iter::<i64>()
        .map(|label| label as usize)
        .collect()
}
