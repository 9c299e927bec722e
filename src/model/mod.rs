use ndarray::Array2;

use crate::error::Result;

pub mod architecture;
pub mod classifier;
pub mod config;
pub mod history;

/// Predictions on the test split next to the labels they should match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub pred_y: Vec<usize>,
    pub true_y: Vec<usize>,
}

pub trait Model {
    /// Fit the model on `data` (one sample per row) and its labels
    fn train(&mut self, data: &Array2<f32>, target: &[usize]) -> Result<()>;
    /// Predict one label per row of `data`
    fn test(&self, data: &Array2<f32>) -> Result<Vec<usize>>;
    /// Train on the attached train split, then predict the test split
    fn run(&mut self) -> Result<RunOutput>;
}
