use ndarray::Array2;

pub mod mnist;

/// Labelled samples, one row of `data` per entry of `target`
#[derive(Debug, Clone)]
pub struct Dataset {
    pub data: Array2<f32>,
    pub target: Vec<usize>,
}

/// Train/test split consumed by `Model::run`
#[derive(Debug, Clone)]
pub struct DataSplit {
    pub train: Dataset,
    pub test: Dataset,
}
