use plotters::drawing::DrawingAreaErrorKind;
use plotters::backend::{BitMapBackend, DrawingBackend};
use thiserror::Error;

type PlotError = DrawingAreaErrorKind<<BitMapBackend<'static> as DrawingBackend>::ErrorType>;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to draw plot: {0}")]
    Plot(#[from] PlotError),

    #[error("failed to load config: {0}")]
    Config(#[from] burn::config::ConfigError),

    /// A dataset row that could not be turned into a labelled sample
    #[error("malformed record {record}: {reason}")]
    Record { record: usize, reason: String },

    #[error("expected {expected} features per sample, got {actual}")]
    FeatureWidth { expected: usize, actual: usize },

    #[error("{samples} samples but {labels} labels")]
    LengthMismatch { samples: usize, labels: usize },

    #[error("label {label} is outside of [0, {num_classes})")]
    Label { label: usize, num_classes: usize },

    #[error("cannot train on an empty batch")]
    EmptyBatch,

    #[error("no dataset attached to the classifier")]
    MissingData,
}
