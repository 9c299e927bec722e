//! Fixed-architecture perceptron classifier for 28x28 digit images, trained
//! full-batch with AdamW on top of burn's autodiff backend.

pub mod error;
pub mod evaluate;
pub mod model;
pub mod parsing;
pub mod plot;

pub use error::{Error, Result};
