pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod models;
pub mod prelude;
pub mod utils;

// Re-export types
pub use crate::core::{Gradients, MinMaxStats, Parameters};
pub use crate::error::{NNError, Result};
pub use crate::models::{train_and_evaluate, Evaluation, Trainer, TrainingRun, TwoLayerNet};

pub mod plot {
    pub mod plot_cost_history;
}
