pub use serde::{Serialize, Deserialize};

pub use ndarray::*;
pub use ndarray_rand::RandomExt;
pub use ndarray_rand::rand_distr::Normal;

pub use crate::error::*;
pub use crate::config::{Config, ModelConfig, TrainConfig, SplitConfig};
pub use crate::data::{Dataset, Split};
pub use crate::models::{train_and_evaluate, Evaluation, Trainer, TrainingRun, TwoLayerNet};

// Internal re-exports
pub use crate::core::{
    accuracy,
    backward,
    cost,
    forward,
    gradient_step,
    one_hot,
    predict_classes,
    ForwardCache,
    Gradients,
    MinMaxStats,
    Normalization,
    Parameters,
};
