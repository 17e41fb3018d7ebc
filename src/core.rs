// src/core.rs
pub mod activations;
pub mod encoding;
pub mod layers;
pub mod losses;
pub mod metrics;
pub mod normalization;
pub mod ops;
pub mod optimizers;
pub mod output;
pub mod params;

// Re-export commonly used items
pub use encoding::one_hot;
pub use layers::{backward, forward, ForwardCache};
pub use losses::cost;
pub use metrics::{accuracy, predict_classes};
pub use normalization::{MinMaxStats, Normalization};
pub use optimizers::gradient_step;
pub use params::{Gradients, Parameters};
