use crate::prelude::*;

pub fn sigmoid_forward(z: &Array2<f64>) -> Array2<f64> {
    z.mapv(sigmoid)
}

/// Sigmoid derivative expressed through the activation itself: `a ⊙ (1 - a)`.
pub fn sigmoid_backward(a: &Array2<f64>) -> Array2<f64> {
    a.mapv(|a| a * (1.0 - a))
}

#[inline]
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
