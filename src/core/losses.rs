use crate::prelude::*;
use crate::core::ops::ensure_same_shape;

/// `sum((A2 - Y)^2) / (2n)`, one half of the mean squared error per sample.
pub fn cost(a2: &Array2<f64>, y: &Array2<f64>) -> Result<f64> {
    ensure_same_shape(a2, y, "prediction vs target")?;
    if y.nrows() == 0 {
        return Err(NNError::EmptyDataset);
    }
    let m = y.nrows() as f64;
    Ok((a2 - y).mapv(|d| d * d).sum() / (2.0 * m))
}
