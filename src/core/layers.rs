use crate::prelude::*;
use crate::core::activations::{sigmoid_backward, sigmoid_forward};
use crate::core::ops::{add_row, checked_dot, ensure_same_shape, sum_rows};

/// Intermediate results of a forward pass, kept for back propagation.
#[derive(Debug, Clone)]
pub struct ForwardCache {
    pub z1: Array2<f64>,
    pub a1: Array2<f64>,
    pub z2: Array2<f64>,
    pub a2: Array2<f64>,
}

pub fn forward(x: &Array2<f64>, params: &Parameters) -> Result<ForwardCache> {
    // input to hidden
    let z1 = add_row(&checked_dot(x, &params.w1)?, &params.b1)?;
    let a1 = sigmoid_forward(&z1);

    // hidden to output
    let z2 = add_row(&checked_dot(&a1, &params.w2)?, &params.b2)?;
    let a2 = sigmoid_forward(&z2);

    Ok(ForwardCache { z1, a1, z2, a2 })
}

/// Gradients of the half mean squared error cost.
///
/// The output delta is taken as `A2 - Y` without the output sigmoid's
/// derivative, so the update has the same form as a logistic cross-entropy
/// gradient. The hidden delta does carry `A1 ⊙ (1 - A1)`.
pub fn backward(
    x: &Array2<f64>,
    y: &Array2<f64>,
    cache: &ForwardCache,
    params: &Parameters,
) -> Result<Gradients> {
    ensure_same_shape(&cache.a2, y, "prediction vs target")?;
    if x.nrows() != y.nrows() {
        return Err(NNError::ShapeMismatch(format!(
            "{} input rows but {} target rows",
            x.nrows(),
            y.nrows()
        )));
    }
    if x.nrows() == 0 {
        return Err(NNError::EmptyDataset);
    }
    let m = x.nrows() as f64;

    let dz2 = &cache.a2 - y;
    let dw2 = checked_dot(&cache.a1.t().to_owned(), &dz2)? / m;
    let db2 = sum_rows(&dz2) / m;

    let da1 = checked_dot(&dz2, &params.w2.t().to_owned())?;
    ensure_same_shape(&da1, &cache.a1, "hidden delta vs hidden activation")?;
    let dz1 = da1 * sigmoid_backward(&cache.a1);
    let dw1 = checked_dot(&x.t().to_owned(), &dz1)? / m;
    let db1 = sum_rows(&dz1) / m;

    tracing::trace!(
        dw1 = ?dw1.dim(),
        db1 = ?db1.dim(),
        dw2 = ?dw2.dim(),
        db2 = ?db2.dim(),
        "computed gradients"
    );

    Ok(Gradients { dw1, db1, dw2, db2 })
}
