//! Shape-checked matrix primitives.
//!
//! ndarray panics on an incompatible `dot` and broadcasts freely on `+`, so the
//! network code goes through these helpers instead and gets an
//! `NNError::ShapeMismatch` back.
use crate::prelude::*;

/// `a · b`, requires `a.ncols() == b.nrows()`.
pub fn checked_dot(a: &Array2<f64>, b: &Array2<f64>) -> Result<Array2<f64>> {
    if a.ncols() != b.nrows() {
        return Err(NNError::ShapeMismatch(format!(
            "cannot multiply {:?} by {:?}",
            a.dim(),
            b.dim()
        )));
    }
    Ok(a.dot(b))
}

/// Adds a `1×k` row to every row of an `n×k` matrix.
pub fn add_row(m: &Array2<f64>, row: &Array2<f64>) -> Result<Array2<f64>> {
    if row.nrows() != 1 || row.ncols() != m.ncols() {
        return Err(NNError::ShapeMismatch(format!(
            "cannot add row {:?} to matrix {:?}",
            row.dim(),
            m.dim()
        )));
    }
    Ok(m + row)
}

/// Column-wise sum of an `n×k` matrix, kept as a `1×k` row.
pub fn sum_rows(m: &Array2<f64>) -> Array2<f64> {
    m.sum_axis(Axis(0)).insert_axis(Axis(0))
}

pub fn ensure_same_shape(a: &Array2<f64>, b: &Array2<f64>, what: &str) -> Result<()> {
    if a.dim() != b.dim() {
        return Err(NNError::ShapeMismatch(format!(
            "{}: {:?} vs {:?}",
            what,
            a.dim(),
            b.dim()
        )));
    }
    Ok(())
}
