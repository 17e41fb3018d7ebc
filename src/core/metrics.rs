use crate::prelude::*;

/// Row-wise argmax. Ties go to the first column attaining the maximum.
pub fn predict_classes(scores: &Array2<f64>) -> Vec<usize> {
    scores
        .outer_iter()
        .map(|row| {
            let mut best = 0;
            for (k, &v) in row.iter().enumerate().skip(1) {
                if v > row[best] {
                    best = k;
                }
            }
            best
        })
        .collect()
}

/// Percentage of predictions equal to the ground truth, in [0, 100].
pub fn accuracy(predictions: &[usize], labels: &[usize]) -> Result<f64> {
    if predictions.len() != labels.len() {
        return Err(NNError::ShapeMismatch(format!(
            "{} predictions for {} labels",
            predictions.len(),
            labels.len()
        )));
    }
    if labels.is_empty() {
        return Err(NNError::EmptyDataset);
    }
    let correct = predictions
        .iter()
        .zip(labels.iter())
        .filter(|(p, l)| p == l)
        .count();
    Ok(correct as f64 / labels.len() as f64 * 100.0)
}
