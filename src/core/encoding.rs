use crate::prelude::*;

/// Indicator encoding of class labels: row `i` holds a single `1.0` at column `labels[i]`.
pub fn one_hot(labels: &[usize], num_classes: usize) -> Result<Array2<f64>> {
    let mut encoded = Array2::<f64>::zeros((labels.len(), num_classes));
    for (index, &label) in labels.iter().enumerate() {
        if label >= num_classes {
            return Err(NNError::LabelOutOfRange {
                index,
                label,
                num_classes,
            });
        }
        encoded[[index, label]] = 1.0;
    }
    Ok(encoded)
}
