use crate::prelude::*;

/// Per-column extrema of the training features.
///
/// Fitted once on the training partition and reapplied unchanged to any other
/// partition, so held-out samples may land outside [0, 1].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MinMaxStats {
    pub min: Array1<f64>,
    pub max: Array1<f64>,
}

impl MinMaxStats {
    /// Fails with `DegenerateFeature` when a column is constant: its range is
    /// zero and rescaling would divide by it. NaN or infinite entries fail
    /// with `NonFiniteFeature`, since the min/max fold would skip them.
    pub fn fit(features: &Array2<f64>) -> Result<Self> {
        if features.nrows() == 0 {
            return Err(NNError::EmptyDataset);
        }
        if let Some(((row, column), _)) = features.indexed_iter().find(|(_, x)| !x.is_finite()) {
            return Err(NNError::NonFiniteFeature { row, column });
        }
        let min = features.fold_axis(Axis(0), f64::INFINITY, |&acc, &x| acc.min(x));
        let max = features.fold_axis(Axis(0), f64::NEG_INFINITY, |&acc, &x| acc.max(x));

        for (column, (lo, hi)) in min.iter().zip(max.iter()).enumerate() {
            if hi == lo {
                return Err(NNError::DegenerateFeature { column, value: *lo });
            }
        }
        Ok(Self { min, max })
    }

    pub fn num_features(&self) -> usize {
        self.min.len()
    }

    pub fn range(&self) -> Array1<f64> {
        &self.max - &self.min
    }

    pub fn transform(&self, features: &Array2<f64>) -> Result<Array2<f64>> {
        features.to_unity(self)
    }
}

pub trait Normalization {
    fn to_unity(&self, stats: &MinMaxStats) -> Result<Array2<f64>>;
}

impl Normalization for Array2<f64> {
    fn to_unity(&self, stats: &MinMaxStats) -> Result<Array2<f64>> {
        check_width(self, stats)?;
        Ok((self - &stats.min) / &stats.range())
    }
}

fn check_width(features: &Array2<f64>, stats: &MinMaxStats) -> Result<()> {
    if features.ncols() != stats.num_features() {
        return Err(NNError::ShapeMismatch(format!(
            "features have {} columns but normalization was fitted on {}",
            features.ncols(),
            stats.num_features()
        )));
    }
    Ok(())
}
