use crate::prelude::*;
use csv::{ReaderBuilder, StringRecord, Trim};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::io::Read;
use std::path::Path;

/// Labeled tabular samples: one feature row and one class index per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub features: Array2<f64>,
    pub labels: Vec<usize>,
    pub class_names: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Split {
    pub train: Dataset,
    pub test: Dataset,
}

impl Dataset {
    pub fn new(features: Array2<f64>, labels: Vec<usize>, class_names: Vec<String>) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(NNError::ShapeMismatch(format!(
                "{} feature rows but {} labels",
                features.nrows(),
                labels.len()
            )));
        }
        let num_classes = class_names.len();
        if let Some((index, &label)) = labels.iter().enumerate().find(|&(_, &l)| l >= num_classes) {
            return Err(NNError::LabelOutOfRange {
                index,
                label,
                num_classes,
            });
        }
        Ok(Self {
            features,
            labels,
            class_names,
        })
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads a CSV with a header row. Every column but the last is a numeric
    /// feature; the last column holds the class, either as an integer index
    /// or as a name. Names are numbered in order of first appearance.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut values: Vec<f64> = Vec::new();
        let mut classes: Vec<(u64, String)> = Vec::new();
        let mut width: Option<usize> = None;

        for record in rdr.records() {
            let record = record?;
            let line = line_of(&record);
            if record.len() < 2 {
                return Err(NNError::DatasetParse(format!(
                    "line {}: expected features followed by a class, got {} fields",
                    line,
                    record.len()
                )));
            }
            let n_features = record.len() - 1;
            match width {
                None => width = Some(n_features),
                Some(w) if w != n_features => {
                    return Err(NNError::DatasetParse(format!(
                        "line {}: expected {} features, got {}",
                        line, w, n_features
                    )));
                }
                Some(_) => {}
            }
            for field in record.iter().take(n_features) {
                let value: f64 = field.parse().map_err(|_| {
                    NNError::DatasetParse(format!("line {}: '{}' is not a number", line, field))
                })?;
                if !value.is_finite() {
                    return Err(NNError::DatasetParse(format!(
                        "line {}: feature value '{}' is not finite",
                        line, field
                    )));
                }
                values.push(value);
            }
            classes.push((line, record[n_features].to_string()));
        }

        let width = width.ok_or(NNError::EmptyDataset)?;
        let (labels, class_names) = index_classes(&classes)?;
        let features = Array2::from_shape_vec((classes.len(), width), values)
            .map_err(|e| NNError::ShapeMismatch(e.to_string()))?;

        tracing::debug!(
            samples = classes.len(),
            features = width,
            classes = class_names.len(),
            "loaded dataset"
        );
        Self::new(features, labels, class_names)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn num_features(&self) -> usize {
        self.features.ncols()
    }

    pub fn num_classes(&self) -> usize {
        self.class_names.len()
    }

    /// Sub-dataset made of the given rows, in the given order.
    pub fn select(&self, indices: &[usize]) -> Dataset {
        Dataset {
            features: self.features.select(Axis(0), indices),
            labels: indices.iter().map(|&i| self.labels[i]).collect(),
            class_names: self.class_names.clone(),
        }
    }

    /// Shuffles the row indices with a seeded rng and holds out the first
    /// `ceil(len * test_size)` of them as the test partition.
    pub fn train_test_split(&self, test_size: f64, random_state: u64) -> Result<Split> {
        if !(test_size > 0.0 && test_size < 1.0) {
            return Err(NNError::InvalidConfiguration(format!(
                "test_size must lie in (0, 1), got {}",
                test_size
            )));
        }
        if self.is_empty() {
            return Err(NNError::EmptyDataset);
        }
        let n = self.len();
        let n_test = (n as f64 * test_size).ceil() as usize;
        if n_test == 0 || n_test >= n {
            return Err(NNError::InvalidConfiguration(format!(
                "test_size {} leaves an empty partition for {} samples",
                test_size, n
            )));
        }

        let mut indices: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(random_state);
        indices.shuffle(&mut rng);

        let (test_idx, train_idx) = indices.split_at(n_test);
        Ok(Split {
            train: self.select(train_idx),
            test: self.select(test_idx),
        })
    }
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

/// Integer class columns keep their values; any non-integer field switches
/// the whole column to names numbered in order of first appearance.
fn index_classes(classes: &[(u64, String)]) -> Result<(Vec<usize>, Vec<String>)> {
    let numeric: Option<Vec<i64>> = classes.iter().map(|(_, c)| c.parse().ok()).collect();
    if let Some(values) = numeric {
        let mut labels = Vec::with_capacity(values.len());
        for (&(line, _), &value) in classes.iter().zip(values.iter()) {
            let label = usize::try_from(value).map_err(|_| {
                NNError::DatasetParse(format!("line {}: class label {} is negative", line, value))
            })?;
            labels.push(label);
        }
        let num_classes = labels.iter().max().map_or(0, |m| m + 1);
        let names = (0..num_classes).map(|k| k.to_string()).collect();
        return Ok((labels, names));
    }

    let mut names: Vec<String> = Vec::new();
    let labels = classes
        .iter()
        .map(|(_, c)| match names.iter().position(|n| n == c) {
            Some(k) => k,
            None => {
                names.push(c.clone());
                names.len() - 1
            }
        })
        .collect();
    Ok((labels, names))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
sepal_length,sepal_width,petal_length,petal_width,species
5.1,3.5,1.4,0.2,Iris-setosa
7.0,3.2,4.7,1.4,Iris-versicolor
6.3,3.3,6.0,2.5,Iris-virginica
4.9,3.0,1.4,0.2,Iris-setosa
";

    #[test]
    fn test_from_reader_names() {
        let ds = Dataset::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.num_features(), 4);
        assert_eq!(ds.labels, vec![0, 1, 2, 0]);
        assert_eq!(ds.class_names, vec!["Iris-setosa", "Iris-versicolor", "Iris-virginica"]);
        assert_eq!(ds.features.row(1).to_vec(), vec![7.0, 3.2, 4.7, 1.4]);
    }

    #[test]
    fn test_from_reader_numeric_labels() {
        let text = "a,b,label\n1.0,2.0,2\n3.0,4.0,0\n";
        let ds = Dataset::from_reader(text.as_bytes()).unwrap();
        assert_eq!(ds.labels, vec![2, 0]);
        assert_eq!(ds.num_classes(), 3);
    }

    #[test]
    fn test_from_reader_rejects_negative_label() {
        let text = "a,b,label\n1.0,2.0,2\n3.0,4.0,0\n5.0,6.0,-1\n";
        match Dataset::from_reader(text.as_bytes()) {
            Err(NNError::DatasetParse(msg)) => {
                assert!(msg.contains("line 4"), "{}", msg);
                assert!(msg.contains("-1"), "{}", msg);
            }
            other => panic!("expected a parse error, got {:?}", other),
        }

        // a name anywhere in the column still selects name mapping
        let mixed = "a,b,label\n1.0,2.0,2\n3.0,4.0,setosa\n";
        let ds = Dataset::from_reader(mixed.as_bytes()).unwrap();
        assert_eq!(ds.labels, vec![0, 1]);
        assert_eq!(ds.class_names, vec!["2", "setosa"]);
    }

    #[test]
    fn test_from_reader_rejects_non_finite_features() {
        for text in [
            "a,b,label\n1.0,2.0,0\n3.0,NaN,1\n",
            "a,b,label\n1.0,inf,0\n3.0,4.0,1\n",
            "a,b,label\n1.0,2.0,0\n-inf,4.0,1\n",
        ] {
            assert!(matches!(
                Dataset::from_reader(text.as_bytes()),
                Err(NNError::DatasetParse(_))
            ));
        }
    }

    #[test]
    fn test_from_reader_errors() {
        let bad_number = "a,b,label\n1.0,x,0\n";
        assert!(matches!(
            Dataset::from_reader(bad_number.as_bytes()),
            Err(NNError::DatasetParse(_))
        ));

        let empty = "a,b,label\n";
        assert!(matches!(
            Dataset::from_reader(empty.as_bytes()),
            Err(NNError::EmptyDataset)
        ));
    }

    #[test]
    fn test_new_checks_labels() {
        let features = Array2::zeros((2, 4));
        let names = vec!["a".to_string(), "b".to_string()];
        assert!(matches!(
            Dataset::new(features.clone(), vec![0, 2], names.clone()),
            Err(NNError::LabelOutOfRange { index: 1, label: 2, num_classes: 2 })
        ));
        assert!(Dataset::new(features, vec![0], names).is_err());
    }

    #[test]
    fn test_train_test_split() {
        let features = Array2::from_shape_fn((10, 2), |(i, j)| (i * 2 + j) as f64);
        let labels = (0..10).map(|i| i % 3).collect();
        let names = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let ds = Dataset::new(features, labels, names).unwrap();

        let split = ds.train_test_split(0.2, 50).unwrap();
        assert_eq!(split.train.len(), 8);
        assert_eq!(split.test.len(), 2);

        // every sample lands in exactly one partition, rows keep their labels
        let mut seen: Vec<usize> = split
            .train
            .features
            .outer_iter()
            .chain(split.test.features.outer_iter())
            .map(|row| (row[0] / 2.0) as usize)
            .collect();
        seen.sort();
        assert_eq!(seen, (0..10).collect::<Vec<_>>());
        for part in [&split.train, &split.test] {
            for (row, &label) in part.features.outer_iter().zip(part.labels.iter()) {
                assert_eq!((row[0] / 2.0) as usize % 3, label);
            }
        }

        let again = ds.train_test_split(0.2, 50).unwrap();
        assert_eq!(again.test, split.test);
    }

    #[test]
    fn test_train_test_split_rejects_bad_size() {
        let ds = Dataset::new(Array2::zeros((3, 1)), vec![0, 0, 0], vec!["a".to_string()]).unwrap();
        assert!(ds.train_test_split(0.0, 1).is_err());
        assert!(ds.train_test_split(1.0, 1).is_err());
        assert!(ds.train_test_split(0.99, 1).is_err());
    }

    #[test]
    fn test_train_test_split_rejects_empty_dataset() {
        let ds = Dataset::new(Array2::zeros((0, 2)), vec![], vec!["a".to_string()]).unwrap();
        assert!(ds.is_empty());
        assert!(matches!(ds.train_test_split(0.2, 1), Err(NNError::EmptyDataset)));
    }
}
