use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum NNError {
    // Numeric errors
    ShapeMismatch(String),
    LabelOutOfRange {
        index: usize,
        label: usize,
        num_classes: usize,
    },
    DegenerateFeature {
        column: usize,
        value: f64,
    },
    NonFiniteFeature {
        row: usize,
        column: usize,
    },

    // Configuration / input errors
    InvalidConfiguration(String),
    EmptyDataset,
    DatasetParse(String),

    // File operations
    IoError(std::io::Error),
    CsvError(csv::Error),
    JsonError(serde_json::Error),
    PlotError(String),
}

impl fmt::Display for NNError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NNError::ShapeMismatch(msg) => write!(f, "Shape mismatch: {}", msg),
            NNError::LabelOutOfRange { index, label, num_classes } => write!(
                f,
                "Label out of range: sample {} has label {} but only {} classes are declared",
                index, label, num_classes
            ),
            NNError::DegenerateFeature { column, value } => write!(
                f,
                "Degenerate feature: column {} is constant ({}) in the training data, min-max range is zero",
                column, value
            ),
            NNError::NonFiniteFeature { row, column } => write!(
                f,
                "Non-finite feature: row {} column {} is NaN or infinite",
                row, column
            ),
            NNError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            NNError::EmptyDataset => write!(f, "Dataset has no samples"),
            NNError::DatasetParse(msg) => write!(f, "Failed to parse dataset: {}", msg),
            NNError::IoError(err) => write!(f, "I/O error: {}", err),
            NNError::CsvError(err) => write!(f, "CSV error: {}", err),
            NNError::JsonError(err) => write!(f, "JSON error: {}", err),
            NNError::PlotError(msg) => write!(f, "Plot error: {}", msg),
        }
    }
}

impl From<std::io::Error> for NNError {
    fn from(err: std::io::Error) -> NNError {
        NNError::IoError(err)
    }
}

impl From<csv::Error> for NNError {
    fn from(err: csv::Error) -> NNError {
        NNError::CsvError(err)
    }
}

impl From<serde_json::Error> for NNError {
    fn from(err: serde_json::Error) -> NNError {
        NNError::JsonError(err)
    }
}

impl Error for NNError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NNError::IoError(err) => Some(err),
            NNError::CsvError(err) => Some(err),
            NNError::JsonError(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, NNError>;
