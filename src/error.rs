use std::{error::Error, fmt, io};

/// The crate's result type.
pub type Result<T> = std::result::Result<T, TrainError>;

/// Failures raised while loading a dataset or computing gradients.
#[derive(Debug)]
pub enum TrainError {
    Io(io::Error),
    /// A whitespace-delimited token could not be parsed as a float.
    Parse {
        line: usize,
        token: String,
    },
    /// A data row carried a different number of tokens than the first row.
    RowLength {
        line: usize,
        got: usize,
        expected: usize,
    },
    /// A buffer length violated a shape invariant (e.g. mismatched lengths).
    ShapeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// An input is invalid for semantic or domain reasons.
    InvalidInput(&'static str),
}

impl fmt::Display for TrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainError::Io(e) => write!(f, "io error: {e}"),
            TrainError::Parse { line, token } => {
                write!(f, "invalid numeric token {token:?} at line {line}")
            }
            TrainError::RowLength {
                line,
                got,
                expected,
            } => write!(
                f,
                "row length mismatch at line {line}: got {got} tokens, expected {expected}"
            ),
            TrainError::ShapeMismatch {
                what,
                got,
                expected,
            } => {
                write!(f, "shape mismatch for {what}: got {got}, expected {expected}")
            }
            TrainError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for TrainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TrainError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for TrainError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
