use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use super::dataset::Dataset;
use crate::error::{Result, TrainError};

/// Loads a whitespace-delimited numeric dataset from `path`.
///
/// One example per line; the last token of a line is the label, every
/// preceding token is a feature. Blank lines are skipped wherever they
/// appear, so a trailing newline does not produce a phantom example.
///
/// # Errors
/// Returns `TrainError::Io` when the file cannot be opened or read, and the
/// parse errors documented on [`parse`].
pub fn load(path: &Path) -> Result<Dataset> {
    let file = File::open(path)?;
    let dataset = parse(BufReader::new(file))?;
    info!(
        "loaded {}: {} examples, {} features",
        path.display(),
        dataset.examples(),
        dataset.feature_count()
    );
    Ok(dataset)
}

/// Parses dataset text from any buffered reader in a single streaming pass.
///
/// The raw column count is fixed by the first data line; every later line
/// must match it exactly.
///
/// # Errors
/// - `TrainError::Parse` for a token that is not a valid float.
/// - `TrainError::RowLength` for a row narrower or wider than the first row.
/// - `TrainError::InvalidInput` when no data rows exist or a row has no
///   feature columns.
pub fn parse<R: BufRead>(reader: R) -> Result<Dataset> {
    let mut features = Vec::new();
    let mut labels = Vec::new();
    let mut columns: Option<usize> = None;
    let mut row = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;

        row.clear();
        for token in line.split_ascii_whitespace() {
            let value: f32 = token.parse().map_err(|_| TrainError::Parse {
                line: lineno,
                token: token.to_string(),
            })?;
            row.push(value);
        }

        if row.is_empty() {
            debug!("skipping blank line {lineno}");
            continue;
        }

        match columns {
            None => {
                if row.len() < 2 {
                    return Err(TrainError::InvalidInput(
                        "a data row needs at least one feature and a label",
                    ));
                }
                columns = Some(row.len());
            }
            Some(expected) if row.len() != expected => {
                return Err(TrainError::RowLength {
                    line: lineno,
                    got: row.len(),
                    expected,
                });
            }
            Some(_) => {}
        }

        // Non-empty by the checks above.
        if let Some((&label, feature_row)) = row.split_last() {
            features.extend_from_slice(feature_row);
            labels.push(label);
        }
    }

    let columns = columns.ok_or(TrainError::InvalidInput("dataset contains no examples"))?;
    let examples = labels.len();
    Ok(Dataset::new(features, labels.into(), columns - 1, examples))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_features_and_consumes_label_column() {
        let ds = parse("1 2 0\n3 4 1\n".as_bytes()).unwrap();
        assert_eq!(ds.examples(), 2);
        assert_eq!(ds.feature_count(), 2);
        assert_eq!(ds.row(0), &[1.0, 2.0]);
        assert_eq!(ds.row(1), &[3.0, 4.0]);
        assert_eq!(ds.labels(), &[0.0, 1.0]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let ds = parse("1 0\n\n2 1\n\n".as_bytes()).unwrap();
        assert_eq!(ds.examples(), 2);
        assert_eq!(ds.labels(), &[0.0, 1.0]);
    }

    #[test]
    fn malformed_token_is_a_parse_error() {
        let err = parse("1 2 0\n3 x 1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, TrainError::Parse { line: 2, ref token } if token == "x"));
    }

    #[test]
    fn short_row_is_rejected() {
        let err = parse("1 2 0\n3 1\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            TrainError::RowLength {
                line: 2,
                got: 2,
                expected: 3
            }
        ));
    }

    #[test]
    fn wide_row_is_rejected() {
        let err = parse("1 0\n1 2 0\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            TrainError::RowLength {
                line: 2,
                got: 3,
                expected: 2
            }
        ));
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = parse("\n\n".as_bytes()).unwrap_err();
        assert!(matches!(err, TrainError::InvalidInput(_)));
    }

    #[test]
    fn label_only_row_is_rejected() {
        let err = parse("1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, TrainError::InvalidInput(_)));
    }
}
