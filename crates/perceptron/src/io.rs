//! I/O routines for labelled CSV datasets.
//!
//! The expected format is one record per line: a fixed number of numeric
//! feature columns followed by a class-name column, e.g.
//! `5.1,3.5,1.4,0.2,setosa`. There is no header line.

use std::io::BufRead;
use std::path::Path;

use crate::error::PerceptronError;
use crate::types::{Label, Sample};

/// Load a labelled dataset from a CSV file.
///
/// Records whose class column equals `positive_class` become
/// [`Label::Positive`]; every other class name becomes [`Label::Negative`].
/// The first record establishes the feature dimension; later records must
/// match it.
pub fn load_dataset(path: &Path, positive_class: &str) -> Result<Vec<Sample>, PerceptronError> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    load_dataset_from_reader(reader, positive_class)
}

/// Load a labelled dataset from any buffered reader.
pub fn load_dataset_from_reader(
    reader: impl BufRead,
    positive_class: &str,
) -> Result<Vec<Sample>, PerceptronError> {
    let mut samples: Vec<Sample> = Vec::new();
    let mut dimension: Option<usize> = None;

    for (line_idx, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let line_num = line_idx + 1;
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        // Last column is the class name, everything before it is numeric
        let (class_name, feature_fields) = match fields.split_last() {
            Some((class, features)) if !features.is_empty() => (class, features),
            _ => {
                return Err(PerceptronError::ParseError {
                    line: line_num,
                    message: "expected feature columns and a class name".into(),
                });
            }
        };
        if class_name.is_empty() {
            return Err(PerceptronError::ParseError {
                line: line_num,
                message: "missing class name".into(),
            });
        }

        match dimension {
            None => dimension = Some(feature_fields.len()),
            Some(dim) if dim != feature_fields.len() => {
                return Err(PerceptronError::ParseError {
                    line: line_num,
                    message: format!(
                        "expected {} feature columns, got {}",
                        dim,
                        feature_fields.len()
                    ),
                });
            }
            Some(_) => {}
        }

        let mut features = Vec::with_capacity(feature_fields.len());
        for field in feature_fields {
            let value: f64 = field.parse().map_err(|_| PerceptronError::ParseError {
                line: line_num,
                message: format!("invalid feature value: {}", field),
            })?;
            features.push(value);
        }

        let label = if *class_name == positive_class {
            Label::Positive
        } else {
            Label::Negative
        };
        samples.push(Sample::new(label, features));
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("data")
    }

    #[test]
    fn parse_iris() {
        let path = data_dir().join("iris.csv");
        let samples = load_dataset(&path, "setosa").unwrap();
        assert_eq!(samples.len(), 150);
        assert!(samples.iter().all(|s| s.dimension() == 4));

        let positives = samples
            .iter()
            .filter(|s| s.label == Label::Positive)
            .count();
        assert_eq!(positives, 50);

        assert_eq!(samples[0].label, Label::Positive);
        assert_eq!(samples[0].features, vec![5.1, 3.5, 1.4, 0.2]);
    }

    #[test]
    fn positive_class_is_configurable() {
        let path = data_dir().join("iris.csv");
        let samples = load_dataset(&path, "virginica").unwrap();
        let positives = samples
            .iter()
            .filter(|s| s.label == Label::Positive)
            .count();
        assert_eq!(positives, 50);
    }

    #[test]
    fn unknown_positive_class_yields_all_negative() {
        let input = b"1.0,2.0,setosa\n3.0,4.0,virginica\n";
        let samples = load_dataset_from_reader(&input[..], "versicolor").unwrap();
        assert!(samples.iter().all(|s| s.label == Label::Negative));
    }

    #[test]
    fn parse_empty_lines() {
        let input = b"1.0,2.0,setosa\n\n3.0,4.0,virginica\n";
        let samples = load_dataset_from_reader(&input[..], "setosa").unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].label, Label::Negative);
    }

    #[test]
    fn parse_tolerates_field_whitespace() {
        let input = b" 5.1 , 3.5 , 1.4 , 0.2 , setosa \n";
        let samples = load_dataset_from_reader(&input[..], "setosa").unwrap();
        assert_eq!(samples[0].features, vec![5.1, 3.5, 1.4, 0.2]);
        assert_eq!(samples[0].label, Label::Positive);
    }

    #[test]
    fn parse_signed_and_scientific_values() {
        let input = b"-1.5,2e-3,virginica\n";
        let samples = load_dataset_from_reader(&input[..], "setosa").unwrap();
        assert_eq!(samples[0].features, vec![-1.5, 0.002]);
    }

    #[test]
    fn empty_input_yields_empty_dataset() {
        let samples = load_dataset_from_reader(&b""[..], "setosa").unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn parse_error_non_numeric_feature() {
        let input = b"5.1,3.5,abc,0.2,setosa\n";
        let err = load_dataset_from_reader(&input[..], "setosa").unwrap_err();
        let msg = format!("{}", err);
        assert!(msg.contains("line 1"), "error: {}", msg);
        assert!(msg.contains("abc"), "error: {}", msg);
    }

    #[test]
    fn parse_error_column_count_changes() {
        let input = b"5.1,3.5,1.4,0.2,setosa\n6.0,2.7,5.1,virginica\n";
        let err = load_dataset_from_reader(&input[..], "setosa").unwrap_err();
        match err {
            PerceptronError::ParseError { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("expected 4"), "message: {}", message);
            }
            other => panic!("expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn parse_error_single_column() {
        let input = b"setosa\n";
        assert!(load_dataset_from_reader(&input[..], "setosa").is_err());
    }

    #[test]
    fn parse_error_missing_class_name() {
        let input = b"5.1,3.5,1.4,0.2,\n";
        let err = load_dataset_from_reader(&input[..], "setosa").unwrap_err();
        assert!(format!("{}", err).contains("missing class name"));
    }
}
