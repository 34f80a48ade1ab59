//! CSV dataset loader
//!
//! The on-disk format mirrors the table shape the engine expects: a header
//! row `label,<feature>,...` followed by one row per candidate, each value
//! a literal `0` or `1`. Fields are comma-separated and trimmed; there is
//! no quoting. Any malformation is fatal at load.

use std::fs;
use std::path::Path;

use super::errors::{DatasetError, DatasetResult};
use super::types::{Candidate, Dataset};

/// Loads and validates a dataset from a CSV file.
pub fn load_dataset(path: &Path) -> DatasetResult<Dataset> {
    let content =
        fs::read_to_string(path).map_err(|e| DatasetError::io(path.display(), &e))?;
    parse_dataset(&content, &path.display().to_string())
}

/// Parses CSV content into a validated dataset.
///
/// `source` only feeds error messages.
pub fn parse_dataset(content: &str, source: &str) -> DatasetResult<Dataset> {
    let mut lines = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header) = lines.next().ok_or_else(|| DatasetError::missing_header(source))?;
    let mut columns = header.split(',').map(str::trim);

    // First column is the label; its header name is not significant
    let label_column = columns.next().ok_or_else(|| DatasetError::missing_header(source))?;
    if label_column.is_empty() {
        return Err(DatasetError::missing_header(source));
    }
    let feature_names: Vec<String> = columns.map(|c| c.to_string()).collect();
    if feature_names.is_empty() {
        return Err(DatasetError::no_features());
    }

    let mut candidates = Vec::new();
    for (index, line) in lines {
        let line_no = index + 1;
        let mut fields = line.split(',').map(str::trim);

        let label = match fields.next() {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => {
                return Err(DatasetError::ragged_row(line_no, feature_names.len() + 1, 0));
            }
        };

        let mut features = Vec::with_capacity(feature_names.len());
        for (col, field) in fields.enumerate() {
            if col >= feature_names.len() {
                return Err(DatasetError::ragged_row(
                    line_no,
                    feature_names.len() + 1,
                    col + 2,
                ));
            }
            let value = match field {
                "0" => 0,
                "1" => 1,
                other => {
                    return Err(DatasetError::not_binary(line_no, &feature_names[col], other));
                }
            };
            features.push(value);
        }
        if features.len() != feature_names.len() {
            return Err(DatasetError::ragged_row(
                line_no,
                feature_names.len() + 1,
                features.len() + 1,
            ));
        }

        candidates.push(Candidate::new(label, features));
    }

    Dataset::new(feature_names, candidates)
}
