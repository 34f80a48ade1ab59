//! Candidate table types
//!
//! A `Dataset` is the immutable candidates-by-features table the whole
//! engine runs against. It is built once at startup, validated, and then
//! shared read-only for the process lifetime.

use serde::{Deserialize, Serialize};

use super::errors::{DatasetError, DatasetResult};

/// One row of the dataset: a display label plus its binary feature vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Display name used when guessing
    pub label: String,

    /// One value per feature column, each 0 or 1
    pub features: Vec<u8>,
}

impl Candidate {
    pub fn new(label: impl Into<String>, features: Vec<u8>) -> Self {
        Self {
            label: label.into(),
            features,
        }
    }
}

/// Immutable candidates-by-features table.
///
/// Column order is meaningful: the selector breaks ties by first
/// occurrence in column order, and candidate indices are row order.
#[derive(Debug, Clone)]
pub struct Dataset {
    feature_names: Vec<String>,
    candidates: Vec<Candidate>,
}

impl Dataset {
    /// Builds a dataset, validating its structure.
    ///
    /// Rejects empty candidate lists, empty feature lists, duplicate
    /// feature names, non-binary values and rows whose length does not
    /// match the feature schema.
    pub fn new(feature_names: Vec<String>, candidates: Vec<Candidate>) -> DatasetResult<Self> {
        if feature_names.is_empty() {
            return Err(DatasetError::no_features());
        }
        if candidates.is_empty() {
            return Err(DatasetError::empty());
        }

        for (i, name) in feature_names.iter().enumerate() {
            if feature_names[..i].iter().any(|n| n == name) {
                return Err(DatasetError::duplicate_feature(name));
            }
        }

        for (row, candidate) in candidates.iter().enumerate() {
            // Header is line 1, first candidate is line 2
            let line = row + 2;
            if candidate.features.len() != feature_names.len() {
                return Err(DatasetError::ragged_row(
                    line,
                    feature_names.len() + 1,
                    candidate.features.len() + 1,
                ));
            }
            for (col, value) in candidate.features.iter().enumerate() {
                if *value > 1 {
                    return Err(DatasetError::not_binary(
                        line,
                        &feature_names[col],
                        &value.to_string(),
                    ));
                }
            }
        }

        Ok(Self {
            feature_names,
            candidates,
        })
    }

    /// Feature names in column order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Number of feature columns.
    pub fn feature_count(&self) -> usize {
        self.feature_names.len()
    }

    /// Number of candidate rows.
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Name of the feature at `index`.
    pub fn feature_name(&self, index: usize) -> &str {
        &self.feature_names[index]
    }

    /// Column index of a feature by name.
    pub fn feature_index(&self, name: &str) -> Option<usize> {
        self.feature_names.iter().position(|n| n == name)
    }

    /// Feature value (0 or 1) for one candidate.
    pub fn value(&self, candidate: usize, feature: usize) -> u8 {
        self.candidates[candidate].features[feature]
    }

    /// Display label for one candidate.
    pub fn label(&self, candidate: usize) -> &str {
        &self.candidates[candidate].label
    }

    /// All candidate rows.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }
}
