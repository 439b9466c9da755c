//! Fitted Gaussian Naive Bayes parameters.

use crate::error::{IntentError, Result};
use crate::label::Label;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Parameters of a fitted Gaussian Naive Bayes classifier.
///
/// Tables are indexed `[label][feature]` with rows in [`Label::ALL`] order.
/// Standard deviations are population statistics. A label absent from the
/// training set has a count of 0 and NaN mean and standard deviation.
///
/// The model is immutable once produced by [`fit`](super::fit); it can be
/// shared freely across threads for prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaussianModel {
    #[serde(with = "nan_tables")]
    means: [Vec<f64>; Label::COUNT],
    #[serde(with = "nan_tables")]
    stdevs: [Vec<f64>; Label::COUNT],
    priors: [f64; Label::COUNT],
    counts: [usize; Label::COUNT],
    n_features: usize,
    n_examples: usize,
}

impl GaussianModel {
    pub(crate) fn from_parts(
        means: [Vec<f64>; Label::COUNT],
        stdevs: [Vec<f64>; Label::COUNT],
        priors: [f64; Label::COUNT],
        counts: [usize; Label::COUNT],
        n_features: usize,
        n_examples: usize,
    ) -> Self {
        Self {
            means,
            stdevs,
            priors,
            counts,
            n_features,
            n_examples,
        }
    }

    /// Per-feature means of `label`.
    #[must_use]
    pub fn means(&self, label: Label) -> &[f64] {
        &self.means[label.index()]
    }

    /// Per-feature population standard deviations of `label`.
    #[must_use]
    pub fn stdevs(&self, label: Label) -> &[f64] {
        &self.stdevs[label.index()]
    }

    /// Mean of `feature` within `label`.
    ///
    /// # Panics
    ///
    /// Panics if `feature >= n_features`.
    #[must_use]
    pub fn mean(&self, label: Label, feature: usize) -> f64 {
        self.means[label.index()][feature]
    }

    /// Standard deviation of `feature` within `label`.
    ///
    /// # Panics
    ///
    /// Panics if `feature >= n_features`.
    #[must_use]
    pub fn stdev(&self, label: Label, feature: usize) -> f64 {
        self.stdevs[label.index()][feature]
    }

    /// Empirical frequency of `label` in the training set.
    #[must_use]
    pub fn prior(&self, label: Label) -> f64 {
        self.priors[label.index()]
    }

    /// All priors in label order.
    #[must_use]
    pub fn priors(&self) -> &[f64; Label::COUNT] {
        &self.priors
    }

    /// Number of training examples carrying `label`.
    #[must_use]
    pub fn count(&self, label: Label) -> usize {
        self.counts[label.index()]
    }

    /// Number of features per observation.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Number of training examples the model was fitted on.
    #[must_use]
    pub fn n_examples(&self) -> usize {
        self.n_examples
    }

    /// Number of labels, always [`Label::COUNT`].
    #[must_use]
    pub fn n_labels(&self) -> usize {
        Label::COUNT
    }

    /// Labels that never occurred in the training set.
    #[must_use]
    pub fn missing_labels(&self) -> Vec<Label> {
        Label::ALL
            .into_iter()
            .filter(|&label| self.count(label) == 0)
            .collect()
    }

    /// `(label, feature)` pairs whose standard deviation is exactly zero.
    #[must_use]
    pub fn degenerate_features(&self) -> Vec<(Label, usize)> {
        Label::ALL
            .into_iter()
            .flat_map(|label| {
                self.stdevs(label)
                    .iter()
                    .enumerate()
                    .filter(|(_, sigma)| **sigma == 0.0)
                    .map(move |(feature, _)| (label, feature))
            })
            .collect()
    }

    /// Serializes the model to JSON. Non-finite statistics are written as `null`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes and validates a model. `null` statistics are read back as NaN.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the tables are inconsistent.
    pub fn from_json(json: &str) -> Result<Self> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// Writes the model to `path` as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    ///
    /// # Example
    ///
    /// ```
    /// use lane_intent::prelude::*;
    ///
    /// let x = Matrix::from_rows(&[[0.0], [2.0], [10.0], [12.0], [20.0], [22.0]])
///     .expect("1 feature");
    /// let y = [Label::Left, Label::Left, Label::Keep, Label::Keep, Label::Right, Label::Right];
    /// let model = lane_intent::classification::fit(&x, &y).expect("valid training set");
    ///
    /// let dir = tempfile::tempdir().expect("temp dir");
    /// let path = dir.path().join("gnb.json");
    /// model.save(&path).expect("writable path");
    /// let loaded = GaussianModel::load(&path).expect("valid model file");
    /// assert_eq!(loaded, model);
    /// ```
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Reads a model previously written by [`save`](Self::save).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds an invalid model.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    fn validate(&self) -> Result<()> {
        if self.n_features == 0 {
            return Err(IntentError::empty_input("model features"));
        }
        for label in Label::ALL {
            let (means, stdevs) = (self.means(label), self.stdevs(label));
            if means.len() != self.n_features {
                return Err(IntentError::dimension_mismatch(
                    &format!("means[{label}] n_features"),
                    self.n_features,
                    means.len(),
                ));
            }
            if stdevs.len() != self.n_features {
                return Err(IntentError::dimension_mismatch(
                    &format!("stdevs[{label}] n_features"),
                    self.n_features,
                    stdevs.len(),
                ));
            }
        }
        let total: usize = self.counts.iter().sum();
        if total != self.n_examples {
            return Err(IntentError::dimension_mismatch(
                "sum of class counts",
                self.n_examples,
                total,
            ));
        }
        Ok(())
    }
}

/// JSON has no NaN or infinity. NaN travels as `null`, infinities as the
/// strings `"inf"` and `"-inf"`, so each non-finite value reloads as itself.
mod nan_tables {
    use crate::label::Label;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    type Tables = [Vec<f64>; Label::COUNT];

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Stat {
        Value(f64),
        Tag(String),
    }

    fn encode(v: f64) -> Option<Stat> {
        if v.is_nan() {
            None
        } else if v == f64::INFINITY {
            Some(Stat::Tag("inf".to_string()))
        } else if v == f64::NEG_INFINITY {
            Some(Stat::Tag("-inf".to_string()))
        } else {
            Some(Stat::Value(v))
        }
    }

    fn decode<E: serde::de::Error>(stat: Option<Stat>) -> Result<f64, E> {
        match stat {
            None => Ok(f64::NAN),
            Some(Stat::Value(v)) => Ok(v),
            Some(Stat::Tag(tag)) => match tag.as_str() {
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                other => Err(E::custom(format_args!("unknown statistic {other:?}"))),
            },
        }
    }

    pub(super) fn serialize<S>(tables: &Tables, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rows: Vec<Vec<Option<Stat>>> = tables
            .iter()
            .map(|row| row.iter().map(|&v| encode(v)).collect())
            .collect();
        rows.serialize(serializer)
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Tables, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows: [Vec<Option<Stat>>; Label::COUNT] = Deserialize::deserialize(deserializer)?;
        let mut tables: Tables = Default::default();
        for (table, row) in tables.iter_mut().zip(rows) {
            *table = row
                .into_iter()
                .map(decode::<D::Error>)
                .collect::<Result<_, _>>()?;
        }
        Ok(tables)
    }
}
