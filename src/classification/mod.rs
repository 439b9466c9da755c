//! Gaussian Naive Bayes driving-intent classification.
//!
//! The work is split between a trainer ([`fit`]) that turns a labelled
//! training set into an immutable [`GaussianModel`], and a predictor
//! ([`predict`]) that scores observations against that model. [`GaussianNB`]
//! wraps both behind an estimator with builder-style configuration.
//!
//! # Example
//!
//! ```
//! use lane_intent::classification::GaussianNB;
//! use lane_intent::prelude::*;
//!
//! let x = Matrix::from_rows(&[[0.0], [2.0], [10.0], [12.0], [20.0], [22.0]])
//!     .expect("rows share one feature");
//! let y = ["left", "left", "keep", "keep", "right", "right"];
//!
//! let mut model = GaussianNB::new();
//! model.fit_labels(&x, &y).expect("valid training data");
//!
//! assert_eq!(model.predict(&[1.0]).expect("fitted"), Label::Left);
//! assert_eq!(model.predict(&[11.0]).expect("fitted"), Label::Keep);
//! assert_eq!(model.predict(&[21.0]).expect("fitted"), Label::Right);
//! ```

mod model;
mod predictor;
mod trainer;

pub use model::GaussianModel;
pub use predictor::{
    argmax, class_scores, gaussian_density, predict, predict_detailed, Prediction, ScoringRule,
};
pub use trainer::{fit, FitObserver, TracingObserver};

use crate::error::{IntentError, Result};
use crate::label::Label;
use crate::metrics::classification::accuracy;
use crate::primitives::{Kinematics, Matrix};
use crate::traits::Classifier;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Estimator configuration.
///
/// # Example
///
/// ```
/// use lane_intent::classification::{GnbConfig, ScoringRule};
///
/// let config = GnbConfig::from_json(r#"{ "scoring": "posterior" }"#).expect("valid config");
/// assert_eq!(config.scoring, ScoringRule::Posterior);
/// assert_eq!(GnbConfig::from_json("{}").expect("defaults"), GnbConfig::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GnbConfig {
    /// Scoring rule used by prediction. Defaults to likelihood-only.
    pub scoring: ScoringRule,
}

impl GnbConfig {
    /// Parses a configuration; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or names an unknown rule.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Gaussian Naive Bayes classifier over the fixed `left` / `keep` / `right`
/// label set.
///
/// Each successful [`fit`](Self::fit) replaces the fitted model wholesale;
/// a failed fit leaves the previous model in place.
#[derive(Clone, Default)]
pub struct GaussianNB {
    config: GnbConfig,
    observer: Option<Arc<dyn FitObserver>>,
    model: Option<GaussianModel>,
}

impl GaussianNB {
    /// Creates an unfitted classifier with likelihood-only scoring.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unfitted estimator from a deserialized configuration.
    #[must_use]
    pub fn from_config(config: GnbConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Wraps an already fitted (e.g. loaded) model.
    #[must_use]
    pub fn from_model(model: GaussianModel, config: GnbConfig) -> Self {
        Self {
            config,
            observer: None,
            model: Some(model),
        }
    }

    /// Sets the scoring rule.
    ///
    /// # Example
    ///
    /// ```
    /// use lane_intent::classification::{GaussianNB, ScoringRule};
    ///
    /// let model = GaussianNB::new().with_scoring(ScoringRule::Posterior);
    /// assert_eq!(model.config().scoring, ScoringRule::Posterior);
    /// ```
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringRule) -> Self {
        self.config.scoring = scoring;
        self
    }

    /// Attaches an observer that receives every freshly fitted model.
    #[must_use]
    pub fn with_observer<O: FitObserver + 'static>(mut self, observer: O) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Returns the scoring configuration in effect.
    #[must_use]
    pub fn config(&self) -> GnbConfig {
        self.config
    }

    /// The fitted model, `None` before the first successful fit.
    #[must_use]
    pub fn model(&self) -> Option<&GaussianModel> {
        self.model.as_ref()
    }

    /// Trains the classifier.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Empty data
    /// - Sample count mismatch between X and y
    pub fn fit(&mut self, x: &Matrix<f64>, y: &[Label]) -> Result<()> {
        let model = fit(x, y)?;
        if let Some(observer) = &self.observer {
            observer.on_fit(&model);
        }
        self.model = Some(model);
        Ok(())
    }

    /// Trains from string labels, rejecting any symbol outside the label set
    /// before touching the data.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::UnknownLabel`] for an unrecognized symbol, or
    /// any error [`fit`](Self::fit) returns.
    pub fn fit_labels<S: AsRef<str>>(&mut self, x: &Matrix<f64>, y: &[S]) -> Result<()> {
        let labels = Label::parse_all(y)?;
        self.fit(x, &labels)
    }

    fn fitted(&self) -> Result<&GaussianModel> {
        self.model.as_ref().ok_or(IntentError::NotFitted)
    }

    /// Predicts the label of one observation.
    ///
    /// # Errors
    ///
    /// Returns error if model is not fitted or dimension mismatch.
    pub fn predict(&self, sample: &[f64]) -> Result<Label> {
        predict(self.fitted()?, sample, self.config.scoring)
    }

    /// Predicts the label of one kinematic observation.
    ///
    /// # Errors
    ///
    /// Returns error if model is not fitted or was fitted on a feature count
    /// other than four.
    pub fn predict_kinematics(&self, observation: &Kinematics) -> Result<Label> {
        self.predict(&observation.to_features())
    }

    /// Predicts and returns every class score alongside the label.
    ///
    /// # Errors
    ///
    /// Returns error if model is not fitted or dimension mismatch.
    pub fn predict_detailed(&self, sample: &[f64]) -> Result<Prediction> {
        predict_detailed(self.fitted()?, sample, self.config.scoring)
    }

    /// Predicts every row of `x`.
    ///
    /// # Errors
    ///
    /// Returns error if model is not fitted or dimension mismatch.
    pub fn predict_batch(&self, x: &Matrix<f64>) -> Result<Vec<Label>> {
        let model = self.fitted()?;
        x.rows()
            .map(|row| predict(model, row, self.config.scoring))
            .collect()
    }

    /// Fraction of rows of `x` whose prediction equals `y`.
    ///
    /// # Errors
    ///
    /// Returns error if model is not fitted, `x` is empty, or dimensions mismatch.
    pub fn score(&self, x: &Matrix<f64>, y: &[Label]) -> Result<f64> {
        let predictions = self.predict_batch(x)?;
        accuracy(&predictions, y)
    }
}

impl fmt::Debug for GaussianNB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaussianNB")
            .field("config", &self.config)
            .field("observer", &self.observer.is_some())
            .field("model", &self.model)
            .finish()
    }
}

impl Classifier for GaussianNB {
    fn fit(&mut self, x: &Matrix<f64>, y: &[Label]) -> Result<()> {
        GaussianNB::fit(self, x, y)
    }

    fn predict_batch(&self, x: &Matrix<f64>) -> Result<Vec<Label>> {
        GaussianNB::predict_batch(self, x)
    }
}


#[cfg(test)]
mod tests_gnb_contract;
