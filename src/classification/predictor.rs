//! Likelihood scoring and the arg-max decision rule.

use super::GaussianModel;
use crate::error::{IntentError, Result};
use crate::label::Label;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// How a class score is formed from the fitted model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    /// Product of per-feature densities; priors are ignored (maximum likelihood).
    #[default]
    Likelihood,
    /// Likelihood multiplied by the class prior (maximum a posteriori).
    Posterior,
}

/// Outcome of scoring one observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Winning label.
    pub label: Label,
    /// Raw score of every label, in [`Label::ALL`] order.
    pub scores: [f64; Label::COUNT],
}

impl Prediction {
    /// Raw score of `label`.
    #[must_use]
    pub fn score(&self, label: Label) -> f64 {
        self.scores[label.index()]
    }

    /// True when any score is NaN or infinite, i.e. the model had a missing
    /// class or a zero standard deviation that reached this observation.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.scores.iter().any(|s| !s.is_finite())
    }
}

/// Per-feature class-conditional density `1/(2πσ²) · exp(−(x−μ)²/(2σ²))`.
///
/// The normalising factor is `1/(2πσ²)`, so values are only meaningful
/// relative to each other. `σ = 0` yields NaN.
#[must_use]
pub fn gaussian_density(x: f64, mean: f64, stdev: f64) -> f64 {
    let var = stdev * stdev;
    let diff = x - mean;
    1.0 / (2.0 * PI * var) * (-(diff * diff) / (2.0 * var)).exp()
}

/// Scores `sample` against every label.
///
/// Each score starts at 1.0 and is multiplied by the density of every
/// feature in order. Underflow to 0.0 and NaN from degenerate classes are
/// returned as-is.
///
/// # Errors
///
/// Returns an error if `sample.len()` differs from the model's feature count.
pub fn class_scores(
    model: &GaussianModel,
    sample: &[f64],
    rule: ScoringRule,
) -> Result<[f64; Label::COUNT]> {
    if sample.len() != model.n_features() {
        return Err(IntentError::dimension_mismatch(
            "n_features",
            model.n_features(),
            sample.len(),
        ));
    }

    Ok(Label::ALL.map(|label| {
        let likelihood = model
            .means(label)
            .iter()
            .zip(model.stdevs(label))
            .zip(sample)
            .fold(1.0, |score, ((&mean, &stdev), &x)| {
                score * gaussian_density(x, mean, stdev)
            });
        match rule {
            ScoringRule::Likelihood => likelihood,
            ScoringRule::Posterior => likelihood * model.prior(label),
        }
    }))
}

/// Picks the highest-scoring label.
///
/// Ties go to the first label in [`Label::ALL`] order. NaN never wins a
/// comparison; if every score is NaN the first label is returned.
#[must_use]
pub fn argmax(scores: &[f64; Label::COUNT]) -> Label {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &score) in scores.iter().enumerate() {
        if score.is_nan() {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((idx, score)),
        }
    }
    best.map_or(Label::ALL[0], |(idx, _)| Label::ALL[idx])
}

/// Scores `sample` and returns the label together with every class score.
///
/// # Errors
///
/// Returns an error if `sample.len()` differs from the model's feature count.
pub fn predict_detailed(
    model: &GaussianModel,
    sample: &[f64],
    rule: ScoringRule,
) -> Result<Prediction> {
    let scores = class_scores(model, sample, rule)?;
    Ok(Prediction {
        label: argmax(&scores),
        scores,
    })
}

/// Predicts the driving intent of one observation.
///
/// # Errors
///
/// Returns an error if `sample.len()` differs from the model's feature count.
///
/// # Example
///
/// ```
/// use lane_intent::classification::{fit, predict, ScoringRule};
/// use lane_intent::prelude::*;
///
/// let x = Matrix::from_rows(&[[0.0], [2.0], [10.0], [12.0], [20.0], [22.0]]).expect("1 feature");
/// let y = [Label::Left, Label::Left, Label::Keep, Label::Keep, Label::Right, Label::Right];
/// let model = fit(&x, &y).expect("valid training set");
///
/// assert_eq!(predict(&model, &[11.0], ScoringRule::Likelihood).expect("1 feature"), Label::Keep);
/// ```
pub fn predict(model: &GaussianModel, sample: &[f64], rule: ScoringRule) -> Result<Label> {
    Ok(predict_detailed(model, sample, rule)?.label)
}
