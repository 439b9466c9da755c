//! Two-pass parameter estimation.

use super::GaussianModel;
use crate::error::{IntentError, Result};
use crate::label::Label;
use crate::primitives::Matrix;
use tracing::{debug, warn};

/// Receives the fitted parameter tables once a fit succeeds.
///
/// Fitting itself never prints; hosts that want the tables reported attach
/// an observer to the estimator.
pub trait FitObserver: Send + Sync {
    /// Called with the freshly fitted model before it is stored.
    fn on_fit(&self, model: &GaussianModel);
}

/// Emits the fitted means, standard deviations and priors as `debug` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl FitObserver for TracingObserver {
    fn on_fit(&self, model: &GaussianModel) {
        for label in Label::ALL {
            debug!(
                label = %label,
                count = model.count(label),
                prior = model.prior(label),
                means = ?model.means(label),
                stdevs = ?model.stdevs(label),
                "fitted class parameters"
            );
        }
    }
}

impl<F> FitObserver for F
where
    F: Fn(&GaussianModel) + Send + Sync,
{
    fn on_fit(&self, model: &GaussianModel) {
        self(model);
    }
}

/// Estimates per-class means, population standard deviations and priors.
///
/// Pass 1 accumulates per-class sums and counts, giving priors and means.
/// Pass 2 accumulates squared deviations from those means. No smoothing is
/// applied: a class with no examples gets NaN statistics and a constant
/// feature gets a standard deviation of exactly 0.
///
/// # Errors
///
/// Returns an error if:
/// - The training set is empty or has zero features
/// - `y.len()` differs from the number of rows in `x`
///
/// # Example
///
/// ```
/// use lane_intent::classification::fit;
/// use lane_intent::prelude::*;
///
/// let x = Matrix::from_rows(&[[0.0], [2.0], [10.0], [12.0], [20.0], [22.0]]).expect("1 feature");
/// let y = [Label::Left, Label::Left, Label::Keep, Label::Keep, Label::Right, Label::Right];
///
/// let model = fit(&x, &y).expect("valid training set");
/// assert_eq!(model.means(Label::Keep), &[11.0]);
/// assert_eq!(model.stdevs(Label::Keep), &[1.0]);
/// ```
pub fn fit(x: &Matrix<f64>, y: &[Label]) -> Result<GaussianModel> {
    let (n_examples, n_features) = x.shape();

    if n_examples == 0 {
        return Err(IntentError::empty_input("training set"));
    }
    if y.len() != n_examples {
        return Err(IntentError::dimension_mismatch(
            "labels n_examples",
            n_examples,
            y.len(),
        ));
    }
    if n_features == 0 {
        return Err(IntentError::empty_input("observation features"));
    }

    debug!(n_examples, n_features, "fitting gaussian naive bayes");

    let mut counts = [0usize; Label::COUNT];
    let mut sums: [Vec<f64>; Label::COUNT] = std::array::from_fn(|_| vec![0.0; n_features]);
    for (row, &label) in x.rows().zip(y) {
        let c = label.index();
        counts[c] += 1;
        for (sum, &value) in sums[c].iter_mut().zip(row) {
            *sum += value;
        }
    }

    let priors = counts.map(|count| count as f64 / n_examples as f64);
    let means: [Vec<f64>; Label::COUNT] = std::array::from_fn(|c| {
        let count = counts[c] as f64;
        sums[c].iter().map(|sum| sum / count).collect()
    });

    let mut sq_devs: [Vec<f64>; Label::COUNT] = std::array::from_fn(|_| vec![0.0; n_features]);
    for (row, &label) in x.rows().zip(y) {
        let c = label.index();
        for ((sq_dev, &value), &mean) in sq_devs[c].iter_mut().zip(row).zip(&means[c]) {
            let diff = mean - value;
            *sq_dev += diff * diff;
        }
    }

    let stdevs: [Vec<f64>; Label::COUNT] = std::array::from_fn(|c| {
        let count = counts[c] as f64;
        sq_devs[c].iter().map(|sq_dev| (sq_dev / count).sqrt()).collect()
    });

    let model = GaussianModel::from_parts(means, stdevs, priors, counts, n_features, n_examples);

    for label in model.missing_labels() {
        warn!(label = %label, "no training examples for label, its statistics are NaN");
    }
    for (label, feature) in model.degenerate_features() {
        warn!(
            label = %label,
            feature,
            "zero standard deviation, densities for this class will be NaN"
        );
    }

    Ok(model)
}
