//! Core traits for intent classifiers.

use crate::error::Result;
use crate::label::Label;
use crate::metrics::classification::accuracy;
use crate::primitives::Matrix;

/// Supervised classifier over the driving-intent label set.
///
/// Follows the fit / predict / score convention.
///
/// # Examples
///
/// ```
/// use lane_intent::prelude::*;
///
/// let x = Matrix::from_rows(&[[0.0], [2.0], [10.0], [12.0], [20.0], [22.0]]).unwrap();
/// let y = [Label::Left, Label::Left, Label::Keep, Label::Keep, Label::Right, Label::Right];
///
/// let mut model = GaussianNB::new();
/// Classifier::fit(&mut model, &x, &y).unwrap();
/// assert_eq!(Classifier::score(&model, &x, &y).unwrap(), 1.0);
/// ```
pub trait Classifier {
    /// Fits the model to training data.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails (empty data, length mismatch).
    fn fit(&mut self, x: &Matrix<f64>, y: &[Label]) -> Result<()>;

    /// Predicts a label for every row of `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or `x` has the wrong width.
    fn predict_batch(&self, x: &Matrix<f64>) -> Result<Vec<Label>>;

    /// Computes accuracy on `x` against `y`.
    ///
    /// # Errors
    ///
    /// Returns an error if prediction fails or `y` has the wrong length.
    fn score(&self, x: &Matrix<f64>, y: &[Label]) -> Result<f64> {
        let predictions = self.predict_batch(x)?;
        accuracy(&predictions, y)
    }
}
