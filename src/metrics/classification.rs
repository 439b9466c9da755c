//! Classification metrics over the fixed driving-intent label set.

use crate::error::{IntentError, Result};
use crate::label::Label;
use crate::primitives::Matrix;

fn check_lengths(y_pred: &[Label], y_true: &[Label]) -> Result<()> {
    if y_pred.len() != y_true.len() {
        return Err(IntentError::dimension_mismatch(
            "y_true length",
            y_true.len(),
            y_pred.len(),
        ));
    }
    if y_true.is_empty() {
        return Err(IntentError::empty_input("labels"));
    }
    Ok(())
}

/// Compute classification accuracy.
///
/// accuracy = `correct_predictions` / `total_predictions`
///
/// # Errors
///
/// Returns an error if the slices differ in length or are empty.
///
/// # Examples
///
/// ```
/// use lane_intent::metrics::classification::accuracy;
/// use lane_intent::Label::{Keep, Left, Right};
///
/// let y_true = [Left, Keep, Right, Left, Keep, Right];
/// let y_pred = [Left, Right, Keep, Left, Left, Keep];
/// let acc = accuracy(&y_pred, &y_true).expect("same length");
/// assert!((acc - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn accuracy(y_pred: &[Label], y_true: &[Label]) -> Result<f64> {
    check_lengths(y_pred, y_true)?;

    let correct = y_pred
        .iter()
        .zip(y_true.iter())
        .filter(|(p, t)| p == t)
        .count();

    Ok(correct as f64 / y_true.len() as f64)
}

/// Compute the 3x3 confusion matrix.
///
/// Entry `(i, j)` counts samples whose true label has index `i` and whose
/// predicted label has index `j`.
///
/// # Errors
///
/// Returns an error if the slices differ in length or are empty.
pub fn confusion_matrix(y_pred: &[Label], y_true: &[Label]) -> Result<Matrix<usize>> {
    check_lengths(y_pred, y_true)?;

    let mut data = vec![0usize; Label::COUNT * Label::COUNT];
    for (&true_label, &pred_label) in y_true.iter().zip(y_pred.iter()) {
        data[true_label.index() * Label::COUNT + pred_label.index()] += 1;
    }

    Matrix::from_vec(Label::COUNT, Label::COUNT, data)
}

/// Per-label recall, TP / (TP + FN), in [`Label::ALL`] order.
///
/// A label with no true samples gets NaN.
///
/// # Errors
///
/// Returns an error if the slices differ in length or are empty.
pub fn recall(y_pred: &[Label], y_true: &[Label]) -> Result<[f64; Label::COUNT]> {
    let cm = confusion_matrix(y_pred, y_true)?;
    Ok(Label::ALL.map(|label| {
        let i = label.index();
        let support: usize = cm.row(i).iter().sum();
        cm.get(i, i) as f64 / support as f64
    }))
}

#[cfg(test)]
#[path = "tests_classification_contract.rs"]
mod tests;
