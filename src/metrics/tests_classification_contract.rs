use super::*;
use crate::label::Label::{Keep, Left, Right};

#[test]
fn test_accuracy_perfect() {
    let y = [Left, Keep, Right, Keep];
    assert!((accuracy(&y, &y).expect("same length") - 1.0).abs() < 1e-12);
}

#[test]
fn test_accuracy_length_mismatch() {
    let result = accuracy(&[Left, Keep], &[Left]);
    assert!(matches!(result, Err(IntentError::DimensionMismatch { .. })));
}

#[test]
fn test_accuracy_empty() {
    let result = accuracy(&[], &[]);
    assert!(matches!(result, Err(IntentError::EmptyInput { .. })));
}

#[test]
fn test_confusion_matrix_layout() {
    let y_true = [Left, Left, Keep, Right, Right, Right];
    let y_pred = [Left, Keep, Keep, Right, Keep, Right];
    let cm = confusion_matrix(&y_pred, &y_true).expect("same length");

    assert_eq!(cm.shape(), (3, 3));
    assert_eq!(cm.row(0), &[1, 1, 0]);
    assert_eq!(cm.row(1), &[0, 1, 0]);
    assert_eq!(cm.row(2), &[0, 1, 2]);
    assert_eq!(cm.as_slice().iter().sum::<usize>(), y_true.len());
}

#[test]
fn test_recall_per_label() {
    let y_true = [Left, Left, Right, Right, Right, Right];
    let y_pred = [Left, Right, Right, Right, Keep, Right];
    let r = recall(&y_pred, &y_true).expect("same length");

    assert!((r[0] - 0.5).abs() < 1e-12);
    assert!(r[1].is_nan());
    assert!((r[2] - 0.75).abs() < 1e-12);
}
