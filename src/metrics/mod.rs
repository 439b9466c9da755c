//! Evaluation metrics for intent classifiers.

pub mod classification;

pub use classification::{accuracy, confusion_matrix, recall};
