//! lane-intent: Gaussian Naive Bayes classification of short-term driving intent.
//!
//! A vehicle's kinematic state `[s, d, s_dot, d_dot]` is classified as moving
//! `left`, keeping its lane (`keep`), or moving `right`. A [`GaussianModel`]
//! is fitted once from labelled observations and then used read-only for any
//! number of predictions.
//!
//! # Quick Start
//!
//! ```
//! use lane_intent::prelude::*;
//!
//! let x = Matrix::from_rows(&[[0.0], [2.0], [10.0], [12.0], [20.0], [22.0]]).unwrap();
//! let y = [Label::Left, Label::Left, Label::Keep, Label::Keep, Label::Right, Label::Right];
//!
//! let mut model = GaussianNB::new();
//! model.fit(&x, &y).unwrap();
//!
//! assert_eq!(model.predict(&[11.0]).unwrap(), Label::Keep);
//! let fitted = model.model().unwrap();
//! assert_eq!(fitted.means(Label::Right), &[21.0]);
//! ```
//!
//! # Modules
//!
//! - [`label`]: The closed `left` / `keep` / `right` label set
//! - [`primitives`]: Observation matrix and kinematic observation types
//! - [`classification`]: Trainer, predictor and the `GaussianNB` estimator
//! - [`metrics`]: Accuracy, confusion matrix and recall
//!
//! # Numerics
//!
//! Only structural misuse is an error. NaN statistics of a label missing
//! from the training set, and NaN densities from a zero standard deviation,
//! flow through to the scores; such a label never wins the arg-max.

pub mod classification;
pub mod error;
pub mod label;
pub mod metrics;
pub mod prelude;
pub mod primitives;
pub mod traits;

pub use classification::{GaussianModel, GaussianNB};
pub use error::{IntentError, Result};
pub use label::Label;
pub use primitives::{Kinematics, Matrix};
pub use traits::Classifier;
