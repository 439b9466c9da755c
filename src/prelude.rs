//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use lane_intent::prelude::*;
//! ```

pub use crate::classification::{GaussianModel, GaussianNB, GnbConfig, Prediction, ScoringRule};
pub use crate::label::Label;
pub use crate::primitives::{Kinematics, Matrix};
pub use crate::traits::Classifier;
