//! Four-feature vehicle kinematic observation.

use serde::{Deserialize, Serialize};

/// Frenet-frame kinematic state of a vehicle.
///
/// Feature order is `[s, d, s_dot, d_dot]`.
///
/// # Examples
///
/// ```
/// use lane_intent::primitives::Kinematics;
///
/// let obs = Kinematics::new(3.5, 0.1, 5.9, -0.02);
/// assert_eq!(obs.to_features(), [3.5, 0.1, 5.9, -0.02]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Kinematics {
    /// Longitudinal position along the road.
    pub s: f64,
    /// Lateral offset from the road reference line.
    pub d: f64,
    /// Longitudinal velocity.
    pub s_dot: f64,
    /// Lateral velocity.
    pub d_dot: f64,
}

impl Kinematics {
    /// Number of features in a kinematic observation.
    pub const N_FEATURES: usize = 4;

    /// Creates an observation from Frenet position and velocity.
    #[must_use]
    pub const fn new(s: f64, d: f64, s_dot: f64, d_dot: f64) -> Self {
        Self { s, d, s_dot, d_dot }
    }

    /// Feature vector in model column order.
    #[must_use]
    pub fn to_features(&self) -> [f64; Self::N_FEATURES] {
        [self.s, self.d, self.s_dot, self.d_dot]
    }
}

impl From<[f64; Kinematics::N_FEATURES]> for Kinematics {
    fn from([s, d, s_dot, d_dot]: [f64; Kinematics::N_FEATURES]) -> Self {
        Self { s, d, s_dot, d_dot }
    }
}
