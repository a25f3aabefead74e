#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library for discrete-time unicycle robot kinematics."]
#![doc = ""]
#![doc = "This crate provides the pose and control types of a two-wheeled robot and"]
#![doc = "an exact state-transition model that propagates a pose over one time step."]

use core::f64::consts::PI;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod error;
pub mod model;

pub use error::KinematicsError;
pub use model::{DEFAULT_EPSILON, MotionModel, Rollout, UnicycleModel};

/// Normalize an angle to be within `[-PI, PI)`.
///
/// Angles at `PI` will be normalized to `-PI`. The transition model never calls
/// this; it is provided for callers that want wrapped headings.
///
/// # Arguments
///
/// * `angle`: The angle in radians to normalize.
///
/// # Returns
///
/// The normalized angle in radians.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle % (2.0 * PI);
    if a >= PI {
        a - 2.0 * PI
    } else if a < -PI {
        a + 2.0 * PI
    } else {
        a
    }
}

/// A 2‑D pose `(x, y, θ)` in world units and radians (θ measured
/// counter‑clockwise from the x‑axis in the world frame).
///
/// The heading is not kept in any canonical range. It accumulates freely
/// across steps; use [`State::normalized`] when a wrapped value is needed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct State {
    /// World‑frame x position.
    pub x: f64,
    /// World‑frame y position.
    pub y: f64,
    /// Heading (rad), unbounded.
    pub theta: f64,
}

impl State {
    /// Construct a new state.
    ///
    /// # Arguments
    ///
    /// * `x`: World-frame x position.
    /// * `y`: World-frame y position.
    /// * `theta`: Heading in radians.
    pub const fn new(x: f64, y: f64, theta: f64) -> Self {
        State { x, y, theta }
    }

    /// Returns a copy of this state with its heading wrapped to `[-PI, PI)`.
    pub fn normalized(&self) -> Self {
        State {
            theta: normalize_angle(self.theta),
            ..*self
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x: {:.3}, y: {:.3}, θ: {:.3} rad)", self.x, self.y, self.theta)
    }
}

impl From<[f64; 3]> for State {
    fn from([x, y, theta]: [f64; 3]) -> Self {
        State { x, y, theta }
    }
}

impl From<State> for [f64; 3] {
    fn from(state: State) -> Self {
        [state.x, state.y, state.theta]
    }
}

impl TryFrom<&[f64]> for State {
    type Error = KinematicsError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match *values {
            [x, y, theta] => Ok(State { x, y, theta }),
            _ => Err(KinematicsError::InvalidStateDimension {
                expected: UnicycleModel::STATE_DIM,
                found: values.len(),
            }),
        }
    }
}

/// A control command `(v, ω)` held constant over one time step.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlInput {
    /// Linear velocity along the robot heading (units/s).
    pub v: f64,
    /// Angular velocity about the vertical axis (rad/s).
    pub omega: f64,
}

impl ControlInput {
    /// Construct a new control input.
    ///
    /// # Arguments
    ///
    /// * `v`: Linear velocity (units/s).
    /// * `omega`: Angular velocity (rad/s).
    pub const fn new(v: f64, omega: f64) -> Self {
        ControlInput { v, omega }
    }
}

impl fmt::Display for ControlInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(v: {:.3}, ω: {:.3} rad/s)", self.v, self.omega)
    }
}

impl From<[f64; 2]> for ControlInput {
    fn from([v, omega]: [f64; 2]) -> Self {
        ControlInput { v, omega }
    }
}

impl From<ControlInput> for [f64; 2] {
    fn from(control: ControlInput) -> Self {
        [control.v, control.omega]
    }
}

impl TryFrom<&[f64]> for ControlInput {
    type Error = KinematicsError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match *values {
            [v, omega] => Ok(ControlInput { v, omega }),
            _ => Err(KinematicsError::InvalidControlDimension {
                expected: UnicycleModel::CONTROL_DIM,
                found: values.len(),
            }),
        }
    }
}
