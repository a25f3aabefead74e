//! Discrete-time motion models.
//!
//! [`MotionModel`] is the seam controllers and simulators program against;
//! [`UnicycleModel`] is the exact closed-form transition for a robot driven by
//! a linear and an angular velocity.

use core::fmt;
use libm::{cos, sin};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ControlInput, KinematicsError, State};

/// Default angular velocity magnitude (rad/s) below which motion is treated
/// as a straight line.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// A deterministic discrete-time state-transition model.
pub trait MotionModel {
    /// Number of values in the state vector.
    fn state_dim(&self) -> usize;

    /// Number of values in the control vector.
    fn control_dim(&self) -> usize;

    /// Propagates `state` forward by `dt` seconds under a constant `control`.
    fn next_state(&self, state: &State, control: &ControlInput, dt: f64) -> State;

    /// Like [`MotionModel::next_state`], for callers holding the control as a
    /// variable-length sequence.
    ///
    /// # Errors
    ///
    /// Returns `Err(KinematicsError::InvalidControlDimension)` if `control` does
    /// not contain exactly [`MotionModel::control_dim`] values.
    fn next_state_from_slice(
        &self,
        state: &State,
        control: &[f64],
        dt: f64,
    ) -> Result<State, KinematicsError> {
        if control.len() != self.control_dim() {
            return Err(KinematicsError::InvalidControlDimension {
                expected: self.control_dim(),
                found: control.len(),
            });
        }
        let control = ControlInput::try_from(control)?;
        Ok(self.next_state(state, &control, dt))
    }

    /// Applies `controls` one after another starting from `initial`, yielding
    /// the state reached after each step.
    fn rollout<'a, I>(&'a self, initial: State, controls: I, dt: f64) -> Rollout<'a, Self, I::IntoIter>
    where
        Self: Sized,
        I: IntoIterator<Item = ControlInput>,
    {
        Rollout {
            model: self,
            state: initial,
            controls: controls.into_iter(),
            dt,
        }
    }
}

/// Iterator returned by [`MotionModel::rollout`].
#[derive(Debug, Clone)]
pub struct Rollout<'a, M, I> {
    model: &'a M,
    state: State,
    controls: I,
    dt: f64,
}

impl<M, I> Iterator for Rollout<'_, M, I>
where
    M: MotionModel,
    I: Iterator<Item = ControlInput>,
{
    type Item = State;

    fn next(&mut self) -> Option<State> {
        let control = self.controls.next()?;
        self.state = self.model.next_state(&self.state, &control, self.dt);
        Some(self.state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.controls.size_hint()
    }
}

/// Kinematic model of a unicycle (differential-drive) robot.
///
/// The state is `(x, y, θ)` and the control is `(v, ω)`. For `|ω|` at or above
/// the configured threshold the robot follows the exact circular arc about
/// its instantaneous centre of curvature; below it, it moves in a straight
/// line along its current heading. The heading is never wrapped.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UnicycleModelFields"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnicycleModel {
    /// Angular velocity magnitude (rad/s) below which the straight-line branch is used.
    epsilon: f64,
}

/// Unchecked serialized form of [`UnicycleModel`]; deserialization goes
/// through [`UnicycleModel::with_epsilon`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct UnicycleModelFields {
    epsilon: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<UnicycleModelFields> for UnicycleModel {
    type Error = KinematicsError;

    fn try_from(fields: UnicycleModelFields) -> Result<Self, Self::Error> {
        UnicycleModel::with_epsilon(fields.epsilon)
    }
}

impl UnicycleModel {
    /// Length of the state vector `(x, y, θ)`.
    pub const STATE_DIM: usize = 3;
    /// Length of the control vector `(v, ω)`.
    pub const CONTROL_DIM: usize = 2;

    /// Construct a model with [`DEFAULT_EPSILON`] as its threshold.
    pub const fn new() -> Self {
        UnicycleModel {
            epsilon: DEFAULT_EPSILON,
        }
    }

    /// Construct a model with a custom straight-line threshold.
    ///
    /// # Arguments
    ///
    /// * `epsilon`: Angular velocity magnitude (rad/s) below which motion is
    ///   integrated as a straight line. Zero sends every non-zero `ω` through
    ///   the arc branch.
    ///
    /// # Errors
    ///
    /// Returns `Err(KinematicsError::InvalidEpsilon)` if `epsilon` is negative
    /// or not finite.
    pub fn with_epsilon(epsilon: f64) -> Result<Self, KinematicsError> {
        if !epsilon.is_finite() {
            return Err(KinematicsError::InvalidEpsilon("must be finite"));
        }
        if epsilon < 0.0 {
            return Err(KinematicsError::InvalidEpsilon("must be non-negative"));
        }
        Ok(UnicycleModel { epsilon })
    }

    /// Returns the straight-line threshold.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    fn is_straight(&self, control: &ControlInput) -> bool {
        control.omega.abs() < self.epsilon
    }

    /// Signed radius `v / ω` of the arc followed under `control`.
    ///
    /// Returns `None` when `|ω|` is below the threshold.
    pub fn turn_radius(&self, control: &ControlInput) -> Option<f64> {
        if self.is_straight(control) {
            None
        } else {
            Some(control.v / control.omega)
        }
    }

    /// World-frame instantaneous centre of curvature for `state` under `control`.
    ///
    /// Returns `None` when `|ω|` is below the threshold.
    pub fn icc(&self, state: &State, control: &ControlInput) -> Option<(f64, f64)> {
        let radius = self.turn_radius(control)?;
        Some((
            state.x - radius * sin(state.theta),
            state.y + radius * cos(state.theta),
        ))
    }
}

impl Default for UnicycleModel {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionModel for UnicycleModel {
    fn state_dim(&self) -> usize {
        Self::STATE_DIM
    }

    fn control_dim(&self) -> usize {
        Self::CONTROL_DIM
    }

    fn next_state(&self, state: &State, control: &ControlInput, dt: f64) -> State {
        let State { x, y, theta } = *state;
        let ControlInput { v, omega } = *control;

        if self.is_straight(control) {
            return State {
                x: x + v * cos(theta) * dt,
                y: y + v * sin(theta) * dt,
                theta,
            };
        }

        // Rotate about the ICC by the angle swept during dt.
        let radius = v / omega;
        let icc_x = x - radius * sin(theta);
        let icc_y = y + radius * cos(theta);
        let next_theta = theta + omega * dt;

        State {
            x: icc_x + radius * sin(next_theta),
            y: icc_y - radius * cos(next_theta),
            theta: next_theta,
        }
    }
}

impl fmt::Display for UnicycleModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnicycleModel (ε: {:e} rad/s)", self.epsilon)
    }
}
