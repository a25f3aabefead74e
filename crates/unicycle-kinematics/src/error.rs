//! Error types for the unicycle kinematics library.
//!
//! Every fallible entry point of the crate returns a [`KinematicsError`]
//! instead of panicking, so malformed input is rejected the same way in
//! debug and release builds.

use core::fmt;

/// Errors that can occur when building a model or feeding it raw data.
#[derive(Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// A control sequence did not have the length the model expects.
    InvalidControlDimension {
        /// Number of control values the model expects.
        expected: usize,
        /// Number of control values that were supplied.
        found: usize,
    },
    /// A state slice did not have the length the model expects.
    InvalidStateDimension {
        /// Number of state values the model expects.
        expected: usize,
        /// Number of state values that were supplied.
        found: usize,
    },
    /// Error for an invalid angular velocity threshold.
    /// This variant is returned when the threshold is negative or not finite.
    InvalidEpsilon(&'static str),
}

impl fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KinematicsError::InvalidControlDimension { expected, found } => write!(
                f,
                "Invalid control dimension: expected {} values (v, omega), got {}",
                expected, found
            ),
            KinematicsError::InvalidStateDimension { expected, found } => write!(
                f,
                "Invalid state dimension: expected {} values (x, y, theta), got {}",
                expected, found
            ),
            KinematicsError::InvalidEpsilon(msg) => {
                write!(f, "Invalid angular velocity threshold: {}", msg)
            }
        }
    }
}

impl core::error::Error for KinematicsError {}
