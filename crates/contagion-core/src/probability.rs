//! Validated probabilities.

use crate::error::SimError;
use std::fmt;

/// A finite probability in `[0, 1]`.
///
/// Construction is the only validation point: once a `Probability`
/// exists, the engine can compare uniform draws against it without
/// further checks.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Probability(f64);

impl Probability {
    /// Probability 0: the event never happens.
    pub const NEVER: Self = Self(0.0);
    /// Probability 1: the event always happens.
    pub const ALWAYS: Self = Self(1.0);

    /// Validate `value` as the probability named `name`.
    ///
    /// Returns [`SimError::InvalidArgument`] if `value` is NaN, infinite,
    /// or outside `[0, 1]`.
    pub fn new(name: &'static str, value: f64) -> Result<Self, SimError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(SimError::invalid_argument(
                name,
                format!("must be a finite value in [0, 1], got {value}"),
            ));
        }
        Ok(Self(value))
    }

    /// The raw value.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Whether a uniform draw in `[0, 1)` counts as a success.
    #[inline]
    pub fn hit(self, draw: f64) -> bool {
        draw < self.0
    }

    /// Probability that at least one of `trials` independent events
    /// succeeds: `1 - (1 - p)^trials`.
    pub fn at_least_once(self, trials: u32) -> f64 {
        if trials == 0 {
            return 0.0;
        }
        1.0 - (1.0 - self.0).powi(trials as i32)
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
