//! Error types for the Contagion simulator.
//!
//! Two classes, mirroring how a caller is expected to react:
//! [`SimError::InvalidArgument`] is bad caller input and should be shown
//! as a validation message; [`SimError::InvalidState`] is a malformed
//! hand-built grid and indicates a programming error.

use std::error::Error;
use std::fmt;

/// Errors returned by grid construction, seeding, and configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum SimError {
    /// A caller-supplied value is outside its valid range.
    InvalidArgument {
        /// Name of the offending option or parameter.
        name: &'static str,
        /// Human-readable description of what was wrong.
        reason: String,
    },
    /// A grid violates its structural invariants.
    InvalidState {
        /// Human-readable description of the violated invariant.
        reason: String,
    },
}

impl SimError {
    /// Shorthand for [`SimError::InvalidArgument`].
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Shorthand for [`SimError::InvalidState`].
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { name, reason } => {
                write!(f, "invalid argument '{name}': {reason}")
            }
            Self::InvalidState { reason } => write!(f, "invalid grid state: {reason}"),
        }
    }
}

impl Error for SimError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_argument() {
        let e = SimError::invalid_argument("population", "must be at least 1, got 0");
        assert_eq!(
            e.to_string(),
            "invalid argument 'population': must be at least 1, got 0"
        );
    }

    #[test]
    fn display_invalid_state() {
        let e = SimError::invalid_state("grid has no rows");
        assert_eq!(e.to_string(), "invalid grid state: grid has no rows");
    }

    #[test]
    fn is_std_error() {
        let e: Box<dyn Error> = Box::new(SimError::invalid_state("x"));
        assert!(e.source().is_none());
    }
}
