//! Errors returned across the session boundary.

use std::fmt;

use thiserror::Error;

use crate::{Operation, Phase};

/// Why an argument was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    EmptyName,
    IndexOutOfBounds { index: isize, len: usize },
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => f.write_str("name must not be empty"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} is out of bounds for {len} outputs")
            }
        }
    }
}

/// Which caller-supplied callback reported a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackKind {
    Progress,
    Finished,
}

impl fmt::Display for CallbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Progress => "progress",
            Self::Finished => "finished",
        })
    }
}

/// Returned by a progress or finished callback to abort execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct CallbackError {
    reason: String,
}

impl CallbackError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Payload-free classification of a [`SessionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadState,
    InvalidArgument,
    CallbackFailure,
}

/// Every failure a session operation can report.
///
/// A failed call never leaves the session half-mutated: the phase and all
/// owned stores are exactly as they were before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("{operation} is not valid while the session is {phase}")]
    BadState { operation: Operation, phase: Phase },
    #[error("{operation}: {reason}")]
    InvalidArgument {
        operation: Operation,
        reason: InvalidArgument,
    },
    #[error("{callback} callback failed during {operation}")]
    CallbackFailure {
        operation: Operation,
        callback: CallbackKind,
        #[source]
        source: CallbackError,
    },
}

impl SessionError {
    #[must_use]
    pub const fn bad_state(operation: Operation, phase: Phase) -> Self {
        Self::BadState { operation, phase }
    }

    #[must_use]
    pub const fn empty_name(operation: Operation) -> Self {
        Self::InvalidArgument {
            operation,
            reason: InvalidArgument::EmptyName,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::BadState { .. } => ErrorKind::BadState,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::CallbackFailure { .. } => ErrorKind::CallbackFailure,
        }
    }

    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::BadState { operation, .. }
            | Self::InvalidArgument { operation, .. }
            | Self::CallbackFailure { operation, .. } => *operation,
        }
    }
}
