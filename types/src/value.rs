//! Scalar values carried by the session: parameter values, progress
//! percentages, and the flatten ordering policy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A typed parameter value. Booleans and integers never coerce into each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterValue {
    Bool(bool),
    Int(i32),
}

impl ParameterValue {
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
        }
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for ParameterValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

/// Progress reported to the caller during execution.
///
/// # Invariant
///
/// The value is always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Self = Self(0);
    pub const COMPLETE: Self = Self(100);

    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 100 { Some(Self(value)) } else { None }
    }

    /// `floor(100 * done / total)`, saturating at 100.
    ///
    /// An empty workload is reported as complete.
    #[must_use]
    pub fn of(done: usize, total: usize) -> Self {
        if total == 0 || done >= total {
            return Self::COMPLETE;
        }
        let scaled = (done as u128 * 100) / total as u128;
        Self(scaled as u8)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.0 == 100
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// How the input collection is walked when it is flattened into results.
///
/// Both orders are deterministic; re-running an unchanged collection yields
/// the same sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlattenOrder {
    /// Names are visited in the order they were first inserted. Replacing an
    /// existing name keeps its original position.
    #[default]
    Insertion,
    /// Names are visited in bytewise lexicographic order, at the top level and
    /// within each group.
    ByName,
}

impl FlattenOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Insertion => "insertion",
            Self::ByName => "by_name",
        }
    }
}
