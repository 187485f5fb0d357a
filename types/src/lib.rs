//! Domain types for the stateful session protocol.
//!
//! This crate contains pure domain types with no IO and minimal dependencies.
//! Invariants are enforced at construction time: a [`Name`] is never empty, a
//! [`Percent`] never exceeds 100, and an [`InputItem`] group cannot nest.

mod error;
mod input;
mod name;
mod phase;
mod value;

pub use error::{CallbackError, CallbackKind, ErrorKind, InvalidArgument, SessionError};
pub use input::{GroupItems, InputItem};
pub use name::{EmptyNameError, Name};
pub use phase::{Operation, Phase};
pub use value::{FlattenOrder, ParameterValue, Percent};
