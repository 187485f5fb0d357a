//! Phase-gated session for configuring, executing, and reading back a batch
//! computation.
//!
//! A [`Session`] moves through an ordered set of phases: open, set parameters,
//! add inputs (optionally nested one level into named groups), execute, read
//! results, close. Any call made outside its phase fails with
//! [`SessionError::BadState`](stateful_types::SessionError::BadState) and
//! changes nothing.
//!
//! ```rust
//! use stateful_core::Session;
//!
//! # fn main() -> Result<(), stateful_core::SessionError> {
//! let mut session = Session::new();
//! session.open()?;
//!
//! session.begin_parameters()?;
//! session.set_bool("first", true)?;
//! session.set_int("second", 42)?;
//! session.end_parameters()?;
//!
//! session.begin_inputs()?;
//! session.add_item("thing", 1)?;
//! session.add_item("another thing", 2)?;
//! session.begin_group("group")?;
//! session.add_group_item("nested", 5)?;
//! session.end_group()?;
//! session.end_inputs()?;
//!
//! let mut finished = 0;
//! session.execute(
//!     |_percent| Ok(()),
//!     |count| {
//!         finished = count;
//!         Ok(())
//!     },
//! )?;
//! assert_eq!(finished, 3);
//! assert_eq!(session.outputs()?, &[1, 2, 5]);
//!
//! session.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! The same flow is available through borrow-scoped builders
//! ([`Session::configure`], [`Session::recipe`]) that rule out out-of-phase
//! calls at compile time.

pub mod config;
mod engine;
mod inputs;
mod parameters;
mod results;
mod scopes;
mod session;

pub use config::{ConfigError, SessionConfig, StatefulConfig, config_path};
pub use scopes::{GroupScope, Output, ParameterScope, Recipe, RecipeBuilder};
pub use session::Session;
pub use stateful_types::{
    CallbackError, CallbackKind, ErrorKind, FlattenOrder, GroupItems, InputItem,
    InvalidArgument, Name, Operation, ParameterValue, Percent, Phase, SessionError,
};
