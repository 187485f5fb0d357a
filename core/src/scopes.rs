//! Borrow-scoped builders over the session's phase machine.
//!
//! Each scope holds `&mut Session` for as long as it is open, so nothing else
//! can touch the session until the scope's bracket has been closed. Calls made
//! through these types cannot be out of phase; the only errors they surface are
//! invalid names and callback failures.
//!
//! The session cannot be used while a parameter scope is open:
//!
//! ```rust,compile_fail
//! # use stateful_core::Session;
//! let mut session = Session::new();
//! session.open().unwrap();
//! session
//!     .configure(|params| {
//!         session.begin_inputs()?;
//!         params.integer("n", 1)?;
//!         Ok(())
//!     })
//!     .unwrap();
//! ```
//!
//! Nor can it be mutated between building a recipe and executing it:
//!
//! ```rust,compile_fail
//! # use stateful_core::Session;
//! let mut session = Session::new();
//! session.open().unwrap();
//! let recipe = session
//!     .recipe(|recipe| {
//!         recipe.add_item("a", 1)?;
//!         Ok(())
//!     })
//!     .unwrap();
//! session.close().unwrap();
//! let _ = recipe.execute(|_| {});
//! ```

use stateful_types::{Percent, SessionError};

use crate::session::Session;

/// Parameter setters, available only inside [`Session::configure`].
pub struct ParameterScope<'s> {
    session: &'s mut Session,
}

impl ParameterScope<'_> {
    pub fn boolean(&mut self, name: &str, value: bool) -> Result<&mut Self, SessionError> {
        self.session.set_bool(name, value)?;
        Ok(self)
    }

    pub fn integer(&mut self, name: &str, value: i32) -> Result<&mut Self, SessionError> {
        self.session.set_int(name, value)?;
        Ok(self)
    }
}

/// Input builder, available only inside [`Session::recipe`].
pub struct RecipeBuilder<'s> {
    session: &'s mut Session,
}

impl RecipeBuilder<'_> {
    pub fn add_item(&mut self, name: &str, value: i32) -> Result<&mut Self, SessionError> {
        self.session.add_item(name, value)?;
        Ok(self)
    }

    /// Add a named group. The group is committed when `build` returns, even if
    /// it returned an error; children added before the error are kept.
    pub fn group<F>(&mut self, name: &str, build: F) -> Result<&mut Self, SessionError>
    where
        F: FnOnce(&mut GroupScope<'_>) -> Result<(), SessionError>,
    {
        self.session.begin_group(name)?;
        let outcome = build(&mut GroupScope {
            session: &mut *self.session,
        });
        self.session.end_group()?;
        outcome?;
        Ok(self)
    }
}

/// Child setter for one group, available only inside [`RecipeBuilder::group`].
pub struct GroupScope<'s> {
    session: &'s mut Session,
}

impl GroupScope<'_> {
    pub fn add_item(&mut self, name: &str, value: i32) -> Result<&mut Self, SessionError> {
        self.session.add_group_item(name, value)?;
        Ok(self)
    }
}

/// Proof that inputs have been built and the session is ready to execute.
///
/// Holds the session exclusively, so the inputs cannot change before
/// [`Recipe::execute`] runs.
pub struct Recipe<'s> {
    session: &'s mut Session,
}

impl Recipe<'_> {
    /// Run the execution and copy the results out of the session.
    pub fn execute<P>(self, mut progress: P) -> Result<Output, SessionError>
    where
        P: FnMut(Percent),
    {
        let Recipe { session } = self;
        session.execute(
            |percent| {
                progress(percent);
                Ok(())
            },
            |_| Ok(()),
        )?;
        let items = session.outputs()?.to_vec();
        Ok(Output { items })
    }
}

/// Owned results of a [`Recipe`] execution.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Output {
    pub items: Vec<i32>,
}

impl Session {
    /// Set parameters inside a scope. The parameter bracket is closed when
    /// `build` returns, whether or not it succeeded.
    pub fn configure<F>(&mut self, build: F) -> Result<(), SessionError>
    where
        F: FnOnce(&mut ParameterScope<'_>) -> Result<(), SessionError>,
    {
        self.begin_parameters()?;
        let outcome = build(&mut ParameterScope {
            session: &mut *self,
        });
        self.end_parameters()?;
        outcome
    }

    /// Build the inputs inside a scope and return a [`Recipe`] ready to run.
    pub fn recipe<F>(&mut self, build: F) -> Result<Recipe<'_>, SessionError>
    where
        F: FnOnce(&mut RecipeBuilder<'_>) -> Result<(), SessionError>,
    {
        self.begin_inputs()?;
        let outcome = build(&mut RecipeBuilder {
            session: &mut *self,
        });
        self.end_inputs()?;
        outcome?;
        Ok(Recipe { session: self })
    }
}
