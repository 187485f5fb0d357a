//! Typed parameter store.
//!
//! Parameters are write-only from outside the crate: callers can set them but
//! never read them back.

use std::collections::HashMap;

use stateful_types::{Name, ParameterValue};

#[derive(Debug, Default)]
pub(crate) struct ParameterStore {
    values: HashMap<Name, ParameterValue>,
}

impl ParameterStore {
    /// Insert or overwrite. Last write wins, including across value types.
    pub(crate) fn set(&mut self, name: Name, value: ParameterValue) {
        self.values.insert(name, value);
    }

    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<ParameterValue> {
        self.values.get(name).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
