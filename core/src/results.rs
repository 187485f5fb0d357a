//! The result buffer produced by a successful execution.

/// Flattened execution output. Owned by the session and dropped as soon as
/// the session leaves the window in which results are readable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ResultBuffer {
    values: Vec<i32>,
}

impl ResultBuffer {
    pub(crate) fn new(values: Vec<i32>) -> Self {
        Self { values }
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    /// Signed lookup; negative indices are out of bounds, never wrapped.
    pub(crate) fn get(&self, index: isize) -> Option<i32> {
        let index = usize::try_from(index).ok()?;
        self.values.get(index).copied()
    }

    pub(crate) fn as_slice(&self) -> &[i32] {
        &self.values
    }
}
