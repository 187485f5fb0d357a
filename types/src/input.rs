//! Input items: the named contributions that execution flattens into results.

use indexmap::IndexMap;

use crate::{FlattenOrder, Name};

/// The children of a group, keyed by name.
///
/// Children are scalars only, so a group can never contain another group.
/// A duplicate child name replaces the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupItems {
    children: IndexMap<Name, i32>,
}

impl GroupItems {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: Name, value: i32) {
        self.children.insert(name, value);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<i32> {
        self.children.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, i32)> {
        self.children.iter().map(|(name, value)| (name, *value))
    }

    fn flatten_into(&self, order: FlattenOrder, dest: &mut Vec<i32>) {
        match order {
            FlattenOrder::Insertion => dest.extend(self.children.values().copied()),
            FlattenOrder::ByName => {
                let mut sorted: Vec<(&Name, i32)> = self.iter().collect();
                sorted.sort_by(|(a, _), (b, _)| a.cmp(b));
                dest.extend(sorted.into_iter().map(|(_, value)| value));
            }
        }
    }
}

impl FromIterator<(Name, i32)> for GroupItems {
    fn from_iter<T: IntoIterator<Item = (Name, i32)>>(iter: T) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}

/// A committed input. Once stored in the collection it is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputItem {
    Scalar(i32),
    Group(GroupItems),
}

impl InputItem {
    /// Number of values this item contributes to a flattened result.
    #[must_use]
    pub fn value_count(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Group(children) => children.len(),
        }
    }

    pub fn flatten_into(&self, order: FlattenOrder, dest: &mut Vec<i32>) {
        match self {
            Self::Scalar(value) => dest.push(*value),
            Self::Group(children) => children.flatten_into(order, dest),
        }
    }

    #[must_use]
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }
}
