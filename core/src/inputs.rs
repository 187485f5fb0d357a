//! The input collection and the transient group builder.
//!
//! A [`GroupBuilder`] exists only while the session is adding a group. It is
//! owned by the session's phase and consumed by [`InputCollection::commit_group`],
//! so a committed group can never alias or be mutated through its builder.

use indexmap::IndexMap;
use stateful_types::{FlattenOrder, GroupItems, InputItem, Name};

/// An in-progress group that has not been committed yet.
#[derive(Debug)]
pub(crate) struct GroupBuilder {
    name: Name,
    children: GroupItems,
}

impl GroupBuilder {
    pub(crate) fn new(name: Name) -> Self {
        Self {
            name,
            children: GroupItems::new(),
        }
    }

    pub(crate) fn insert(&mut self, child: Name, value: i32) {
        self.children.insert(child, value);
    }

    pub(crate) fn name(&self) -> &Name {
        &self.name
    }

    pub(crate) fn len(&self) -> usize {
        self.children.len()
    }
}

/// Committed inputs, keyed by top-level name.
#[derive(Debug, Default)]
pub(crate) struct InputCollection {
    items: IndexMap<Name, InputItem>,
}

impl InputCollection {
    /// Insert or overwrite a scalar under `name`.
    pub(crate) fn add_scalar(&mut self, name: Name, value: i32) {
        self.items.insert(name, InputItem::Scalar(value));
    }

    /// Move a finished group into the collection, replacing any item with the
    /// same name.
    pub(crate) fn commit_group(&mut self, builder: GroupBuilder) {
        let GroupBuilder { name, children } = builder;
        self.items.insert(name, InputItem::Group(children));
    }

    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<&InputItem> {
        self.items.get(name)
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Top-level items in the order execution visits them.
    pub(crate) fn ordered(&self, order: FlattenOrder) -> Vec<(&Name, &InputItem)> {
        let mut items: Vec<(&Name, &InputItem)> = self.items.iter().collect();
        if order == FlattenOrder::ByName {
            items.sort_by(|(a, _), (b, _)| a.cmp(b));
        }
        items
    }

    /// Total number of values a flatten would produce.
    pub(crate) fn value_count(&self) -> usize {
        self.items.values().map(InputItem::value_count).sum()
    }

    pub(crate) fn flatten(&self, order: FlattenOrder) -> Vec<i32> {
        let mut values = Vec::with_capacity(self.value_count());
        for (_, item) in self.ordered(order) {
            item.flatten_into(order, &mut values);
        }
        values
    }
}
