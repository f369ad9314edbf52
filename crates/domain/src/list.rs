//! Ordered collection of loaded resources.

/// An ordered list of resources as delivered by the backend.
///
/// `Absent` is what an accepted envelope yields when its collection field is
/// `null` or missing; it is not the same as `Items(vec![])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceList<T> {
    Absent,
    Items(Vec<T>),
}

impl<T> ResourceList<T> {
    /// `true` when the collection field was absent.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Number of items; an absent list has none.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// `true` when there are no items, whether absent or empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The items in order; empty for an absent list.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Absent => &[],
            Self::Items(items) => items,
        }
    }
}

impl<T> From<Option<Vec<T>>> for ResourceList<T> {
    fn from(items: Option<Vec<T>>) -> Self {
        items.map_or(Self::Absent, Self::Items)
    }
}

impl<T> From<Vec<T>> for ResourceList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Items(items)
    }
}
