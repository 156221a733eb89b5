//! Strategy pattern for sorting
//!
//! The grid only ever orders by one field at a time, so the single-field
//! strategy is the workhorse here.

use super::{HasField, SortFieldMarker, SortKey, SortableEntity};
use std::marker::PhantomData;

/// A sorting strategy applied in place
pub trait SortStrategy<T>: Send + Sync {
    /// Apply this sorting strategy to the given items
    fn sort(&self, items: &mut [T]);
}

/// Single field sort strategy
///
/// Stable: items with equal keys keep their relative order. Missing keys sort
/// last in either direction.
#[derive(Debug)]
pub struct FieldSort<T, F>
where
    T: SortableEntity,
    F: SortFieldMarker,
    T::AvailableFields: HasField<F>,
{
    /// Field to order by
    pub field: F,
    /// Descending when set
    pub reverse: bool,
    /// Ties the strategy to its entity type
    pub _phantom: PhantomData<T>,
}

impl<T, F> FieldSort<T, F>
where
    T: SortableEntity,
    F: SortFieldMarker,
    T::AvailableFields: HasField<F>,
{
    /// Sort by `field`, descending when `reverse`
    pub fn new(field: F, reverse: bool) -> Self {
        Self {
            field,
            reverse,
            _phantom: PhantomData,
        }
    }

    /// Ascending sort by `field`
    pub fn ascending(field: F) -> Self {
        Self::new(field, false)
    }

    /// Descending sort by `field`
    pub fn descending(field: F) -> Self {
        Self::new(field, true)
    }
}

impl<T, F> SortStrategy<T> for FieldSort<T, F>
where
    T: SortableEntity + Clone,
    F: SortFieldMarker,
    T::AvailableFields: HasField<F>,
{
    fn sort(&self, items: &mut [T]) {
        // Extract keys once
        let mut keys: Vec<_> = items
            .iter()
            .enumerate()
            .map(|(i, item)| (i, item.extract_key(self.field)))
            .collect();

        // Vec::sort_by is stable
        keys.sort_by(|a, b| a.1.compare_with_order(&b.1, self.reverse));

        let indices: Vec<_> = keys.into_iter().map(|(i, _)| i).collect();
        super::utils::reorder_by_indices(items, &indices);
    }
}
