//! Core traits for sortable catalog entities
//!
//! Uses zero-cost abstractions with compile-time field verification: a sort
//! field can only be applied to an entity whose field set proves it via
//! [`HasField`].

/// Base trait for any sortable catalog item
pub trait SortableEntity: Send + Sync {
    /// The set of fields this entity type supports for sorting
    type AvailableFields: SortFieldSet;

    /// Extract a sort key for the given field
    fn extract_key<F: SortFieldMarker>(&self, field: F) -> F::Key
    where
        Self::AvailableFields: HasField<F>;
}

/// Marker trait for sets of sort fields
pub trait SortFieldSet: Send + Sync + 'static {}

/// Compile-time proof that a field set contains a specific field
pub trait HasField<F: SortFieldMarker>: SortFieldSet {}

/// Individual sort field with associated key type
pub trait SortFieldMarker: Copy + Clone + Send + Sync + 'static {
    /// The type of key extracted for this field
    type Key: SortKey;

    /// Unique identifier for this field (for runtime dispatch and logs)
    const ID: &'static str;
}

/// Keys that can be compared for sorting
///
/// All sort keys must be comparable and handle missing data gracefully.
pub trait SortKey: Ord + Clone + Send + Sync {
    /// Create a key representing missing/null data
    fn missing() -> Self;

    /// Check if this key represents missing data
    fn is_missing(&self) -> bool;

    /// Compare two keys while ensuring missing values always sort last
    #[inline]
    fn compare_with_order(&self, other: &Self, reverse: bool) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self.is_missing(), other.is_missing()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                if reverse {
                    other.cmp(self)
                } else {
                    self.cmp(other)
                }
            }
        }
    }
}
