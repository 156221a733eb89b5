//! SortableEntity implementation for catalog items

use std::any::Any;

use marquee_model::Item;

use super::{
    HasField, OptionalDateKey, OptionalFloatKey, PopularityField, RatingField,
    ReleaseDateField, SortFieldMarker, SortFieldSet, SortKey, SortableEntity,
    TitleField, TitleKey,
};

/// Fields available for ordering the catalog grid
#[derive(Debug, Clone, Copy)]
pub struct ItemFieldSet;

impl SortFieldSet for ItemFieldSet {}

impl HasField<TitleField> for ItemFieldSet {}
impl HasField<ReleaseDateField> for ItemFieldSet {}
impl HasField<RatingField> for ItemFieldSet {}
impl HasField<PopularityField> for ItemFieldSet {}

impl SortableEntity for Item {
    type AvailableFields = ItemFieldSet;

    fn extract_key<F: SortFieldMarker>(&self, _field: F) -> F::Key
    where
        Self::AvailableFields: HasField<F>,
    {
        // Runtime dispatch on the marker ID. HasField guarantees the marker is
        // one of the four below, so the downcast only misses on a mismatched
        // Key type, which falls back to a missing key.
        let key: Box<dyn Any> = if F::ID == TitleField::ID {
            Box::new(TitleKey::new(&self.title))
        } else if F::ID == ReleaseDateField::ID {
            Box::new(OptionalDateKey::parse(self.release_date.as_deref()))
        } else if F::ID == RatingField::ID {
            Box::new(OptionalFloatKey::new(self.vote_average.map(f64::from)))
        } else if F::ID == PopularityField::ID {
            Box::new(OptionalFloatKey::new(Some(self.popularity)))
        } else {
            return F::Key::missing();
        };

        key.downcast::<F::Key>()
            .map(|key| *key)
            .unwrap_or_else(|_| F::Key::missing())
    }
}
