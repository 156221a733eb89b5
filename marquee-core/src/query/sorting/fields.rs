//! Field marker types for compile-time safe sorting
//!
//! These zero-sized types represent the fields the catalog grid can be
//! ordered by. Each marker names its key type.

use super::keys::{OptionalDateKey, OptionalFloatKey, TitleKey};
use super::traits::SortFieldMarker;

/// Sort by title (collated, alphabetical)
#[derive(Copy, Clone, Debug)]
pub struct TitleField;

impl SortFieldMarker for TitleField {
    type Key = TitleKey;
    const ID: &'static str = "title";
}

/// Sort by release date
#[derive(Copy, Clone, Debug)]
pub struct ReleaseDateField;

impl SortFieldMarker for ReleaseDateField {
    type Key = OptionalDateKey;
    const ID: &'static str = "release_date";
}

/// Sort by average vote (0-10)
#[derive(Copy, Clone, Debug)]
pub struct RatingField;

impl SortFieldMarker for RatingField {
    type Key = OptionalFloatKey;
    const ID: &'static str = "rating";
}

/// Sort by remote popularity score
#[derive(Copy, Clone, Debug)]
pub struct PopularityField;

impl SortFieldMarker for PopularityField {
    type Key = OptionalFloatKey;
    const ID: &'static str = "popularity";
}
