//! Client-side filtering over the accumulated working set.
//!
//! Nothing here fetches; the projection is computed from items already held.

use marquee_model::{FilterSelection, Item, SortBy};

use super::sorting::{
    FieldSort, PopularityField, RatingField, ReleaseDateField, SortStrategy,
    TitleField,
};

/// Whether an item passes the genre and year filters of `selection`.
pub fn matches_selection(item: &Item, selection: &FilterSelection) -> bool {
    selection.genre.matches(&item.genre_ids)
        && selection.year.matches(item.release_year())
}

/// The strategy that orders the grid for a sort control value.
///
/// Everything but title sorts descending.
pub fn sort_strategy(sort: SortBy) -> Box<dyn SortStrategy<Item>> {
    match sort {
        SortBy::Rating => Box::new(FieldSort::<Item, _>::descending(RatingField)),
        SortBy::Year => Box::new(FieldSort::<Item, _>::descending(ReleaseDateField)),
        SortBy::Title => Box::new(FieldSort::<Item, _>::ascending(TitleField)),
        SortBy::Popularity => {
            Box::new(FieldSort::<Item, _>::descending(PopularityField))
        }
    }
}

/// Filter then sort a copy of `items`; the input is left untouched.
pub fn apply_selection(items: &[Item], selection: &FilterSelection) -> Vec<Item> {
    let mut projected: Vec<Item> = items
        .iter()
        .filter(|item| matches_selection(item, selection))
        .cloned()
        .collect();

    sort_strategy(selection.sort).sort(&mut projected);

    tracing::debug!(
        %selection,
        held = items.len(),
        shown = projected.len(),
        "applied filter selection"
    );
    projected
}
