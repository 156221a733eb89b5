//! Tests for the field sort strategy over catalog items

use marquee_model::Item;

use super::{
    FieldSort, PopularityField, RatingField, ReleaseDateField, SortKey,
    SortStrategy, SortableEntity, TitleField, TitleKey,
};

fn create_test_item(
    id: u64,
    title: &str,
    rating: Option<f32>,
    release_date: Option<&str>,
    popularity: f64,
) -> Item {
    Item {
        id,
        title: title.to_string(),
        release_date: release_date.map(str::to_string),
        vote_average: rating,
        popularity,
        ..Item::default()
    }
}

fn titles(items: &[Item]) -> Vec<&str> {
    items.iter().map(|item| item.title.as_str()).collect()
}

#[test]
fn test_rating_sort_descending() {
    let mut items = vec![
        create_test_item(1, "A", Some(5.0), None, 0.0),
        create_test_item(2, "B", Some(8.0), None, 0.0),
    ];

    FieldSort::<Item, _>::descending(RatingField).sort(&mut items);

    assert_eq!(titles(&items), vec!["B", "A"]);
}

#[test]
fn test_missing_rating_sorts_last_in_both_directions() {
    let mut items = vec![
        create_test_item(1, "Unrated", None, None, 0.0),
        create_test_item(2, "Low", Some(3.0), None, 0.0),
        create_test_item(3, "High", Some(9.0), None, 0.0),
    ];

    FieldSort::<Item, _>::descending(RatingField).sort(&mut items);
    assert_eq!(titles(&items), vec!["High", "Low", "Unrated"]);

    FieldSort::<Item, _>::ascending(RatingField).sort(&mut items);
    assert_eq!(titles(&items), vec!["Low", "High", "Unrated"]);
}

#[test]
fn test_release_date_sort_treats_unparsable_as_oldest() {
    let mut items = vec![
        create_test_item(1, "Garbage", None, Some("soon"), 0.0),
        create_test_item(2, "Old", None, Some("1999-03-01"), 0.0),
        create_test_item(3, "Undated", None, None, 0.0),
        create_test_item(4, "New", None, Some("2021-10-22"), 0.0),
    ];

    FieldSort::<Item, _>::descending(ReleaseDateField).sort(&mut items);

    assert_eq!(&titles(&items)[..2], &["New", "Old"]);
    // Both dateless entries keep their relative order
    assert_eq!(&titles(&items)[2..], &["Garbage", "Undated"]);
}

#[test]
fn test_title_sort_is_case_insensitive() {
    let mut items = vec![
        create_test_item(1, "zodiac", None, None, 0.0),
        create_test_item(2, "Alien", None, None, 0.0),
        create_test_item(3, "alien", None, None, 0.0),
        create_test_item(4, "Brazil", None, None, 0.0),
    ];

    FieldSort::<Item, _>::ascending(TitleField).sort(&mut items);

    assert_eq!(titles(&items), vec!["Alien", "alien", "Brazil", "zodiac"]);
}

#[test]
fn test_title_sort_folds_accents() {
    let mut items = vec![
        create_test_item(1, "Zorro", None, None, 0.0),
        create_test_item(2, "Émile", None, None, 0.0),
        create_test_item(3, "Eve", None, None, 0.0),
    ];

    FieldSort::<Item, _>::ascending(TitleField).sort(&mut items);

    assert_eq!(titles(&items), vec!["Émile", "Eve", "Zorro"]);
}

#[test]
fn test_title_accent_ties_break_on_raw_text() {
    let plain = TitleKey::new("Cafe");
    let accented = TitleKey::new("Café");

    assert!(plain < accented);
    assert!(accented < TitleKey::new("Cafeteria"));
}

#[test]
fn test_popularity_sort_is_stable_for_ties() {
    let mut items = vec![
        create_test_item(1, "First", None, None, 10.0),
        create_test_item(2, "Top", None, None, 50.0),
        create_test_item(3, "Second", None, None, 10.0),
    ];

    FieldSort::<Item, _>::descending(PopularityField).sort(&mut items);

    assert_eq!(titles(&items), vec!["Top", "First", "Second"]);
}

#[test]
fn test_extract_key_matches_field() {
    let item = create_test_item(1, "Heat", Some(8.3), Some("1995-12-15"), 42.0);

    let title = item.extract_key(TitleField);
    assert_eq!(title, TitleKey::new("Heat"));
    assert!(!item.extract_key(RatingField).is_missing());
    assert!(!item.extract_key(ReleaseDateField).is_missing());

    let unrated = create_test_item(2, "Blank", None, None, 0.0);
    assert!(unrated.extract_key(RatingField).is_missing());
    assert!(unrated.extract_key(ReleaseDateField).is_missing());
}
