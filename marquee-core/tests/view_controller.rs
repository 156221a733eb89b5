mod support;

use std::sync::Arc;

use marquee_core::controller::PAGE_LOAD_FAILED;
use marquee_core::{EmptyState, FilterParseError, LoadOutcome, Notice, ViewController};
use marquee_model::{FilterSelection, GenreFilter, ItemDetail, SortBy, YearFilter};
use support::{StubCatalog, dated, item, page, rated, titles};

fn controller(stub: &Arc<StubCatalog>) -> ViewController {
    ViewController::new(stub.clone())
}

#[tokio::test]
async fn loads_while_loading_are_ignored() {
    let stub = StubCatalog::new();
    stub.respond("", 1, page(vec![item(1, "Heat")], 1, 1));
    stub.hold();
    let controller = controller(&stub);

    let in_flight = tokio::spawn({
        let controller = controller.clone();
        async move { controller.load_movies(1).await }
    });
    stub.wait_for_calls(1).await;

    assert!(controller.snapshot().loading);
    for _ in 0..3 {
        assert_eq!(controller.load_movies(1).await, LoadOutcome::Ignored);
    }
    assert_eq!(stub.call_count(), 1);

    stub.release(1);
    let outcome = in_flight.await.unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded { page: 1, received: 1 });
    assert!(!controller.snapshot().loading);
}

#[tokio::test]
async fn load_more_on_last_page_does_not_fetch() {
    let stub = StubCatalog::new();
    stub.respond("", 1, page(vec![item(1, "Heat"), item(2, "Ronin")], 1, 1));
    let controller = controller(&stub);

    controller.load_movies(1).await;
    let before = controller.inspect(|state| state.items().to_vec());

    assert_eq!(controller.load_more().await, LoadOutcome::Exhausted);
    assert_eq!(stub.call_count(), 1);
    assert_eq!(controller.inspect(|state| state.items().to_vec()), before);
}

#[tokio::test]
async fn failed_first_load_leaves_items_empty() {
    let stub = StubCatalog::new();
    stub.fail("", 1);
    let controller = controller(&stub);
    let mut notices = controller.notices();

    let outcome = controller.load_movies(1).await;

    assert!(matches!(outcome, LoadOutcome::Failed(_)));
    let snapshot = controller.snapshot();
    assert!(snapshot.display.is_empty());
    assert_eq!(snapshot.item_count, 0);
    assert_eq!(snapshot.banner.as_deref(), Some(PAGE_LOAD_FAILED));
    assert_eq!(snapshot.empty_state, Some(EmptyState::NoMovies));
    assert!(matches!(
        notices.try_recv(),
        Ok(Notice::PageLoadFailed { page: 1, .. })
    ));
}

#[tokio::test]
async fn failed_later_load_keeps_existing_items() {
    let stub = StubCatalog::new();
    stub.respond("", 1, page(vec![item(1, "Heat")], 1, 3));
    stub.fail("", 2);
    let controller = controller(&stub);

    controller.load_movies(1).await;
    let outcome = controller.load_more().await;

    assert!(matches!(outcome, LoadOutcome::Failed(_)));
    assert_eq!(titles(&controller.snapshot().display), vec!["Heat"]);
    // Pagination only moves on success, so the same page is retried next time
    assert_eq!(controller.inspect(|state| state.next_page()), Some(2));
}

#[tokio::test]
async fn load_more_appends_after_first_page() {
    let stub = StubCatalog::new();
    stub.respond("", 1, page(vec![item(1, "A"), item(2, "B"), item(3, "C")], 1, 2));
    stub.respond("", 2, page(vec![item(4, "D"), item(5, "E")], 2, 2));
    let controller = controller(&stub);

    controller.load_movies(1).await;
    let outcome = controller.load_more().await;

    assert_eq!(outcome, LoadOutcome::Loaded { page: 2, received: 2 });
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.item_count, 5);
    assert_eq!(titles(&snapshot.display), vec!["A", "B", "C", "D", "E"]);
    assert!(!snapshot.pagination.has_more);
    assert_eq!(stub.calls(), vec![("".to_string(), 1), ("".to_string(), 2)]);
}

#[tokio::test]
async fn rating_sort_orders_descending() {
    let stub = StubCatalog::new();
    stub.respond("", 1, page(vec![rated(1, "A", 5.0), rated(2, "B", 8.0)], 1, 1));
    let controller = controller(&stub);
    controller.load_movies(1).await;

    controller.apply_filters(FilterSelection::new(
        GenreFilter::All,
        YearFilter::All,
        SortBy::Rating,
    ));

    assert_eq!(titles(&controller.snapshot().display), vec!["B", "A"]);
}

#[tokio::test]
async fn year_filter_keeps_matching_items() {
    let stub = StubCatalog::new();
    stub.respond(
        "",
        1,
        page(
            vec![dated(1, "Matrix", "1999-03-01"), dated(2, "Shrek", "2001-01-01")],
            1,
            1,
        ),
    );
    let controller = controller(&stub);
    controller.load_movies(1).await;

    controller.apply_filter_controls("all", "1999", "popularity").unwrap();

    let snapshot = controller.snapshot();
    assert_eq!(titles(&snapshot.display), vec!["Matrix"]);
    assert_eq!(snapshot.item_count, 2);
}

#[tokio::test]
async fn filters_are_idempotent_and_clear_matches_defaults() {
    let stub = StubCatalog::new();
    let mut results = vec![item(1, "Low"), item(2, "High"), item(3, "Mid")];
    results[0].popularity = 1.0;
    results[1].popularity = 90.0;
    results[2].popularity = 40.0;
    stub.respond("", 1, page(results, 1, 1));
    let controller = controller(&stub);
    controller.load_movies(1).await;
    let items_before = controller.inspect(|state| state.items().to_vec());

    controller.apply_filter_controls("all", "all", "title").unwrap();
    let first = controller.snapshot().display;
    controller.apply_filter_controls("all", "all", "title").unwrap();
    assert_eq!(controller.snapshot().display, first);

    controller.clear_filters();
    let cleared = controller.snapshot();
    assert!(cleared.selection.is_default());
    controller.apply_filter_controls("all", "all", "popularity").unwrap();
    assert_eq!(controller.snapshot().display, cleared.display);
    assert_eq!(titles(&cleared.display), vec!["High", "Mid", "Low"]);

    assert_eq!(controller.inspect(|state| state.items().to_vec()), items_before);
}

#[tokio::test]
async fn unknown_genre_is_rejected_without_touching_display() {
    let stub = StubCatalog::new();
    stub.respond("", 1, page(vec![item(1, "Heat")], 1, 1));
    let controller = controller(&stub);
    controller.load_movies(1).await;

    let error = controller
        .apply_filter_controls("space opera", "all", "rating")
        .unwrap_err();

    assert_eq!(error, FilterParseError::UnknownGenre("space opera".into()));
    assert_eq!(titles(&controller.snapshot().display), vec!["Heat"]);
}

#[tokio::test]
async fn empty_filter_result_reports_no_matches() {
    let stub = StubCatalog::new();
    stub.respond("", 1, page(vec![item(1, "Heat")], 1, 1));
    let controller = controller(&stub);
    controller.load_movies(1).await;

    controller.apply_filter_controls("Animation", "all", "popularity").unwrap();

    assert_eq!(
        controller.snapshot().empty_state,
        Some(EmptyState::NoMatches)
    );
}

#[tokio::test]
async fn search_during_load_supersedes_stale_response() {
    let stub = StubCatalog::new();
    stub.respond("", 1, page(vec![item(1, "Popular")], 1, 4));
    stub.respond("alien", 1, page(vec![item(2, "Alien"), item(3, "Aliens")], 1, 1));
    stub.hold();
    let controller = controller(&stub);

    let in_flight = tokio::spawn({
        let controller = controller.clone();
        async move { controller.load_movies(1).await }
    });
    stub.wait_for_calls(1).await;

    assert_eq!(controller.search_now("alien").await, LoadOutcome::Deferred);
    stub.release(2);

    assert_eq!(in_flight.await.unwrap(), LoadOutcome::Superseded);
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.query, "alien");
    assert_eq!(titles(&snapshot.display), vec!["Alien", "Aliens"]);
    assert_eq!(snapshot.pagination.total_pages, 1);
    assert_eq!(
        stub.calls(),
        vec![("".to_string(), 1), ("alien".to_string(), 1)]
    );
}

#[tokio::test]
async fn new_search_replaces_items() {
    let stub = StubCatalog::new();
    stub.respond("", 1, page(vec![item(1, "Popular")], 1, 1));
    stub.respond("heat", 1, page(vec![item(2, "Heat")], 1, 1));
    let controller = controller(&stub);

    controller.load_movies(1).await;
    controller.search_now("  heat ").await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.query, "heat");
    assert_eq!(titles(&snapshot.display), vec!["Heat"]);
}

#[tokio::test]
async fn empty_search_returns_to_discovery() {
    let stub = StubCatalog::new();
    stub.respond("", 1, page(vec![item(1, "Popular")], 1, 1));
    stub.respond("heat", 1, page(vec![item(2, "Heat")], 1, 1));
    let controller = controller(&stub);

    controller.search_now("heat").await;
    controller.search_now("").await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.query, "");
    assert_eq!(titles(&snapshot.display), vec!["Popular"]);
    assert_eq!(
        stub.calls(),
        vec![("heat".to_string(), 1), (String::new(), 1)]
    );
}

#[tokio::test]
async fn detail_failure_publishes_notice_and_keeps_grid() {
    let stub = StubCatalog::new();
    stub.respond("", 1, page(vec![item(1, "Heat")], 1, 1));
    stub.respond_detail(ItemDetail {
        id: 1,
        title: "Heat".into(),
        runtime: Some(170),
        ..ItemDetail::default()
    });
    let controller = controller(&stub);
    controller.load_movies(1).await;
    let mut notices = controller.notices();

    let detail = controller.show_detail(1).await.unwrap();
    assert_eq!(detail.runtime, Some(170));

    assert!(controller.show_detail(404).await.is_err());
    assert_eq!(
        notices.try_recv().unwrap(),
        Notice::DetailLoadFailed {
            item_id: 404,
            reason: "not found".into()
        }
    );
    let snapshot = controller.snapshot();
    assert_eq!(titles(&snapshot.display), vec!["Heat"]);
    assert!(snapshot.banner.is_none());
}

#[tokio::test]
async fn subscribers_see_published_snapshots() {
    let stub = StubCatalog::new();
    stub.respond("", 1, page(vec![item(1, "Heat")], 1, 2));
    let controller = controller(&stub);
    let mut snapshots = controller.subscribe();

    controller.load_movies(1).await;

    assert!(snapshots.has_changed().unwrap());
    let latest = snapshots.borrow_and_update().clone();
    assert_eq!(latest.item_count, 1);
    assert_eq!(
        latest.pagination.load_more_label().as_deref(),
        Some("Load More (1/2)")
    );
}
