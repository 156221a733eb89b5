mod support;

use std::time::Duration;

use marquee_core::ViewController;
use support::{StubCatalog, item, page, titles};

const QUIET: Duration = Duration::from_millis(500);

async fn settle(extra: Duration) {
    tokio::time::sleep(extra).await;
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn only_the_last_keystroke_fires() {
    let stub = StubCatalog::new();
    stub.respond("alien", 1, page(vec![item(1, "Alien")], 1, 1));
    let controller = ViewController::with_debounce(stub.clone(), QUIET);

    for term in ["a", "al", "ali", "alie", "alien"] {
        controller.search(term);
        tokio::time::sleep(Duration::from_millis(120)).await;
    }
    assert_eq!(stub.call_count(), 0);

    settle(QUIET).await;

    assert_eq!(stub.calls(), vec![("alien".to_string(), 1)]);
    assert_eq!(titles(&controller.snapshot().display), vec!["Alien"]);
}

#[tokio::test(start_paused = true)]
async fn nothing_fires_before_the_quiet_interval() {
    let stub = StubCatalog::new();
    let controller = ViewController::with_debounce(stub.clone(), QUIET);

    controller.search("heat");
    settle(Duration::from_millis(400)).await;
    assert_eq!(stub.call_count(), 0);

    settle(Duration::from_millis(200)).await;
    assert_eq!(stub.calls(), vec![("heat".to_string(), 1)]);
}

#[tokio::test(start_paused = true)]
async fn later_keystroke_does_not_cancel_a_running_fetch() {
    let stub = StubCatalog::new();
    stub.respond("heat", 1, page(vec![item(1, "Heat")], 1, 1));
    stub.respond("ronin", 1, page(vec![item(2, "Ronin")], 1, 1));
    stub.hold();
    let controller = ViewController::with_debounce(stub.clone(), QUIET);

    controller.search("heat");
    settle(QUIET).await;
    stub.wait_for_calls(1).await;

    // Fires while the first fetch is still held, so it is parked
    controller.search("ronin");
    settle(QUIET).await;
    assert_eq!(stub.call_count(), 1);

    stub.release(2);
    settle(Duration::from_millis(10)).await;

    assert_eq!(
        stub.calls(),
        vec![("heat".to_string(), 1), ("ronin".to_string(), 1)]
    );
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.query, "ronin");
    assert_eq!(titles(&snapshot.display), vec!["Ronin"]);
}
