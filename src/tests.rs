use crate::*;

use std::ops::Range;

use serde_json::json;
use viewport_window::ConfigError;
use viewport_window_renderer::Phase;

fn user_json(i: usize) -> serde_json::Value {
    json!({
        "gender": "female",
        "name": { "title": "Ms", "first": format!("First{i}"), "last": format!("Last{i}") },
        "email": format!("user{i}@example.com"),
        "picture": {
            "large": format!("https://example.com/large/{i}.jpg"),
            "medium": format!("https://example.com/med/{i}.jpg"),
            "thumbnail": format!("https://example.com/thumb/{i}.jpg")
        },
        "nat": "US"
    })
}

fn page_json(page: u32, ids: Range<usize>) -> String {
    let results: Vec<_> = ids.map(user_json).collect();
    json!({
        "results": results,
        "info": { "seed": "5f1c", "results": results.len(), "page": page, "version": "1.4" }
    })
    .to_string()
}

#[test]
fn decodes_directory_page_and_ignores_extra_fields() {
    let page: Page<User> = serde_json::from_str(&page_json(3, 0..2)).unwrap();
    assert_eq!(page.info.page, 3);
    assert_eq!(page.info.results, 2);
    assert_eq!(page.info.seed.as_deref(), Some("5f1c"));
    assert_eq!(page.results.len(), 2);

    let u = &page.results[1];
    assert_eq!(u.display_name(), "First1 Last1");
    assert_eq!(u.key(), "user1@example.com");
    assert_eq!(u.picture.medium, "https://example.com/med/1.jpg");
    assert_eq!(u.name.title, "Ms");
}

#[test]
fn missing_info_block_defaults() {
    let body = json!({ "results": [user_json(7)] }).to_string();
    let page: Page<User> = serde_json::from_str(&body).unwrap();
    assert_eq!(page.info, PageInfo::default());
    assert_eq!(page.results[0].email, "user7@example.com");
}

#[test]
fn page_query_matches_directory_api() {
    assert_eq!(page_query(1, 20), "?page=1&results=20");
    let req = PageRequest {
        page: 4,
        results: 50,
    };
    assert_eq!(req.query(), "?page=4&results=50");
}

#[test]
fn feed_allows_one_request_in_flight() {
    let mut feed: Feed<User> = Feed::new(20);
    let first = feed.begin_load().unwrap();
    assert_eq!(first, PageRequest { page: 1, results: 20 });
    assert!(feed.is_loading());
    assert_eq!(feed.begin_load(), None);

    assert_eq!(feed.complete_json(&page_json(1, 0..20)).unwrap(), 20);
    assert!(!feed.is_loading());
    assert_eq!(feed.len(), 20);
    assert_eq!(feed.next_page(), 2);
    assert_eq!(feed.begin_load().map(|r| r.page), Some(2));
}

#[test]
fn feed_is_append_only_in_page_order() {
    let mut feed: Feed<User> = Feed::new(2);
    for page in 1..=3u32 {
        feed.begin_load().unwrap();
        let start = (page as usize - 1) * 2;
        feed.complete_json(&page_json(page, start..start + 2)).unwrap();
    }
    let emails: Vec<&str> = feed.items().iter().map(User::key).collect();
    assert_eq!(
        emails,
        [
            "user0@example.com",
            "user1@example.com",
            "user2@example.com",
            "user3@example.com",
            "user4@example.com",
            "user5@example.com",
        ]
    );
}

#[test]
fn completing_without_a_request_is_rejected() {
    let mut feed: Feed<User> = Feed::new(20);
    let err = feed.complete_json(&page_json(9, 0..1)).unwrap_err();
    assert!(matches!(err, DirectoryError::NotLoading { page: 9 }));
    assert!(feed.is_empty());
}

#[test]
fn malformed_body_releases_the_request_for_retry() {
    let mut feed: Feed<User> = Feed::new(20);
    feed.begin_load().unwrap();
    let err = feed.complete_json("{\"results\": [{\"email\": 3}]}").unwrap_err();
    assert!(matches!(err, DirectoryError::Decode(_)));
    assert!(!feed.is_loading());
    assert_eq!(feed.begin_load().map(|r| r.page), Some(1));
}

#[test]
fn failed_fetch_retries_the_same_page() {
    let mut feed: Feed<User> = Feed::new(20);
    feed.begin_load().unwrap();
    feed.fail();
    assert!(!feed.is_loading());
    assert_eq!(feed.begin_load().map(|r| r.page), Some(1));
}

#[test]
fn load_more_triggers_near_the_bottom() {
    // 20 cards of 200px = 4000px of content, 800px viewport, 100px threshold.
    assert!(!should_load_more(ViewportMetrics::new(0, 800), 4_000, 100));
    assert!(!should_load_more(ViewportMetrics::new(3_099, 800), 4_000, 100));
    assert!(should_load_more(ViewportMetrics::new(3_100, 800), 4_000, 100));
    assert!(should_load_more(ViewportMetrics::new(0, 800), 0, 100));

    let mut feed: Feed<User> = Feed::new(20);
    assert_eq!(
        feed.maybe_load_more(ViewportMetrics::new(0, 800), 4_000, 100),
        None
    );
    assert!(
        feed.maybe_load_more(ViewportMetrics::new(3_500, 800), 4_000, 100)
            .is_some()
    );
    assert_eq!(
        feed.maybe_load_more(ViewportMetrics::new(3_500, 800), 4_000, 100),
        None
    );
}

#[test]
fn config_defaults_and_partial_json() {
    let cfg = DirectoryConfig::default();
    assert_eq!(cfg.item_size, 200);
    assert_eq!(cfg.page_size, 20);
    assert_eq!(cfg.load_more_threshold, 100);
    assert_eq!(cfg.overscan, 1);

    let cfg = DirectoryConfig::from_json(r#"{ "item_size": 120, "overscan": 4 }"#).unwrap();
    assert_eq!(cfg.item_size, 120);
    assert_eq!(cfg.page_size, 20);
    let layout = cfg.layout().unwrap();
    assert_eq!(layout.item_size(), 120);
    assert_eq!(layout.overscan(), 4);

    assert_eq!(DirectoryConfig::from_json("{}").unwrap(), DirectoryConfig::default());
    assert!(matches!(
        DirectoryConfig::from_json("{ \"item_size\": -1 }"),
        Err(DirectoryError::Decode(_))
    ));
}

#[test]
fn zero_item_size_is_a_configuration_error() {
    let cfg = DirectoryConfig {
        item_size: 0,
        ..DirectoryConfig::default()
    };
    assert!(matches!(
        cfg.layout(),
        Err(DirectoryError::Config(ConfigError::ZeroItemSize))
    ));
}

#[test]
fn scrolling_to_the_bottom_loads_the_next_page_without_a_jump() {
    let cfg = DirectoryConfig::default();
    let layout = cfg.layout().unwrap();
    let viewport = ManualViewport::with_height(800.0);
    let list = WindowedList::mount(&viewport, layout).unwrap();
    assert_eq!(list.phase(), Phase::Ready);

    let mut feed: Feed<User> = cfg.feed();
    let req = feed
        .maybe_load_more(list.metrics(), layout.total_size(feed.len()), cfg.load_more_threshold)
        .unwrap();
    feed.complete_json(&page_json(req.page, 0..20)).unwrap();

    let mut card = |u: &User, _: usize| u.display_name();
    let frame = list.render_keyed(feed.items(), |u, _| u.email.clone(), &mut card).unwrap();
    assert_eq!(frame.window(), Window { start_index: 0, end_index: 5 });
    assert_eq!(frame.rows[0].key, "user0@example.com");
    assert_eq!(frame.rows[0].content, "First0 Last0");

    viewport.scroll_to(3_200.0);
    let content_height = layout.total_size(feed.len());
    let req = feed
        .maybe_load_more(list.metrics(), content_height, cfg.load_more_threshold)
        .unwrap();
    assert_eq!(req.page, 2);
    let before = list.render_keyed(feed.items(), |u, _| u.email.clone(), &mut card).unwrap();

    feed.complete_json(&page_json(req.page, 20..40)).unwrap();
    let after = list.render_keyed(feed.items(), |u, _| u.email.clone(), &mut card).unwrap();

    assert_eq!(after.leading_spacer(), before.leading_spacer());
    assert_eq!(after.rows[0].key, before.rows[0].key);
    assert_eq!(after.total_height(), 40 * 200);
    assert!(after.trailing_spacer() > 0);
}
