// Example: a headless session of the user directory.
//
// A `ManualViewport` stands in for the browser window and canned JSON pages stand in for the
// directory API. Run with `RUST_LOG=debug` to see the list and feed logs.
use serde_json::json;
use tracing_subscriber::EnvFilter;
use user_directory::{DirectoryConfig, Feed, ManualViewport, User, WindowedList};

fn fake_page(page: u32, results: u32) -> String {
    let start = (page - 1) * results;
    let users: Vec<_> = (start..start + results)
        .map(|i| {
            json!({
                "name": { "title": "Mx", "first": format!("Sam{i}"), "last": "Doe" },
                "email": format!("sam.doe{i}@example.com"),
                "picture": { "medium": format!("https://example.com/portraits/med/{i}.jpg") }
            })
        })
        .collect();
    json!({ "results": users, "info": { "seed": "demo", "results": results, "page": page } })
        .to_string()
}

fn main() -> user_directory::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = DirectoryConfig::default();
    let layout = cfg.layout()?;
    let viewport = ManualViewport::with_height(800.0);
    let list = WindowedList::mount(&viewport, layout)?;
    let mut feed: Feed<User> = cfg.feed();

    let mut card =
        |u: &User, index: usize| format!("#{index:<4} {:<16} {}", u.display_name(), u.email);

    for offset in [0.0, 1_500.0, 3_200.0, 6_900.0, 7_300.0, 2_000.0] {
        viewport.scroll_to(offset);

        let content_height = layout.total_size(feed.len());
        if let Some(req) =
            feed.maybe_load_more(list.metrics(), content_height, cfg.load_more_threshold)
        {
            println!("fetch {}", req.query());
            feed.complete_json(&fake_page(req.page, req.results))?;
        }

        let changed = list.take_changed();
        let frame = list.render_keyed(feed.items(), |u, _| u.email.clone(), &mut card)?;
        println!(
            "offset={offset:>6} items={:>3} window={:?} leading={} trailing={} changed={changed}",
            feed.len(),
            frame.window(),
            frame.leading_spacer(),
            frame.trailing_spacer(),
        );
        for row in &frame.rows {
            println!("    top={:>5} {}", row.top, row.content);
        }
    }

    list.unmount();
    Ok(())
}
