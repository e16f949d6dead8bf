// Example: one-shot window computation and spacer math.
use viewport_window::{Align, FixedLayout, ViewportMetrics, compute_window};

fn main() {
    let window = compute_window(123_456, 800, 200, 1_000_000, 1).expect("valid layout");
    println!("window={window:?} rows={}", window.len());

    let layout = FixedLayout::new(200).expect("valid layout").with_overscan(2);
    let metrics = ViewportMetrics::new(123_456, 800);
    let window = layout.window(metrics, 1_000_000);
    let spacers = layout.spacers(window, 1_000_000);
    println!("overscanned={window:?} spacers={spacers:?}");
    println!(
        "rendered height={} content height={}",
        spacers.total_with(window, layout.item_size()),
        layout.total_size(1_000_000)
    );

    let off = layout.scroll_to_index_offset(999_999, Align::End, metrics, 1_000_000);
    println!("scroll_to_index(999_999, End) -> offset={off}");
    println!(
        "window there={:?}",
        layout.window(metrics.with_scroll_offset(off), 1_000_000)
    );
}
