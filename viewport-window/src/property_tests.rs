#![cfg(test)]
use crate::{FixedLayout, ViewportMetrics, Window};
use proptest::prelude::*;

fn inputs() -> impl Strategy<Value = (usize, u32, u32, usize, u64)> {
    (0usize..5_000, 1u32..500, 0u32..4_000, 0usize..8, 0u64..3_000_000)
}

proptest! {
    #[test]
    fn window_stays_in_bounds((count, size, view, overscan, offset) in inputs()) {
        let l = FixedLayout::new(size).unwrap().with_overscan(overscan);
        let w = l.window(ViewportMetrics::new(offset, view), count);
        if count == 0 {
            prop_assert_eq!(w, Window::EMPTY);
        } else {
            prop_assert!(w.start_index < w.end_index);
            prop_assert!(w.end_index <= count);
        }
    }

    #[test]
    fn rendered_height_matches_content((count, size, view, overscan, offset) in inputs()) {
        let l = FixedLayout::new(size).unwrap().with_overscan(overscan);
        let w = l.window(ViewportMetrics::new(offset, view), count);
        let s = l.spacers(w, count);
        prop_assert_eq!(s.total_with(w, size), count as u64 * size as u64);
    }

    #[test]
    fn window_covers_the_viewport((count, size, view, overscan, offset) in inputs()) {
        prop_assume!(count > 0);
        let l = FixedLayout::new(size).unwrap().with_overscan(overscan);
        let m = ViewportMetrics::new(offset, view);
        let w = l.window(m, count);
        let clamped = l.clamp_scroll_offset(offset, count, view);
        let covered_start = w.start_index as u64 * size as u64;
        let covered_end = w.end_index as u64 * size as u64;
        prop_assert!(covered_start <= clamped);
        prop_assert!(covered_end >= (clamped + view as u64).min(l.total_size(count)));
    }

    #[test]
    fn calculator_is_idempotent((count, size, view, overscan, offset) in inputs()) {
        let l = FixedLayout::new(size).unwrap().with_overscan(overscan);
        let m = ViewportMetrics::new(offset, view);
        prop_assert_eq!(l.window(m, count), l.window(m, count));
    }

    #[test]
    fn start_index_is_monotonic_in_offset(
        (count, size, view, overscan, offset) in inputs(),
        delta in 0u64..100_000,
    ) {
        let l = FixedLayout::new(size).unwrap().with_overscan(overscan);
        let a = l.window(ViewportMetrics::new(offset, view), count);
        let b = l.window(ViewportMetrics::new(offset + delta, view), count);
        prop_assert!(b.start_index >= a.start_index);
    }

    #[test]
    fn offset_zero_starts_at_zero(count in 1usize..5_000, size in 1u32..500, view in 0u32..4_000) {
        let l = FixedLayout::new(size).unwrap();
        let w = l.window(ViewportMetrics::new(0, view), count);
        prop_assert_eq!(w.start_index, 0);
    }

    #[test]
    fn max_offset_ends_at_last_row(count in 1usize..5_000, size in 1u32..500, view in 0u32..4_000) {
        let l = FixedLayout::new(size).unwrap().with_overscan(0);
        let offset = l.max_scroll_offset(count, view);
        let w = l.window(ViewportMetrics::new(offset, view), count);
        prop_assert_eq!(w.last_index(), Some(count - 1));
    }
}
